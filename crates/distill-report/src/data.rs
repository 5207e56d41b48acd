//! Published Benchmark Results
//!
//! LongBench v2 runs of Distill against bear-1 (v0.9).

use rust_decimal_macros::dec;

use crate::model::{
    AccuracyResult, ArchStage, Card, CaseStudy, ContextMultiplier, HistogramBin, LatencyPoint,
    MethodCard, MetricRow, NeedleResult, ScalingPoint, ScatterPoint, StageKind, Winner,
};

pub fn comparison() -> Vec<MetricRow> {
    vec![
        MetricRow {
            metric: "Token Reduction",
            bear1: "66.1%",
            distill: "68%",
            winner: Winner::Distill,
            delta: Some("+1.9%"),
        },
        MetricRow {
            metric: "Accuracy Δ",
            bear1: "+1.1%",
            distill: "-1.2%",
            winner: Winner::Bear1,
            delta: Some("-2.3%"),
        },
        MetricRow {
            metric: "P(better)",
            bear1: "100%",
            distill: "100%",
            winner: Winner::Tie,
            delta: None,
        },
        MetricRow {
            metric: "Latency",
            bear1: "2.2s",
            distill: "1.8s",
            winner: Winner::Distill,
            delta: Some("1.2x faster"),
        },
        MetricRow {
            metric: "Model Size",
            bear1: "Unknown",
            distill: "7B params",
            winner: Winner::Neutral,
            delta: None,
        },
    ]
}

pub fn accuracy() -> Vec<AccuracyResult> {
    let row = |config, mean, std_dev, delta, significant| AccuracyResult {
        config,
        mean,
        std_dev,
        delta,
        significant,
    };
    vec![
        row("baseline", dec!(28.2), dec!(0.6), None, None),
        row("0.3", dec!(29.1), dec!(0.8), Some("+0.9%"), Some(true)),
        row("0.5", dec!(29.3), dec!(0.7), Some("+1.1%"), Some(true)),
        row("0.7", dec!(29.2), dec!(0.9), Some("+1.0%"), Some(true)),
        row("0.9", dec!(29.5), dec!(0.8), Some("+1.3%"), Some(true)),
        row("0.95", dec!(27.9), dec!(0.7), Some("-0.3%"), Some(false)),
    ]
}

pub fn distill_scatter() -> Vec<ScatterPoint> {
    [
        (dec!(15), dec!(0.4), "0.2"),
        (dec!(28), dec!(0.9), "0.3"),
        (dec!(38), dec!(1.1), "0.5"),
        (dec!(52), dec!(1.0), "0.7"),
        (dec!(68), dec!(1.3), "0.9"),
        (dec!(78), dec!(-0.3), "0.95"),
    ]
    .into_iter()
    .map(|(compression, accuracy, config)| ScatterPoint {
        compression,
        accuracy,
        config: Some(config),
    })
    .collect()
}

pub fn bear1_scatter() -> Vec<ScatterPoint> {
    [
        (dec!(10.3), dec!(0.2)),
        (dec!(15.5), dec!(-0.5)),
        (dec!(23.4), dec!(1.0)),
        (dec!(31.4), dec!(0.7)),
        (dec!(42.4), dec!(-0.4)),
        (dec!(52.4), dec!(0.8)),
        (dec!(66.1), dec!(1.1)),
        (dec!(77.4), dec!(-0.5)),
    ]
    .into_iter()
    .map(|(compression, accuracy)| ScatterPoint {
        compression,
        accuracy,
        config: None,
    })
    .collect()
}

pub fn latency() -> Vec<LatencyPoint> {
    vec![
        LatencyPoint {
            name: "Baseline",
            compression: dec!(0),
            llm: dec!(4.2),
            total: dec!(4.2),
        },
        LatencyPoint {
            name: "bear-1",
            compression: dec!(0.3),
            llm: dec!(1.9),
            total: dec!(2.2),
        },
        LatencyPoint {
            name: "Distill",
            compression: dec!(0.2),
            llm: dec!(1.6),
            total: dec!(1.8),
        },
    ]
}

pub fn scaling() -> Vec<ScalingPoint> {
    [
        ("4K", dec!(0.8), dec!(0.4)),
        ("16K", dec!(2.1), dec!(0.9)),
        ("32K", dec!(4.2), dec!(1.8)),
        ("64K", dec!(8.5), dec!(3.2)),
        ("100K", dec!(14.2), dec!(5.1)),
    ]
    .into_iter()
    .map(|(tokens, baseline, distill)| ScalingPoint {
        tokens,
        baseline,
        distill,
    })
    .collect()
}

pub fn histogram() -> Vec<HistogramBin> {
    [
        ("-0.5%", 20),
        ("0%", 150),
        ("0.5%", 800),
        ("1.0%", 2100),
        ("1.5%", 3200),
        ("2.0%", 1800),
        ("2.5%", 400),
    ]
    .into_iter()
    .map(|(range, frequency)| HistogramBin { range, frequency })
    .collect()
}

/// Retrieval accuracy by needle depth, 1,000 permutations at 100K context
pub fn needle_in_haystack() -> Vec<NeedleResult> {
    [
        ("Top 10%", 98, 99),
        ("Middle 50%", 92, 94),
        ("Bottom 10%", 89, 92),
        ("Avg (All)", 93, 95),
    ]
    .into_iter()
    .map(|(depth, baseline, distill)| NeedleResult {
        depth,
        baseline,
        distill,
    })
    .collect()
}

pub fn context_multiplier() -> ContextMultiplier {
    ContextMultiplier {
        native_k: 128,
        reduction: dec!(68),
    }
}

/// 300-page appellate brief compressed into a single 128K window
pub const fn case_study() -> CaseStudy {
    CaseStudy {
        original_tokens: 252_894,
        compressed_tokens: 80_926,
        estimator_ms: 42,
        semantic_drift: "<0.1%",
        throughput: "4x",
    }
}

pub const METHODOLOGY: &[MethodCard] = &[
    MethodCard {
        title: "Dataset Selection",
        badge: "Standardized",
        items: &[
            "LongBench v2 multiple-choice suite",
            "230 high-entropy samples selected",
            "Context lengths: 32K to 128K tokens",
        ],
    },
    MethodCard {
        title: "Testing Protocol",
        badge: "High Fidelity",
        items: &[
            "50 randomized independent runs",
            "Baseline: GPT-4o-mini (Zero-shot)",
            "Temperature: 0 (Strict deterministic)",
        ],
    },
    MethodCard {
        title: "Statistical Rigor",
        badge: "Verified",
        items: &[
            "Two-sample t-test (p < 0.05)",
            "Bootstrap analysis (10K resamples)",
            "95% Confidence Interval reporting",
        ],
    },
];

/// Evaluation setup, shown when the full specification is expanded
pub const HARDWARE: &[(&str, &str)] = &[
    ("Inference Engine", "vLLM v0.4.0"),
    ("Tokenizer", "tiktoken (o200k_base)"),
    ("Compute Platform", "8x H100 (SXM5)"),
    ("Quantization", "None (FP16)"),
];

pub const METRIC_DEFINITIONS: &[(&str, &str)] = &[
    ("Mean Accuracy", "Exact Match (EM) score"),
    ("Token Reduction", "1 - (compressed / raw)"),
    ("Latency", "TTFT + TBT (Normalized)"),
    ("P(better)", "Likelihood Distill > Bear-1"),
];

pub const ARCHITECTURE: &[ArchStage] = &[
    ArchStage {
        title: "Input",
        sub: "Raw Sequence",
        kind: StageKind::Plain,
    },
    ArchStage {
        title: "Entropy Estimator",
        sub: "12M Transformer",
        kind: StageKind::Highlight,
    },
    ArchStage {
        title: "Token Scorer",
        sub: "H(t | Context)",
        kind: StageKind::Plain,
    },
    ArchStage {
        title: "Output",
        sub: "Dense Prompt",
        kind: StageKind::Success,
    },
];

pub const INNOVATIONS: &[Card] = &[
    Card {
        title: "Entropy-Based Selection",
        body: "We compute the Shannon entropy of each token. Tokens that are highly predictable based on the preceding sequence are pruned first, as they contribute the least amount of surprise to the model's latent state.",
    },
    Card {
        title: "Contextual Persistence",
        body: "Unlike static pruning, Distill maintains 'Anchor Tokens': low-probability, high-entropy tokens that serve as semantic pivots, ensuring the compressed prompt remains logically coherent for the target LLM.",
    },
    Card {
        title: "Edge-Ready Model",
        body: "The Distill scoring engine is an ultra-lightweight 12M parameter transformer trained on millions of entropy patterns. It adds less than 50ms of overhead to the pre-fill stage.",
    },
];

/// PyTorch sketch behind the "View Code Implementation" toggle
pub const CODE_SAMPLE: &str = r#"import torch
from distill.core import EntropyModel, Pruner

# 1. Initialize our high-speed entropy estimator
model = EntropyModel.from_pretrained("distill-12m-v2")

def distill_compress(input_ids, threshold=0.9):
    # 2. Estimate conditional entropy H(x_i | x_prev)
    logits = model(input_ids).logits
    probs = torch.softmax(logits, dim=-1)
    entropies = -torch.sum(probs * torch.log(probs + 1e-9), dim=-1)

    # 3. Apply adaptive pruning based on information density
    keep_mask = Pruner.entropy_threshold(entropies, threshold)

    return input_ids[keep_mask]

# Usage on 100K token document
compressed_ids = distill_compress(doc_tokens, threshold=0.9)
print(f"Compressed by {len(doc_tokens) / len(compressed_ids):.2f}x")
"#;

/// Known weak spots, shown under "Current Limitations"
pub const LIMITATIONS: &[&str] = &[
    "Highly structured code or technical documentation requires higher entropy thresholds (θ < 0.5) to avoid pruning syntax characters.",
    "Model is currently optimized for Llama-3 and GPT-4 tokenizer structures; performance may vary on models using SentencePiece.",
    "Multilingual support is currently limited to English, Spanish, and French base corpora.",
];

/// Planned work, shown under "Future Work"
pub const FUTURE_WORK: &[&str] = &[
    "Development of Distill-Visual: Entropy-based image token pruning for multi-modal models.",
    "Real-time adaptive thresholding: Automatically adjusting θ during the generation stream to prioritize critical tokens.",
    "Direct KV-cache compression integration for sub-linear memory scaling.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_totals_add_up() {
        for point in latency() {
            assert_eq!(point.compression + point.llm, point.total, "{}", point.name);
        }
    }

    #[test]
    fn test_latency_row_matches_comparison_claim() {
        let points = latency();
        let bear1 = points.iter().find(|p| p.name == "bear-1").unwrap();
        let distill = points.iter().find(|p| p.name == "Distill").unwrap();
        assert_eq!(distill.speedup_over(bear1), dec!(1.2));

        let row = comparison().into_iter().find(|r| r.metric == "Latency").unwrap();
        assert_eq!(row.delta, Some("1.2x faster"));
    }

    #[test]
    fn test_accuracy_significance() {
        let results = accuracy();
        assert!(results[0].is_baseline());
        assert_eq!(results[0].significant, None);
        assert!(results.iter().skip(1).all(|r| r.significant.is_some()));
        assert_eq!(results[1].config_label(), "θ=0.3");
    }

    #[test]
    fn test_scaling_distill_is_always_faster() {
        assert!(scaling().iter().all(|p| p.distill < p.baseline));
    }

    #[test]
    fn test_chart_series_sizes() {
        assert_eq!(distill_scatter().len(), 6);
        assert_eq!(bear1_scatter().len(), 8);
        assert_eq!(histogram().iter().map(|b| b.frequency).sum::<u32>(), 8470);
    }

    #[test]
    fn test_needle_gains_are_never_negative() {
        let results = needle_in_haystack();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.gain() >= 0));
        assert_eq!(results[2].gain(), 3);
    }

    #[test]
    fn test_context_and_case_study_match_headline_reduction() {
        let headline = context_multiplier().reduction;
        assert_eq!(case_study().reduction_percent(), headline);
        assert_eq!(context_multiplier().effective_k(), dec!(400));
    }

    #[test]
    fn test_approach_content() {
        assert_eq!(METHODOLOGY.len(), 3);
        assert!(METHODOLOGY.iter().all(|card| card.items.len() == 3));
        assert_eq!(ARCHITECTURE.first().map(|s| s.title), Some("Input"));
        assert_eq!(
            ARCHITECTURE.iter().filter(|s| s.kind == StageKind::Highlight).count(),
            1
        );
        assert!(CODE_SAMPLE.contains("def distill_compress"));
    }
}
