//! Debounced Demo Controller
//!
//! Drives a [`DemoState`] on a tokio runtime. Each edit aborts the task
//! belonging to the previous edit (its timer and any request it has in
//! flight) and schedules a new one; tickets guard whatever slips through.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let controller = DemoController::new(Arc::new(HeuristicCompressor::new()), &config);
//! let mut updates = controller.subscribe();
//!
//! controller.set_input("Summarize the following report ...");
//! updates.changed().await?;
//! println!("{}", updates.borrow().output_text);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::aggressiveness::Aggressiveness;
use crate::compressor::Compressor;
use crate::config::DemoConfig;
use crate::demo::{DemoState, Settle, Ticket};

struct Shared {
    state: watch::Sender<DemoState>,
    compressor: Arc<dyn Compressor>,
    debounce: Duration,
}

/// Owns one demo instance: its state, its compressor and its pending work
pub struct DemoController {
    shared: Arc<Shared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl DemoController {
    /// Create a controller and schedule the first compression.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(compressor: Arc<dyn Compressor>, config: &DemoConfig) -> Self {
        Self::with_state(compressor, config, DemoState::new())
    }

    pub fn with_state(
        compressor: Arc<dyn Compressor>,
        config: &DemoConfig,
        state: DemoState,
    ) -> Self {
        let ticket = state.current_ticket();
        let (tx, _rx) = watch::channel(state);

        let controller = Self {
            shared: Arc::new(Shared {
                state: tx,
                compressor,
                debounce: config.debounce,
            }),
            task: Mutex::new(None),
        };
        controller.schedule(ticket);
        controller
    }

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<DemoState> {
        self.shared.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> DemoState {
        self.shared.state.borrow().clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.edit(|s| s.edit_input(text));
    }

    pub fn set_aggressiveness(&self, aggressiveness: Aggressiveness) {
        self.edit(|s| s.set_aggressiveness(aggressiveness));
    }

    /// Cancel pending work. Later results can no longer reach the state.
    pub fn shutdown(&self) {
        if let Some(task) = self.lock_task().take() {
            task.abort();
        }
    }

    /// Apply an edit and schedule its ticket while holding the task slot, so
    /// concurrent edits schedule in generation order.
    fn edit(&self, change: impl FnOnce(&mut DemoState) -> Ticket) {
        let mut slot = self.lock_task();
        let mut ticket = None;
        self.shared.state.send_modify(|s| ticket = Some(change(s)));
        if let Some(ticket) = ticket {
            self.replace_task(&mut slot, ticket);
        }
    }

    fn schedule(&self, ticket: Ticket) {
        let mut slot = self.lock_task();
        self.replace_task(&mut slot, ticket);
    }

    /// Swap in the task for `ticket`. A ticket older than the current
    /// generation leaves the pending task alone.
    fn replace_task(&self, slot: &mut Option<JoinHandle<()>>, ticket: Ticket) {
        let current = self.shared.state.borrow().current_ticket();
        if ticket != current {
            tracing::debug!(
                "Not scheduling generation {} (current {})",
                ticket.generation(),
                current.generation()
            );
            return;
        }

        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            tokio::time::sleep(shared.debounce).await;
            shared.run(ticket).await;
        });
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    fn lock_task(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Shared {
    async fn run(&self, ticket: Ticket) {
        let mut settled = Settle::Superseded;
        self.state.send_if_modified(|s| {
            settled = s.settle(ticket);
            settled != Settle::Superseded
        });

        let Settle::Dispatch(job) = settled else {
            return;
        };

        tracing::debug!(
            "Compressing generation {} with {} at {}",
            job.ticket.generation(),
            self.compressor.name(),
            job.aggressiveness
        );
        let result = self.compressor.compress(&job.text, job.aggressiveness).await;
        self.state.send_if_modified(|s| s.apply(job.ticket, result));
    }
}

impl Drop for DemoController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::compressor::CompressionOutcome;
    use crate::demo::Phase;
    use crate::error::{CompressError, Result};
    use crate::heuristic::HeuristicCompressor;

    /// Records every call; optionally slow or failing
    #[derive(Default)]
    struct ScriptedCompressor {
        calls: Mutex<Vec<String>>,
        fail_after: Option<usize>,
        slow_prefix: Option<(&'static str, Duration)>,
        started: AtomicUsize,
    }

    impl ScriptedCompressor {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Compressor for ScriptedCompressor {
        async fn compress(
            &self,
            text: &str,
            _aggressiveness: Aggressiveness,
        ) -> Result<CompressionOutcome> {
            let call = self.started.fetch_add(1, Ordering::SeqCst);
            self.calls.lock().unwrap().push(text.to_string());

            if let Some((prefix, delay)) = self.slow_prefix {
                if text.starts_with(prefix) {
                    tokio::time::sleep(delay).await;
                }
            }
            if self.fail_after.is_some_and(|n| call >= n) {
                return Err(CompressError::Status(500));
            }
            Ok(CompressionOutcome {
                text: format!("compressed: {text}"),
                input_tokens: 10,
                output_tokens: 5,
            })
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn config() -> DemoConfig {
        DemoConfig::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_compression_runs_after_debounce() {
        let compressor = Arc::new(ScriptedCompressor::default());
        let controller = DemoController::new(compressor.clone(), &config());

        tokio::time::sleep(Duration::from_millis(599)).await;
        assert!(compressor.calls().is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(compressor.calls().len(), 1);
        assert_eq!(controller.state().phase(), Phase::Idle);
        assert!(controller.state().output_text.starts_with("compressed: Could you"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_edits_compresses_once_with_final_value() {
        let compressor = Arc::new(ScriptedCompressor::default());
        let controller = DemoController::new(compressor.clone(), &config());

        for text in ["h", "he", "hel", "hell", "hello"] {
            controller.set_input(text);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_millis(700)).await;

        assert_eq!(compressor.calls(), vec!["hello".to_string()]);
        assert_eq!(controller.state().output_text, "compressed: hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_keeps_previous_output() {
        let compressor = Arc::new(ScriptedCompressor {
            fail_after: Some(1),
            ..Default::default()
        });
        let controller = DemoController::new(compressor.clone(), &config());
        tokio::time::sleep(Duration::from_millis(700)).await;
        let good = controller.state().output_text;
        assert!(!good.is_empty());

        controller.set_aggressiveness(Aggressiveness::MAX);
        tokio::time::sleep(Duration::from_millis(700)).await;

        let state = controller.state();
        assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert!(!state.is_loading());
        assert_eq!(state.output_text, good);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_request_never_lands() {
        let compressor = Arc::new(ScriptedCompressor {
            slow_prefix: Some(("slow", Duration::from_secs(5))),
            ..Default::default()
        });
        let state = DemoState::with_input("slow request A");
        let controller = DemoController::with_state(compressor.clone(), &config(), state);

        // A is in flight
        tokio::time::sleep(Duration::from_millis(650)).await;
        assert!(controller.state().is_loading());

        controller.set_input("fast request B");
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(compressor.calls().len(), 2);
        let state = controller.state();
        assert_eq!(state.output_text, "compressed: fast request B");
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_skips_compressor() {
        let compressor = Arc::new(ScriptedCompressor::default());
        let controller = DemoController::new(compressor.clone(), &config());
        controller.set_input("  ");
        tokio::time::sleep(Duration::from_millis(700)).await;

        assert!(compressor.calls().is_empty());
        assert_eq!(controller.state().output_tokens, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_work() {
        let compressor = Arc::new(ScriptedCompressor::default());
        let controller = DemoController::new(compressor.clone(), &config());
        drop(controller);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(compressor.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_result() {
        let controller = DemoController::new(Arc::new(HeuristicCompressor::new()), &config());
        let mut updates = controller.subscribe();

        let state = updates
            .wait_for(|s| s.phase() == Phase::Idle && !s.output_text.is_empty())
            .await
            .unwrap()
            .clone();
        assert!(state.output_tokens <= state.input_tokens);
    }

    #[tokio::test(start_paused = true)]
    async fn test_older_ticket_does_not_replace_newer_task() {
        let compressor = Arc::new(ScriptedCompressor::default());
        let controller = DemoController::new(compressor.clone(), &config());
        let older = controller.state().current_ticket();

        controller.set_input("newer prompt");
        controller.schedule(older);
        tokio::time::sleep(Duration::from_millis(700)).await;

        assert_eq!(compressor.calls(), vec!["newer prompt".to_string()]);
        let state = controller.state();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.output_text, "compressed: newer prompt");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_edits_compress_latest_input() {
        let compressor = Arc::new(ScriptedCompressor::default());
        let config = DemoConfig {
            debounce: Duration::from_millis(1),
            ..DemoConfig::default()
        };
        let controller = Arc::new(DemoController::new(compressor, &config));

        let runtime = tokio::runtime::Handle::current();
        let barrier = Arc::new(std::sync::Barrier::new(2));
        let writers: Vec<_> = ["left", "right"]
            .into_iter()
            .map(|text| {
                let controller = Arc::clone(&controller);
                let barrier = Arc::clone(&barrier);
                let runtime = runtime.clone();
                std::thread::spawn(move || {
                    let _guard = runtime.enter();
                    barrier.wait();
                    controller.set_input(text);
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let mut updates = controller.subscribe();
        let state = tokio::time::timeout(
            Duration::from_secs(5),
            updates.wait_for(|s| s.phase() == Phase::Idle),
        )
        .await
        .unwrap()
        .unwrap()
        .clone();
        assert_eq!(state.output_text, format!("compressed: {}", state.input_text));
    }
}
