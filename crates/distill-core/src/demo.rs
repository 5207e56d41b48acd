//! Demo State Machine
//!
//! View-model of the live compression demo. Every edit bumps a generation
//! counter and hands back a [`Ticket`]; only the result carrying the latest
//! ticket is ever applied, so a slow response can't overwrite a newer one.
//!
//! ```text
//!            edit                 settle               Ok
//!   Idle ──────────▶ Pending ──────────────▶ Running ──────▶ Idle
//!    ▲                ▲   ▲                    │  │
//!    │   blank input  │   └──────── edit ──────┘  │ Err
//!    └────────────────┘                           ▼
//!                     ◀────────── edit ────────  Error
//! ```

use serde::{Deserialize, Serialize};

use crate::aggressiveness::Aggressiveness;
use crate::compressor::CompressionOutcome;
use crate::config::DEFAULT_INPUT;
use crate::error::CompressError;
use crate::tokens::estimate_tokens;

/// Where the demo is in its request cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    PendingDebounce,
    Running,
    Error,
}

/// Generation of a requested compression
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

impl Ticket {
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Work to hand to a compressor once the input has settled
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressionJob {
    pub ticket: Ticket,
    pub text: String,
    pub aggressiveness: Aggressiveness,
}

/// What settling a ticket led to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Run this job
    Dispatch(CompressionJob),

    /// Input was blank; output was cleared without a request
    Cleared,

    /// A newer edit already replaced this ticket
    Superseded,
}

/// Demo view-model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoState {
    pub input_text: String,
    pub aggressiveness: Aggressiveness,
    pub output_text: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub error: Option<String>,
    phase: Phase,
    generation: u64,
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoState {
    /// Fresh state with the default prompt, already waiting on its first
    /// compression under [`Self::current_ticket`]
    pub fn new() -> Self {
        Self::with_input(DEFAULT_INPUT)
    }

    pub fn with_input(text: impl Into<String>) -> Self {
        Self {
            input_text: text.into(),
            aggressiveness: Aggressiveness::default(),
            output_text: String::new(),
            input_tokens: 0,
            output_tokens: 0,
            error: None,
            phase: Phase::PendingDebounce,
            generation: 1,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Running
    }

    pub const fn current_ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    /// Input token count for display: the service's figure if there is one,
    /// otherwise an estimate of the current input
    pub fn display_input_tokens(&self) -> u32 {
        if self.input_tokens == 0 {
            estimate_tokens(&self.input_text)
        } else {
            self.input_tokens
        }
    }

    /// Replace the input text and restart the debounce
    pub fn edit_input(&mut self, text: impl Into<String>) -> Ticket {
        self.input_text = text.into();
        self.invalidate()
    }

    /// Move the slider and restart the debounce
    pub fn set_aggressiveness(&mut self, aggressiveness: Aggressiveness) -> Ticket {
        self.aggressiveness = aggressiveness;
        self.invalidate()
    }

    /// Supersede every outstanding ticket
    pub fn invalidate(&mut self) -> Ticket {
        self.generation += 1;
        self.phase = Phase::PendingDebounce;
        self.current_ticket()
    }

    /// The debounce for `ticket` has elapsed
    pub fn settle(&mut self, ticket: Ticket) -> Settle {
        if ticket != self.current_ticket() || self.phase != Phase::PendingDebounce {
            return Settle::Superseded;
        }

        if self.input_text.trim().is_empty() {
            self.output_text.clear();
            self.input_tokens = 0;
            self.output_tokens = 0;
            self.phase = Phase::Idle;
            return Settle::Cleared;
        }

        self.phase = Phase::Running;
        self.error = None;
        Settle::Dispatch(CompressionJob {
            ticket,
            text: self.input_text.clone(),
            aggressiveness: self.aggressiveness,
        })
    }

    /// Apply a compression result. Returns `false` when the result is stale
    /// and was dropped.
    ///
    /// A failure keeps the previous output and token counts.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        result: Result<CompressionOutcome, CompressError>,
    ) -> bool {
        if ticket != self.current_ticket() || self.phase != Phase::Running {
            tracing::debug!(
                "Dropping result for generation {} (current {})",
                ticket.generation(),
                self.generation
            );
            return false;
        }

        match result {
            Ok(outcome) => {
                self.output_text = outcome.text;
                self.input_tokens = outcome.input_tokens;
                self.output_tokens = outcome.output_tokens;
                self.phase = Phase::Idle;
            }
            Err(e) => {
                tracing::warn!("Compression failed: {}", e);
                self.error = Some(e.user_message());
                self.phase = Phase::Error;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(text: &str, input_tokens: u32, output_tokens: u32) -> CompressionOutcome {
        CompressionOutcome {
            text: text.into(),
            input_tokens,
            output_tokens,
        }
    }

    fn dispatch(state: &mut DemoState, ticket: Ticket) -> CompressionJob {
        match state.settle(ticket) {
            Settle::Dispatch(job) => job,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    fn dispatch_current(state: &mut DemoState) -> CompressionJob {
        let ticket = state.current_ticket();
        dispatch(state, ticket)
    }

    #[test]
    fn test_initial_state() {
        let state = DemoState::new();
        assert_eq!(state.input_text, DEFAULT_INPUT);
        assert_eq!(state.aggressiveness, Aggressiveness::MIN);
        assert_eq!(state.phase(), Phase::PendingDebounce);
        assert!(!state.is_loading());
        assert_eq!(state.display_input_tokens(), estimate_tokens(DEFAULT_INPUT));
    }

    #[test]
    fn test_happy_path() {
        let mut state = DemoState::new();
        let job = dispatch_current(&mut state);
        assert!(state.is_loading());
        assert_eq!(job.text, DEFAULT_INPUT);

        assert!(state.apply(job.ticket, Ok(outcome("planets solar system", 18, 4))));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.output_text, "planets solar system");
        assert_eq!(state.display_input_tokens(), 18);
        assert_eq!(state.output_tokens, 4);
    }

    #[test]
    fn test_stale_timer_is_superseded() {
        let mut state = DemoState::new();
        let first = state.current_ticket();
        let second = state.edit_input("new text");
        assert_eq!(state.settle(first), Settle::Superseded);
        assert!(matches!(state.settle(second), Settle::Dispatch(_)));
    }

    #[test]
    fn test_failure_keeps_previous_output() {
        let mut state = DemoState::new();
        let job = dispatch_current(&mut state);
        state.apply(job.ticket, Ok(outcome("kept output", 10, 3)));

        let ticket = state.set_aggressiveness(Aggressiveness::MAX);
        let job = dispatch(&mut state, ticket);
        assert!(state.apply(job.ticket, Err(CompressError::Status(500))));

        assert_eq!(state.phase(), Phase::Error);
        assert!(!state.is_loading());
        assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert_eq!(state.output_text, "kept output");
        assert_eq!(state.output_tokens, 3);

        // the next run clears the banner
        let ticket = state.edit_input("retry");
        dispatch(&mut state, ticket);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_late_response_from_older_request_is_ignored() {
        let mut state = DemoState::new();
        let request_a = dispatch_current(&mut state);

        let ticket_b = state.edit_input("newer prompt");
        let request_b = dispatch(&mut state, ticket_b);

        assert!(state.apply(request_b.ticket, Ok(outcome("newer", 2, 1))));
        assert!(!state.apply(request_a.ticket, Ok(outcome("older", 9, 9))));
        assert_eq!(state.output_text, "newer");
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_response_arriving_during_new_debounce_is_ignored() {
        let mut state = DemoState::new();
        let request_a = dispatch_current(&mut state);
        state.edit_input("still typing");

        assert!(!state.apply(request_a.ticket, Ok(outcome("older", 9, 9))));
        assert_eq!(state.phase(), Phase::PendingDebounce);
        assert!(state.output_text.is_empty());
    }

    #[test]
    fn test_blank_input_clears_without_request() {
        let mut state = DemoState::new();
        let job = dispatch_current(&mut state);
        state.apply(job.ticket, Ok(outcome("something", 5, 2)));

        let ticket = state.edit_input("   ");
        assert_eq!(state.settle(ticket), Settle::Cleared);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.output_text.is_empty());
        assert_eq!(state.output_tokens, 0);
        assert_eq!(state.display_input_tokens(), 0);
    }

    #[test]
    fn test_settle_twice_dispatches_once() {
        let mut state = DemoState::new();
        let ticket = state.current_ticket();
        dispatch(&mut state, ticket);
        assert_eq!(state.settle(ticket), Settle::Superseded);
    }
}
