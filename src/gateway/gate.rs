//! Confirmation gates for the streaming gateway
//!
//! The gateway never reads input itself; the yes/no decision is an
//! injected trait object so gating logic stays testable without
//! simulating a real input stream.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Affirmative token check: only `p`/`P` (ignoring surrounding
/// whitespace) confirms playback, anything else declines
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("p")
}

/// Single yes/no decision point gating engine construction
#[async_trait]
pub trait ConfirmationGate: Send {
    /// Ask the external actor whether playback should start
    async fn confirm(&mut self) -> bool;
}

/// Interactive gate reading one line from standard input
pub struct StdinGate;

#[async_trait]
impl ConfirmationGate for StdinGate {
    async fn confirm(&mut self) -> bool {
        print!("Press 'P' to start streaming: ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());

        // EOF or a read failure counts as a decline, same as any
        // non-affirmative token
        match reader.read_line(&mut line).await {
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation, declining");
                false
            }
        }
    }
}

/// Scripted gate replaying a fixed sequence of decisions, for tests
///
/// Records how many times it was consulted; an exhausted script falls
/// back to its default decision.
pub struct ScriptedGate {
    decisions: VecDeque<bool>,
    default_decision: bool,
    consulted: usize,
}

impl ScriptedGate {
    /// Create a gate that answers with the given decisions in order,
    /// then declines
    pub fn new(decisions: impl IntoIterator<Item = bool>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            default_decision: false,
            consulted: 0,
        }
    }

    /// Gate that always confirms
    pub fn always_confirm() -> Self {
        Self {
            decisions: VecDeque::new(),
            default_decision: true,
            consulted: 0,
        }
    }

    /// Number of times the gate was consulted
    pub fn consulted(&self) -> usize {
        self.consulted
    }
}

#[async_trait]
impl ConfirmationGate for ScriptedGate {
    async fn confirm(&mut self) -> bool {
        self.consulted += 1;
        self.decisions
            .pop_front()
            .unwrap_or(self.default_decision)
    }
}
