//! Per-transaction extraction outcomes and the batch accumulator

use serde::Serialize;

/// Result of extracting one transaction's data-carrier payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DecodingOutcome {
    /// Payload was hex that decoded to valid UTF-8
    Decoded(String),
    /// Payload was found but is not hex-encoded UTF-8; holds the payload as found
    RawUndecodable(String),
    /// No payload: fetch failed or no data-carrier output
    Absent,
}

impl DecodingOutcome {
    /// Line written to the output artifact, if this outcome produces one
    ///
    /// An empty `Decoded` payload still yields an (empty) line.
    pub fn output_line(&self) -> Option<String> {
        match self {
            DecodingOutcome::Decoded(text) => Some(text.clone()),
            DecodingOutcome::RawUndecodable(hex) => {
                Some(format!("Hex data: {} (Decoding failed)", hex))
            }
            DecodingOutcome::Absent => None,
        }
    }
}

/// Counters for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub processed: usize,
    pub decoded: usize,
    pub undecodable: usize,
    pub absent: usize,
}

impl BatchStats {
    pub fn record(&mut self, outcome: &DecodingOutcome) {
        self.processed += 1;
        match outcome {
            DecodingOutcome::Decoded(_) => self.decoded += 1,
            DecodingOutcome::RawUndecodable(_) => self.undecodable += 1,
            DecodingOutcome::Absent => self.absent += 1,
        }
    }
}

/// Ordered output lines of a batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub lines: Vec<String>,
    pub stats: BatchStats,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome, appending its line if it has one
    pub fn push(&mut self, outcome: &DecodingOutcome) {
        self.stats.record(outcome);
        if let Some(line) = outcome.output_line() {
            self.lines.push(line);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
