//! Aggregated per-identifier failures.

use std::fmt;

use crate::Error;

/// One failed resolution within a batch.
#[derive(Debug)]
pub struct FailedResolution {
    id: String,
    reason: Error,
}

impl FailedResolution {
    /// Identifier whose fetch failed, rendered to a string.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn reason(&self) -> &Error {
        &self.reason
    }
}

/// Accumulates `(identifier, failure reason)` pairs across one batch.
///
/// Every recorded entry is retained; duplicates are not merged. The entry
/// order follows fetch completion order, which is unspecified.
#[derive(Debug, Default)]
pub struct BatchFailure {
    entries: Vec<FailedResolution>,
}

impl BatchFailure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: impl ToString, reason: Error) {
        self.entries.push(FailedResolution {
            id: id.to_string(),
            reason,
        });
    }

    pub fn entries(&self) -> &[FailedResolution] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} resolutions failed", self.entries.len())?;
        let mut sep = ": ";
        for entry in &self.entries {
            write!(f, "{}id {}: {}", sep, entry.id, entry.reason)?;
            sep = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for BatchFailure {}
