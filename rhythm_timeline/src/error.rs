// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors that abort a render pass.
//!
//! Every variant describes invalid input data or configuration. None of them are
//! transient, so callers should not retry: fix the input and render again.

use alloc::string::String;
use core::fmt;

use crate::model::Timestamp;

/// An error that aborts a render pass before any draw command is produced.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// The samples span zero time, so the vertical axis has no extent.
    #[error("time extent collapses to a single instant at {at}")]
    DegenerateDomain {
        /// The single instant every sample shares.
        at: Timestamp,
    },
    /// A day zone is inverted or out of chronological order.
    #[error("zone `{label}` is misconfigured: {reason}")]
    ZoneOrdering {
        /// Label of the offending zone.
        label: String,
        /// What is wrong with it.
        reason: ZoneOrderingReason,
    },
    /// The series has no samples at all.
    #[error("at least one sample is required to build the time axis, got {count}")]
    InsufficientSamples {
        /// Number of samples supplied.
        count: usize,
    },
    /// A sample level is not a finite value in `[0, 1]`.
    #[error("sample {index} has level {level}, expected a finite value in [0, 1]")]
    InvalidLevel {
        /// Position of the sample in the series.
        index: usize,
        /// The rejected level.
        level: f64,
    },
    /// A sample does not come strictly after its predecessor.
    #[error("sample {index} is not strictly after sample {}", .index - 1)]
    NonIncreasingTime {
        /// Position of the out-of-order sample (always `>= 1`).
        index: usize,
    },
}

/// Why a zone was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneOrderingReason {
    /// The zone ends before it starts.
    EndBeforeStart,
    /// The zone starts before the zone listed ahead of it.
    StartsBeforePrevious,
}

impl fmt::Display for ZoneOrderingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EndBeforeStart => "it ends before it starts",
            Self::StartsBeforePrevious => "it starts before the preceding zone",
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_offending_item() {
        let err = TimelineError::ZoneOrdering {
            label: "Evening".into(),
            reason: ZoneOrderingReason::EndBeforeStart,
        };
        assert_eq!(
            err.to_string(),
            "zone `Evening` is misconfigured: it ends before it starts"
        );

        let err = TimelineError::NonIncreasingTime { index: 3 };
        assert_eq!(err.to_string(), "sample 3 is not strictly after sample 2");
    }
}
