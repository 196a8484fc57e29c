// Copyright 2014-2015 Johannes Köster, Vadim Nazarov, Patrick Marks
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Scoring parameters shared by the banded and affine-gap engines.

use crate::error::{Error, Result};

/// Which alignment engine a [`ScoringConfig`] selects. The driver uses
/// the same engine both to scan candidate windows and to re-run the
/// winner with backtrace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineKind {
    Banded,
    Affine,
}

/// Reward/penalty magnitudes for seed extension. All fields are
/// non-negative; [`ScoringConfig::validate`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    pub match_reward: i64,
    pub mismatch_penalty: i64,
    pub indel_penalty: i64,
    pub gap_open_penalty: i64,
    pub gap_extend_penalty: i64,
    pub engine: EngineKind,
}

impl ScoringConfig {
    /// Checks that every reward/penalty magnitude is non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields: [(&'static str, i64); 5] = [
            ("match_reward", self.match_reward),
            ("mismatch_penalty", self.mismatch_penalty),
            ("indel_penalty", self.indel_penalty),
            ("gap_open_penalty", self.gap_open_penalty),
            ("gap_extend_penalty", self.gap_extend_penalty),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(Error::NegativeScoringParameter { name });
            }
        }
        Ok(())
    }
}
