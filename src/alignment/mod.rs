// Copyright 2014-2015 Johannes Köster, Vadim Nazarov, Patrick Marks
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Alignment engines used by seed extension: banded global alignment
//! with a linear gap penalty, and affine-gap alignment with an
//! explicit three-layer matrix.

pub mod affine;
pub mod banded;
pub mod scoring;

use crate::utils::TextSlice;

/// A sentinel standing in for negative infinity in the DP matrices.
/// Chosen so that a handful of further subtractions cannot overflow.
pub(crate) const NEG_INFINITY: i64 = i64::MIN / 4;

/// The outcome of aligning two byte sequences: a score, together with
/// the equal-length aligned pair of strings (each over the input
/// alphabet plus `-` for a gap).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    pub score: i64,
    pub aligned_ref: Vec<u8>,
    pub aligned_read: Vec<u8>,
}

/// Common interface implemented by both the banded and affine-gap
/// engines, so the seed-extension driver can scan candidate windows
/// and later re-run the winner through backtrace using the exact same
/// algorithm and scoring.
pub trait Engine {
    /// Best score of aligning `s` against `t`, without backtrace.
    fn score(&self, s: TextSlice, t: TextSlice) -> i64;

    /// Best score together with the aligned pair, recovered via
    /// backtrace.
    fn align(&self, s: TextSlice, t: TextSlice) -> Alignment;
}
