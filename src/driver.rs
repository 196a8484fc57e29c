// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The seed-extension driver: scores every candidate window implied by
//! the seed list and reports the best-scoring alignment.

use crate::alignment::affine::AffineAligner;
use crate::alignment::banded::BandedAligner;
use crate::alignment::scoring::{EngineKind, ScoringConfig};
use crate::alignment::Engine;
use crate::cigar::cigar_of;
use crate::data_structures::fmindex::Index;
use crate::error::{Error, Result};
use crate::seeding::seeds;

/// Best placement found for a read: its reference coordinate, score,
/// the aligned pair of strings, and their CIGAR encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult {
    pub ref_position: usize,
    pub score: i64,
    pub aligned_ref: String,
    pub aligned_read: String,
    pub cigar: String,
}

fn build_engine(scoring: &ScoringConfig, band: usize) -> Box<dyn Engine> {
    match scoring.engine {
        EngineKind::Banded => Box::new(BandedAligner::new(
            scoring.match_reward,
            scoring.mismatch_penalty,
            scoring.indel_penalty,
            band,
        )),
        EngineKind::Affine => Box::new(AffineAligner::new(
            scoring.match_reward,
            scoring.mismatch_penalty,
            scoring.gap_open_penalty,
            scoring.gap_extend_penalty,
        )),
    }
}

/// Enumerate every candidate window implied by `seed_list`, score it
/// against `read` with the configured engine, and re-run the winner
/// with backtrace.
///
/// For seed offset `i` and reference position `p`, the candidate
/// window starts at `p - i` and is truncated at the end of the
/// reference if it would otherwise run past it; a seed hit with
/// `p < i` has no window and is skipped. Ties are broken by first
/// occurrence in iteration order (offset ascending, then position as
/// stored in its seed list). Returns `None` if no candidate window
/// exists.
pub fn extend(
    index: &Index,
    read: &[u8],
    seed_list: &[Vec<usize>],
    scoring: &ScoringConfig,
    band: usize,
) -> Option<AlignmentResult> {
    let reference = index.reference();
    let m = read.len();
    let engine = build_engine(scoring, band);

    let mut best: Option<(usize, i64)> = None;
    for (offset, positions) in seed_list.iter().enumerate() {
        for &p in positions {
            if p < offset {
                continue;
            }
            let start = p - offset;
            let end = (start + m).min(reference.len());
            let window = &reference[start..end];
            let score = engine.score(window, read);
            let is_better = match best {
                None => true,
                Some((_, best_score)) => score > best_score,
            };
            if is_better {
                best = Some((start, score));
            }
        }
    }

    let (start, _) = best?;
    let end = (start + m).min(reference.len());
    let window = &reference[start..end];
    let alignment = engine.align(window, read);

    Some(AlignmentResult {
        ref_position: start,
        score: alignment.score,
        aligned_ref: String::from_utf8_lossy(&alignment.aligned_ref).into_owned(),
        aligned_read: String::from_utf8_lossy(&alignment.aligned_read).into_owned(),
        cigar: cigar_of(&alignment.aligned_ref, &alignment.aligned_read),
    })
}

impl Index {
    /// Align `read` against this index: generate seeds of length
    /// `seed_length`, extend every candidate window with `scoring`'s
    /// engine, and return the best-scoring alignment, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRead`] if `read` is empty,
    /// [`Error::InvalidSeedLength`] if `seed_length` is zero or exceeds
    /// `read.len()`, [`Error::InvalidBand`] if `band` is zero, and
    /// propagates [`ScoringConfig::validate`] failures.
    pub fn align_read(
        &self,
        read: &[u8],
        seed_length: usize,
        scoring: &ScoringConfig,
        band: usize,
    ) -> Result<Option<AlignmentResult>> {
        if read.is_empty() {
            return Err(Error::EmptyRead);
        }
        if seed_length < 1 || seed_length > read.len() {
            return Err(Error::InvalidSeedLength {
                seed_length,
                read_length: read.len(),
            });
        }
        if band < 1 {
            return Err(Error::InvalidBand { band });
        }
        scoring.validate()?;

        let seed_list = seeds(self, read, seed_length);
        Ok(extend(self, read, &seed_list, scoring, band))
    }
}
