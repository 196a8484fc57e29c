// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The FM-index proper: suffix array, BWT and its rank/first-occurrence
//! auxiliaries, and the sampled suffix array, bundled behind backward
//! search and SA-position recovery.

use crate::data_structures::bwt::{bwt, less, BWT, Less, Occ, PartialSuffixArray};
use crate::data_structures::suffix_array::suffix_array;
use crate::error::{Error, Result};
use crate::utils::{ALPHABET_SIZE, SENTINEL};

/// A half-open suffix array interval `[lower, upper)` matching all
/// rotations that begin with a searched pattern. An empty interval
/// (`lower == upper`) means the pattern does not occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub lower: usize,
    pub upper: usize,
}

impl Interval {
    fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }
}

/// An immutable FM-index over a reference sequence, built once and
/// shared (by reference) across any number of reads.
///
/// Built from `R$` (the reference with a unique sentinel appended), the
/// index owns the BWT, the first-occurrence table, the rank-checkpoint
/// structure and the sampled suffix array. Nothing about it assumes a
/// DNA alphabet: any byte string without an embedded sentinel (`0x00`)
/// can be indexed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Index {
    /// Reference sequence R, without the trailing sentinel.
    reference: Vec<u8>,
    /// |T| = |R| + 1.
    n: usize,
    bwt: BWT,
    less: Less,
    counts: [usize; ALPHABET_SIZE],
    occ: Occ,
    psa: PartialSuffixArray,
}

impl Index {
    /// Build an FM-index over `reference`.
    ///
    /// `sa_sample_stride` and `rank_checkpoint_stride` trade memory for
    /// lookup speed: a stride of `k` retains every `k`-th suffix array
    /// value by text position, and rescans at most `k` BWT rows per
    /// `Occ` query respectively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyReference`] if `reference` is empty,
    /// [`Error::SentinelInReference`] if it contains a `0x00` byte, and
    /// [`Error::InvalidStride`] if either stride is zero.
    pub fn build(
        reference: &[u8],
        sa_sample_stride: usize,
        rank_checkpoint_stride: usize,
    ) -> Result<Self> {
        if reference.is_empty() {
            return Err(Error::EmptyReference);
        }
        if reference.contains(&SENTINEL) {
            return Err(Error::SentinelInReference);
        }
        if sa_sample_stride < 1 {
            return Err(Error::InvalidStride {
                name: "sa_sample_stride",
                value: sa_sample_stride,
            });
        }
        if rank_checkpoint_stride < 1 {
            return Err(Error::InvalidStride {
                name: "rank_checkpoint_stride",
                value: rank_checkpoint_stride,
            });
        }

        let mut text = Vec::with_capacity(reference.len() + 1);
        text.extend_from_slice(reference);
        text.push(SENTINEL);

        let sa = suffix_array(&text);
        let l = bwt(&text, &sa);
        let less = less(&l);
        let mut counts = [0usize; ALPHABET_SIZE];
        for &c in &l {
            counts[c as usize] += 1;
        }
        let occ = Occ::new(&l, rank_checkpoint_stride);
        let psa = PartialSuffixArray::new(&sa, sa_sample_stride);

        Ok(Index {
            reference: reference.to_vec(),
            n: text.len(),
            bwt: l,
            less,
            counts,
            occ,
            psa,
        })
    }

    /// The original reference sequence, without its sentinel.
    pub fn reference(&self) -> &[u8] {
        &self.reference
    }

    /// |R|, the reference length without the sentinel.
    pub fn reference_len(&self) -> usize {
        self.n - 1
    }

    /// Exact backward search: the suffix array interval of rows whose
    /// rotation begins with `pattern`. Runs in O(|pattern|) `Occ`
    /// queries; an empty `pattern` matches every row.
    pub fn search(&self, pattern: &[u8]) -> Interval {
        let n = self.n as i64;
        let (mut top, mut bot): (i64, i64) = (0, n - 1);

        for &c in pattern.iter().rev() {
            if self.counts[c as usize] == 0 {
                return Interval { lower: 0, upper: 0 };
            }

            let less_c = self.less[c as usize] as i64;
            let top_rank_inclusive = self.occ.get(&self.bwt, top as usize, c) as i64;
            let bot_rank_inclusive = self.occ.get(&self.bwt, bot as usize, c) as i64;

            // occ.get is inclusive of row `top` itself; when bwt[top] == c
            // that row's own occurrence must not count towards how many
            // occurrences of c precede it.
            let top_rank = if self.bwt[top as usize] == c {
                top_rank_inclusive - 1
            } else {
                top_rank_inclusive
            };

            top = less_c + top_rank;
            bot = less_c + bot_rank_inclusive - 1;

            if bot < top {
                return Interval { lower: 0, upper: 0 };
            }
        }

        Interval {
            lower: top as usize,
            upper: (bot + 1) as usize,
        }
    }

    /// Recover the reference positions covered by suffix array interval
    /// `interval`, by LF-walking each row back to the nearest sampled
    /// suffix array entry.
    pub fn positions(&self, interval: Interval) -> Vec<usize> {
        if interval.is_empty() {
            return Vec::new();
        }
        (interval.lower..interval.upper)
            .map(|row| self.resolve(row))
            .collect()
    }

    fn resolve(&self, mut p: usize) -> usize {
        let mut steps = 0usize;
        while self.psa.get(p).is_none() {
            let c = self.bwt[p];
            p = self.less[c as usize] + self.occ.rank_at(p) - 1;
            steps += 1;
        }
        (self.psa.get(p).unwrap() + steps) % self.n
    }

    /// Convenience: exact match positions of `pattern` in the reference.
    pub fn locate(&self, pattern: &[u8]) -> Vec<usize> {
        self.positions(self.search(pattern))
    }
}
