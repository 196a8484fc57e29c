// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The seed generator: for each offset in a read, the set of reference
//! positions at which the fixed-length k-mer starting there occurs
//! exactly in the reference.

use crate::data_structures::fmindex::Index;

/// For each `i` in `0..=read.len() - seed_length`, the (possibly
/// empty) set of reference positions of `read[i..i + seed_length]`.
/// The order of positions within a set is unspecified.
///
/// Returns an empty list if `read` is shorter than `seed_length`.
pub fn seeds(index: &Index, read: &[u8], seed_length: usize) -> Vec<Vec<usize>> {
    if seed_length == 0 || read.len() < seed_length {
        return Vec::new();
    }
    (0..=read.len() - seed_length)
        .map(|i| index.locate(&read[i..i + seed_length]))
        .collect()
}
