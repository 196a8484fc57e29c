// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Error type for parameter validation at the crate's external entry points.
//!
//! Only malformed-input conditions become variants here. An out-of-reference
//! candidate window, a read with no seed hits, and a symbol backward search
//! can't find are not represented as errors: the driver skips out-of-reference
//! candidates silently, surfaces "no alignment" as `Ok(None)`, and an unknown
//! symbol simply fails backward search, none of which are exceptional control
//! flow.

use thiserror::Error;

/// Errors returned by [`crate::Index::build`] and [`crate::Index::align_read`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("reference sequence is empty")]
    EmptyReference,

    #[error("read is empty")]
    EmptyRead,

    #[error("reference contains the sentinel byte (0x00)")]
    SentinelInReference,

    #[error("seed length {seed_length} must be >= 1 and <= read length {read_length}")]
    InvalidSeedLength {
        seed_length: usize,
        read_length: usize,
    },

    #[error("{name} must be >= 1, got {value}")]
    InvalidStride { name: &'static str, value: usize },

    #[error("band width must be >= 1, got {band}")]
    InvalidBand { band: usize },

    #[error("scoring parameter {name} must be non-negative")]
    NegativeScoringParameter { name: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
