// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The core of a short-read sequence aligner.
//!
//! Given a reference sequence, [`Index::build`] constructs an FM-index
//! (suffix array, Burrows-Wheeler Transform, rank checkpoints and a
//! sampled suffix array) once, in memory. Each read is then aligned
//! independently with [`Index::align_read`]: exact-match k-mer seeds
//! are looked up in the index, every implied candidate window is
//! scored against the read, and the best-scoring window is extended
//! to a full alignment with either a banded linear-gap engine or an
//! affine-gap engine, reported together with a CIGAR string.
//!
//! The crate makes no assumption about the alphabet beyond "does not
//! contain the sentinel byte `0x00`" — nothing here is DNA-specific.
//! FASTA/FASTQ parsing, SAM/BAM emission, and CLI plumbing are left to
//! callers.
//!
//! ```
//! use fmalign::{EngineKind, Index, ScoringConfig};
//!
//! let index = Index::build(b"ACGTACGTACGT", 2, 2).unwrap();
//! let scoring = ScoringConfig {
//!     match_reward: 1,
//!     mismatch_penalty: 3,
//!     indel_penalty: 2,
//!     gap_open_penalty: 2,
//!     gap_extend_penalty: 1,
//!     engine: EngineKind::Affine,
//! };
//! let result = index.align_read(b"ACGTACGT", 3, &scoring, 4).unwrap().unwrap();
//! assert_eq!(result.cigar, "8M");
//! ```

pub mod alignment;
pub mod cigar;
pub mod data_structures;
pub mod driver;
pub mod error;
pub mod seeding;
pub mod utils;

pub use crate::alignment::scoring::{EngineKind, ScoringConfig};
pub use crate::cigar::cigar_of;
pub use crate::data_structures::fmindex::{Index, Interval};
pub use crate::driver::AlignmentResult;
pub use crate::error::{Error, Result};
