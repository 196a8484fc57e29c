// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The six concrete end-to-end scenarios from the testable-properties
//! set, exercising `Index::build` and `Index::align_read` together.

use fmalign::{EngineKind, Index, ScoringConfig};

#[test]
fn scenario_1_affine_exact_read_scores_match_reward_times_length() {
    let reference = b"AATCGGGTTCAATCGGGGTAATCGGGTTCAATCGGGGT";
    let read = b"TCGGGTTCAATCGG";
    let index = Index::build(reference, 3, 3).unwrap();
    let scoring = ScoringConfig {
        match_reward: 1,
        mismatch_penalty: 5,
        indel_penalty: 2,
        gap_open_penalty: 2,
        gap_extend_penalty: 1,
        engine: EngineKind::Affine,
    };

    let result = index.align_read(read, 3, &scoring, 4).unwrap().unwrap();

    assert_eq!(result.score, read.len() as i64);
    assert_eq!(result.cigar, "14M");
    assert_eq!(
        &reference[result.ref_position..result.ref_position + read.len()],
        &read[..]
    );
}

#[test]
fn scenario_2_backward_search_on_banana() {
    let index = Index::build(b"BANANA", 1, 1).unwrap();
    let interval = index.search(b"ANA");
    assert_eq!(interval.upper - interval.lower, 2);

    let mut positions = index.positions(interval);
    positions.sort_unstable();
    assert_eq!(positions, vec![1, 3]);
}

#[test]
fn scenario_3_banded_repeated_motif_scores_full_length() {
    let reference: Vec<u8> = b"ACGT".iter().cycle().take(4000).copied().collect();
    let read: Vec<u8> = b"ACGT".iter().cycle().take(20).copied().collect();
    let index = Index::build(&reference, 5, 5).unwrap();
    let scoring = ScoringConfig {
        match_reward: 1,
        mismatch_penalty: 1,
        indel_penalty: 1,
        gap_open_penalty: 1,
        gap_extend_penalty: 1,
        engine: EngineKind::Banded,
    };

    let result = index.align_read(&read, 4, &scoring, 3).unwrap().unwrap();

    assert_eq!(result.score, 20);
    assert_eq!(result.cigar, "20M");
}

#[test]
fn scenario_4_affine_single_mismatch() {
    let index = Index::build(b"ACGTACGT", 1, 1).unwrap();
    let scoring = ScoringConfig {
        match_reward: 1,
        mismatch_penalty: 3,
        indel_penalty: 2,
        gap_open_penalty: 2,
        gap_extend_penalty: 1,
        engine: EngineKind::Affine,
    };

    let result = index
        .align_read(b"ACGAACGT", 3, &scoring, 4)
        .unwrap()
        .unwrap();

    assert_eq!(result.ref_position, 0);
    assert_eq!(result.score, 4);
    assert_eq!(result.aligned_ref, "ACGTACGT");
    assert_eq!(result.aligned_read, "ACGAACGT");
    assert_eq!(result.cigar, "8M");
}

#[test]
fn scenario_5_affine_single_insertion() {
    let index = Index::build(b"ACGTACGT", 1, 1).unwrap();
    let scoring = ScoringConfig {
        match_reward: 1,
        mismatch_penalty: 3,
        indel_penalty: 2,
        gap_open_penalty: 2,
        gap_extend_penalty: 1,
        engine: EngineKind::Affine,
    };

    let result = index
        .align_read(b"ACGTTACGT", 3, &scoring, 4)
        .unwrap()
        .unwrap();

    assert_eq!(result.score, 6);
    assert_eq!(result.cigar, "4M1I4M");
    assert_eq!(result.cigar.matches('I').count(), 1);
}

#[test]
fn scenario_6_empty_seed_hits_yield_no_alignment() {
    let index = Index::build(b"AAAA", 1, 1).unwrap();
    let scoring = ScoringConfig {
        match_reward: 1,
        mismatch_penalty: 3,
        indel_penalty: 2,
        gap_open_penalty: 2,
        gap_extend_penalty: 1,
        engine: EngineKind::Affine,
    };

    let result = index.align_read(b"GGGG", 2, &scoring, 2).unwrap();

    assert!(result.is_none());
}
