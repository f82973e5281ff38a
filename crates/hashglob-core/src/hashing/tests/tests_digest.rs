//! Tests for digest accumulation

#![allow(clippy::expect_used)]

use crate::hashing::{file_digest, DigestAccumulator};
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_accumulator_has_no_digest() {
    let accumulator = DigestAccumulator::new();
    assert_eq!(accumulator.files(), 0);
    assert_eq!(accumulator.finalize_hex(), None);
}

#[test]
fn test_file_digest_matches_in_memory_digest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data.bin");
    let content: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).expect("Failed to write file");

    let digest = file_digest(&path).expect("Failed to hash file");
    assert_eq!(digest, Sha256::digest(&content));
}

#[test]
fn test_single_file_known_value() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("test.txt");
    fs::write(&path, "test file content").expect("Failed to write file");

    let mut accumulator = DigestAccumulator::new();
    accumulator.fold_file(&path).expect("Failed to fold file");

    assert_eq!(accumulator.files(), 1);
    assert_eq!(
        accumulator.finalize_hex().as_deref(),
        Some("d8a411e8f8643821bed189e627ff57151918aa554c00c10b31c693ab2dded273")
    );
}

#[test]
fn test_digest_of_digests_construction() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    fs::write(&first, "alpha").expect("Failed to write file");
    fs::write(&second, "beta").expect("Failed to write file");

    let mut accumulator = DigestAccumulator::new();
    accumulator.fold_file(&first).expect("Failed to fold file");
    accumulator.fold_file(&second).expect("Failed to fold file");

    let mut expected = Sha256::new();
    expected.update(Sha256::digest(b"alpha"));
    expected.update(Sha256::digest(b"beta"));
    let expected = format!("{:x}", expected.finalize());

    let concatenated = format!("{:x}", Sha256::digest(b"alphabeta"));

    let actual = accumulator.finalize_hex().expect("Digest should exist");
    assert_eq!(actual, expected);
    assert_ne!(actual, concatenated);
}

#[test]
fn test_digest_is_order_sensitive() {
    let a = Sha256::digest(b"a");
    let b = Sha256::digest(b"b");

    let mut forward = DigestAccumulator::new();
    forward.fold_digest(&a);
    forward.fold_digest(&b);

    let mut backward = DigestAccumulator::new();
    backward.fold_digest(&b);
    backward.fold_digest(&a);

    assert_ne!(forward.finalize_hex(), backward.finalize_hex());
}

#[test]
fn test_fold_missing_file_fails_without_counting() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut accumulator = DigestAccumulator::new();
    assert!(accumulator.fold_file(&temp_dir.path().join("missing")).is_err());
    assert_eq!(accumulator.files(), 0);
}

#[test]
fn test_empty_file_still_counts() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty");
    fs::write(&path, b"").expect("Failed to write file");

    let mut accumulator = DigestAccumulator::new();
    accumulator.fold_file(&path).expect("Failed to fold file");

    let expected = format!("{:x}", Sha256::digest(Sha256::digest(b"")));
    assert_eq!(accumulator.finalize_hex(), Some(expected));
}
