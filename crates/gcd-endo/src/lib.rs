//! GCD-endomorphisms of a finite initial segment of the naturals.
//!
//! Given `M = {0, 1, …, n}`, this crate enumerates every self-map `f: M → M`
//! that fixes `0` and commutes with the greatest common divisor,
//!
//! ```text
//! f(gcd(x, y)) = gcd(f(x), f(y))    for all x, y in M
//! ```
//!
//! and classifies each one by idempotence and by **i-regularity**: whether
//! its direct image coincides with its extended image
//!
//! ```text
//! Im(f)     = { f(x) : x in M }
//! ExtIm(f)  = { y in M : gcd(y, f(x)) in Im(f) for some x in M }
//! ```
//!
//! # Pipeline
//!
//! | Stage | Entry point | Cost |
//! |-------|-------------|------|
//! | Enumerate | [`enumerate_valid`] | (n+1)^(n+1) candidates × O(n²) |
//! | Classify | [`classify_all`] | O(n²) per map |
//! | Report | [`report::render_table`] | O(records) |
//!
//! The search is exhaustive. `n = 6` examines 823 543 candidates; every step
//! past that multiplies the work by roughly `e·(n+1)`. [`AnalysisConfig`]
//! carries a size limit so callers fail fast instead of spinning.
//!
//! # Example
//!
//! ```
//! use gcd_endo::{classify_all, enumerate_valid, Domain};
//!
//! let domain = Domain::new(1);
//! let maps = enumerate_valid(domain);
//! let records = classify_all(domain, &maps);
//!
//! assert_eq!(records.len(), 2);
//! assert!(records.iter().all(|r| r.is_idempotent && r.is_i_regular));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// Core data types (gcd, domain, self-maps)
mod core;

// Validity and idempotence predicates
pub mod predicate;

// Direct and extended images
pub mod image;

// Exhaustive candidate generation
pub mod enumerate;

// Per-map classification records
pub mod classify;

// Run configuration
pub mod config;

// Error taxonomy
pub mod error;

// Table and JSON rendering
pub mod report;

pub use core::domain;
pub use core::gcd;
pub use core::map;

pub use classify::{check, classify, classify_all, ClassificationRecord, MapCheck, Summary};
pub use config::AnalysisConfig;
pub use core::domain::Domain;
pub use core::gcd::gcd;
pub use core::map::SelfMap;
pub use enumerate::{enumerate_valid, enumerate_with_stats, Candidates, EnumerationStats};
pub use error::{Error, Result};
pub use image::{direct_image, extended_image, ImageSet};
pub use predicate::{fixes_zero, is_endomorphism, is_idempotent, is_valid};
