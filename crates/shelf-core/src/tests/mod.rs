//! Test module for shelf-core
//!
//! This module contains tests for:
//! - Catalog loading from disk and error classification
//! - Building a view from a catalog (order, grouping, captured records)
//! - Live filtering and its refinement property
//! - Reloading through the shell
//! - Launching processes

mod build_tests;
mod filter_tests;
