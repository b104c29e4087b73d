//! Pipeline Comprehensive Test Suite
//!
//! End-to-end checks of the analysis stages through the public `emosl` API.
//!
//! ## Test Organization
//!
//! - `scenario_tests.rs` - Reference inputs with known outputs
//! - `property_tests.rs` - Invariants over generated tweets and maps
//! - `batch_tests.rs` - BatchPipeline aggregation, parallel mode, sinks
//! - `storage_tests.rs` - Data directory → pipeline → JSON report

mod test_utils;

mod batch_tests;
mod property_tests;
mod scenario_tests;
mod storage_tests;
