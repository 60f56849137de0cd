//! # msgq Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks (put/get, request/response)
//! └── src/
//!     ├── harness.rs    # reusable service threads for scenarios
//!     └── integration/  # multi-thread scenarios across crates
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p msgq-tests
//!
//! # Benchmarks
//! cargo bench -p msgq-tests
//! ```

pub mod harness;
pub mod integration;
