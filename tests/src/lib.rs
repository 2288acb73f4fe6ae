//! # XDM Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion groups per crate
//! │   ├── xdm_02_merkle.rs
//! │   └── xdm_03_origin.rs
//! │
//! ├── exploits/         # Attack simulations against the origin
//! │   ├── malleability.rs
//! │   ├── replay.rs
//! │   └── membership.rs
//! │
//! ├── integration/      # End-to-end scenarios and properties
//! └── fixtures.rs       # Shared engine setup
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p xdm-tests
//!
//! # By category
//! cargo test -p xdm-tests integration::
//! cargo test -p xdm-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p xdm-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
