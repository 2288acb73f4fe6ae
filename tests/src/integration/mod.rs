//! # Integration Tests
//!
//! End-to-end flows through codec, tree and origin engine.

pub mod properties;
pub mod scenarios;
