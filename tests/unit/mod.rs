//! Unit Tests
//!
//! Component-level tests that run without a Bitcoin node.

pub mod pipeline;
