//! Configuration Tests
//!
//! Tests for configuration loading and validation.

mod validation_test;
