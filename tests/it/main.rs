//! Single test binary entry point.
//!
//! All tests are compiled into one binary to keep linking overhead down.
//!
//! Structure:
//! - helpers: Builders and fixtures shared by every test
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod unit;
