//! Unit tests for lanewise.

mod items_tests;
mod lane_tests;
mod settings_tests;
