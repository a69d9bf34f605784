//! Unit tests for the individual conversion stages.

mod classify_test;
mod extract_test;
mod synthesize_test;
