//! Integration tests for the full conversion pipeline.

mod common;
mod file_output_test;
