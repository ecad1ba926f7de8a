//! Unit tests for the bitstream modules
//!
//! Tests are organized by module and functionality.

pub mod reader_tests;
