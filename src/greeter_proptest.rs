//! Property-based tests for greeting formatting.
