//! Unit tests for the handler context.

mod passthrough_tests;
