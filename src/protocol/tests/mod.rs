//! Unit tests for the protocol context.

mod codec_tests;
mod factory_tests;
