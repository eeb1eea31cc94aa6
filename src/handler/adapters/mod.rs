//! Adapter implementations for the handler subsystem.

pub mod memory;
