// Common test utilities
//
// Each integration test binary pulls in this module; not every binary
// uses every helper.
#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
