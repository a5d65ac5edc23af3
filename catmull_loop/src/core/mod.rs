//! Core module has common/shared math and traits used by the curve pipeline.
pub mod math;
pub mod traits;
