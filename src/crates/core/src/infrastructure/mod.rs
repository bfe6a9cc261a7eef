//! Infrastructure layer
//!
//! AI client construction and local file access.

pub mod ai;
pub mod filesystem;
