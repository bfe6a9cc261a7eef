//! Service layer

pub mod config;
