//! Test helpers shared across crates.
//!
//! This crate provides diagnostic capture for `tracing` events, canonical
//! hosted-asset fixtures and a `figment::Jail` wrapper for tests that need
//! files on disk.

pub mod fixtures;
pub mod jail;
pub mod logs;
