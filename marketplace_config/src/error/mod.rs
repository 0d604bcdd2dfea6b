//! Error types produced while loading configuration sources.

mod constructors;
mod types;

pub use types::ConfigError;

#[cfg(test)]
mod tests;
