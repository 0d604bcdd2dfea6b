//! Configuration normalization for a listings marketplace.
//!
//! The crate reconciles an operator-editable hosted asset bundle with the
//! compiled-in defaults and produces a single validated [`AppConfig`]. Hosted
//! input is untrusted: every property is validated and anything malformed is
//! dropped (with a `tracing` diagnostic) so the result falls back towards the
//! defaults instead of failing.
//!
//! ```rust
//! use marketplace_config::layout::SearchPageVariant;
//! use marketplace_config::{DefaultConfig, SupportedProcesses, merge_config};
//! use serde_json::json;
//!
//! let defaults = DefaultConfig::builtin()?;
//! let hosted = json!({"layout": {"searchPage": {"variantType": "map"}}});
//!
//! let config = merge_config(&hosted, &defaults, &SupportedProcesses::builtin());
//! assert_eq!(config.layout.search_page.variant_type, SearchPageVariant::Map);
//! assert!(!config.has_mandatory_configurations);
//! # Ok::<_, std::sync::Arc<marketplace_config::ConfigError>>(())
//! ```

pub mod analytics;
pub mod app;
pub mod branding;
pub mod defaults;
mod error;
pub mod hosted;
pub mod layout;
pub mod listing;
pub mod loader;
pub mod maps;
mod result_ext;
pub mod search;
pub mod transaction;
pub mod validate;

pub use app::{AppConfig, merge_config};
pub use defaults::DefaultConfig;
pub use error::ConfigError;
pub use hosted::HostedConfig;
pub use listing::{ProcessInfo, ProcessRegistry, SupportedProcesses};
pub use loader::{load_defaults, read_hosted_asset};
pub use result_ext::ConfigResultExt;
pub use validate::{ClosedSet, Rejection, RejectionReason, Validated};

/// Result alias used by the loading entrypoints.
pub type ConfigResult<T> = std::result::Result<T, std::sync::Arc<ConfigError>>;

/// A raw, not yet validated configuration record.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
