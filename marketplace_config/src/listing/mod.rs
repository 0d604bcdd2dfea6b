//! Listing types, listing extended data fields and the listing merge.
//!
//! Hosted listing records arrive in the asset store's wire shape. They are
//! reshaped by [`restructure_listing_types`] and [`restructure_listing_fields`],
//! combined with the defaults and then validated: listing types against a
//! [`ProcessRegistry`], fields through [`crate::validate`].

mod merge;
mod process;
mod restructure;
mod types;

pub use merge::{ListingConfig, ListingDefaults, merge_listing_config};
pub use process::{
    ProcessInfo, ProcessRegistry, SupportedProcesses, is_supported_listing_type,
    valid_listing_types,
};
pub use restructure::{restructure_listing_fields, restructure_listing_types};
pub use types::{
    EnumOption, FilterConfig, FilterGroup, FilterType, ListingField, ListingType, SaveConfig,
    SchemaType, Scope, SearchMode, ShowConfig, StockType, TransactionType,
};
