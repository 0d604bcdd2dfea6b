//! Transaction process registry and listing type validation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ListingType;

/// A transaction process the running application can handle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfo {
    /// Process name, e.g. `default-booking`.
    pub name: String,
    /// Process alias, e.g. `default-booking/release-1`.
    pub alias: String,
    /// Pricing units supported by the process.
    pub unit_types: Vec<String>,
}

impl ProcessInfo {
    /// Build an entry whose alias is `<name>/release-1`.
    #[must_use]
    pub fn release_1(name: &str, unit_types: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            alias: format!("{name}/release-1"),
            unit_types: unit_types.iter().map(|unit| (*unit).to_owned()).collect(),
        }
    }
}

/// Read-only lookup of the transaction processes the application supports.
pub trait ProcessRegistry {
    /// Every supported process, in registry order.
    fn supported_processes(&self) -> &[ProcessInfo];
}

/// A registry backed by an owned list of processes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportedProcesses(Vec<ProcessInfo>);

impl SupportedProcesses {
    /// Wrap an explicit process list.
    #[must_use]
    pub const fn new(processes: Vec<ProcessInfo>) -> Self {
        Self(processes)
    }

    /// The processes bundled with the application: product purchases priced
    /// per item and bookings priced per day, night or hour.
    #[must_use]
    pub fn builtin() -> Self {
        Self(vec![
            ProcessInfo::release_1("default-purchase", &["item"]),
            ProcessInfo::release_1("default-booking", &["day", "night", "hour"]),
        ])
    }
}

impl ProcessRegistry for SupportedProcesses {
    fn supported_processes(&self) -> &[ProcessInfo] {
        &self.0
    }
}

impl ProcessRegistry for Vec<ProcessInfo> {
    fn supported_processes(&self) -> &[ProcessInfo] {
        self
    }
}

/// Whether the registry supports the listing type's process name, alias and
/// unit type.
///
/// The three memberships are checked independently: each may be satisfied by
/// a different registry entry.
#[must_use]
pub fn is_supported_listing_type(listing_type: &ListingType, registry: &dyn ProcessRegistry) -> bool {
    let processes = registry.supported_processes();
    let transaction = &listing_type.transaction_type;
    let has_name = processes.iter().any(|p| p.name == transaction.process);
    let has_alias = processes.iter().any(|p| p.alias == transaction.alias);
    let has_unit_type = processes
        .iter()
        .any(|p| p.unit_types.iter().any(|unit| *unit == transaction.unit_type));
    has_name && has_alias && has_unit_type
}

/// Keep the listing types the registry supports, dropping (and logging) the
/// rest.
#[must_use]
pub fn valid_listing_types(
    listing_types: Vec<ListingType>,
    registry: &dyn ProcessRegistry,
) -> Vec<ListingType> {
    listing_types
        .into_iter()
        .filter(|listing_type| {
            let supported = is_supported_listing_type(listing_type, registry);
            if !supported {
                warn!(
                    listing_type = %listing_type.listing_type,
                    process = %listing_type.transaction_type.process,
                    alias = %listing_type.transaction_type.alias,
                    unit_type = %listing_type.transaction_type.unit_type,
                    "Unsupported listing type configuration detected; listing type dropped"
                );
            }
            supported
        })
        .collect()
}
