//! Validators for untrusted configuration values.
//!
//! Validators never panic and never abort the merge. Each returns a
//! [`Validated`] value: either the normalized fragment (where `None` means the
//! property is legitimately absent) or a [`Rejection`] naming the offending
//! property. Callers drop only the record that contained the rejection.

mod field_configs;
mod listing_field;
mod outcome;
mod primitives;

pub use field_configs::{
    valid_filter_config, valid_filter_type, valid_listing_types_for_listing_config,
    valid_save_config, valid_schema_options, valid_search_mode, valid_show_config,
};
pub use listing_field::{
    FieldContext, FieldFragment, FieldProperty, PropertyValidator, valid_listing_field,
    valid_listing_fields,
};
pub use outcome::{Rejection, RejectionReason, Validated};
pub use primitives::{present, valid_boolean, valid_enum, valid_label, valid_optional_string};

/// A closed set of string options accepted on the wire.
///
/// Implemented through the `closed_set!` macro for every enumerated configuration
/// value so validators can report the allowed options and parse without
/// string comparisons scattered through the code.
pub trait ClosedSet: Copy + Sized + 'static {
    /// Every accepted wire value, in declaration order.
    const OPTIONS: &'static [&'static str];

    /// Parse a wire value, returning `None` for anything outside the set.
    fn from_wire(value: &str) -> Option<Self>;

    /// The wire value of this option.
    fn as_wire(self) -> &'static str;
}

/// Declare an enum whose variants map one-to-one onto wire strings.
///
/// The generated type derives serde support using the wire strings and
/// implements [`ClosedSet`].
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $crate::validate::ClosedSet for $name {
            const OPTIONS: &'static [&'static str] = &[$($wire),+];

            fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn as_wire(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::validate::ClosedSet::as_wire(*self))
            }
        }
    };
}

pub(crate) use closed_set;
