//! Macros for reducing boilerplate when defining records
//!
//! These macros generate the struct and the `Record` implementation each
//! screen's row type needs, so field access by name stays in sync with the
//! struct definition.

/// Macro to define an enumerated field with a stable string form
///
/// The first variant is the default. The enum serializes as its string
/// form and converts to `FieldValue::Text`, so it can be filtered with
/// set-membership constraints and sorted like text.
///
/// # Example
/// ```rust,ignore
/// impl_field_enum!(
///     /// Reconciliation state of a bank line
///     TransactionStatus {
///         Pending => "pending",
///         Matched => "matched",
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_field_enum {
    (
        $(#[$meta:meta])*
        $type:ident {
            $first:ident => $first_str:literal
            $( , $variant:ident => $variant_str:literal )* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $type {
            #[default]
            #[serde(rename = $first_str)]
            $first,
            $(
                #[serde(rename = $variant_str)]
                $variant,
            )*
        }

        impl $type {
            /// Every variant, in declaration order
            pub const ALL: &'static [$type] = &[$type::$first $(, $type::$variant)*];

            /// The string form used in filters and serialized data
            pub fn as_str(&self) -> &'static str {
                match self {
                    $type::$first => $first_str,
                    $( $type::$variant => $variant_str, )*
                }
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl From<$type> for $crate::core::field::FieldValue {
            fn from(value: $type) -> Self {
                $crate::core::field::FieldValue::Text(value.as_str().to_string())
            }
        }
    };
}

/// Complete macro to create a record type with automatic trait implementation
///
/// Generates the struct (with an `id: String` field first) and its `Record`
/// implementation. Every declared field is readable by name through
/// `field_value`; its type must convert into `FieldValue`. The optional
/// `computed` list names `&self` methods exposed as extra read-only fields.
///
/// # Example
///
/// ```rust,ignore
/// use ledgerview::prelude::*;
///
/// impl_record!(
///     Expense,
///     "expense",
///     ["label", "supplier"],
///     {
///         label: String,
///         supplier: String,
///         amount: f64,
///         date: IsoDate,
///     },
///     computed { vat }
/// );
///
/// impl Expense {
///     fn vat(&self) -> f64 {
///         self.amount * 0.2
///     }
/// }
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $(#[$meta:meta])*
        $type:ident,
        $type_name:expr,
        [ $( $search_field:expr ),* $(,)? ],
        {
            $( $(#[$field_meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
        $( , computed { $( $computed:ident ),* $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Identifier, unique within its collection
            pub id: String,
            $( $(#[$field_meta])* pub $field : $field_type ),*
        }

        impl $crate::core::record::Record for $type {
            fn record_type() -> &'static str {
                $type_name
            }

            fn search_fields() -> &'static [&'static str] {
                &[ $( $search_field ),* ]
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                if field == "id" {
                    return Some($crate::core::field::FieldValue::from(self.id.clone()));
                }
                $(
                    if field == stringify!($field) {
                        return Some($crate::core::field::FieldValue::from(self.$field.clone()));
                    }
                )*
                $( $(
                    if field == stringify!($computed) {
                        return Some($crate::core::field::FieldValue::from(self.$computed()));
                    }
                )* )?
                None
            }
        }
    };
}
