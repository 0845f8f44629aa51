pub mod api;
pub mod applicant;
pub mod company_offer;
pub mod dashboard;
pub mod document;
pub mod offer;
pub mod report;
pub mod user;

/// Spells out the string form of a closed enum used in filters, badges and the wire format.
///
/// Generates `ALL`, `as_str`, `label` and `parse` for each listed variant.
macro_rules! string_enum {
    ($name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value used on the wire and in filter criteria.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub(crate) use string_enum;
