//! Macros for the boilerplate shared by domain enums and entities
//!
//! # Example
//!
//! ```rust
//! use site24x7_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Region {
//!     North,
//!     South,
//! }
//!
//! impl_domain_status_conversions!(Region {
//!     North => "NORTH",
//!     South => "SOUTH",
//! });
//!
//! assert_eq!(Region::North.to_string(), "NORTH");
//! assert_eq!("south".parse::<Region>().unwrap(), Region::South);
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: writes the variant's string exactly as given
/// - FromStr trait: parses case-insensitively back to the variant
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

/// Implements [`ApiEntity`](crate::types::ApiEntity) for a record whose id
/// lives in a plain `String` field.
///
/// ```rust,ignore
/// impl_api_entity!(Tag, tag_id, "tag");
/// impl_api_entity!(WebsiteMonitor, monitor_id, "website monitor", monitor_type = "URL");
/// ```
#[macro_export]
macro_rules! impl_api_entity {
    ($entity:ty, $id_field:ident, $name:expr) => {
        impl $crate::types::ApiEntity for $entity {
            const RESOURCE: &'static str = $name;

            fn id(&self) -> &str {
                &self.$id_field
            }

            fn set_id(&mut self, id: String) {
                self.$id_field = id;
            }
        }
    };
    ($entity:ty, $id_field:ident, $name:expr, monitor_type = $kind:expr) => {
        impl $crate::types::ApiEntity for $entity {
            const RESOURCE: &'static str = $name;
            const MONITOR_TYPE: Option<&'static str> = Some($kind);

            fn id(&self) -> &str {
                &self.$id_field
            }

            fn set_id(&mut self, id: String) {
                self.$id_field = id;
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Failed,
    }

    impl_domain_status_conversions!(TestStatus {
        Pending => "pending",
        Failed => "FAILED",
    });

    #[test]
    fn test_display_uses_given_spelling() {
        assert_eq!(TestStatus::Pending.to_string(), "pending");
        assert_eq!(TestStatus::Failed.to_string(), "FAILED");
    }

    #[test]
    fn test_fromstr_ignores_case_and_whitespace() {
        assert_eq!(TestStatus::from_str("PENDING").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str(" failed ").unwrap(), TestStatus::Failed);
        assert_eq!(TestStatus::from_str("FaILeD").unwrap(), TestStatus::Failed);
    }

    #[test]
    fn test_fromstr_invalid() {
        let err = TestStatus::from_str("invalid").unwrap_err();
        assert!(err.contains("Invalid TestStatus: invalid"));
        assert!(TestStatus::from_str("").is_err());
    }
}
