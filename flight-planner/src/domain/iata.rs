//! Airport code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Iata` value is valid by construction, so the graph and the
/// searches can use it as a key without re-validating.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Iata;
///
/// let vie = Iata::parse("VIE").unwrap();
/// assert_eq!(vie.as_str(), "VIE");
///
/// // Lowercase is rejected
/// assert!(Iata::parse("vie").is_err());
///
/// // Wrong length is rejected
/// assert!(Iata::parse("VI").is_err());
/// assert!(Iata::parse("VIEN").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Iata([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the IATA code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Iata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Iata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Iata::parse(&s).map_err(serde::de::Error::custom)
    }
}
