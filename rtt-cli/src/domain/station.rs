//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code: {reason}")]
pub struct InvalidCrs {
    reason: &'static str,
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// Stored upper-case. [`Crs::parse`] accepts either case, since codes typed
/// on the command line are case-insensitive.
///
/// # Examples
///
/// ```
/// use rtt_cli::domain::Crs;
///
/// let kgx = Crs::parse("kgx").unwrap();
/// assert_eq!(kgx.as_str(), "KGX");
///
/// assert!(Crs::parse("KG").is_err());
/// assert!(Crs::parse("K1X").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from exactly 3 ASCII letters, in any case.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCrs {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidCrs {
                reason: "must be ASCII letters A-Z",
            });
        }

        Ok(Crs([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A station from the static directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    /// Display name, e.g. "London Paddington".
    pub name: &'static str,
    /// Upper-case CRS code, e.g. "PAD".
    pub code: &'static str,
}

impl Station {
    pub const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }

    /// Text the interactive filter matches against.
    pub fn filter_value(&self) -> String {
        format!("{} {}", self.name, self.code)
    }
}
