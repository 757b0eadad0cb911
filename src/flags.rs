//! Line decoration flags.
//!
//! [`Flags`] selects which metadata the formatter writes between the tag and
//! the message. The logger forwards it untouched.

use crate::error::ParseFlagError;
use core::fmt;
use core::ops::{BitOr, BitOrAssign};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Bitset of line decorations.
///
/// ```
/// use levelog::Flags;
///
/// let flags = Flags::DATE | Flags::SHORT_FILE;
/// assert!(flags.contains(Flags::DATE));
/// assert!(!flags.contains(Flags::TIME));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Flags(u32);

/// Names accepted by [`Flags::from_str`], in bit order.
const NAMES: [(&str, Flags); 5] = [
    ("date", Flags::DATE),
    ("time", Flags::TIME),
    ("microseconds", Flags::MICROSECONDS),
    ("longfile", Flags::LONG_FILE),
    ("shortfile", Flags::SHORT_FILE),
];

impl Flags {
    /// No decoration.
    pub const NONE: Self = Self(0);
    /// Local date: `2009/01/23`.
    pub const DATE: Self = Self(1 << 0);
    /// Local time: `01:23:23`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies [`Flags::TIME`].
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full source path and line: `src/a/b.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final path element and line: `b.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Date and time.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u32 = 0b1_1111;

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builds flags from raw bits, dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// Returns true if every bit in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no decoration is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub(crate) const fn wants_date(self) -> bool {
        self.contains(Self::DATE)
    }

    pub(crate) const fn wants_time(self) -> bool {
        self.0 & (Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    pub(crate) const fn wants_file(self) -> bool {
        self.0 & (Self::LONG_FILE.0 | Self::SHORT_FILE.0) != 0
    }

    fn names(self) -> Vec<String> {
        NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| (*name).to_owned())
            .collect()
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags({})", self)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&self.names().join("|"))
    }
}

impl FromStr for Flags {
    type Err = ParseFlagError;

    /// Parses a list of flag names separated by `,` or `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::NONE;
        for part in s.split([',', '|']).map(str::trim).filter(|p| !p.is_empty()) {
            let lower = part.to_ascii_lowercase();
            flags |= match lower.as_str() {
                "std" => Self::STD,
                "none" => Self::NONE,
                name => NAMES
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, flag)| *flag)
                    .ok_or_else(|| ParseFlagError::new(part))?,
            };
        }
        Ok(flags)
    }
}

impl TryFrom<Vec<String>> for Flags {
    type Error = ParseFlagError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        names.join(",").parse()
    }
}

impl From<Flags> for Vec<String> {
    fn from(flags: Flags) -> Self {
        flags.names()
    }
}
