//! Log severity levels.
//!
//! Severities are ranked from most to least critical. A logger emits every
//! severity whose rank is at or below its threshold's rank, so `Fatal`
//! (rank 0) is always emitted.

use crate::error::ParseSeverityError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Line tags indexed by [`Severity::rank`].
const TAGS: [&str; Severity::COUNT] = [
    "[Fatal]",
    "[Error]",
    "[Warning]",
    "[Config]",
    "[Info]",
    "[Debug]",
];

/// Severity level for log lines.
///
/// The derived ordering follows the rank: `Fatal < Error < Warn < Config <
/// Info < Debug`. A smaller value is more critical.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "SeverityRepr")]
#[repr(u8)]
pub enum Severity {
    /// Unrecoverable condition; logging it terminates the process.
    Fatal = 0,
    /// Error conditions that don't halt execution.
    Error = 1,
    /// Potentially problematic situations.
    Warn = 2,
    /// Configuration details reported at startup or reload.
    Config = 3,
    /// General informational messages.
    #[default]
    Info = 4,
    /// Debugging information for development.
    Debug = 5,
}

impl Severity {
    /// Number of severity levels.
    pub const COUNT: usize = 6;

    /// Every severity, most critical first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Config,
        Self::Info,
        Self::Debug,
    ];

    /// Most critical severity.
    pub const MOST_CRITICAL: Self = Self::Fatal;

    /// Most verbose severity.
    pub const MOST_VERBOSE: Self = Self::Debug;

    /// Converts a raw rank into a severity, clamping out-of-range values.
    ///
    /// Values below `0` become [`Severity::Fatal`]; values at or above
    /// [`Severity::COUNT`] become [`Severity::Debug`]. Fatal can never be
    /// filtered out.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        if raw <= 0 {
            return Self::Fatal;
        }
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Config,
            4 => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Returns the numeric rank (0 is most critical).
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Returns the tag written in front of each line, e.g. `[Warning]`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        TAGS[self.rank()]
    }

    /// Returns the level name in lowercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Config => "config",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns true if a logger with `threshold` emits this severity.
    #[must_use]
    pub const fn is_enabled_at(self, threshold: Self) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Returns true if this is the process-terminating severity.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<i64>() {
            return Ok(Self::from_raw(raw));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "config" => Ok(Self::Config),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseSeverityError::new(trimmed)),
        }
    }
}

/// Serialized form accepted for a severity: a name or a raw rank.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Rank(i64),
    Name(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = ParseSeverityError;

    fn try_from(repr: SeverityRepr) -> Result<Self, ParseSeverityError> {
        match repr {
            SeverityRepr::Rank(raw) => Ok(Self::from_raw(raw)),
            SeverityRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Fatal < Severity::Error);
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Warn < Severity::Config);
        assert!(Severity::Config < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
    }

    #[test]
    fn ranks_match_all_table() {
        for (i, level) in Severity::ALL.iter().enumerate() {
            assert_eq!(level.rank(), i);
        }
        assert_eq!(Severity::ALL.len(), Severity::COUNT);
    }

    #[test]
    fn from_raw_clamps_both_ends() {
        assert_eq!(Severity::from_raw(-1), Severity::Fatal);
        assert_eq!(Severity::from_raw(i64::MIN), Severity::Fatal);
        assert_eq!(Severity::from_raw(6), Severity::Debug);
        assert_eq!(Severity::from_raw(i64::MAX), Severity::Debug);
        assert_eq!(Severity::from_raw(2), Severity::Warn);
    }

    #[test]
    fn tags() {
        assert_eq!(Severity::Warn.tag(), "[Warning]");
        assert_eq!(Severity::Fatal.tag(), "[Fatal]");
        assert_eq!(Severity::Debug.tag(), "[Debug]");
    }

    #[test]
    fn enabled_at_threshold() {
        assert!(Severity::Fatal.is_enabled_at(Severity::Fatal));
        assert!(Severity::Warn.is_enabled_at(Severity::Warn));
        assert!(Severity::Error.is_enabled_at(Severity::Warn));
        assert!(!Severity::Config.is_enabled_at(Severity::Warn));
        assert!(!Severity::Debug.is_enabled_at(Severity::Info));
    }

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!(" DEBUG ".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("3".parse::<Severity>().unwrap(), Severity::Config);
        assert_eq!("99".parse::<Severity>().unwrap(), Severity::Debug);
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn serde_names() {
        let level: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, Severity::Warn);
        assert_eq!(serde_json::to_string(&Severity::Config).unwrap(), "\"config\"");
    }

    #[test]
    fn serde_ranks_clamp_like_from_raw() {
        for raw in [-5i64, 0, 3, 5, 42] {
            let level: Severity = serde_json::from_str(&raw.to_string()).unwrap();
            assert_eq!(level, Severity::from_raw(raw), "rank {raw}");
        }
        assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
        assert!(serde_json::from_str::<Severity>("true").is_err());
    }
}
