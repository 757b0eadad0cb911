//! Line formatting.
//!
//! A line is `prefix tag ' ' [date ' '] [time ' '] [file:line ': '] message`,
//! terminated by a newline unless the message already ends in one.

use crate::flags::Flags;
use crate::level::Severity;
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt::{self, Write as _};
use std::panic::Location;

/// Renders the header and message of a single line.
#[derive(Debug, Clone)]
pub(crate) struct LineFormatter {
    prefix: String,
    flags: Flags,
}

impl LineFormatter {
    pub(crate) fn new(prefix: String, flags: Flags) -> Self {
        Self { prefix, flags }
    }

    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) const fn flags(&self) -> Flags {
        self.flags
    }

    /// Appends one complete line to `out`.
    pub(crate) fn render<Tz: TimeZone>(
        &self,
        out: &mut String,
        severity: Severity,
        now: &DateTime<Tz>,
        location: &Location<'_>,
        message: fmt::Arguments<'_>,
    ) {
        out.push_str(&self.prefix);
        out.push_str(severity.tag());
        out.push(' ');
        self.write_header(out, now, location);

        let start = out.len();
        // Writing into a String only fails if a Display impl fails.
        if out.write_fmt(message).is_err() {
            out.truncate(start);
            out.push_str("<formatting error>");
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    fn write_header<Tz: TimeZone>(
        &self,
        out: &mut String,
        now: &DateTime<Tz>,
        location: &Location<'_>,
    ) {
        let flags = self.flags;
        if flags.wants_date() {
            let _ = write!(out, "{:04}/{:02}/{:02} ", now.year(), now.month(), now.day());
        }
        if flags.wants_time() {
            let _ = write!(
                out,
                "{:02}:{:02}:{:02}",
                now.hour(),
                now.minute(),
                now.second()
            );
            if flags.contains(Flags::MICROSECONDS) {
                let micros = (now.nanosecond() % 1_000_000_000) / 1_000;
                let _ = write!(out, ".{micros:06}");
            }
            out.push(' ');
        }
        if flags.wants_file() {
            let file = if flags.contains(Flags::SHORT_FILE) {
                short_file(location.file())
            } else {
                location.file()
            };
            let _ = write!(out, "{}:{}: ", file, location.line());
        }
    }
}

/// Returns the final path element, accepting either separator.
fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Displays a slice of values back to back with no separator.
///
/// Backs the variadic logging macros.
#[doc(hidden)]
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.0 {
            fmt::Display::fmt(part, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
            .single()
            .and_then(|t| t.with_nanosecond(123_123_456))
            .expect("valid timestamp")
    }

    fn render(prefix: &str, flags: Flags, severity: Severity, message: fmt::Arguments<'_>) -> String {
        let formatter = LineFormatter::new(prefix.to_owned(), flags);
        let mut out = String::new();
        formatter.render(&mut out, severity, &fixed_time(), Location::caller(), message);
        out
    }

    #[test]
    fn bare_line_has_prefix_tag_and_message() {
        let line = render("app", Flags::NONE, Severity::Warn, format_args!("disk {}% full", 92));
        assert_eq!(line, "app[Warning] disk 92% full\n");
    }

    #[test]
    fn message_newline_is_not_doubled() {
        let line = render("", Flags::NONE, Severity::Info, format_args!("done\n"));
        assert_eq!(line, "[Info] done\n");
    }

    #[test]
    fn std_flags_render_date_and_time() {
        let line = render("svc ", Flags::STD, Severity::Error, format_args!("boom"));
        assert_eq!(line, "svc [Error] 2009/01/23 01:23:23 boom\n");
    }

    #[test]
    fn microseconds_imply_time() {
        let line = render("", Flags::MICROSECONDS, Severity::Debug, format_args!("x"));
        assert_eq!(line, "[Debug] 01:23:23.123123 x\n");
    }

    #[test]
    fn long_file_uses_full_path() {
        let line = render("", Flags::LONG_FILE, Severity::Info, format_args!("x"));
        let expected_prefix = format!("[Info] {}:", file!());
        assert!(line.starts_with(&expected_prefix), "{line}");
        assert!(line.ends_with(": x\n"), "{line}");
    }

    #[test]
    fn short_file_overrides_long_file() {
        let flags = Flags::LONG_FILE | Flags::SHORT_FILE;
        let line = render("", flags, Severity::Info, format_args!("x"));
        assert!(line.starts_with("[Info] format.rs:"), "{line}");
    }

    #[test]
    fn short_file_handles_both_separators() {
        assert_eq!(short_file("src/a/b.rs"), "b.rs");
        assert_eq!(short_file(r"src\a\b.rs"), "b.rs");
        assert_eq!(short_file("b.rs"), "b.rs");
    }

    #[test]
    fn concat_has_no_separator() {
        let parts: [&dyn fmt::Display; 3] = [&"disk ", &92, &"% full"];
        assert_eq!(Concat(&parts).to_string(), "disk 92% full");
        assert_eq!(Concat(&[]).to_string(), "");
    }
}
