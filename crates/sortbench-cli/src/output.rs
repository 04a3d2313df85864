//! Text formatting helpers.

use std::fmt::Write as _;
use std::time::Duration;

/// Format a duration for humans.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Seconds with nanosecond precision, as written in the report.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{:.9}", d.as_secs_f64())
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Lay out values `per_line` to a line, each line tab-indented.
#[must_use]
pub fn format_values(values: &[f64], per_line: usize) -> String {
    let per_line = per_line.max(1);
    let mut out = String::new();
    for (i, chunk) in values.chunks(per_line).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('\t');
        for (j, v) in chunk.iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{v}");
        }
    }
    out
}

/// A title centred in a line of `fill` characters.
#[must_use]
pub fn banner(title: &str, width: usize, fill: char) -> String {
    let text = format!(" {title} ");
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut line = String::with_capacity(width);
    line.extend(std::iter::repeat(fill).take(left));
    line.push_str(&text);
    line.extend(std::iter::repeat(fill).take(right));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_seconds_precision() {
        assert_eq!(format_seconds(Duration::from_nanos(1_500)), "0.000001500");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn format_values_wraps() {
        let s = format_values(&[1.0, 2.5, 3.0, -4.0, 5.0], 2);
        assert_eq!(s, "\t1 2.5\n\t3 -4\n\t5");
        assert_eq!(format_values(&[], 10), "");
    }

    #[test]
    fn banner_is_centred() {
        let line = banner("STATS", 15, '=');
        assert_eq!(line, "==== STATS ====");
        assert_eq!(line.chars().count(), 15);
        assert_eq!(banner("too long for it", 5, '-'), " too long for it ");
    }
}
