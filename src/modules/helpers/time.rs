use std::sync::OnceLock;

use regex::Regex;

/// Sentinel used for a class that has no parseable time at all.
/// It is slower than any real lap but still a finite number.
pub const NO_CLASS_TIME: f64 = 999_999.0;

/// Sentinel used for a missing finishing position.
pub const NO_POSITION: u32 = 999;

/// Tolerance used when deciding that two parsed times are equal.
pub const TIME_TOLERANCE: f64 = 0.001;

fn time_regex() -> &'static Regex {
    static TIME_REGEX: OnceLock<Regex> = OnceLock::new();
    TIME_REGEX.get_or_init(|| Regex::new(r"^(?:(\d+):)?(\d+(?:\.\d*)?|\.\d+)$").unwrap())
}

pub struct TimeHelper {}

impl TimeHelper {
    /// # parse a lap time
    /// parse `M:SS.sss` or `SS.sss` into seconds
    ///
    /// ## Arguments
    /// * `time` - the lap time as written in a result file
    ///
    /// ## Returns
    /// * `f64` - the time in seconds, or `f64::INFINITY` when the text is empty or unparseable
    pub fn parse(time: &str) -> f64 {
        let trimmed = time.trim();
        if trimmed.is_empty() {
            return f64::INFINITY;
        }

        let captures = match time_regex().captures(trimmed) {
            Some(captures) => captures,
            None => return f64::INFINITY,
        };

        let seconds: f64 = match captures.get(2).map(|m| m.as_str().parse()) {
            Some(Ok(seconds)) => seconds,
            _ => return f64::INFINITY,
        };

        match captures.get(1) {
            Some(minutes) => match minutes.as_str().parse::<f64>() {
                Ok(minutes) => minutes * 60.0 + seconds,
                Err(_) => f64::INFINITY,
            },
            None => seconds,
        }
    }

    /// parse a time, returning `None` for anything that does not parse
    pub fn parse_finite(time: &str) -> Option<f64> {
        let seconds = TimeHelper::parse(time);
        if seconds.is_finite() {
            Some(seconds)
        } else {
            None
        }
    }

    /// true when both times are within a millisecond of each other.
    /// two missing times are considered equal
    pub fn approx_eq(a: f64, b: f64) -> bool {
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        (a - b).abs() < TIME_TOLERANCE
    }
}
