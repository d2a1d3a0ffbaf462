pub trait FormatTime {
    fn as_readable_time(&self) -> String;
}

impl FormatTime for time::Duration {
    fn as_readable_time(&self) -> String {
        format_seconds(self.whole_seconds().max(0) as u64)
    }
}

impl FormatTime for std::time::Duration {
    fn as_readable_time(&self) -> String {
        format_seconds(self.as_secs())
    }
}

/// The pluralizing suffix for `n` of something ("s" unless `n` is exactly 1)
pub const fn suffix(n: u64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Renders a second count as readable english, largest unit first.
/// Zero-valued units are skipped, so `0` renders as an empty string.
pub fn format_seconds(mut secs: u64) -> String {
    const TABLE: [(&str, u64); 5] = [
        ("week", 604800),
        ("day", 86400),
        ("hour", 3600),
        ("minute", 60),
        ("second", 1),
    ];

    let mut parts = Vec::new();
    for (name, d) in &TABLE {
        let div = secs / d;
        if div > 0 {
            push_unit(&mut parts, name, div);
            secs -= d * div;
        }
    }
    parts.join(", ")
}

/// Like [`format_seconds`] but for a span already split into
/// hours/minutes/seconds, when the duration is known to be under a day.
pub fn format_span(hours: u64, minutes: u64, seconds: u64) -> String {
    let mut parts = Vec::new();
    for (name, n) in [("hour", hours), ("minute", minutes), ("second", seconds)] {
        if n > 0 {
            push_unit(&mut parts, name, n);
        }
    }
    parts.join(", ")
}

fn push_unit(parts: &mut Vec<String>, name: &str, n: u64) {
    parts.push(format!("{} {}{}", n, name, suffix(n)));
}
