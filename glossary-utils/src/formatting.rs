const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Format an elapsed duration as a relative age (e.g. "just now", "3 days ago", "1.2 years ago").
pub fn format_age(elapsed_secs: u64) -> String {
    let days = elapsed_secs / DAY;

    if days >= 365 {
        return format!("{:.1} years ago", days as f64 / 365.0);
    }

    if days > 30 {
        return format!("{:.1} months ago", days as f64 / 30.5);
    }

    if days > 1 {
        return format!("{} days ago", days);
    }

    if days == 1 {
        return "yesterday".to_owned();
    }

    let hours = elapsed_secs / HOUR;
    if hours > 1 {
        return format!("{} hours ago", hours);
    }

    if hours == 1 {
        return "1 hour ago".to_owned();
    }

    let minutes = elapsed_secs / MINUTE;
    if minutes > 1 {
        return format!("{} minutes ago", minutes);
    }

    if minutes == 1 {
        return "1 minute ago".to_owned();
    }

    "just now".to_owned()
}

/// Join items into an oxford-comma list: `a`, `a or b`, `a, b, or c`.
///
/// Returns `None` for an empty slice so callers can skip the surrounding sentence.
pub fn readable_join<S: AsRef<str>>(items: &[S], conjunction: &str) -> Option<String> {
    match items {
        [] => None,
        [only] => Some(only.as_ref().to_owned()),
        [first, second] => Some(format!(
            "{} {} {}",
            first.as_ref(),
            conjunction,
            second.as_ref()
        )),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("{}, {} {}", head, conjunction, last.as_ref()))
        }
    }
}

/// Neutralize mentions so stored text cannot ping users when echoed back.
pub fn escape_mentions(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}

#[cfg(test)]
mod tests {
    use super::{DAY, HOUR, MINUTE, escape_mentions, format_age, readable_join};

    #[test]
    fn recent_ages() {
        assert_eq!(format_age(0), "just now");
        assert_eq!(format_age(55), "just now");
        assert_eq!(format_age(MINUTE), "1 minute ago");
        assert_eq!(format_age(55 * MINUTE), "55 minutes ago");
        assert_eq!(format_age(HOUR), "1 hour ago");
        assert_eq!(format_age(13 * HOUR), "13 hours ago");
    }

    #[test]
    fn day_based_ages() {
        assert_eq!(format_age(DAY), "yesterday");
        assert_eq!(format_age(2 * DAY), "2 days ago");
        assert_eq!(format_age(30 * DAY), "30 days ago");
        assert_eq!(format_age(31 * DAY), "1.0 months ago");
        assert_eq!(format_age(40 * DAY), "1.3 months ago");
        assert_eq!(format_age(100 * DAY), "3.3 months ago");
        assert_eq!(format_age(365 * DAY), "1.0 years ago");
        assert_eq!(format_age(450 * DAY), "1.2 years ago");
    }

    #[test]
    fn joins_items_readably() {
        let empty: [&str; 0] = [];
        assert_eq!(readable_join(&empty, "or"), None);
        assert_eq!(readable_join(&["thing"], "or").as_deref(), Some("thing"));
        assert_eq!(
            readable_join(&["thing1", "thing2"], "or").as_deref(),
            Some("thing1 or thing2")
        );
        assert_eq!(
            readable_join(&["thing1", "thing2", "thing3"], "or").as_deref(),
            Some("thing1, thing2, or thing3")
        );
        assert_eq!(
            readable_join(&["a", "b", "c", "d"], "and").as_deref(),
            Some("a, b, c, and d")
        );
    }

    #[test]
    fn mentions_are_escaped() {
        assert_eq!(escape_mentions("hi @everyone"), "hi @\u{200B}everyone");
        assert_eq!(escape_mentions("plain"), "plain");
    }
}
