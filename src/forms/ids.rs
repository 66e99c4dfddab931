//! Reference ids echoed back to the browser: `<PREFIX>-<millis>`.
//!
//! The numeric part is the Unix time in milliseconds, bumped past the last
//! value handed out so it strictly increases across every call in the
//! process, whatever the prefix.  Resubmitting the same form yields a new id.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.next_after(now_millis()))
    }

    fn next_after(&self, now: u64) -> u64 {
        let bump = |last: u64| now.max(last.saturating_add(1));
        match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(bump(last)))
        {
            Ok(prev) | Err(prev) => bump(prev),
        }
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Split an id into prefix and numeric part.
pub fn parse(id: &str) -> Option<(&str, u64)> {
    let (prefix, n) = id.split_once('-')?;
    if prefix.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((prefix, n.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn id_has_prefix_and_timestamp() {
        let ids = IdGenerator::new();
        let before = now_millis();
        let id = ids.next("CF");
        let (prefix, n) = parse(&id).unwrap();
        assert_eq!(prefix, "CF");
        assert!(n >= before);
    }

    #[test]
    fn same_millisecond_still_increases() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_after(1_000), 1_000);
        assert_eq!(ids.next_after(1_000), 1_001);
        assert_eq!(ids.next_after(1_000), 1_002);
        assert_eq!(ids.next_after(5_000), 5_000);
    }

    #[test]
    fn clock_going_backwards_still_increases() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_after(9_000), 9_000);
        assert_eq!(ids.next_after(8_000), 9_001);
    }

    #[test]
    fn sequential_ids_strictly_increase_across_prefixes() {
        let ids = IdGenerator::new();
        let mut last = 0;
        for prefix in ["CF", "DA", "QT"].iter().cycle().take(300) {
            let (_, n) = parse(&ids.next(prefix)).unwrap();
            assert!(n > last);
            last = n;
        }
    }

    #[test]
    fn concurrent_ids_are_unique() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..250).map(|_| ids.next("QT")).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 1_000);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse("CF-123"), Some(("CF", 123)));
        assert_eq!(parse("CF123"), None);
        assert_eq!(parse("-123"), None);
        assert_eq!(parse("CF-12a"), None);
        assert_eq!(parse("CF-"), None);
    }
}
