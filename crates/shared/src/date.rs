use time::OffsetDateTime;

pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// `(below, unit, name)`: ages under `below` seconds are counted in whole `unit`s. Anything
/// older is counted in years.
const SCALE: [(i64, i64, &str); 4] = [
    (HOUR, MINUTE, "minute"),
    (DAY, HOUR, "hour"),
    (MONTH, DAY, "day"),
    (YEAR, MONTH, "month"),
];

/// Human age of a unix timestamp, e.g. "3 hours ago". Future timestamps read as "just now".
pub fn format_relative_time(timestamp: i64) -> String {
    format_relative_time_from(timestamp, now())
}

fn format_relative_time_from(timestamp: i64, now: i64) -> String {
    let age = now.saturating_sub(timestamp);
    if age < MINUTE {
        return "just now".to_owned();
    }

    let (unit, name) = SCALE
        .iter()
        .find(|(below, _, _)| age < *below)
        .map_or((YEAR, "year"), |&(_, unit, name)| (unit, name));

    match (age / unit, name) {
        (1, "day") => "yesterday".to_owned(),
        (1, name) => format!("1 {name} ago"),
        (count, name) => format!("{count} {name}s ago"),
    }
}
