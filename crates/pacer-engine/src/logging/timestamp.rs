use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Current local time as `[YYYY-MM-DD HH:MM:SS.NNNNNNNNN]`.
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Formats `t` as `[YYYY-MM-DD HH:MM:SS.NNNNNNNNN]` in its own timezone.
///
/// The output is always 31 bytes. chrono encodes a leap second as a
/// nanosecond value past one second; it is clamped to the last nanosecond of
/// the second to keep the field nine digits wide.
pub fn format_timestamp<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    format!(
        "[{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:09}]",
        t.year(),
        t.month(),
        t.day(),
        t.hour(),
        t.minute(),
        t.second(),
        t.nanosecond().min(999_999_999),
    )
}
