use chrono::{DateTime, FixedOffset, Utc};

/// Converts a Unix-seconds timestamp into a short ruler label.
///
/// Closures implement this too, so hosts can delegate label text to their
/// own calendar or locale machinery.
pub trait TimeLabelFormatter {
    fn format_label(&self, unix_seconds: f64) -> String;
}

impl<F> TimeLabelFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format_label(&self, unix_seconds: f64) -> String {
        self(unix_seconds)
    }
}

/// Default `YY-MM-DD` formatter resolving the calendar day in a fixed
/// offset, UTC unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortDateFormatter {
    offset: FixedOffset,
}

impl ShortDateFormatter {
    #[must_use]
    pub fn utc() -> Self {
        Self {
            offset: FixedOffset::east_opt(0).expect("zero offset is valid"),
        }
    }

    #[must_use]
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for ShortDateFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

impl TimeLabelFormatter for ShortDateFormatter {
    fn format_label(&self, unix_seconds: f64) -> String {
        if !unix_seconds.is_finite() {
            return "nan".to_owned();
        }

        let seconds = unix_seconds.round() as i64;
        let Some(datetime) = DateTime::<Utc>::from_timestamp(seconds, 0) else {
            return format!("{unix_seconds:.0}");
        };
        datetime.with_timezone(&self.offset).format("%y-%m-%d").to_string()
    }
}
