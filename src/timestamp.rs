//! Canonical wire timestamps for protocol payload fields.
//!
//! Messages carry instants as ISO-8601 text in UTC with a literal `Z`
//! designator, truncated to an agreed precision. Encoding is driven by an
//! injected [`Clock`] so "now" stays deterministic under test; decoding is
//! deliberately lenient about the separators and reduced-precision forms
//! peers are known to emit.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Output precision for encoded wire timestamps.
///
/// `Auto` renders seconds when the subsecond part is zero and six fractional
/// digits otherwise; every other variant truncates to the named unit.
///
/// # Examples
///
/// ```
/// use herald::timestamp::Precision;
///
/// assert_eq!(Precision::default(), Precision::Seconds);
/// assert_eq!(Precision::try_from("milliseconds"), Ok(Precision::Milliseconds));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Seconds, or microseconds when the instant has a subsecond part.
    Auto,
    /// Date and hour only.
    Hours,
    /// Truncate to whole minutes.
    Minutes,
    /// Truncate to whole seconds. The wire default.
    #[default]
    Seconds,
    /// Three fractional digits.
    Milliseconds,
    /// Six fractional digits.
    Microseconds,
}

impl Precision {
    /// Returns the lowercase wire spelling of this precision.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Precision {
    type Error = ParsePrecisionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "auto" => Ok(Self::Auto),
            "hours" => Ok(Self::Hours),
            "minutes" => Ok(Self::Minutes),
            "seconds" => Ok(Self::Seconds),
            "milliseconds" => Ok(Self::Milliseconds),
            "microseconds" => Ok(Self::Microseconds),
            other => Err(ParsePrecisionError(other.to_owned())),
        }
    }
}

/// Error returned when a precision string is not a recognised spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp precision '{0}'")]
pub struct ParsePrecisionError(String);

/// Error returned when timestamp text is not a recognisable ISO-8601 form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a recognisable ISO-8601 timestamp: '{text}'")]
pub struct TimestampParseError {
    text: String,
}

impl TimestampParseError {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the text that failed to parse.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Encodes the current instant at the default precision (seconds).
///
/// # Examples
///
/// ```
/// use herald::timestamp::now_utc;
/// use mockable::DefaultClock;
///
/// let encoded = now_utc(&DefaultClock);
/// assert!(encoded.ends_with('Z'));
/// assert!(!encoded.contains("+00:00"));
/// ```
#[must_use]
pub fn now_utc(clock: &impl Clock) -> String {
    now_utc_with(clock, Precision::default())
}

/// Encodes the current instant at the requested precision.
#[must_use]
pub fn now_utc_with(clock: &impl Clock, precision: Precision) -> String {
    format_instant(clock.utc(), precision)
}

/// Formats an instant as canonical wire text: UTC, ISO-8601 extended, a
/// literal `Z` designator, truncated to `precision`.
///
/// The `Z` is appended directly; no offset formatter is involved, so the
/// `+00:00` form cannot appear.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use herald::timestamp::{format_instant, Precision};
///
/// let instant = Utc
///     .with_ymd_and_hms(2024, 5, 2, 9, 30, 15)
///     .single()
///     .expect("valid instant");
/// assert_eq!(format_instant(instant, Precision::Seconds), "2024-05-02T09:30:15Z");
/// assert_eq!(format_instant(instant, Precision::Hours), "2024-05-02T09Z");
/// ```
#[must_use]
pub fn format_instant(instant: DateTime<Utc>, precision: Precision) -> String {
    let truncated = truncate_instant(instant, precision);
    let rendered = match precision {
        Precision::Hours => truncated.format("%Y-%m-%dT%H"),
        Precision::Minutes => truncated.format("%Y-%m-%dT%H:%M"),
        Precision::Seconds => truncated.format("%Y-%m-%dT%H:%M:%S"),
        Precision::Milliseconds => truncated.format("%Y-%m-%dT%H:%M:%S%.3f"),
        Precision::Microseconds => truncated.format("%Y-%m-%dT%H:%M:%S%.6f"),
        Precision::Auto if truncated.timestamp_subsec_micros() == 0 => {
            truncated.format("%Y-%m-%dT%H:%M:%S")
        }
        Precision::Auto => truncated.format("%Y-%m-%dT%H:%M:%S%.6f"),
    };
    format!("{rendered}Z")
}

/// Truncates an instant to the given precision.
///
/// This is the truncation [`format_instant`] applies, exposed so the
/// round-trip contract (`parse(format(t, p)) == truncate(t, p)`) can be
/// stated and tested by hosts.
#[must_use]
pub fn truncate_instant(instant: DateTime<Utc>, precision: Precision) -> DateTime<Utc> {
    // `with_*` only rejects out-of-range values, which these never are.
    match precision {
        Precision::Auto => instant,
        Precision::Hours => instant
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(instant),
        Precision::Minutes => instant
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(instant),
        Precision::Seconds => instant.with_nanosecond(0).unwrap_or(instant),
        Precision::Milliseconds => instant
            .with_nanosecond(instant.timestamp_subsec_millis() * 1_000_000)
            .unwrap_or(instant),
        Precision::Microseconds => instant
            .with_nanosecond(instant.timestamp_subsec_micros() * 1_000)
            .unwrap_or(instant),
    }
}

/// Parses ISO-8601 timestamp text into a timezone-aware instant.
///
/// Exactly the first space is normalised to `T` before parsing, so either
/// separator is accepted while later stray spaces still fail. Reduced
/// precision down to a bare date is accepted, as are `Z`, `±HH:MM`, `±HHMM`
/// and `±HH` offsets; text with no designator at all is taken as UTC.
///
/// # Errors
///
/// Returns [`TimestampParseError`] carrying the original text when it is not
/// a recognisable ISO-8601 timestamp.
///
/// # Examples
///
/// ```
/// use herald::timestamp::parse_instant;
///
/// let from_t = parse_instant("2024-05-02T09:30:15Z").expect("valid");
/// let from_space = parse_instant("2024-05-02 09:30:15Z").expect("valid");
/// assert_eq!(from_t, from_space);
/// assert!(parse_instant("half past nine").is_err());
/// ```
pub fn parse_instant(text: &str) -> Result<DateTime<FixedOffset>, TimestampParseError> {
    let normalised = text.replacen(' ', "T", 1);
    let (local_part, offset) =
        split_offset(&normalised).ok_or_else(|| TimestampParseError::new(text))?;
    let naive = parse_naive(local_part).ok_or_else(|| TimestampParseError::new(text))?;
    naive
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| TimestampParseError::new(text))
}

/// Splits trailing offset designators from the local date-time text.
fn split_offset(normalised: &str) -> Option<(&str, FixedOffset)> {
    let utc = FixedOffset::east_opt(0)?;
    if let Some(rest) = normalised.strip_suffix('Z') {
        return Some((rest, utc));
    }
    // A sign can only introduce an offset after the time separator; earlier
    // hyphens belong to the date.
    let Some(time_start) = normalised.find('T') else {
        return Some((normalised, utc));
    };
    let tail = normalised.get(time_start..)?;
    let Some((sign_rel, sign)) = tail
        .char_indices()
        .rev()
        .find(|(_, c)| *c == '+' || *c == '-')
    else {
        return Some((normalised, utc));
    };
    let sign_at = time_start + sign_rel;
    let local = normalised.get(..sign_at)?;
    let digits = normalised.get(sign_at + 1..)?;
    let magnitude = parse_offset_seconds(digits)?;
    let seconds = if sign == '-' { -magnitude } else { magnitude };
    Some((local, FixedOffset::east_opt(seconds)?))
}

/// Parses `HH`, `HHMM` or `HH:MM` offset digits into seconds east.
fn parse_offset_seconds(digits: &str) -> Option<i32> {
    let (hours_part, minutes_part) = match digits.len() {
        2 => (digits.get(..2)?, None),
        4 => (digits.get(..2)?, digits.get(2..4)),
        5 => {
            if digits.get(2..3)? != ":" {
                return None;
            }
            (digits.get(..2)?, digits.get(3..5))
        }
        _ => return None,
    };
    let hours: i32 = hours_part.parse().ok()?;
    let minutes: i32 = minutes_part.map_or(Ok(0), str::parse).ok()?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }
    Some(hours * 3600 + minutes * 60)
}

/// Parses the local part, padding reduced-precision times up to `H:M:S`.
fn parse_naive(local: &str) -> Option<NaiveDateTime> {
    let Some((date_part, time_part)) = local.split_once('T') else {
        let date = NaiveDate::parse_from_str(local, "%Y-%m-%d").ok()?;
        return date.and_hms_opt(0, 0, 0);
    };
    let padded = pad_time(time_part)?;
    let candidate = format!("{date_part}T{padded}");
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&candidate, format) {
            return Some(parsed);
        }
    }
    None
}

/// Pads `HH` and `HH:MM` times to full `HH:MM:SS`; fractions are only valid
/// on a full time.
fn pad_time(time: &str) -> Option<String> {
    if time.is_empty() || time.contains(' ') {
        return None;
    }
    let fractional = time.contains('.');
    match time.matches(':').count() {
        0 if fractional => None,
        0 => Some(format!("{time}:00:00")),
        1 if fractional => None,
        1 => Some(format!("{time}:00")),
        2 => Some(time.to_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Precision, format_instant, now_utc, now_utc_with, parse_instant, truncate_instant};
    use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
    use mockable::{Clock, DefaultClock};
    use rstest::rstest;

    /// Clock pinned to 2024-05-02T09:30:15.123456Z for deterministic output.
    struct FrozenClock;

    impl Clock for FrozenClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            fixture_instant()
        }
    }

    fn fixture_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 15)
            .single()
            .and_then(|t| t.with_nanosecond(123_456_000))
            .expect("valid fixture instant")
    }

    #[rstest]
    #[case(Precision::Hours, "2024-05-02T09Z")]
    #[case(Precision::Minutes, "2024-05-02T09:30Z")]
    #[case(Precision::Seconds, "2024-05-02T09:30:15Z")]
    #[case(Precision::Milliseconds, "2024-05-02T09:30:15.123Z")]
    #[case(Precision::Microseconds, "2024-05-02T09:30:15.123456Z")]
    #[case(Precision::Auto, "2024-05-02T09:30:15.123456Z")]
    fn format_renders_each_precision(#[case] precision: Precision, #[case] expected: &str) {
        assert_eq!(format_instant(fixture_instant(), precision), expected);
    }

    #[test]
    fn auto_prints_seconds_when_subseconds_are_zero() {
        let whole = Utc
            .with_ymd_and_hms(2024, 5, 2, 9, 30, 15)
            .single()
            .expect("valid instant");
        assert_eq!(
            format_instant(whole, Precision::Auto),
            "2024-05-02T09:30:15Z"
        );
    }

    #[rstest]
    #[case(Precision::Auto)]
    #[case(Precision::Hours)]
    #[case(Precision::Minutes)]
    #[case(Precision::Seconds)]
    #[case(Precision::Milliseconds)]
    #[case(Precision::Microseconds)]
    fn round_trip_equals_truncated_instant(#[case] precision: Precision) {
        let instant = fixture_instant();
        let encoded = format_instant(instant, precision);
        let decoded = parse_instant(&encoded).expect("canonical output parses");
        assert_eq!(decoded, truncate_instant(instant, precision));
    }

    #[rstest]
    #[case(Precision::Auto)]
    #[case(Precision::Hours)]
    #[case(Precision::Seconds)]
    #[case(Precision::Microseconds)]
    fn encoded_text_never_uses_numeric_utc_offset(#[case] precision: Precision) {
        let encoded = format_instant(fixture_instant(), precision);
        assert!(!encoded.contains("+00:00"), "unexpected offset in {encoded}");
        assert!(encoded.ends_with('Z'));
    }

    #[test]
    fn now_defaults_to_second_precision() {
        assert_eq!(now_utc(&FrozenClock), "2024-05-02T09:30:15Z");
    }

    #[test]
    fn now_with_explicit_precision_matches_format() {
        assert_eq!(
            now_utc_with(&FrozenClock, Precision::Milliseconds),
            "2024-05-02T09:30:15.123Z"
        );
    }

    #[test]
    fn now_with_default_clock_is_canonical() {
        let encoded = now_utc(&DefaultClock);
        assert!(encoded.ends_with('Z'));
        assert!(parse_instant(&encoded).is_ok());
    }

    #[rstest]
    #[case("2024-05-02T09:30:15Z")]
    #[case("2024-05-02 09:30:15Z")]
    #[case("2024-05-02T09:30:15")]
    #[case("2024-05-02 09:30:15")]
    fn separator_and_missing_designator_parse_as_utc(#[case] text: &str) {
        let expected = Utc
            .with_ymd_and_hms(2024, 5, 2, 9, 30, 15)
            .single()
            .expect("valid instant");
        assert_eq!(parse_instant(text).expect("parses"), expected);
    }

    #[rstest]
    #[case("2024-05-02T11:30:15+02:00")]
    #[case("2024-05-02T11:30:15+0200")]
    #[case("2024-05-02T11:30:15+02")]
    #[case("2024-05-02T04:30:15-05:00")]
    fn numeric_offsets_resolve_to_the_same_instant(#[case] text: &str) {
        let expected = Utc
            .with_ymd_and_hms(2024, 5, 2, 9, 30, 15)
            .single()
            .expect("valid instant");
        assert_eq!(parse_instant(text).expect("parses"), expected);
    }

    #[rstest]
    #[case("2024-05-02T09", 9, 0, 0)]
    #[case("2024-05-02T09:30", 9, 30, 0)]
    #[case("2024-05-02", 0, 0, 0)]
    fn reduced_precision_forms_parse(
        #[case] text: &str,
        #[case] hour: u32,
        #[case] minute: u32,
        #[case] second: u32,
    ) {
        let expected = Utc
            .with_ymd_and_hms(2024, 5, 2, hour, minute, second)
            .single()
            .expect("valid instant");
        assert_eq!(parse_instant(text).expect("parses"), expected);
    }

    #[test]
    fn fractional_seconds_survive_parsing() {
        let parsed = parse_instant("2024-05-02T09:30:15.123456Z").expect("parses");
        assert_eq!(parsed, fixture_instant());
    }

    #[rstest]
    #[case("")]
    #[case("half past nine")]
    #[case("2024-05-02  09:30:15")]
    #[case("2024-05-02T09:30:15 trailing")]
    #[case("2024-05-02T")]
    #[case("2024-13-02T09:30:15")]
    #[case("2024-05-02T09.5")]
    #[case("2024-05-02T09:30:15+2:00")]
    fn unrecognisable_text_is_rejected(#[case] text: &str) {
        let error = parse_instant(text).expect_err("must fail");
        assert_eq!(error.text(), text);
    }

    #[test]
    fn truncation_is_idempotent() {
        let instant = fixture_instant();
        let once = truncate_instant(instant, Precision::Minutes);
        assert_eq!(truncate_instant(once, Precision::Minutes), once);
    }

    #[rstest]
    #[case(Precision::Auto, "auto")]
    #[case(Precision::Hours, "hours")]
    #[case(Precision::Minutes, "minutes")]
    #[case(Precision::Seconds, "seconds")]
    #[case(Precision::Milliseconds, "milliseconds")]
    #[case(Precision::Microseconds, "microseconds")]
    fn precision_spelling_round_trips(#[case] precision: Precision, #[case] text: &str) {
        assert_eq!(precision.as_str(), text);
        assert_eq!(Precision::try_from(text), Ok(precision));
        assert_eq!(precision.to_string(), text);
    }

    #[rstest]
    #[case("Seconds")]
    #[case("millis")]
    #[case("")]
    fn unknown_precision_spelling_is_rejected(#[case] text: &str) {
        assert!(Precision::try_from(text).is_err());
    }

    #[test]
    fn precision_serialises_lowercase() {
        let rendered = serde_json::to_value(Precision::Microseconds).expect("serialises");
        assert_eq!(rendered, serde_json::json!("microseconds"));
    }
}
