use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the date formats accepted in front matter.
///
/// RFC 3339 is tried first. Hand-written dates such as `2022-04-02 12:05:00.000`
/// or a bare `2022-04-02` are read as UTC.
pub fn parse_date_time(buf: &str) -> Result<DateTime<Utc>, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T](\d{1,2}):(\d{1,2}):(\d{1,2})(\.\d{1,9})?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Ok(date_time.with_timezone(&Utc));
    }

    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let field = |idx: usize| -> Result<u32, String> {
        match caps.get(idx) {
            Some(m) => to_int::<u32>(m.as_str(), buf),
            None => Ok(0),
        }
    };

    let y: i32 = to_int(&caps[1], buf)?;
    let m = field(2)?;
    let d = field(3)?;
    let h = field(4)?;
    let mn = field(5)?;
    let s = field(6)?;

    // Fraction digits are padded to nanoseconds: ".5" is 500ms
    let nanos = match caps.get(7) {
        Some(frac) => to_int::<u32>(&format!("{:0<9}", &frac.as_str()[1..]), buf)?,
        None => 0,
    };

    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| format!("Invalid date {}", buf))?;
    let time = NaiveTime::from_hms_nano_opt(h, mn, s, nanos)
        .ok_or_else(|| format!("Invalid time {}", buf))?;

    Ok(NaiveDateTime::new(date, time).and_utc())
}

/// Format used when dates are written back to front matter or the snapshot.
pub fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Fixed, whole-second RFC 3339 form fed into content digests.
pub fn format_hash_date(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serde adapter for optional metadata dates. Absent, null and blank values are `None`.
pub mod metadata_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_date_time, parse_date_time};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format_date_time(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_date_time(&s).map(Some).map_err(Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_parse_date_time() {
        let date_time = parse_date_time("2017-09-10 10:42:32.123").unwrap();
        assert_eq!(format_hash_date(&date_time), "2017-09-10T10:42:32Z");
        assert_eq!(date_time.nanosecond(), 123_000_000);

        let date_time = parse_date_time("2017-09-10 10:42:32").unwrap();
        assert_eq!(format_date_time(&date_time), "2017-09-10T10:42:32Z");

        let date_time = parse_date_time("2017-09-10").unwrap();
        assert_eq!(format_date_time(&date_time), "2017-09-10T00:00:00Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let date_time = parse_date_time("2024-02-12T22:54:00+02:00").unwrap();
        assert_eq!(format_date_time(&date_time), "2024-02-12T20:54:00Z");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date_time("yesterday").is_err());
        assert!(parse_date_time("2024-13-40").is_err());
        assert!(parse_date_time("2024-01-01 25:00:00").is_err());
    }
}
