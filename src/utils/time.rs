use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};

/// Parses an arrival time from either `HH:MM:SS` or the `HH:MM` form
/// the web client sends from its time picker.
pub fn parse_arrival_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| anyhow::anyhow!("invalid time '{}', expected HH:MM or HH:MM:SS", raw))
}

pub fn deserialize_arrival_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_arrival_time(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_form() {
        let time = parse_arrival_time("08:30:15").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 15).unwrap());
    }

    #[test]
    fn parses_short_form() {
        let time = parse_arrival_time("23:05").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(23, 5, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_arrival_time("8h30").is_err());
        assert!(parse_arrival_time("25:00").is_err());
    }
}
