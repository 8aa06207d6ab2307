// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::Zoned;
use jiff::civil::{Date, DateTime, Time};
use nlcal_core::{Config, ParsingContext};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Ics,
}

/// Parses a reference date and time, given as `YYYY-MM-DD HH:MM`, `YYYY-MM-DD` or `HH:MM`.
///
/// A bare date starts at midnight, a bare time is taken on the date of `now`.
pub fn parse_datetime(now: &Zoned, dt: &str) -> Result<DateTime, &'static str> {
    let dt = dt.trim();
    if let Ok(dt) = DateTime::strptime("%Y-%m-%d %H:%M", dt) {
        Ok(dt)
    } else if let Ok(dt) = DateTime::strptime("%Y-%m-%dT%H:%M", dt) {
        Ok(dt)
    } else if let Ok(time) = Time::strptime("%H:%M", dt) {
        Ok(now.date().to_datetime(time))
    } else if let Ok(date) = Date::strptime("%Y-%m-%d", dt) {
        Ok(date.to_datetime(Time::midnight()))
    } else {
        Err("Invalid date format. Expected format: YYYY-MM-DD, HH:MM and YYYY-MM-DD HH:MM")
    }
}

/// Builds the parsing context of a command, overriding the configured zone and reference.
///
/// The reference is the current instant unless `at` gives a wall clock time in the zone.
pub fn build_context(
    config: &Config,
    at: Option<&str>,
    timezone: Option<&str>,
) -> Result<ParsingContext, Box<dyn Error>> {
    let context = match timezone {
        Some(tz) => Config {
            timezone: Some(tz.to_string()),
            ..config.clone()
        }
        .context(Zoned::now())?,
        None => config.context(Zoned::now())?,
    };

    match at {
        Some(at) => {
            let datetime = parse_datetime(context.reference(), at)?;
            Ok(context.with_reference_datetime(datetime)?)
        }
        None => Ok(context),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;
    use jiff::tz::TimeZone;

    use super::*;

    fn now() -> Zoned {
        civil::date(2024, 1, 15)
            .at(10, 30, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn test_parse_datetime_date_time() {
        let dt = parse_datetime(&now(), "2025-03-01 09:15").unwrap();
        assert_eq!(dt, civil::date(2025, 3, 1).at(9, 15, 0, 0));

        let dt = parse_datetime(&now(), "2025-03-01T09:15").unwrap();
        assert_eq!(dt, civil::date(2025, 3, 1).at(9, 15, 0, 0));
    }

    #[test]
    fn test_parse_datetime_date_only() {
        let dt = parse_datetime(&now(), "2025-03-01").unwrap();
        assert_eq!(dt, civil::date(2025, 3, 1).at(0, 0, 0, 0));
    }

    #[test]
    fn test_parse_datetime_time_only() {
        let dt = parse_datetime(&now(), " 18:45 ").unwrap();
        assert_eq!(dt, civil::date(2024, 1, 15).at(18, 45, 0, 0));
    }

    #[test]
    fn test_build_context_overrides() {
        let config = Config::default();
        let ctx = build_context(&config, Some("2024-01-15 09:00"), Some("Asia/Tokyo")).unwrap();
        assert_eq!(ctx.timezone_name(), "Asia/Tokyo");
        assert_eq!(ctx.reference().datetime(), civil::date(2024, 1, 15).at(9, 0, 0, 0));

        assert!(build_context(&config, None, Some("Nowhere/Special")).is_err());
        assert!(build_context(&config, Some("soon"), None).is_err());
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime(&now(), "").is_err());
        assert!(parse_datetime(&now(), "tomorrow").is_err());
        assert!(parse_datetime(&now(), "2025-02-30").is_err());
    }
}
