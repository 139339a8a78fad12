use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Formats `value` with no decimal places, rounding halves away from zero.
///
/// The output never depends on the process locale: no grouping separators
/// are emitted.
pub fn format_fixed0(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// Formats `value` as a whole-number percentage, e.g. `"25%"`
pub fn format_percent0(value: f64) -> String {
    format!("{}%", format_fixed0(value))
}

/// Date ordering conventions used for tile date labels
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DateLocale {
    /// Month first, e.g. 02/27/2017
    Us,
    /// Year first, e.g. 2017.02.27
    China,
    /// Day first, e.g. 27.02.2017
    #[default]
    Other,
}

impl DateLocale {
    /// The `chrono` format string for this locale
    pub fn pattern(&self) -> &'static str {
        match self {
            DateLocale::Us => "%m/%d/%Y",
            DateLocale::China => "%Y.%m.%d",
            DateLocale::Other => "%d.%m.%Y",
        }
    }
}

pub fn format_date(date: &NaiveDate, locale: DateLocale) -> String {
    date.format(locale.pattern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_fixed0() {
        assert_eq!(format_fixed0(25.0), "25");
        assert_eq!(format_fixed0(33.333), "33");
        assert_eq!(format_fixed0(12.5), "13");
        assert_eq!(format_fixed0(2.5), "3");
        assert_eq!(format_fixed0(1234567.0), "1234567");
        assert_eq!(format_percent0(66.6667), "67%");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2017, 2, 27).unwrap();
        assert_eq!(format_date(&date, DateLocale::Us), "02/27/2017");
        assert_eq!(format_date(&date, DateLocale::China), "2017.02.27");
        assert_eq!(format_date(&date, DateLocale::Other), "27.02.2017");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!(DateLocale::from_str("us").unwrap(), DateLocale::Us);
        assert_eq!(DateLocale::from_str("china").unwrap(), DateLocale::China);
        assert!(DateLocale::from_str("mars").is_err());
        assert_eq!(DateLocale::VARIANTS, &["us", "china", "other"]);
    }
}
