// Date utility functions

use chrono::{Local, NaiveDate};

/// Day/month/year format used on printed reports.
pub const ISSUE_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_issue_date(date: NaiveDate) -> String {
    date.format(ISSUE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_issue_date_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_issue_date(date), "07/03/2025");
    }
}
