use chrono::NaiveDate;

/// Format a date for display, e.g. "15 Jan 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(d), "15 Jan 2024");
        let d = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        assert_eq!(format_date(d), "5 Dec 2023");
    }
}
