/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Parse YYYY-MM-DD date string into components
pub fn parse_date_string(date_str: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;

    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year, month, day))
    } else {
        None
    }
}

/// Format YYYY-MM-DD date string for display, falling back to the raw
/// string when it does not parse
pub fn format_date_for_display(date_str: &str) -> String {
    if let Some((year, month, day)) = parse_date_string(date_str) {
        let month_name = match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "January",
        };
        format!("{} {}, {}", month_name, day, year)
    } else {
        date_str.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_string() {
        assert_eq!(parse_date_string("2024-01-15"), Some((2024, 1, 15)));
        assert_eq!(parse_date_string("2024-12-31"), Some((2024, 12, 31)));

        assert_eq!(parse_date_string("2024-13-01"), None);
        assert_eq!(parse_date_string("2024-00-01"), None);
        assert_eq!(parse_date_string("2024-01-32"), None);
        assert_eq!(parse_date_string("2024-01"), None);
        assert_eq!(parse_date_string("not-a-date"), None);
        assert_eq!(parse_date_string(""), None);
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2024-01-15"), "January 15, 2024");
        assert_eq!(format_date_for_display("2025-06-01"), "June 1, 2025");
    }

    #[test]
    fn test_format_date_falls_back_to_raw_input() {
        assert_eq!(format_date_for_display("yesterday"), "yesterday");
        assert_eq!(format_date_for_display(""), "");
    }
}
