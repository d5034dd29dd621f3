use chrono::{DateTime, Datelike, Timelike, Utc};

const WEEKDAYS_ID: [&str; 7] = ["Sen", "Sel", "Rab", "Kam", "Jum", "Sab", "Min"];
const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Format a rupiah amount with no decimals and `.` thousands separators,
/// e.g. `Rp1.500.000`.
pub fn format_currency(amount: f64) -> String {
    let rupiah = amount.round() as i64;
    let sign = if rupiah < 0 { "-" } else { "" };
    format!("{}Rp{}", sign, group_thousands(rupiah.unsigned_abs()))
}

/// Same as [`format_currency`] but takes the backend's decimal string.
/// Unparseable input renders as `Rp0`.
pub fn format_currency_str(amount: &str) -> String {
    format_currency(amount.parse::<f64>().unwrap_or(0.0))
}

fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push(value % 1000);
        value /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(group) = groups.pop() {
        out.push('.');
        out.push_str(&format!("{:03}", group));
    }
    out
}

/// Short Indonesian date, e.g. `Kam, 25 Des 2025`.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    let weekday = WEEKDAYS_ID[timestamp.weekday().num_days_from_monday() as usize];
    let month = MONTHS_ID[timestamp.month0() as usize];
    format!("{}, {} {} {}", weekday, timestamp.day(), month, timestamp.year())
}

/// 24-hour clock time, e.g. `14:30`.
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    format!("{:02}:{:02}", timestamp.hour(), timestamp.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_500_000.0), "Rp1.500.000");
        assert_eq!(format_currency(0.0), "Rp0");
        assert_eq!(format_currency(999.0), "Rp999");
        assert_eq!(format_currency(5_300_000.0), "Rp5.300.000");
    }

    #[test]
    fn test_format_currency_str() {
        assert_eq!(format_currency_str("1150000"), "Rp1.150.000");
        assert_eq!(format_currency_str("not-a-number"), "Rp0");
    }

    #[test]
    fn test_format_date_and_time() {
        // 2025-12-25 is a Thursday.
        let ts = Utc.with_ymd_and_hms(2025, 12, 25, 8, 5, 0).unwrap();
        assert_eq!(format_date(&ts), "Kam, 25 Des 2025");
        assert_eq!(format_time(&ts), "08:05");
    }
}
