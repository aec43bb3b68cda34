// Long-form localized dates: en-US "June 30, 2025", ro-RO "30 iunie 2025",
// ar-EG "٣٠ يونيو ٢٠٢٥" (Arabic-Indic digits).

use crate::locale::Locale;
use chrono::{Datelike, NaiveDate};

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTHS_RO: [&str; 12] = [
    "ianuarie", "februarie", "martie", "aprilie", "mai", "iunie",
    "iulie", "august", "septembrie", "octombrie", "noiembrie", "decembrie",
];

const MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

pub fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    let month = date.month0() as usize;

    match locale {
        Locale::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Locale::Ro => format!("{} {} {}", date.day(), MONTHS_RO[month], date.year()),
        Locale::Ar => format!(
            "{} {} {}",
            arabic_indic_digits(&date.day().to_string()),
            MONTHS_AR[month],
            arabic_indic_digits(&date.year().to_string())
        ),
    }
}

fn arabic_indic_digits(ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_30() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_english_format() {
        assert_eq!(format_long_date(june_30(), Locale::En), "June 30, 2025");
    }

    #[test]
    fn test_romanian_format() {
        assert_eq!(format_long_date(june_30(), Locale::Ro), "30 iunie 2025");
    }

    #[test]
    fn test_arabic_format() {
        assert_eq!(format_long_date(june_30(), Locale::Ar), "٣٠ يونيو ٢٠٢٥");
    }

    #[test]
    fn test_single_digit_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_long_date(date, Locale::En), "January 5, 2024");
        assert_eq!(format_long_date(date, Locale::Ar), "٥ يناير ٢٠٢٤");
    }
}
