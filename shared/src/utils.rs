// Formatting helpers shared by the calculator core and the GUI.

pub mod currency {
    /// Formats a whole-dollar amount as `$1,234,567`.
    pub fn format_currency(value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if value < 0 {
            format!("$-{}", grouped)
        } else {
            format!("${}", grouped)
        }
    }

    /// Reads back a number from display text by keeping only its ASCII digits.
    /// Text without any digit reads as 0; values beyond `i64` saturate.
    pub fn parse_display_digits(text: &str) -> i64 {
        text.chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_currency_groups_thousands() {
            assert_eq!(format_currency(0), "$0");
            assert_eq!(format_currency(999), "$999");
            assert_eq!(format_currency(1_000), "$1,000");
            assert_eq!(format_currency(248_500), "$248,500");
            assert_eq!(format_currency(1_234_567), "$1,234,567");
        }

        #[test]
        fn test_format_currency_negative() {
            assert_eq!(format_currency(-1_234), "$-1,234");
        }

        #[test]
        fn test_parse_display_digits() {
            assert_eq!(parse_display_digits("$248,500"), 248_500);
            assert_eq!(parse_display_digits(""), 0);
            assert_eq!(parse_display_digits("$"), 0);
            // Sign is not a digit, so it is dropped like any other symbol.
            assert_eq!(parse_display_digits("$-1,234"), 1_234);
        }
    }
}
