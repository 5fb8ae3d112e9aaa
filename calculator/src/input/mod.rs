// Parsing of the raw text typed into the card's inputs.
//
// Lenient parsers never fail: they read the longest numeric prefix and fall
// back to 0. Strict parsers require the whole (trimmed) text to be a number.

use crate::error::InputError;
use shared::models::FleetSizeBounds;

pub mod lenient {
    use shared::models::FleetSizeBounds;

    /// Reads the leading integer of a slider value and clamps it into
    /// `bounds`. Unparseable text reads as 0 and therefore clamps to `min`.
    pub fn parse_fleet_size(raw: &str, bounds: FleetSizeBounds) -> u32 {
        let value = int_prefix(raw).unwrap_or(0);
        let clamped = value.clamp(i64::from(bounds.min), i64::from(bounds.max));
        u32::try_from(clamped).unwrap_or(bounds.min)
    }

    /// Reads a decimal like `"3.85"`, `"3.85abc"` or `" -2e3"`.
    /// Unparseable, NaN and non-finite input becomes 0.
    pub fn parse_fuel_cost(raw: &str) -> f64 {
        match float_prefix(raw) {
            Some(value) if value.is_finite() && value != 0.0 => value,
            _ => 0.0,
        }
    }

    /// Strips `,` thousands separators, then reads the leading signed
    /// integer. `"12,500"` is 12500, `"12.9"` is 12, `"abc"` is 0.
    pub fn parse_maintenance(raw: &str) -> i64 {
        let stripped = raw.replace(',', "");
        int_prefix(&stripped).unwrap_or(0)
    }

    fn float_prefix(raw: &str) -> Option<f64> {
        let s = raw.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;

        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        if s[end..].starts_with("Infinity") {
            // Non-finite, rejected by the caller.
            return Some(f64::INFINITY);
        }

        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;

        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            digits += frac_end - frac_start;
            end = frac_end;
        }
        if digits == 0 {
            return None;
        }

        if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        let mut number = s[..end].to_string();
        if number.ends_with('.') {
            number.pop();
        }
        number.parse::<f64>().ok()
    }

    fn int_prefix(raw: &str) -> Option<i64> {
        let s = raw.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits: Vec<i64> = rest
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .filter_map(|c| c.to_digit(10).map(i64::from))
            .collect();
        if digits.is_empty() {
            return None;
        }
        let magnitude = digits
            .into_iter()
            .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
        Some(if negative { -magnitude } else { magnitude })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_fleet_size_clamps() {
            let bounds = FleetSizeBounds::default();
            assert_eq!(parse_fleet_size("124", bounds), 124);
            assert_eq!(parse_fleet_size("0", bounds), 1);
            assert_eq!(parse_fleet_size("-3", bounds), 1);
            assert_eq!(parse_fleet_size("9000", bounds), 500);
            assert_eq!(parse_fleet_size("", bounds), 1);
        }

        #[test]
        fn test_parse_fuel_cost_plain() {
            assert_eq!(parse_fuel_cost("3.85"), 3.85);
            assert_eq!(parse_fuel_cost("  4"), 4.0);
            assert_eq!(parse_fuel_cost(".5"), 0.5);
            assert_eq!(parse_fuel_cost("5."), 5.0);
        }

        #[test]
        fn test_parse_fuel_cost_prefix() {
            assert_eq!(parse_fuel_cost("3.85abc"), 3.85);
            assert_eq!(parse_fuel_cost("1e2x"), 100.0);
            assert_eq!(parse_fuel_cost("2e"), 2.0);
            assert_eq!(parse_fuel_cost("-1.5"), -1.5);
        }

        #[test]
        fn test_parse_fuel_cost_invalid_is_zero() {
            assert_eq!(parse_fuel_cost(""), 0.0);
            assert_eq!(parse_fuel_cost("abc"), 0.0);
            assert_eq!(parse_fuel_cost("."), 0.0);
            assert_eq!(parse_fuel_cost("-"), 0.0);
            assert_eq!(parse_fuel_cost("Infinity"), 0.0);
            assert_eq!(parse_fuel_cost("NaN"), 0.0);
        }

        #[test]
        fn test_parse_maintenance_strips_commas() {
            assert_eq!(parse_maintenance("12,500"), 12_500);
            assert_eq!(parse_maintenance("1,000,000"), 1_000_000);
            assert_eq!(parse_maintenance("12500"), 12_500);
        }

        #[test]
        fn test_parse_maintenance_prefix_and_invalid() {
            assert_eq!(parse_maintenance("12.9"), 12);
            assert_eq!(parse_maintenance("-40"), -40);
            assert_eq!(parse_maintenance("abc"), 0);
            assert_eq!(parse_maintenance(""), 0);
            assert_eq!(parse_maintenance("$100"), 0);
        }
    }
}

pub mod strict {
    use super::*;

    pub fn parse_fleet_size(raw: &str, bounds: FleetSizeBounds) -> Result<u32, InputError> {
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| InputError::InvalidFleetSize(raw.to_string()))?;
        check_fleet_size(value, bounds)
    }

    pub fn parse_fuel_cost(raw: &str) -> Result<f64, InputError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::InvalidFuelCost(raw.to_string()))
    }

    pub fn parse_maintenance(raw: &str) -> Result<i64, InputError> {
        raw.replace(',', "")
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::InvalidMaintenance(raw.to_string()))
    }

    pub fn check_fleet_size(value: u32, bounds: FleetSizeBounds) -> Result<u32, InputError> {
        if bounds.contains(value) {
            Ok(value)
        } else {
            Err(InputError::FleetSizeOutOfRange {
                value,
                min: bounds.min,
                max: bounds.max,
            })
        }
    }

}
