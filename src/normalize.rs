//! Raw response to numeric amount conversion.
//!
//! Malformed amounts degrade to zero instead of failing the load.

use crate::models::RawMetricResponse;

/// Parse a decimal amount, yielding `0.0` for anything unusable.
///
/// Leading whitespace is skipped and the longest decimal prefix is read, so
/// `"12345.67 NGN"` is `12345.67` and `"1,234.56"` is `1`.
pub fn parse_amount(raw: &str) -> f64 {
    match decimal_prefix(raw.trim_start()).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Longest prefix matching `[+-]?(digits[.digits] | .digits)([eE][+-]?digits)?`.
fn decimal_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &s[..end]
}

/// Extract the aggregate amount from a response. A missing field reads as `"0"`.
pub fn normalize(raw: &RawMetricResponse) -> f64 {
    parse_amount(raw.total_outstanding_loans.as_deref().unwrap_or("0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!(parse_amount("12345.67"), 12345.67);
        assert_eq!(parse_amount("  42 "), 42.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }

    #[test]
    fn garbage_and_non_finite_become_zero() {
        for raw in ["", "abc", "-", ".", "e5", "NaN", "inf", "-infinity", "1e999"] {
            assert_eq!(parse_amount(raw), 0.0, "input: {:?}", raw);
        }
    }

    #[test]
    fn reads_leading_numeric_prefix() {
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("12345.67 NGN"), 12345.67);
        assert_eq!(parse_amount("1,234.56"), 1.0);
        assert_eq!(parse_amount("  -3.5kg"), -3.5);
        assert_eq!(parse_amount("2.5e2x"), 250.0);
        assert_eq!(parse_amount("7e"), 7.0);
        assert_eq!(parse_amount("7e+"), 7.0);
        assert_eq!(parse_amount("12."), 12.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("1.2.3"), 1.2);
    }

    #[test]
    fn missing_field_is_zero() {
        assert_eq!(normalize(&RawMetricResponse::default()), 0.0);
    }

    #[test]
    fn renormalizing_is_a_no_op() {
        for x in [0.0, 1.5, 12345.67, 0.1 + 0.2, 9_007_199_254_740_993.0, 1e-7] {
            let once = normalize(&RawMetricResponse::with_amount(x.to_string()));
            assert_eq!(once, x);
            let twice = normalize(&RawMetricResponse::with_amount(once.to_string()));
            assert_eq!(twice, once);
        }
    }
}
