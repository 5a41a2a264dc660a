//! Pure UI helpers extracted from components for non-wasm testing.

/// Fraction digits kept by [`format_number`].
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with `,` thousands grouping and at most three fraction digits.
///
/// Non-finite values render as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let negative = value < 0.0 && (whole != "0" || !fraction.is_empty());

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Dollar amount with grouping, e.g. `$250,000`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let number = format_number(value);
    number
        .strip_prefix('-')
        .map_or_else(|| format!("${number}"), |rest| format!("-${rest}"))
}

/// Plain percentage without grouping, e.g. `61.5%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value}%")
    } else {
        "0%".to_string()
    }
}

/// Fixed-precision rendering, e.g. `format_fixed(33.333, 1) == "33.3"`.
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.decimals$}")
}

/// Share of `value` within `total` as a percentage; zero when the total is zero.
#[must_use]
pub fn percent_of(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() || !value.is_finite() {
        return 0.0;
    }
    value / total * 100.0
}

/// Substring before `@`; the whole input when it has no `@`.
#[must_use]
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Largest finite value, or zero for an empty slice.
#[must_use]
pub fn max_value(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(None, |acc: Option<f64>, value| {
            Some(acc.map_or(value, |current| current.max(value)))
        })
        .unwrap_or(0.0)
}

/// Sum of finite values.
#[must_use]
pub fn sum_values(values: &[f64]) -> f64 {
    values.iter().copied().filter(|value| value.is_finite()).sum()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_group_thousands_and_trim_fractions() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1_000.0), "1,000");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(1_234.5), "1,234.5");
        assert_eq!(format_number(0.123_456), "0.123");
        assert_eq!(format_number(-2_500.25), "-2,500.25");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn tiny_negatives_do_not_render_minus_zero() {
        assert_eq!(format_number(-0.000_1), "0");
    }

    #[test]
    fn currency_and_percent_formats() {
        assert_eq!(format_currency(250_000.0), "$250,000");
        assert_eq!(format_currency(-12.5), "-$12.5");
        assert_eq!(format_percent(61.5), "61.5%");
        assert_eq!(format_percent(40.0), "40%");
    }

    #[test]
    fn fixed_precision_rounds() {
        assert_eq!(format_fixed(33.333, 1), "33.3");
        assert_eq!(format_fixed(66.666, 0), "67");
        assert_eq!(format_fixed(f64::INFINITY, 1), "0.0");
    }

    #[test]
    fn percent_of_guards_zero_total() {
        assert!((percent_of(1.0, 4.0) - 25.0).abs() < f64::EPSILON);
        assert!(percent_of(5.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn email_local_part_strips_domain() {
        assert_eq!(email_local_part("jane.doe@example.com"), "jane.doe");
        assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
        assert_eq!(email_local_part("@example.com"), "");
    }

    #[test]
    fn max_and_sum_ignore_non_finite() {
        assert!((max_value(&[1.0, f64::NAN, 3.0]) - 3.0).abs() < f64::EPSILON);
        assert!(max_value(&[]).abs() < f64::EPSILON);
        assert!((sum_values(&[1.0, 2.5, f64::INFINITY]) - 3.5).abs() < f64::EPSILON);
    }
}
