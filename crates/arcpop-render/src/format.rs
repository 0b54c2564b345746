//! Number formatting for chart labels, tooltips and SVG attributes.

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Group-separated value with up to ten fractional digits: `1234.5` → `1,234.5`.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let fixed = format!("{:.10}", v.abs());
    let fixed = trim_fraction(&fixed);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed, ""));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if v < 0.0 && fixed != "0" {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Percentage of a fraction with up to two decimals: `0.3333` → `33.33%`.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "0%".to_string();
    }
    let fixed = format!("{:.2}", fraction * 100.0);
    let trimmed = trim_fraction(&fixed);
    if trimmed == "-0" {
        return "0%".to_string();
    }
    format!("{trimmed}%")
}

/// Compact coordinate form used in SVG and path data: three decimals, trailing zeros dropped.
pub fn fmt_coord(v: f64) -> String {
    if !v.is_finite() || v.abs() < 0.0005 {
        return "0".to_string();
    }
    let fixed = format!("{:.3}", v);
    let trimmed = trim_fraction(&fixed);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_grouped_and_trimmed() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(1234.5), "1,234.5");
        assert_eq!(format_value(-1_000_000.0), "-1,000,000");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_value(-0.00000000001), "0");
    }

    #[test]
    fn percents_keep_two_decimals() {
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(1.0 / 3.0), "33.33%");
        assert_eq!(format_percent(0.125), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn coordinates_use_three_decimals() {
        assert_eq!(fmt_coord(1.0), "1");
        assert_eq!(fmt_coord(0.0001), "0");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(1.23456), "1.235");
        assert_eq!(fmt_coord(-2.5), "-2.5");
        assert_eq!(fmt_coord(f64::NAN), "0");
    }
}
