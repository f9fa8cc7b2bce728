//! Number rendering for explanation steps.

/// Fixed two decimals, e.g. `20.00`.
pub fn fixed2(n: f64) -> String {
    format!("{n:.2}")
}

/// Shortest round-trip rendering, e.g. `100` or `0.5`.
pub fn plain(n: f64) -> String {
    format!("{n}")
}

/// Thousands-grouped with at most three decimals, e.g. `97,041.096`.
pub fn grouped(n: f64) -> String {
    let rounded = format!("{:.3}", n.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if n < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0")]
    #[case(100.0, "100")]
    #[case(1500.0, "1,500")]
    #[case(1234567.0, "1,234,567")]
    #[case(97041.09589041096, "97,041.096")]
    #[case(2958.904109589041, "2,958.904")]
    #[case(0.5, "0.5")]
    #[case(-2500.25, "-2,500.25")]
    #[case(-0.0001, "0")]
    fn test_grouped(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(grouped(n), expected);
    }

    #[test]
    fn test_fixed_and_plain() {
        assert_eq!(fixed2(3.6), "3.60");
        assert_eq!(fixed2(23.599999999999998), "23.60");
        assert_eq!(plain(1000.0), "1000");
        assert_eq!(plain(0.25), "0.25");
    }
}
