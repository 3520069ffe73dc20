/// Formats an ISK amount with thousands separators, rounded to whole ISK.
pub fn format_isk(amount: f64) -> String {
    if !amount.is_finite() {
        return "- ISK".to_string();
    }

    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0 {
        format!("-{} ISK", grouped)
    } else {
        format!("{} ISK", grouped)
    }
}

/// Formats a payout fraction, `0.25` being `25.00%`.
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod format_isk {
        use super::*;

        /// Expect thousands separators on large amounts
        #[test]
        fn groups_thousands() {
            assert_eq!(format_isk(1_770_000_000.0), "1,770,000,000 ISK");
            assert_eq!(format_isk(12_345.0), "12,345 ISK");
        }

        /// Expect small amounts without separators and fractions rounded
        #[test]
        fn rounds_small_amounts() {
            assert_eq!(format_isk(0.0), "0 ISK");
            assert_eq!(format_isk(999.6), "1,000 ISK");
        }

        /// Expect the sign kept on negative amounts
        #[test]
        fn keeps_negative_sign() {
            assert_eq!(format_isk(-2_500.0), "-2,500 ISK");
        }

        /// Expect a placeholder rather than a bogus number for NaN
        #[test]
        fn handles_non_finite() {
            assert_eq!(format_isk(f64::NAN), "- ISK");
        }
    }

    /// Expect fractions rendered as percentages with two decimals
    #[test]
    fn formats_percentage() {
        assert_eq!(format_percentage(0.6), "60.00%");
        assert_eq!(format_percentage(0.0125), "1.25%");
    }
}
