//! Budget table arithmetic and money formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::{BudgetLine, BudgetTrip};

impl BudgetTrip {
    /// `line` as a whole-number percentage of the trip total.
    pub fn share(&self, line: &BudgetLine) -> Decimal {
        if self.total.is_zero() {
            return Decimal::ZERO;
        }
        let percent = line.amount * Decimal::ONE_HUNDRED / self.total;
        percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Sum of all breakdown lines.
    pub fn itemized_total(&self) -> Decimal {
        self.breakdown.iter().map(|line| line.amount).sum()
    }
}

/// US dollar label with thousands separators, e.g. `$4,500` or `$12.50`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction:0<2}"),
        None => format!("{sign}${grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::format_usd;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(0)), "$0");
        assert_eq!(format_usd(dec!(50)), "$50");
        assert_eq!(format_usd(dec!(999)), "$999");
        assert_eq!(format_usd(dec!(1000)), "$1,000");
        assert_eq!(format_usd(dec!(4500)), "$4,500");
        assert_eq!(format_usd(dec!(1234567)), "$1,234,567");
        assert_eq!(format_usd(dec!(12.5)), "$12.50");
        assert_eq!(format_usd(dec!(4500.00)), "$4,500");
        assert_eq!(format_usd(dec!(-1500)), "-$1,500");
    }
}
