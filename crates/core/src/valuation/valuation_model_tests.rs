#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::valuation::{
        format_fixed, format_holding_money, format_profit_loss, format_summary_money,
        ProfitClass, Valuation,
    };
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_equity_in_profit() {
        let v = Valuation::compute(dec!(10), dec!(100), Some(dec!(120))).unwrap();
        assert_eq!(v.total_value, dec!(1200));
        assert_eq!(v.profit_loss, dec!(200));
        assert_eq!(v.profit_loss_percent, dec!(20.00));
        assert_eq!(v.profit_class(), ProfitClass::Profit);
        assert_eq!(v.profit_class().css_class(), "profit");
        assert_eq!(format_profit_loss(&v), "₹200.00 (+20.00%)");
    }

    #[test]
    fn test_fund_at_a_loss() {
        let v = Valuation::compute(dec!(5), dec!(50), Some(dec!(40))).unwrap();
        assert_eq!(v.total_value, dec!(200));
        assert_eq!(v.profit_loss, dec!(-50));
        assert_eq!(v.profit_loss_percent, dec!(-20.00));
        assert_eq!(v.profit_class().css_class(), "loss");
        assert_eq!(format_profit_loss(&v), "₹50.00 (-20.00%)");
    }

    #[test]
    fn test_missing_or_zero_current_value_falls_back_to_purchase() {
        for current in [None, Some(Decimal::ZERO)] {
            let v = Valuation::compute(dec!(3), dec!(250.5), current).unwrap();
            assert_eq!(v.current_value, dec!(250.5));
            assert_eq!(v.profit_loss, Decimal::ZERO);
            assert_eq!(v.profit_loss_percent, Decimal::ZERO);
            assert_eq!(v.profit_class(), ProfitClass::Profit);
            assert_eq!(format_profit_loss(&v), "₹0.00 (+0.00%)");
        }
    }

    #[test]
    fn test_percent_rounds_half_away_from_zero() {
        // (100.005 - 100) / 100 * 100 = 0.005
        let v = Valuation::compute(dec!(1), dec!(100), Some(dec!(100.005))).unwrap();
        assert_eq!(v.profit_loss_percent, dec!(0.01));

        let v = Valuation::compute(dec!(1), dec!(100), Some(dec!(99.995))).unwrap();
        assert_eq!(v.profit_loss_percent, dec!(-0.01));
    }

    #[test]
    fn test_non_positive_purchase_value_is_rejected() {
        for purchase in [Decimal::ZERO, dec!(-1)] {
            let err = Valuation::compute(dec!(1), purchase, Some(dec!(10))).unwrap_err();
            assert!(matches!(
                err,
                Error::Validation(ValidationError::NotPositive(_))
            ));
        }
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(format_holding_money(dec!(1200)), "₹1200.00");
        assert_eq!(format_holding_money(dec!(0.125)), "₹0.13");
        assert_eq!(format_summary_money(dec!(30)), "$30.00");
        assert_eq!(format_fixed(dec!(12.34567), 3), "12.346");
    }

    proptest! {
        #[test]
        fn prop_valuation_identities(
            quantity in 1i64..1_000_000,
            purchase_cents in 1i64..10_000_000,
            current_cents in 0i64..10_000_000,
        ) {
            let quantity = Decimal::new(quantity, 3);
            let purchase = Decimal::new(purchase_cents, 2);
            let current = Decimal::new(current_cents, 2);

            let v = Valuation::compute(quantity, purchase, Some(current)).unwrap();
            let used = if current.is_zero() { purchase } else { current };

            prop_assert_eq!(v.total_value, used * quantity);
            prop_assert_eq!(v.profit_loss, v.total_value - purchase * quantity);

            let expected_pct = ((used - purchase) / purchase * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(v.profit_loss_percent.abs(), expected_pct.abs());

            if !v.profit_loss_percent.is_zero() {
                prop_assert_eq!(
                    v.profit_loss_percent.is_sign_negative(),
                    v.profit_loss.is_sign_negative()
                );
            }
        }
    }
}
