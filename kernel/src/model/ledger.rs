//! 予約ごとの入金状況の集計。
//!
//! 合計金額・残高はどこにも保存せず、予約と支払いを読み出すたびに計算する。
//! 過払い（残高がマイナス）も入力ミスとは扱わずにそのまま返す。

use crate::model::payment::Payment;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentLedger {
    pub total_price: Decimal,
    pub total_paid: Decimal,
    pub balance_due: Decimal,
}

impl PaymentLedger {
    pub fn summarize(total_price: Decimal, payments: &[Payment]) -> Self {
        Self::from_amounts(total_price, payments.iter().map(|p| p.amount))
    }

    pub fn from_amounts(total_price: Decimal, amounts: impl IntoIterator<Item = Decimal>) -> Self {
        let total_paid: Decimal = amounts.into_iter().sum();
        Self {
            total_price,
            total_paid,
            balance_due: total_price - total_paid,
        }
    }

    pub fn has_outstanding_balance(&self) -> bool {
        self.balance_due > Decimal::ZERO
    }

    pub fn is_overpaid(&self) -> bool {
        self.balance_due < Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        id::{PaymentId, ReservationId},
        payment::PaymentMethod,
    };
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn payment(amount: Decimal) -> Payment {
        Payment {
            payment_id: PaymentId::new(),
            reservation_id: ReservationId::new(),
            payment_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            amount,
            method: PaymentMethod::Yape,
            reference_number: None,
            notes: None,
        }
    }

    #[test]
    fn no_payments_leaves_the_full_price_due() {
        let ledger = PaymentLedger::summarize(dec!(1500.00), &[]);
        assert_eq!(ledger.total_paid, Decimal::ZERO);
        assert_eq!(ledger.balance_due, dec!(1500.00));
        assert!(ledger.has_outstanding_balance());
        assert!(!ledger.is_overpaid());
    }

    #[rstest]
    #[case(dec!(1000), &[dec!(300), dec!(200)], dec!(500), dec!(500))]
    #[case(dec!(1000), &[dec!(600), dec!(400)], dec!(1000), dec!(0))]
    #[case(dec!(1000), &[dec!(800), dec!(350.50)], dec!(1150.50), dec!(-150.50))]
    #[case(dec!(0), &[dec!(25)], dec!(25), dec!(-25))]
    #[case(dec!(99.99), &[dec!(0.01), dec!(0.01), dec!(0.01)], dec!(0.03), dec!(99.96))]
    fn balance_is_price_minus_paid(
        #[case] total_price: Decimal,
        #[case] amounts: &[Decimal],
        #[case] expected_paid: Decimal,
        #[case] expected_balance: Decimal,
    ) {
        let payments: Vec<Payment> = amounts.iter().copied().map(payment).collect();
        let ledger = PaymentLedger::summarize(total_price, &payments);
        assert_eq!(ledger.total_price, total_price);
        assert_eq!(ledger.total_paid, expected_paid);
        assert_eq!(ledger.balance_due, expected_balance);
        assert_eq!(ledger.balance_due, total_price - ledger.total_paid);
    }

    #[test]
    fn settled_and_overpaid_flags() {
        let settled = PaymentLedger::from_amounts(dec!(500), [dec!(500)]);
        assert!(!settled.has_outstanding_balance());
        assert!(!settled.is_overpaid());

        let overpaid = PaymentLedger::from_amounts(dec!(500), [dec!(300), dec!(300)]);
        assert!(overpaid.is_overpaid());
        assert_eq!(overpaid.balance_due, dec!(-100));
    }
}
