use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::OrderError;

/// One purchase line item, as read from a single CSV row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// identifier from the file, duplicates are kept as separate orders
    id: i32,

    article_name: String,

    /// Not validated, zero and negative counts take part in the arithmetic as they are
    quantity: i32,

    /// Parsed from its text form so no precision is lost on the way in
    #[serde(with = "rust_decimal::serde::str")]
    unit_price: Decimal,

    /// Meant to be within 0..=100, but values outside are accepted silently
    #[serde(with = "rust_decimal::serde::str")]
    percentage_discount: Decimal,

    buyer: String,
}

impl Order {
    /// Get the order's id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Get a reference to the order's article name.
    pub fn article_name(&self) -> &str {
        &self.article_name
    }

    /// Get the order's quantity.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Get the order's unit price.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Get the order's discount in percent.
    pub fn percentage_discount(&self) -> Decimal {
        self.percentage_discount
    }

    /// Get a reference to the order's buyer.
    pub fn buyer(&self) -> &str {
        &self.buyer
    }

    /// quantity times unit price, before any discount
    pub fn total(&self) -> Result<Decimal, OrderError> {
        Decimal::from(self.quantity)
            .checked_mul(self.unit_price)
            .ok_or_else(|| self.overflow("total"))
    }

    /// The total reduced by the percentage discount
    pub fn total_with_discount(&self) -> Result<Decimal, OrderError> {
        let factor = self
            .percentage_discount
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|fraction| Decimal::ONE.checked_sub(fraction))
            .ok_or_else(|| self.overflow("total with discount"))?;

        self.total()?
            .checked_mul(factor)
            .ok_or_else(|| self.overflow("total with discount"))
    }

    /// How much the discount takes off the total
    pub fn discount_amount(&self) -> Result<Decimal, OrderError> {
        self.total()?
            .checked_sub(self.total_with_discount()?)
            .ok_or_else(|| self.overflow("discount amount"))
    }

    fn overflow(&self, value: &'static str) -> OrderError {
        OrderError::Overflow { id: self.id, value }
    }

    /// only to create easier test orders
    #[cfg(test)]
    pub fn new(
        id: i32,
        article_name: &str,
        quantity: i32,
        unit_price: Decimal,
        percentage_discount: Decimal,
        buyer: &str,
    ) -> Self {
        Self {
            id,
            article_name: article_name.to_owned(),
            quantity,
            unit_price,
            percentage_discount,
            buyer: buyer.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_is_quantity_times_unit_price() {
        let order = Order::new(1, "Widget", 10, dec!(2.50), dec!(10), "Alice");
        assert_eq!(dec!(25.00), order.total().unwrap());
    }

    #[test]
    fn discount_is_taken_off_the_total() {
        let order = Order::new(1, "Widget", 10, dec!(2.50), dec!(10), "Alice");
        assert_eq!(dec!(22.50), order.total_with_discount().unwrap());
        assert_eq!(dec!(2.50), order.discount_amount().unwrap());
    }

    #[test]
    fn zero_discount_keeps_the_total() {
        let order = Order::new(2, "Bolt", 7, dec!(0.33), dec!(0), "Bob");
        assert_eq!(order.total().unwrap(), order.total_with_discount().unwrap());
        assert_eq!(Decimal::ZERO, order.discount_amount().unwrap());
    }

    #[test]
    fn full_discount_is_free() {
        let order = Order::new(3, "Nut", 13, dec!(1.07), dec!(100), "Carol");
        assert_eq!(Decimal::ZERO, order.total_with_discount().unwrap());
        assert_eq!(order.total().unwrap(), order.discount_amount().unwrap());
    }

    #[test]
    /// Out of range discounts are not rejected, they just produce odd totals
    fn out_of_range_discounts_are_accepted() {
        let markup = Order::new(4, "Gear", 2, dec!(10), dec!(-50), "Dave");
        assert_eq!(dec!(30), markup.total_with_discount().unwrap());

        let overpaid = Order::new(5, "Gear", 2, dec!(10), dec!(150), "Dave");
        assert_eq!(dec!(-10), overpaid.total_with_discount().unwrap());
    }

    #[test]
    fn negative_quantity_gives_negative_total() {
        let order = Order::new(6, "Refund", -3, dec!(4.20), dec!(0), "Eve");
        assert_eq!(dec!(-12.60), order.total().unwrap());
    }

    #[test]
    /// Binary floating point would get this one wrong
    fn totals_are_exact() {
        let order = Order::new(7, "Cent", 3, dec!(0.1), dec!(0), "Frank");
        assert_eq!(dec!(0.3), order.total().unwrap());
    }

    #[test]
    /// A price near the top of the decimal range can still be parsed, but not doubled
    fn total_overflow_is_an_error() {
        let order = Order::new(8, "Widget", 2, Decimal::MAX, dec!(0), "Alice");
        match order.total() {
            Err(OrderError::Overflow { id, value }) => {
                assert_eq!(8, id);
                assert_eq!("total", value);
            }
            other => panic!("expected an overflow, got {:?}", other),
        }
        assert!(order.total_with_discount().is_err());
        assert!(order.discount_amount().is_err());
    }

    #[test]
    fn huge_discount_overflows_total_with_discount() {
        let order = Order::new(9, "Widget", 1000, dec!(1000), Decimal::MAX, "Alice");
        assert_eq!(dec!(1000000), order.total().unwrap());
        assert!(matches!(
            order.total_with_discount(),
            Err(OrderError::Overflow { id: 9, .. })
        ));
    }
}
