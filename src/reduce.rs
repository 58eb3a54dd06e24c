use crate::{error::OrderError, order::Order};

/// Scan the orders front to back and keep the one with the largest key.
///
/// The running best is only replaced by a strictly larger key, so on ties the
/// earliest order wins. The first key that cannot be computed stops the scan.
pub fn first_max_by_key<K, F>(orders: &[Order], key: F) -> Result<Option<&Order>, OrderError>
where
    K: PartialOrd,
    F: Fn(&Order) -> Result<K, OrderError>,
{
    let mut best: Option<(&Order, K)> = None;
    for order in orders {
        let k = key(order)?;
        let replace = match &best {
            Some((_, best_key)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((order, k));
        }
    }
    Ok(best.map(|(order, _)| order))
}

pub fn order_with_highest_total(orders: &[Order]) -> Result<Option<&Order>, OrderError> {
    first_max_by_key(orders, Order::total)
}

pub fn order_with_highest_quantity(orders: &[Order]) -> Result<Option<&Order>, OrderError> {
    first_max_by_key(orders, |order| Ok(order.quantity()))
}

/// The order where the discount takes the most off its total
pub fn order_with_max_discount_difference(
    orders: &[Order],
) -> Result<Option<&Order>, OrderError> {
    first_max_by_key(orders, Order::discount_amount)
}

/// The three orders the report is about, each absent when there were no orders
#[derive(Debug, Clone, Copy)]
pub struct OrderSummary<'a> {
    pub highest_total: Option<&'a Order>,
    pub highest_quantity: Option<&'a Order>,
    pub max_discount_difference: Option<&'a Order>,
}

impl<'a> OrderSummary<'a> {
    /// Run all three scans over the same orders
    pub fn from_orders(orders: &'a [Order]) -> Result<Self, OrderError> {
        Ok(Self {
            highest_total: order_with_highest_total(orders)?,
            highest_quantity: order_with_highest_quantity(orders)?,
            max_discount_difference: order_with_max_discount_difference(orders)?,
        })
    }
}
