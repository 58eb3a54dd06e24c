use std::io::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{error::OrderError, order::Order, reduce::OrderSummary};

pub const NO_ORDER_FOUND: &str = "No order found.";

pub const HIGHEST_TOTAL_HEADER: &str = "Order with the highest total amount:";
pub const HIGHEST_QUANTITY_HEADER: &str = "Order with the highest quantity:";
pub const MAX_DISCOUNT_HEADER: &str =
    "Order with the largest difference between total and discounted total:";

/// Print the three report sections to stdout
pub fn print_summary(summary: &OrderSummary<'_>, currency: &str) -> Result<(), OrderError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, summary, currency)?;
    out.flush()?;
    Ok(())
}

/// Write the three sections, always in the same order, each after a blank line
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &OrderSummary<'_>,
    currency: &str,
) -> Result<(), OrderError> {
    let sections = [
        (HIGHEST_TOTAL_HEADER, summary.highest_total),
        (HIGHEST_QUANTITY_HEADER, summary.highest_quantity),
        (MAX_DISCOUNT_HEADER, summary.max_discount_difference),
    ];
    for (header, order) in sections {
        writeln!(out)?;
        writeln!(out, "{header}")?;
        write_order(out, order, currency)?;
    }
    Ok(())
}

/// Both totals are computed before anything is written, so an order that
/// cannot be priced leaves no partial listing behind
pub fn write_order<W: Write>(
    out: &mut W,
    order: Option<&Order>,
    currency: &str,
) -> Result<(), OrderError> {
    let Some(order) = order else {
        writeln!(out, "{NO_ORDER_FOUND}")?;
        return Ok(());
    };
    let total = order.total()?;
    let total_with_discount = order.total_with_discount()?;

    writeln!(out, "ID: {}", order.id())?;
    writeln!(out, "Article: {}", order.article_name())?;
    writeln!(out, "Quantity: {}", order.quantity())?;
    writeln!(out, "Unit price: {}", order.unit_price())?;
    writeln!(out, "Discount (%): {}", order.percentage_discount())?;
    writeln!(out, "Buyer: {}", order.buyer())?;
    writeln!(out, "Total: {}", format_currency(total, currency))?;
    writeln!(
        out,
        "Total with discount: {}",
        format_currency(total_with_discount, currency)
    )?;
    Ok(())
}

/// Two decimals, midpoint rounded away from zero, thousands grouped with commas.
/// The sign goes in front of the symbol: `-$1,234.50`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{symbol}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
