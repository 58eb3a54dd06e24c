use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use csv::{Reader, StringRecord};
use tracing::{debug, error, info};

use crate::{error::OrderError, order::Order};

/// Every column an order is built from, matched against the header line by name
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Id",
    "ArticleName",
    "Quantity",
    "UnitPrice",
    "PercentageDiscount",
    "Buyer",
];

/// Comma separated, first line is the header, padding around values is ignored.
/// Rows must have as many fields as the header.
pub fn configured_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false);
    builder
}

/// Load all orders from the file at `path`, in file order.
///
/// The file is closed again when the reader goes out of scope, whether the
/// load succeeded or not.
pub fn read_orders(path: &Path) -> Result<Vec<Order>, OrderError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => OrderError::FileNotFound(path.to_path_buf()),
        _ => OrderError::Io(e),
    })?;
    debug!(path = %path.display(), "reading orders");

    let orders = parse_orders(file)?;
    info!(count = orders.len(), "loaded orders");
    Ok(orders)
}

/// Parse orders from any CSV source. A single bad row fails the whole load,
/// nothing parsed before it is returned.
pub fn parse_orders<R: Read>(source: R) -> Result<Vec<Order>, OrderError> {
    let mut rdr = configured_reader_builder().from_reader(source);

    collect_orders(&mut rdr).inspect_err(|e| {
        if e.is_malformed_input() {
            error!(error = %e, "the CSV file is not correctly formatted");
        }
    })
}

fn collect_orders<R: Read>(rdr: &mut Reader<R>) -> Result<Vec<Order>, OrderError> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        // no header line at all, so there is nothing to read either
        debug!("empty input");
        return Ok(Vec::new());
    }
    check_columns(&headers)?;

    let mut orders = Vec::new();
    for row in rdr.deserialize::<Order>() {
        orders.push(row?);
    }
    Ok(orders)
}

fn check_columns(headers: &StringRecord) -> Result<(), OrderError> {
    match REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        Some(column) => Err(OrderError::MissingColumn { column }),
        None => Ok(()),
    }
}
