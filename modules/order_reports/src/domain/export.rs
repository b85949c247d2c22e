//! CSV export of selected orders
//!
//! Output is aimed at spreadsheet tools: UTF-8 BOM prefix, quoted free-text
//! columns with doubled quotes, prices pre-formatted in rupees.

use super::pricing::format_inr;
use crate::contract::model::Order;
use chrono::{DateTime, Utc};

const BOM: &str = "\u{feff}";
const HEADER: &str = "Customer Name,Email,Project,Price,Status,Date";

/// Admin-screen date rendering, e.g. `Jan 5, 2026, 03:04 PM`
pub fn format_order_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render the given orders as a CSV document
pub fn export_csv(orders: &[&Order]) -> String {
    let mut csv = String::from(BOM);
    csv.push_str(HEADER);
    csv.push('\n');

    for order in orders {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            quote(&order.customer_name),
            order.customer_email,
            quote(&order.project_title),
            quote(&format_inr(order.price)),
            order.status,
            quote(&format_order_date(order.created_at)),
        ));
    }

    csv
}
