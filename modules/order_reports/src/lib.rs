//! Order Reports Module
//!
//! The orders themselves live with an external provider; this module carries
//! the provider contract plus the screen-side logic the admin dashboard
//! needs: in-memory filtering, CSV export, rupee formatting with value
//! tiers, and summary statistics.

// Public exports
pub mod contract;
pub use contract::{
    client::OrdersApi, error::OrderError, Order, OrderStatus, ProjectDocument,
};

pub mod domain;
pub use domain::{
    export::export_csv,
    filter::OrderFilter,
    pricing::{format_inr, PriceTier},
    stats::OrderStats,
};
