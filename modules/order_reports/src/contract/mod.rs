//! Contract layer - order models and the provider trait

pub mod client;
pub mod error;
pub mod model;

pub use client::OrdersApi;
pub use error::OrderError;
pub use model::{Order, OrderStatus, ProjectDocument};
