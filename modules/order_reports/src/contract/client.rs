//! Provider trait for the external orders collaborator
//!
//! The admin screens consume this contract; the data store behind it is not
//! part of this repository.

use super::error::OrderError;
use super::model::{Order, OrderStatus, ProjectDocument};
use async_trait::async_trait;
use uuid::Uuid;

/// Orders provider API
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// List every order, newest first
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Move an order to a new lifecycle state
    async fn update_order_status(&self, id: Uuid, status: OrderStatus)
        -> Result<(), OrderError>;

    /// Delete an order
    async fn delete_order(&self, id: Uuid) -> Result<(), OrderError>;

    /// Documents attached to a project
    async fn documents_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<ProjectDocument>, OrderError>;

    /// Send a project's documents to the customer over the secure channel
    async fn send_secure_documents(
        &self,
        order_id: Uuid,
        email: &str,
        name: &str,
        notify_customer: bool,
    ) -> Result<(), OrderError>;
}
