//! In-memory filtering for the orders table

use crate::contract::model::{Order, OrderStatus};

/// Search and status criteria applied to the in-memory order list
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive substring matched against customer name, customer
    /// email and project title
    pub search: Option<String>,
    /// Exact lifecycle state; `None` matches every state
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        let matches_search = match &self.search {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                order.customer_name.to_lowercase().contains(&term)
                    || order.customer_email.to_lowercase().contains(&term)
                    || order.project_title.to_lowercase().contains(&term)
            }
            _ => true,
        };

        let matches_status = self.status.is_none_or(|s| order.status == s);

        matches_search && matches_status
    }

    /// Orders passing both criteria, in their original order
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn order(name: &str, email: &str, title: &str, status: OrderStatus) -> Order {
        Order {
            id: Uuid::new_v4(),
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            project_id: Uuid::new_v4(),
            project_title: title.to_string(),
            price: 40_000,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_matches_name_email_and_title() {
        let orders = [
            order("Asha Rao", "asha@example.com", "Brand Site", OrderStatus::Pending),
            order("Vikram Mehta", "vikram@shop.example", "Product Catalog", OrderStatus::Completed),
        ];

        let by_name = OrderFilter {
            search: Some("asha".to_string()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&orders).len(), 1);

        let by_email = OrderFilter {
            search: Some("SHOP.EXAMPLE".to_string()),
            ..Default::default()
        };
        assert_eq!(by_email.apply(&orders).len(), 1);

        let by_title = OrderFilter {
            search: Some("catalog".to_string()),
            ..Default::default()
        };
        assert_eq!(by_title.apply(&orders)[0].customer_name, "Vikram Mehta");
    }

    #[test]
    fn test_status_filter_narrows_results() {
        let orders = [
            order("Asha Rao", "asha@example.com", "Brand Site", OrderStatus::Pending),
            order("Vikram Mehta", "vikram@shop.example", "Product Catalog", OrderStatus::Completed),
        ];

        let filter = OrderFilter {
            status: Some(OrderStatus::Completed),
            ..Default::default()
        };
        let matched = filter.apply(&orders);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].status, OrderStatus::Completed);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let orders = [
            order("Asha Rao", "asha@example.com", "Brand Site", OrderStatus::Pending),
            order("Vikram Mehta", "vikram@shop.example", "Product Catalog", OrderStatus::Completed),
        ];

        assert_eq!(OrderFilter::default().apply(&orders).len(), 2);

        let blank_search = OrderFilter {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(blank_search.apply(&orders).len(), 2);
    }
}
