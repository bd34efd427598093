use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::order::application::domain::{Order, OrderItem, INITIAL_STATUS};
use crate::modules::product::application::domain::Product;

pub fn sample_product(name: &str, category: &str) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("Fresh {}", name.to_lowercase()),
        price: Decimal::new(199, 2),
        image: String::new(),
        category: category.to_string(),
        offer: Some("10% off".to_string()),
        stock: 25,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Lines are `(product_id, quantity, unit price in cents)`.
pub fn sample_order(user_id: Uuid, lines: Vec<(Uuid, i32, i64)>) -> Order {
    let now = Utc::now();
    let items: Vec<OrderItem> = lines
        .into_iter()
        .map(|(product_id, quantity, cents)| OrderItem {
            product_id,
            quantity,
            price: Decimal::new(cents, 2),
        })
        .collect();
    let total_amount = items.iter().map(OrderItem::line_total).sum();

    Order {
        id: Uuid::new_v4(),
        user_id,
        items,
        total_amount,
        delivery_address: "42 Market Road".to_string(),
        phone: "5550100".to_string(),
        status: INITIAL_STATUS.to_string(),
        created_at: now,
        updated_at: now,
    }
}
