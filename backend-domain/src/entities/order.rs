// Order entity

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FromPayload, PayloadFields, ValidationError};

pub const DEFAULT_ORDER_STATUS: &str = "pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: String,
}

impl Order {
    pub fn from_draft(id: i64, draft: OrderDraft) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            item_name: draft.item_name,
            quantity: draft.quantity,
            price: draft.price,
            status: draft.status,
        }
    }
}

impl FromPayload for OrderDraft {
    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadFields::new(value)?;
        let customer_name = fields.required_str("customer_name");
        let item_name = fields.required_str("item_name");
        let quantity = fields.required_i32("quantity");
        let price = fields.required_f64("price");
        let status = fields
            .optional_str("status")
            .unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string());
        fields.finish()?;

        match (customer_name, item_name, quantity, price) {
            (Some(customer_name), Some(item_name), Some(quantity), Some(price)) => Ok(Self {
                customer_name,
                item_name,
                quantity,
                price,
                status,
            }),
            _ => Err(ValidationError::single("body", "incomplete payload")),
        }
    }
}
