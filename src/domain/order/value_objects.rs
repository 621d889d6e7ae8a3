use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::identity;
use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================
//
// `OrderSubmission` is what arrives on the wire: every field optional so that
// a missing field is a validation error rather than a decode error with a
// different shape. `Order` is the validated, immutable record.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemSubmission>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_id: Uuid,
    pub name: String,
    pub quantity: i64,
}

impl Order {
    /// Validate a submission and build the order, generating an orderId when
    /// the caller did not supply one.
    pub fn from_submission(submission: OrderSubmission) -> Result<Self, OrderError> {
        let user_id = match submission.user_id {
            Some(id) if !id.is_nil() => id,
            _ => return Err(OrderError::MissingUserId),
        };

        let raw_items = submission.items.unwrap_or_default();
        if raw_items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let items = raw_items
            .into_iter()
            .enumerate()
            .map(|(index, item)| OrderItem::from_submission(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            order_id: identity::assign_if_absent(submission.order_id),
            user_id,
            items,
        })
    }

    /// Item names in order, as carried by the derived transaction.
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }
}

impl OrderItem {
    fn from_submission(index: usize, item: OrderItemSubmission) -> Result<Self, OrderError> {
        let item_id = match item.item_id {
            Some(id) if !id.is_nil() => id,
            _ => return Err(OrderError::MissingItemId(index)),
        };

        let name = match item.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(OrderError::MissingItemName(index)),
        };

        let quantity = item.quantity.unwrap_or(0);
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity { index, quantity });
        }

        Ok(Self { item_id, name, quantity })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
