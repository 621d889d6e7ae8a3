use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::Order;
use super::errors::TransactionError;

// ============================================================================
// Transaction Value Objects
// ============================================================================

/// Transaction record exchanged between the two services.
///
/// `transaction_id` is left empty by Order Intake and filled in by the
/// Transaction Logger; it is omitted from the JSON body while absent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Uuid>,
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<String>,
}

/// Incoming transaction body before validation.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// Acknowledgement returned by the Transaction Logger.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    pub transaction_id: Uuid,
}

impl Transaction {
    /// Project an order onto the transaction record sent downstream.
    /// One entry per order item, same order, names only.
    pub fn from_order(order: &Order) -> Self {
        Self {
            transaction_id: None,
            order_id: order.order_id,
            user_id: order.user_id,
            items: order.item_names(),
        }
    }

    pub fn from_submission(submission: TransactionSubmission) -> Result<Self, TransactionError> {
        let order_id = submission
            .order_id
            .filter(|id| !id.is_nil())
            .ok_or(TransactionError::MissingOrderId)?;
        let user_id = submission
            .user_id
            .filter(|id| !id.is_nil())
            .ok_or(TransactionError::MissingUserId)?;

        let items = submission.items.unwrap_or_default();
        if items.is_empty() {
            return Err(TransactionError::EmptyItems);
        }
        if let Some(index) = items.iter().position(|name| name.is_empty()) {
            return Err(TransactionError::BlankItem(index));
        }

        Ok(Self {
            transaction_id: submission.transaction_id,
            order_id,
            user_id,
            items,
        })
    }
}
