use std::sync::Arc;

use crate::domain::transaction::Transaction;
use crate::messaging::{NotifyError, TransactionNotifier};

use super::errors::OrderError;
use super::value_objects::{Order, OrderSubmission};

// ============================================================================
// Order Intake
// ============================================================================
//
// Accept order submission:
//   decode → validate → assign orderId → derive Transaction → notify logger
//
// The order only counts as accepted once the Transaction Logger has answered
// 201. A failed hand-off fails the whole submission, even though the logger
// may already have seen the transaction.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid order: {0}")]
    Invalid(#[from] OrderError),

    #[error("Failed to log transaction: {0}")]
    Downstream(#[from] NotifyError),
}

pub struct OrderIntake {
    notifier: Arc<dyn TransactionNotifier>,
}

impl OrderIntake {
    pub fn new(notifier: Arc<dyn TransactionNotifier>) -> Self {
        Self { notifier }
    }

    /// Handle one raw request body end to end.
    pub async fn accept(&self, body: &[u8]) -> Result<Order, IntakeError> {
        let submission: OrderSubmission = serde_json::from_slice(body)?;
        self.submit(submission).await
    }

    pub async fn submit(&self, submission: OrderSubmission) -> Result<Order, IntakeError> {
        let order = Order::from_submission(submission)?;

        tracing::info!(
            order_id = %order.order_id,
            user_id = %order.user_id,
            item_count = order.items.len(),
            "Received order"
        );

        let transaction = Transaction::from_order(&order);
        let ack = self.notifier.notify(&transaction).await?;

        tracing::info!(
            order_id = %order.order_id,
            transaction_id = ?ack.map(|a| a.transaction_id),
            "Transaction successfully logged"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionResult;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Records every transaction it is handed and answers with a fixed outcome.
    struct RecordingNotifier {
        seen: Mutex<Vec<Transaction>>,
        fail_with: Option<StatusCode>,
    }

    impl RecordingNotifier {
        fn accepting() -> Arc<Self> {
            Arc::new(Self { seen: Mutex::new(Vec::new()), fail_with: None })
        }

        fn failing(status: StatusCode) -> Arc<Self> {
            Arc::new(Self { seen: Mutex::new(Vec::new()), fail_with: Some(status) })
        }

        fn seen(&self) -> Vec<Transaction> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TransactionNotifier for RecordingNotifier {
        async fn notify(&self, transaction: &Transaction) -> Result<Option<TransactionResult>, NotifyError> {
            self.seen.lock().unwrap().push(transaction.clone());
            match self.fail_with {
                Some(status) => Err(NotifyError::UnexpectedStatus(status)),
                None => Ok(Some(TransactionResult { transaction_id: Uuid::new_v4() })),
            }
        }
    }

    fn widget_order(user_id: Uuid) -> String {
        format!(
            r#"{{"userId":"{}","items":[{{"itemId":"{}","name":"Widget","quantity":2}}]}}"#,
            user_id,
            Uuid::new_v4()
        )
    }

    #[tokio::test]
    async fn test_accepted_order_forwards_one_transaction() {
        let notifier = RecordingNotifier::accepting();
        let intake = OrderIntake::new(notifier.clone());
        let user_id = Uuid::new_v4();

        let order = intake.accept(widget_order(user_id).as_bytes()).await.unwrap();

        assert!(!order.order_id.is_nil());
        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].order_id, order.order_id);
        assert_eq!(seen[0].user_id, user_id);
        assert_eq!(seen[0].items, vec!["Widget"]);
        assert_eq!(seen[0].transaction_id, None);
    }

    #[tokio::test]
    async fn test_invalid_order_never_reaches_logger() {
        let notifier = RecordingNotifier::accepting();
        let intake = OrderIntake::new(notifier.clone());

        let missing_user = format!(
            r#"{{"items":[{{"itemId":"{}","name":"Widget","quantity":2}}]}}"#,
            Uuid::new_v4()
        );
        let zero_quantity = format!(
            r#"{{"userId":"{}","items":[{{"itemId":"{}","name":"Widget","quantity":0}}]}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );

        assert!(matches!(
            intake.accept(missing_user.as_bytes()).await,
            Err(IntakeError::Invalid(OrderError::MissingUserId))
        ));
        assert!(matches!(
            intake.accept(zero_quantity.as_bytes()).await,
            Err(IntakeError::Invalid(OrderError::InvalidQuantity { .. }))
        ));
        assert!(matches!(
            intake.accept(b"not json").await,
            Err(IntakeError::Decode(_))
        ));
        assert!(notifier.seen().is_empty());
    }

    #[tokio::test]
    async fn test_downstream_failure_fails_submission() {
        let notifier = RecordingNotifier::failing(StatusCode::INTERNAL_SERVER_ERROR);
        let intake = OrderIntake::new(notifier.clone());

        let err = intake.accept(widget_order(Uuid::new_v4()).as_bytes()).await.unwrap_err();

        assert!(matches!(err, IntakeError::Downstream(NotifyError::UnexpectedStatus(_))));
        assert_eq!(notifier.seen().len(), 1);
    }
}
