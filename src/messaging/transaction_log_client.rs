use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::transaction::{Transaction, TransactionResult};
use crate::metrics::Metrics;

use super::{NotifyError, TransactionNotifier};

/// Posts transactions to the Transaction Logger over HTTP.
///
/// One attempt per call: no retry, and no timeout unless one is configured.
pub struct HttpTransactionNotifier {
    client: Client,
    url: String,
    metrics: Option<Arc<Metrics>>,
}

impl HttpTransactionNotifier {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, NotifyError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, transaction: &Transaction) -> Result<Option<TransactionResult>, NotifyError> {
        let response = self.client.post(&self.url).json(transaction).send().await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(NotifyError::UnexpectedStatus(status));
        }

        // 201 is the contract; the body only feeds the log line.
        match response.json::<TransactionResult>().await {
            Ok(result) => Ok(Some(result)),
            Err(e) => {
                tracing::warn!(error = %e, "Transaction log acknowledged with unreadable body");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl TransactionNotifier for HttpTransactionNotifier {
    async fn notify(&self, transaction: &Transaction) -> Result<Option<TransactionResult>, NotifyError> {
        let started = Instant::now();

        tracing::debug!(
            url = %self.url,
            order_id = %transaction.order_id,
            item_count = transaction.items.len(),
            "Posting transaction to transaction log"
        );

        let result = self.post(transaction).await;

        if let Some(metrics) = &self.metrics {
            let outcome = match &result {
                Ok(_) => "created",
                Err(NotifyError::UnexpectedStatus(_)) => "unexpected_status",
                Err(NotifyError::Transport(_)) => "transport_error",
            };
            metrics.record_downstream_call(outcome, started.elapsed().as_secs_f64());
        }

        if let Err(e) = &result {
            tracing::error!(
                error = %e,
                url = %self.url,
                order_id = %transaction.order_id,
                "Failed to log transaction"
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use uuid::Uuid;

    fn transaction() -> Transaction {
        Transaction {
            transaction_id: None,
            order_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            items: vec!["Widget".to_string(), "Gadget".to_string()],
        }
    }

    #[tokio::test]
    async fn test_created_response_is_success() {
        let server = MockServer::start_async().await;
        let tx = transaction();
        let transaction_id = Uuid::new_v4();

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/transactions")
                    .json_body(json!({
                        "orderId": tx.order_id,
                        "userId": tx.user_id,
                        "items": ["Widget", "Gadget"],
                    }));
                then.status(201)
                    .json_body(json!({ "transactionId": transaction_id }));
            })
            .await;

        let notifier = HttpTransactionNotifier::new(server.url("/transactions"), None).unwrap();
        let result = notifier.notify(&tx).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, Some(TransactionResult { transaction_id }));
    }

    #[tokio::test]
    async fn test_created_with_unreadable_body_still_succeeds() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/transactions");
                then.status(201).body("ok");
            })
            .await;

        let notifier = HttpTransactionNotifier::new(server.url("/transactions"), None).unwrap();
        assert_eq!(notifier.notify(&transaction()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_created_status_is_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/transactions");
                then.status(200).json_body(json!({ "transactionId": Uuid::new_v4() }));
            })
            .await;

        let notifier = HttpTransactionNotifier::new(server.url("/transactions"), None).unwrap();
        let err = notifier.notify(&transaction()).await.unwrap_err();
        assert!(matches!(err, NotifyError::UnexpectedStatus(StatusCode::OK)));
    }

    #[tokio::test]
    async fn test_server_error_is_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/transactions");
                then.status(500);
            })
            .await;

        let metrics = Arc::new(Metrics::new().unwrap());
        let notifier = HttpTransactionNotifier::new(server.url("/transactions"), None)
            .unwrap()
            .with_metrics(metrics.clone());

        let err = notifier.notify(&transaction()).await.unwrap_err();
        assert!(matches!(err, NotifyError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR)));

        let gathered = metrics.registry().gather();
        let calls = gathered
            .iter()
            .find(|m| m.name() == "downstream_request_duration_seconds")
            .unwrap();
        assert_eq!(calls.metric[0].histogram.sample_count, Some(1));
    }

    #[tokio::test]
    async fn test_unreachable_logger_is_transport_error() {
        // Nothing listens on port 1.
        let notifier = HttpTransactionNotifier::new(
            "http://127.0.0.1:1/transactions",
            Some(Duration::from_secs(2)),
        )
        .unwrap();

        let err = notifier.notify(&transaction()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }
}
