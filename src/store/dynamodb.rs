//! DynamoDB store for onboarding records.
//!
//! [`DynamoDbStore`] implements [`OnboardingStore`] with one `PutItem` per
//! write. Step records land in the step-results table keyed by `stepId`;
//! submissions land in the onboarding table keyed by `requestId`. All
//! attributes are strings except the submission's `TPP` (numeric) and
//! `additionalInfo` (a map with a boolean).
//!
//! The store is a dumb adapter: key derivation, validation, and snapshot
//! serialization happen in the handlers before a record arrives here.
//!
//! # Usage
//!
//! ```rust,no_run
//! use onboarding_flow::store::dynamodb::DynamoDbStore;
//!
//! # async fn example() {
//! // From environment (standard AWS config chain):
//! let store = DynamoDbStore::from_env().await;
//!
//! // With a pre-built client:
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let client = aws_sdk_dynamodb::Client::new(&config);
//! let store = DynamoDbStore::new(client, "step_results", "onboarding_request");
//! # }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::constants::{DEFAULT_ONBOARDING_TABLE, DEFAULT_STEP_RESULTS_TABLE};
use crate::store::{OnboardingStore, StepRecord, StoreError, SubmissionRecord};

/// DynamoDB-backed [`OnboardingStore`].
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    step_results_table: String,
    onboarding_table: String,
}

impl DynamoDbStore {
    /// Creates a store with a pre-built DynamoDB client.
    ///
    /// Both tables must already exist; this subsystem never creates or
    /// deletes them.
    pub fn new(
        client: Client,
        step_results_table: impl Into<String>,
        onboarding_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            step_results_table: step_results_table.into(),
            onboarding_table: onboarding_table.into(),
        }
    }

    /// Creates a store using the standard AWS SDK config chain and the
    /// default table names.
    ///
    /// Loads credentials and region from environment variables, AWS
    /// profiles, or IMDS (for EC2/Lambda).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        Self::new(client, DEFAULT_STEP_RESULTS_TABLE, DEFAULT_ONBOARDING_TABLE)
    }
}

/// Maps an AWS SDK error to a [`StoreError`].
fn map_sdk_error(
    err: impl std::error::Error + Send + Sync + 'static,
    table: &str,
) -> StoreError {
    StoreError::backend(
        format!("DynamoDB error for table {table}: {err}"),
        Some(Box::new(err)),
    )
}

fn step_item(record: &StepRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("stepId".to_string(), AttributeValue::S(record.step_id.clone()));
    item.insert(
        "requestId".to_string(),
        AttributeValue::S(record.request_id.clone()),
    );
    item.insert("name".to_string(), AttributeValue::S(record.name.clone()));
    item.insert(
        "status".to_string(),
        AttributeValue::S(record.status.to_string()),
    );
    item.insert("token".to_string(), AttributeValue::S(record.token.clone()));
    item.insert("result".to_string(), AttributeValue::S(record.result.clone()));
    item.insert(
        "created".to_string(),
        AttributeValue::S(record.created.clone()),
    );
    item
}

fn submission_item(record: &SubmissionRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        "requestId".to_string(),
        AttributeValue::S(record.request_id.clone()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(record.created_at.clone()),
    );
    item.insert(
        "requestEmail".to_string(),
        AttributeValue::S(record.request_email.clone()),
    );
    item.insert(
        "requestName".to_string(),
        AttributeValue::S(record.request_name.clone()),
    );
    item.insert(
        "requestStatus".to_string(),
        AttributeValue::S(record.request_status.clone()),
    );
    item.insert("TPP".to_string(), AttributeValue::N(record.tpp.clone()));
    item.insert(
        "type".to_string(),
        AttributeValue::S(record.request_type.clone()),
    );
    item.insert(
        "updatedAt".to_string(),
        AttributeValue::S(record.updated_at.clone()),
    );

    if let Some(info) = record.additional_info {
        let mut map = HashMap::new();
        map.insert(
            "clientBank".to_string(),
            AttributeValue::Bool(info.client_bank),
        );
        item.insert("additionalInfo".to_string(), AttributeValue::M(map));
    }

    item
}

#[async_trait]
impl OnboardingStore for DynamoDbStore {
    async fn put_step(&self, record: &StepRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.step_results_table)
            .set_item(Some(step_item(record)))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &self.step_results_table))?;
        Ok(())
    }

    async fn put_submission(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.onboarding_table)
            .set_item(Some(submission_item(record)))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &self.onboarding_table))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StepStatus;
    use crate::types::AdditionalInfo;

    fn sample_step() -> StepRecord {
        StepRecord::pending(
            "r1",
            "tok-1".to_string(),
            r#"{"requestId":"r1"}"#.to_string(),
            "2026-08-06 10:15:00".to_string(),
        )
    }

    #[test]
    fn step_item_attributes() {
        let item = step_item(&sample_step());
        assert_eq!(item["stepId"], AttributeValue::S("step-r1".to_string()));
        assert_eq!(
            item["status"],
            AttributeValue::S(StepStatus::Pending.to_string())
        );
        assert_eq!(item["token"], AttributeValue::S("tok-1".to_string()));
        assert_eq!(item.len(), 7);
    }

    #[test]
    fn submission_item_types() {
        let record = SubmissionRecord {
            request_id: "r2".to_string(),
            created_at: "06-08-2026".to_string(),
            request_email: "a@b.co".to_string(),
            request_name: "A".to_string(),
            request_status: "Pending".to_string(),
            tpp: "5".to_string(),
            request_type: "B".to_string(),
            updated_at: "06-08-2026".to_string(),
            additional_info: Some(AdditionalInfo { client_bank: true }),
        };

        let item = submission_item(&record);
        // TPP is numeric, additionalInfo is a map with a boolean.
        assert_eq!(item["TPP"], AttributeValue::N("5".to_string()));
        let AttributeValue::M(ref info) = item["additionalInfo"] else {
            panic!("additionalInfo must be a map attribute");
        };
        assert_eq!(info["clientBank"], AttributeValue::Bool(true));
    }

    #[test]
    fn submission_item_omits_absent_additional_info() {
        let record = SubmissionRecord {
            request_id: "r3".to_string(),
            created_at: "06-08-2026".to_string(),
            request_email: "a@b.co".to_string(),
            request_name: "A".to_string(),
            request_status: "Pending".to_string(),
            tpp: "5".to_string(),
            request_type: "B".to_string(),
            updated_at: "06-08-2026".to_string(),
            additional_info: None,
        };
        assert!(!submission_item(&record).contains_key("additionalInfo"));
    }
}
