//! DynamoDB repository implementation.
//!
//! Implements `ConsultantRepository` from `consultants_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use consultants_core::consultant::Consultant;
use consultants_core::storage::{ConsultantRepository, Result};

use crate::config::Config;

use super::conversions::{consultant_to_item, item_to_consultant, PARTITION_KEY};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error, PutCondition,
};

/// Loads AWS SDK settings for `config`'s region, honoring a custom endpoint.
pub async fn aws_sdk_config(config: &Config) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}

/// DynamoDB-based repository implementation.
///
/// One table, partition key `email`, no sort key.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. `AWS_ENDPOINT_URL` points the
    /// client at a local DynamoDB.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_sdk_config(config).await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn put(&self, consultant: &Consultant, condition: PutCondition) -> Result<()> {
        let expression = match condition {
            PutCondition::MustNotExist => "attribute_not_exists(#pk)",
            PutCondition::MustExist => "attribute_exists(#pk)",
        };

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(consultant_to_item(consultant)))
            .condition_expression(expression)
            .expression_attribute_names("#pk", PARTITION_KEY)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, condition, consultant.email.clone()))?;

        Ok(())
    }
}

#[async_trait]
impl ConsultantRepository for DynamoDbRepository {
    async fn get_consultant(&self, email: &str) -> Result<Option<Consultant>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_consultant(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_consultants(&self) -> Result<Vec<Consultant>> {
        // One page only: a scan stops at 1 MB and the API has no pagination.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = %self.table_name,
                "Scan returned a partial result; the table outgrew a single page"
            );
        }

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_consultant).collect()
    }

    async fn create_consultant(&self, consultant: &Consultant) -> Result<()> {
        self.put(consultant, PutCondition::MustNotExist).await
    }

    async fn update_consultant(&self, consultant: &Consultant) -> Result<()> {
        self.put(consultant, PutCondition::MustExist).await
    }

    async fn delete_consultant(&self, email: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(email.to_string()))
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", PARTITION_KEY)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, email))?;

        Ok(())
    }
}
