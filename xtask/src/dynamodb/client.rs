//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{KeyType, TableStatus as SdkTableStatus};
use aws_sdk_dynamodb::Client;
use consultants::config::Config;
use consultants::storage::dynamodb::aws_sdk_config;

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};

/// Returns a display string for the target environment.
pub fn target_display(config: &Config) -> String {
    match &config.endpoint_url {
        Some(url) => format!("Local DynamoDB ({})", url),
        None => format!("AWS DynamoDB (region: {})", config.aws_region),
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &Config) -> Client {
    Client::new(&aws_sdk_config(config).await)
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err) => {
            return match err.into_service_error() {
                DescribeTableError::ResourceNotFoundException(_) => Ok(None),
                err => Err(DynamodbError::AwsSdk(err.to_string())),
            }
        }
    };

    let Some(table) = response.table() else {
        return Ok(None);
    };

    let key_names = |key_type: KeyType| {
        table
            .key_schema()
            .iter()
            .filter(|k| *k.key_type() == key_type)
            .map(|k| k.attribute_name().to_string())
            .next()
    };

    let status = match table.table_status() {
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Active,
    };

    Ok(Some(TableState {
        status,
        partition_key: key_names(KeyType::Hash),
        sort_key: key_names(KeyType::Range),
    }))
}
