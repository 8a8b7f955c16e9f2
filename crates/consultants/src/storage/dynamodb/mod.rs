//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! `ConsultantRepository` using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod repository;

pub use conversions::PARTITION_KEY;
pub use repository::{aws_sdk_config, DynamoDbRepository};
