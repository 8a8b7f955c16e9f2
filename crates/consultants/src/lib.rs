//! Consultant profile API.
//!
//! The same request dispatcher backs two entry points: an AWS Lambda handler
//! fed by API Gateway proxy events, and a local axum server for development.

pub mod app;
pub mod config;
pub mod handlers;
pub mod service;
pub mod state;
pub mod storage;
