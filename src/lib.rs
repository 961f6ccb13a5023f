#![deny(missing_docs)]

//! # DynamoDB Table Builder
//!
//! A fluent, validated builder for Amazon DynamoDB `CreateTable` requests.
//!
//! ## Overview
//!
//! This library assembles a table definition piece by piece and checks it once, when the
//! request is built:
//! - The primary key needs a hash key and read/write capacity; the range key is optional
//! - Global secondary indexes need a name, a hash key, a projection and capacity
//! - Local secondary indexes reuse the table hash key and need a name, a range key and a
//!   projection
//! - Indexes appear in the request in the order they were registered
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::{Client, types::ScalarAttributeType};
//! use dynamodb_table_builder::table::TableBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! let mut table = TableBuilder::new("Orders");
//! table
//!     .primary()
//!         .hash().name("orderId").attribute_type(ScalarAttributeType::S)
//!         .range().name("createdAt").attribute_type(ScalarAttributeType::N)
//!         .read_capacity(5)
//!         .write_capacity(5)
//!     .and()
//!     .global()
//!         .name("byStatus")
//!         .hash().name("status").attribute_type(ScalarAttributeType::S)
//!         .projection().all()
//!         .read_capacity(1)
//!         .write_capacity(1)
//!     .and()
//!     .local()
//!         .name("byTotal")
//!         .range().name("total").attribute_type(ScalarAttributeType::N)
//!         .projection().keys_only();
//! table.create(&client).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@error`] - Validation errors
//! - [`mod@helper`] - Create a table only when it does not exist yet
//! - [`mod@table`] - The table builder and the request it produces

/// Validation errors raised while building a table.
pub mod error;

/// Idempotent table creation.
pub mod helper;

/// Table, index, key and projection builders.
///
/// This module provides:
/// - The top-level table builder
/// - Primary key, global and local secondary index builders
/// - The assembled creation request and the client seam it is sent through
pub mod table;
