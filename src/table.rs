//! Fluent builder for CreateTable requests.
//!
//! A [`TableBuilder`] accumulates the primary key, global secondary indexes
//! and local secondary indexes of a table in any order. Nothing is validated
//! until [`TableBuilder::build`] (or [`TableBuilder::create`]) walks the
//! definition: primary key first, then global secondary indexes, then local
//! secondary indexes, each in registration order.

/// Provisioned throughput of an index.
mod capacity;

/// Global secondary index builder.
pub mod global;

/// Key schema shared by every index variant.
mod index;

/// Key element builder.
pub mod key;

/// Local secondary index builder.
pub mod local;

/// Primary key builder.
pub mod primary;

/// Projection builder for secondary indexes.
pub mod projection;

/// The assembled request and the client it is sent with.
pub mod request;

use crate::error::TableError;

use aws_sdk_dynamodb::types;

/// Builder for a table creation request.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::ScalarAttributeType};
/// use dynamodb_table_builder::table::TableBuilder;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let mut table = TableBuilder::new("orders");
/// table
///     .primary()
///     .hash()
///     .name("orderId")
///     .attribute_type(ScalarAttributeType::S)
///     .read_capacity(5)
///     .write_capacity(5)
///     .and()
///     .global()
///     .name("byStatus")
///     .hash()
///     .name("status")
///     .attribute_type(ScalarAttributeType::S)
///     .projection()
///     .all()
///     .read_capacity(1)
///     .write_capacity(1);
/// table.create(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableBuilder {
    table_name: String,
    primary: primary::PrimaryKeySpec,
    global_secondary_indexes: Vec<global::GlobalSecondaryIndexSpec>,
    local_secondary_indexes: Vec<local::LocalSecondaryIndexSpec>,
}

impl TableBuilder {
    /// Create a builder for the table named `table_name`.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    /// Set the table name.
    pub fn name(&mut self, table_name: impl Into<String>) -> &mut Self {
        self.table_name = table_name.into();
        self
    }

    /// Define the primary key of the table.
    pub fn primary(&mut self) -> primary::PrimaryKeyBuilder<'_> {
        primary::PrimaryKeyBuilder::new(self)
    }

    /// Register a new global secondary index.
    ///
    /// Every call adds one index; indexes keep their registration order.
    pub fn global(&mut self) -> global::GlobalSecondaryIndexBuilder<'_> {
        let position = self.global_secondary_indexes.len();
        self.global_secondary_indexes.push(Default::default());
        global::GlobalSecondaryIndexBuilder::new(self, position)
    }

    /// Resume building the first global secondary index named `index_name`.
    pub fn global_named(
        &mut self,
        index_name: &str,
    ) -> Option<global::GlobalSecondaryIndexBuilder<'_>> {
        let position = self
            .global_secondary_indexes
            .iter()
            .position(|index| index.index_name.as_deref() == Some(index_name))?;
        Some(global::GlobalSecondaryIndexBuilder::new(self, position))
    }

    /// Register a new local secondary index.
    ///
    /// Every call adds one index; indexes keep their registration order.
    pub fn local(&mut self) -> local::LocalSecondaryIndexBuilder<'_> {
        let position = self.local_secondary_indexes.len();
        self.local_secondary_indexes.push(Default::default());
        local::LocalSecondaryIndexBuilder::new(self, position)
    }

    /// Resume building the first local secondary index named `index_name`.
    pub fn local_named(
        &mut self,
        index_name: &str,
    ) -> Option<local::LocalSecondaryIndexBuilder<'_>> {
        let position = self
            .local_secondary_indexes
            .iter()
            .position(|index| index.index_name.as_deref() == Some(index_name))?;
        Some(local::LocalSecondaryIndexBuilder::new(self, position))
    }

    /// Validate the table and assemble the request.
    pub fn build(&self) -> Result<request::TableCreationRequest, TableError> {
        let mut attribute_definitions = Vec::new();
        let (key_schema, provisioned_throughput) =
            self.primary.build(&mut attribute_definitions)?;
        let table_hash_key = key_schema
            .iter()
            .find(|element| element.key_type() == &types::KeyType::Hash)
            .ok_or(TableError::MissingPrimaryHashKey)?;
        let global_secondary_indexes = self
            .global_secondary_indexes
            .iter()
            .map(|index| index.build(&mut attribute_definitions))
            .collect::<Result<Vec<_>, _>>()?;
        let local_secondary_indexes = self
            .local_secondary_indexes
            .iter()
            .map(|index| index.build(table_hash_key, &mut attribute_definitions))
            .collect::<Result<Vec<_>, _>>()?;
        let request = request::TableCreationRequest {
            table_name: self.table_name.clone(),
            attribute_definitions,
            global_secondary_indexes: (!global_secondary_indexes.is_empty())
                .then_some(global_secondary_indexes),
            local_secondary_indexes: (!local_secondary_indexes.is_empty())
                .then_some(local_secondary_indexes),
            provisioned_throughput,
            key_schema,
        };
        Ok(request)
    }

    /// Validate the table and create it with `client`.
    ///
    /// The client is not called when validation fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_table_builder.create",
            skip_all,
            fields(table_name = %self.table_name)
        )
    )]
    pub async fn create<C: request::CreateTable>(
        self,
        client: &C,
    ) -> Result<C::Output, C::Error> {
        let request = self.build()?;
        client.create_table(request).await
    }
}
