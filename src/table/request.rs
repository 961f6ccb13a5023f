use crate::error::TableError;

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::future::Future;

/// A validated, immutable CreateTable request.
///
/// Produced by [`TableBuilder::build`](crate::table::TableBuilder::build).
/// Secondary index lists are `None` rather than empty when no index of that
/// kind was registered.
#[derive(Clone, Debug, PartialEq)]
pub struct TableCreationRequest {
    pub(crate) table_name: String,
    pub(crate) key_schema: Vec<types::KeySchemaElement>,
    pub(crate) attribute_definitions: Vec<types::AttributeDefinition>,
    pub(crate) global_secondary_indexes: Option<Vec<types::GlobalSecondaryIndex>>,
    pub(crate) local_secondary_indexes: Option<Vec<types::LocalSecondaryIndex>>,
    pub(crate) provisioned_throughput: types::ProvisionedThroughput,
}

impl TableCreationRequest {
    /// The table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The table key schema, hash element first.
    pub fn key_schema(&self) -> &[types::KeySchemaElement] {
        &self.key_schema
    }

    /// Attribute definitions of every key element, in build order and not deduplicated.
    pub fn attribute_definitions(&self) -> &[types::AttributeDefinition] {
        &self.attribute_definitions
    }

    /// Global secondary indexes in registration order.
    pub fn global_secondary_indexes(&self) -> Option<&[types::GlobalSecondaryIndex]> {
        self.global_secondary_indexes.as_deref()
    }

    /// Local secondary indexes in registration order.
    pub fn local_secondary_indexes(&self) -> Option<&[types::LocalSecondaryIndex]> {
        self.local_secondary_indexes.as_deref()
    }

    /// The table throughput, taken from the primary key.
    pub fn provisioned_throughput(&self) -> &types::ProvisionedThroughput {
        &self.provisioned_throughput
    }

    /// Execute the create table operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_table_builder.create_table",
            skip_all,
            fields(table_name = %self.table_name),
            err
        )
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::create_table::CreateTableOutput,
        error::SdkError<operation::create_table::CreateTableError>,
    > {
        client
            .create_table()
            .table_name(self.table_name)
            .set_key_schema(Some(self.key_schema))
            .set_attribute_definitions(Some(self.attribute_definitions))
            .set_global_secondary_indexes(self.global_secondary_indexes)
            .set_local_secondary_indexes(self.local_secondary_indexes)
            .provisioned_throughput(self.provisioned_throughput)
            .send()
            .await
    }
}

/// A storage service client able to create tables.
///
/// [`TableBuilder::create`](crate::table::TableBuilder::create) validates the
/// table first and only then hands the request to the client. Whatever the
/// client returns is passed through unchanged; validation failures are turned
/// into the client error type.
pub trait CreateTable {
    /// Successful response of the client.
    type Output;
    /// Error of the client.
    type Error: From<TableError>;

    /// Send the request.
    fn create_table(
        &self,
        request: TableCreationRequest,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}

impl From<TableError> for error::SdkError<operation::create_table::CreateTableError> {
    fn from(table_error: TableError) -> Self {
        error::SdkError::construction_failure(error::BuildError::other(table_error))
    }
}

impl CreateTable for Client {
    type Output = operation::create_table::CreateTableOutput;
    type Error = error::SdkError<operation::create_table::CreateTableError>;

    fn create_table(
        &self,
        request: TableCreationRequest,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        request.send(self)
    }
}
