use crate::{
    error::TableError,
    table::{
        TableBuilder,
        index::KeySchemaSpec,
        key::{KeyElementBuilder, KeyElementSpec},
        projection::{ProjectionBuilder, ProjectionSpec},
    },
};

use aws_sdk_dynamodb::types;

/// A local secondary index: the table hash key with its own range key and a
/// projection. Throughput is shared with the table.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct LocalSecondaryIndexSpec {
    pub(crate) index_name: Option<String>,
    pub(crate) keys: KeySchemaSpec,
    pub(crate) projection: Option<ProjectionSpec>,
}

impl LocalSecondaryIndexSpec {
    /// Build the index with `table_hash_key` as its hash key.
    pub(crate) fn build(
        &self,
        table_hash_key: &types::KeySchemaElement,
        attribute_definitions: &mut Vec<types::AttributeDefinition>,
    ) -> Result<types::LocalSecondaryIndex, TableError> {
        let mut key_schema = vec![table_hash_key.clone()];
        key_schema.extend(
            self.keys
                .build(&types::KeyType::Range, attribute_definitions)?,
        );
        let projection = self
            .projection
            .as_ref()
            .ok_or(TableError::NoProjectionSpecified)?
            .build()?;
        let local_secondary_index = types::LocalSecondaryIndex::builder()
            .set_index_name(self.index_name.clone())
            .set_key_schema(Some(key_schema))
            .projection(projection)
            .build()?;
        Ok(local_secondary_index)
    }
}

/// Builder for one local secondary index of a table.
///
/// ```rust
/// use aws_sdk_dynamodb::types::ScalarAttributeType;
/// use dynamodb_table_builder::table::TableBuilder;
///
/// let mut table = TableBuilder::new("orders");
/// table
///     .local()
///     .name("byTotal")
///     .range()
///     .name("total")
///     .attribute_type(ScalarAttributeType::N)
///     .projection()
///     .keys_only();
/// ```
#[derive(Debug)]
pub struct LocalSecondaryIndexBuilder<'a> {
    table: &'a mut TableBuilder,
    position: usize,
}

fn range_element<'b>(local: &'b mut LocalSecondaryIndexBuilder<'_>) -> &'b mut KeyElementSpec {
    local.spec().keys.range()
}

fn projection_spec<'b>(local: &'b mut LocalSecondaryIndexBuilder<'_>) -> &'b mut ProjectionSpec {
    local.spec().projection.get_or_insert_default()
}

impl<'a> LocalSecondaryIndexBuilder<'a> {
    pub(crate) fn new(table: &'a mut TableBuilder, position: usize) -> Self {
        Self { table, position }
    }

    fn spec(&mut self) -> &mut LocalSecondaryIndexSpec {
        &mut self.table.local_secondary_indexes[self.position]
    }

    /// Set the index name.
    pub fn name(mut self, index_name: impl Into<String>) -> Self {
        self.spec().index_name = Some(index_name.into());
        self
    }

    /// Define the range key of the index. Repeated calls edit the same key element.
    pub fn range(mut self) -> KeyElementBuilder<Self> {
        self.spec().keys.range();
        KeyElementBuilder::new(self, range_element)
    }

    /// Define which attributes the index projects.
    pub fn projection(mut self) -> ProjectionBuilder<Self> {
        self.spec().projection.get_or_insert_default();
        ProjectionBuilder::new(self, projection_spec)
    }

    /// Return to the table builder.
    pub fn and(self) -> &'a mut TableBuilder {
        self.table
    }
}
