use crate::{
    error::TableError,
    table::{
        TableBuilder,
        capacity::CapacitySpec,
        index::KeySchemaSpec,
        key::{KeyElementBuilder, KeyElementSpec},
    },
};

use aws_sdk_dynamodb::types;

/// Primary key of the table: a required hash key, an optional range key and
/// the table throughput.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PrimaryKeySpec {
    pub(crate) keys: KeySchemaSpec,
    pub(crate) capacity: CapacitySpec,
}

impl PrimaryKeySpec {
    /// Build the table key schema and throughput.
    pub(crate) fn build(
        &self,
        attribute_definitions: &mut Vec<types::AttributeDefinition>,
    ) -> Result<(Vec<types::KeySchemaElement>, types::ProvisionedThroughput), TableError> {
        let key_schema = self
            .keys
            .build(&types::KeyType::Hash, attribute_definitions)?;
        let provisioned_throughput = self.capacity.build()?;
        Ok((key_schema, provisioned_throughput))
    }
}

/// Builder for the primary key of a table.
///
/// ```rust
/// use aws_sdk_dynamodb::types::ScalarAttributeType;
/// use dynamodb_table_builder::table::TableBuilder;
///
/// let mut table = TableBuilder::new("orders");
/// table
///     .primary()
///     .hash()
///     .name("orderId")
///     .attribute_type(ScalarAttributeType::S)
///     .range()
///     .name("createdAt")
///     .attribute_type(ScalarAttributeType::N)
///     .read_capacity(5)
///     .write_capacity(5);
/// let request = table.build().unwrap();
/// assert_eq!(request.key_schema().len(), 2);
/// ```
#[derive(Debug)]
pub struct PrimaryKeyBuilder<'a> {
    table: &'a mut TableBuilder,
}

fn hash_element<'b>(primary: &'b mut PrimaryKeyBuilder<'_>) -> &'b mut KeyElementSpec {
    primary.table.primary.keys.hash()
}

fn range_element<'b>(primary: &'b mut PrimaryKeyBuilder<'_>) -> &'b mut KeyElementSpec {
    primary.table.primary.keys.range()
}

impl<'a> PrimaryKeyBuilder<'a> {
    pub(crate) fn new(table: &'a mut TableBuilder) -> Self {
        Self { table }
    }

    /// Define the hash key. Repeated calls edit the same key element.
    pub fn hash(self) -> KeyElementBuilder<Self> {
        self.table.primary.keys.hash();
        KeyElementBuilder::new(self, hash_element)
    }

    /// Define the range key. Repeated calls edit the same key element.
    pub fn range(self) -> KeyElementBuilder<Self> {
        self.table.primary.keys.range();
        KeyElementBuilder::new(self, range_element)
    }

    /// Set the table read capacity units.
    pub fn read_capacity(self, read_capacity_units: impl Into<i64>) -> Self {
        self.table.primary.capacity.read_capacity_units = Some(read_capacity_units.into());
        self
    }

    /// Set the table write capacity units.
    pub fn write_capacity(self, write_capacity_units: impl Into<i64>) -> Self {
        self.table.primary.capacity.write_capacity_units = Some(write_capacity_units.into());
        self
    }

    /// Return to the table builder.
    pub fn and(self) -> &'a mut TableBuilder {
        self.table
    }
}
