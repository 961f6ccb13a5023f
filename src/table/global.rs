use crate::{
    error::TableError,
    table::{
        TableBuilder,
        capacity::CapacitySpec,
        index::KeySchemaSpec,
        key::{KeyElementBuilder, KeyElementSpec},
        projection::{ProjectionBuilder, ProjectionSpec},
    },
};

use aws_sdk_dynamodb::types;

/// A global secondary index: own hash key, optional range key, projection and
/// throughput.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GlobalSecondaryIndexSpec {
    pub(crate) index_name: Option<String>,
    pub(crate) keys: KeySchemaSpec,
    pub(crate) projection: Option<ProjectionSpec>,
    pub(crate) capacity: CapacitySpec,
}

impl GlobalSecondaryIndexSpec {
    pub(crate) fn build(
        &self,
        attribute_definitions: &mut Vec<types::AttributeDefinition>,
    ) -> Result<types::GlobalSecondaryIndex, TableError> {
        let key_schema = self
            .keys
            .build(&types::KeyType::Hash, attribute_definitions)?;
        let projection = self
            .projection
            .as_ref()
            .ok_or(TableError::NoProjectionSpecified)?
            .build()?;
        let provisioned_throughput = self.capacity.build()?;
        let global_secondary_index = types::GlobalSecondaryIndex::builder()
            .set_index_name(self.index_name.clone())
            .set_key_schema(Some(key_schema))
            .projection(projection)
            .provisioned_throughput(provisioned_throughput)
            .build()?;
        Ok(global_secondary_index)
    }
}

/// Builder for one global secondary index of a table.
///
/// ```rust
/// use aws_sdk_dynamodb::types::ScalarAttributeType;
/// use dynamodb_table_builder::table::TableBuilder;
///
/// let mut table = TableBuilder::new("orders");
/// table
///     .global()
///     .name("byStatus")
///     .hash()
///     .name("status")
///     .attribute_type(ScalarAttributeType::S)
///     .projection()
///     .all()
///     .read_capacity(1)
///     .write_capacity(1);
/// ```
#[derive(Debug)]
pub struct GlobalSecondaryIndexBuilder<'a> {
    table: &'a mut TableBuilder,
    position: usize,
}

fn hash_element<'b>(global: &'b mut GlobalSecondaryIndexBuilder<'_>) -> &'b mut KeyElementSpec {
    global.spec().keys.hash()
}

fn range_element<'b>(global: &'b mut GlobalSecondaryIndexBuilder<'_>) -> &'b mut KeyElementSpec {
    global.spec().keys.range()
}

fn projection_spec<'b>(global: &'b mut GlobalSecondaryIndexBuilder<'_>) -> &'b mut ProjectionSpec {
    global.spec().projection.get_or_insert_default()
}

impl<'a> GlobalSecondaryIndexBuilder<'a> {
    pub(crate) fn new(table: &'a mut TableBuilder, position: usize) -> Self {
        Self { table, position }
    }

    fn spec(&mut self) -> &mut GlobalSecondaryIndexSpec {
        &mut self.table.global_secondary_indexes[self.position]
    }

    /// Set the index name.
    pub fn name(mut self, index_name: impl Into<String>) -> Self {
        self.spec().index_name = Some(index_name.into());
        self
    }

    /// Define the hash key of the index. Repeated calls edit the same key element.
    pub fn hash(mut self) -> KeyElementBuilder<Self> {
        self.spec().keys.hash();
        KeyElementBuilder::new(self, hash_element)
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

    /// Set the index read capacity units.
    pub fn read_capacity(mut self, read_capacity_units: impl Into<i64>) -> Self {
        self.spec().capacity.read_capacity_units = Some(read_capacity_units.into());
        self
    }

    /// Set the index write capacity units.
    pub fn write_capacity(mut self, write_capacity_units: impl Into<i64>) -> Self {
        self.spec().capacity.write_capacity_units = Some(write_capacity_units.into());
        self
    }

    /// Return to the table builder.
    pub fn and(self) -> &'a mut TableBuilder {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingCapacity;

    use rstest::rstest;

    fn complete(table: &mut TableBuilder) -> GlobalSecondaryIndexBuilder<'_> {
        table
            .global()
            .name("a")
            .hash()
            .name("b")
            .attribute_type(types::ScalarAttributeType::S)
    }

    #[test]
    fn test_global_build() {
        let mut table = TableBuilder::new("t");
        complete(&mut table)
            .range()
            .name("c")
            .attribute_type(types::ScalarAttributeType::B)
            .projection()
            .include_attributes(["d"])
            .read_capacity(2)
            .write_capacity(3);
        let mut attribute_definitions = Vec::new();
        let actual = table.global_secondary_indexes[0]
            .build(&mut attribute_definitions)
            .unwrap();
        let expected = types::GlobalSecondaryIndex::builder()
            .index_name("a")
            .key_schema(
                types::KeySchemaElement::builder()
                    .attribute_name("b")
                    .key_type(types::KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .key_schema(
                types::KeySchemaElement::builder()
                    .attribute_name("c")
                    .key_type(types::KeyType::Range)
                    .build()
                    .unwrap(),
            )
            .projection(
                types::Projection::builder()
                    .projection_type(types::ProjectionType::Include)
                    .non_key_attributes("d")
                    .build(),
            )
            .provisioned_throughput(
                types::ProvisionedThroughput::builder()
                    .read_capacity_units(2)
                    .write_capacity_units(3)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(actual, expected);
        assert_eq!(attribute_definitions.len(), 2);
    }

    #[test]
    fn test_global_projection_is_memoized() {
        let mut table = TableBuilder::new("t");
        complete(&mut table).projection();
        table.global_named("a").unwrap().projection().keys_only();
        assert_eq!(
            table.global_secondary_indexes[0]
                .projection
                .as_ref()
                .and_then(|projection| projection.projection_type.clone()),
            Some(types::ProjectionType::KeysOnly)
        );
        assert_eq!(table.global_secondary_indexes.len(), 1);
    }

    #[rstest]
    #[case::no_hash(
        |table: &mut TableBuilder| {
            table
                .global()
                .name("a")
                .projection()
                .all()
                .read_capacity(1)
                .write_capacity(1);
        },
        "hash"
    )]
    #[case::no_projection(
        |table: &mut TableBuilder| {
            complete(table).read_capacity(1).write_capacity(1);
        },
        "projection"
    )]
    #[case::projection_requested_but_unset(
        |table: &mut TableBuilder| {
            complete(table).read_capacity(1).write_capacity(1).projection();
        },
        "projection"
    )]
    #[case::no_write_capacity(
        |table: &mut TableBuilder| {
            complete(table).projection().all().read_capacity(1);
        },
        "write"
    )]
    #[case::no_name(
        |table: &mut TableBuilder| {
            table
                .global()
                .hash()
                .name("b")
                .attribute_type(types::ScalarAttributeType::S)
                .projection()
                .all()
                .read_capacity(1)
                .write_capacity(1);
        },
        "name"
    )]
    fn test_global_build_invalid(#[case] define: fn(&mut TableBuilder), #[case] expected: &str) {
        let mut table = TableBuilder::new("t");
        define(&mut table);
        let actual = table.global_secondary_indexes[0].build(&mut Vec::new());
        match expected {
            "hash" => assert!(matches!(actual, Err(TableError::HashRequired))),
            "projection" => assert!(matches!(actual, Err(TableError::NoProjectionSpecified))),
            "write" => assert!(matches!(
                actual,
                Err(TableError::MissingProvisionedThroughput(MissingCapacity::Write))
            )),
            _ => assert!(matches!(actual, Err(TableError::Build(_)))),
        }
    }
}
