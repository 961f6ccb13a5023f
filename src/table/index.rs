use crate::{error::TableError, table::key::KeyElementSpec};

use aws_sdk_dynamodb::types;

/// Hash and range key slots shared by every index variant.
///
/// Slots are empty until the caller asks for them; once asked for, they must
/// be completed before the index is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct KeySchemaSpec {
    pub(crate) hash: Option<KeyElementSpec>,
    pub(crate) range: Option<KeyElementSpec>,
}

impl KeySchemaSpec {
    pub(crate) fn hash(&mut self) -> &mut KeyElementSpec {
        self.hash
            .get_or_insert_with(|| KeyElementSpec::new(types::KeyType::Hash))
    }

    pub(crate) fn range(&mut self) -> &mut KeyElementSpec {
        self.range
            .get_or_insert_with(|| KeyElementSpec::new(types::KeyType::Range))
    }

    /// Build the key schema, hash first.
    ///
    /// Fails when the `required` slot was never requested.
    pub(crate) fn build(
        &self,
        required: &types::KeyType,
        attribute_definitions: &mut Vec<types::AttributeDefinition>,
    ) -> Result<Vec<types::KeySchemaElement>, TableError> {
        match required {
            types::KeyType::Range if self.range.is_none() => {
                return Err(TableError::RangeRequired);
            }
            types::KeyType::Hash if self.hash.is_none() => {
                return Err(TableError::HashRequired);
            }
            _ => {}
        }
        let mut key_schema = Vec::with_capacity(2);
        for element in [&self.hash, &self.range].into_iter().flatten() {
            element.build(&mut key_schema, attribute_definitions)?;
        }
        Ok(key_schema)
    }
}
