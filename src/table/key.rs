use crate::error::{KeyElementField, TableError};

use aws_sdk_dynamodb::types;
use std::fmt;

/// A single key attribute of an index, filled in by a [`KeyElementBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct KeyElementSpec {
    pub(crate) key_type: types::KeyType,
    pub(crate) name: Option<String>,
    pub(crate) attribute_type: Option<types::ScalarAttributeType>,
}

impl KeyElementSpec {
    pub(crate) fn new(key_type: types::KeyType) -> Self {
        Self {
            key_type,
            name: None,
            attribute_type: None,
        }
    }

    /// Append one key schema element and one attribute definition.
    pub(crate) fn build(
        &self,
        key_schema: &mut Vec<types::KeySchemaElement>,
        attribute_definitions: &mut Vec<types::AttributeDefinition>,
    ) -> Result<(), TableError> {
        let name = self
            .name
            .as_ref()
            .ok_or(TableError::IncompleteKey(KeyElementField::Name))?;
        let attribute_type = self
            .attribute_type
            .clone()
            .ok_or(TableError::IncompleteKey(KeyElementField::AttributeType))?;
        let key_schema_element = types::KeySchemaElement::builder()
            .attribute_name(name)
            .key_type(self.key_type.clone())
            .build()?;
        let attribute_definition = types::AttributeDefinition::builder()
            .attribute_name(name)
            .attribute_type(attribute_type)
            .build()?;
        key_schema.push(key_schema_element);
        attribute_definitions.push(attribute_definition);
        Ok(())
    }
}

/// Builder for a hash or range key element.
///
/// Obtained from `hash()` or `range()` on an index builder. Setting the
/// attribute type is the last step and hands the index builder back.
///
/// ```rust
/// use aws_sdk_dynamodb::types::ScalarAttributeType;
/// use dynamodb_table_builder::table::TableBuilder;
///
/// let mut table = TableBuilder::new("users");
/// table
///     .primary()
///     .hash()
///     .name("id")
///     .attribute_type(ScalarAttributeType::S)
///     .read_capacity(1)
///     .write_capacity(1);
/// ```
pub struct KeyElementBuilder<P> {
    parent: P,
    element: fn(&mut P) -> &mut KeyElementSpec,
}

impl<P> KeyElementBuilder<P> {
    pub(crate) fn new(parent: P, element: fn(&mut P) -> &mut KeyElementSpec) -> Self {
        Self { parent, element }
    }

    /// Set the attribute name of the key.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        (self.element)(&mut self.parent).name = Some(name.into());
        self
    }

    /// Set the scalar type of the key and return to the index builder.
    pub fn attribute_type(mut self, attribute_type: types::ScalarAttributeType) -> P {
        (self.element)(&mut self.parent).attribute_type = Some(attribute_type);
        self.parent
    }
}

impl<P: fmt::Debug> fmt::Debug for KeyElementBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyElementBuilder")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}
