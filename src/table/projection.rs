use crate::error::TableError;

use aws_sdk_dynamodb::types;
use indexmap::IndexSet;
use std::fmt;

/// The attributes a secondary index exposes.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ProjectionSpec {
    pub(crate) projection_type: Option<types::ProjectionType>,
    pub(crate) non_key_attributes: IndexSet<String>,
}

impl ProjectionSpec {
    fn set(&mut self, projection_type: types::ProjectionType) {
        self.projection_type = Some(projection_type);
        self.non_key_attributes.clear();
    }

    pub(crate) fn build(&self) -> Result<types::Projection, TableError> {
        let projection_type = self
            .projection_type
            .clone()
            .ok_or(TableError::NoProjectionSpecified)?;
        let non_key_attributes = match projection_type {
            types::ProjectionType::Include => {
                Some(self.non_key_attributes.iter().cloned().collect())
            }
            _ => None,
        };
        let projection = types::Projection::builder()
            .projection_type(projection_type)
            .set_non_key_attributes(non_key_attributes)
            .build();
        Ok(projection)
    }
}

/// Builder for the projection of a secondary index.
///
/// Each terminal call returns the index builder. Calling more than one of them
/// keeps the last choice.
pub struct ProjectionBuilder<P> {
    parent: P,
    projection: fn(&mut P) -> &mut ProjectionSpec,
}

impl<P> ProjectionBuilder<P> {
    pub(crate) fn new(parent: P, projection: fn(&mut P) -> &mut ProjectionSpec) -> Self {
        Self { parent, projection }
    }

    /// Project every attribute of the table.
    pub fn all(mut self) -> P {
        (self.projection)(&mut self.parent).set(types::ProjectionType::All);
        self.parent
    }

    /// Project only the index and table keys.
    pub fn keys_only(mut self) -> P {
        (self.projection)(&mut self.parent).set(types::ProjectionType::KeysOnly);
        self.parent
    }

    /// Project the keys plus the given non-key attributes.
    pub fn include_attributes<I, S>(mut self, names: I) -> P
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let projection = (self.projection)(&mut self.parent);
        projection.set(types::ProjectionType::Include);
        projection
            .non_key_attributes
            .extend(names.into_iter().map(Into::into));
        self.parent
    }
}

impl<P: fmt::Debug> fmt::Debug for ProjectionBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectionBuilder")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}
