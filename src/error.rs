//! Errors raised while assembling a table creation request.

use aws_sdk_dynamodb::error::BuildError;
use std::fmt;

/// The part of a key element that was never set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyElementField {
    /// The attribute name.
    Name,
    /// The scalar attribute type.
    AttributeType,
}

impl fmt::Display for KeyElementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::AttributeType => f.write_str("attribute type"),
        }
    }
}

/// Which half of a provisioned throughput pair is absent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MissingCapacity {
    /// Only the read capacity is missing.
    Read,
    /// Only the write capacity is missing.
    Write,
    /// Neither capacity was set.
    ReadAndWrite,
}

impl fmt::Display for MissingCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("missing read capacity"),
            Self::Write => f.write_str("missing write capacity"),
            Self::ReadAndWrite => f.write_str("missing read capacity and write capacity"),
        }
    }
}

/// Validation failure of a [`TableBuilder`](crate::table::TableBuilder).
///
/// Validation is all-or-nothing: the first failure in the order primary key,
/// global secondary indexes, local secondary indexes is returned and no request
/// is produced.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A primary key or global secondary index has no hash key element.
    #[error("a hash key element is required")]
    HashRequired,
    /// A local secondary index has no range key element.
    #[error("a range key element is required")]
    RangeRequired,
    /// A key element was requested but not completed.
    #[error("incomplete key element: missing {0}")]
    IncompleteKey(KeyElementField),
    /// A secondary index never chose a projection.
    #[error("no projection specified for secondary index")]
    NoProjectionSpecified,
    /// An index that carries throughput is missing read and/or write capacity.
    #[error("missing provisioned throughput: {0}")]
    MissingProvisionedThroughput(MissingCapacity),
    /// The built primary key schema did not contain a hash element.
    #[error("the primary key schema has no hash element")]
    MissingPrimaryHashKey,
    /// An SDK shape rejected the assembled fields, e.g. an index without a name.
    #[error(transparent)]
    Build(#[from] BuildError),
}
