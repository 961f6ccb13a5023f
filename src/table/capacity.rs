use crate::error::{MissingCapacity, TableError};

use aws_sdk_dynamodb::types;

/// Read and write capacity of an index that carries its own throughput.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CapacitySpec {
    pub(crate) read_capacity_units: Option<i64>,
    pub(crate) write_capacity_units: Option<i64>,
}

impl CapacitySpec {
    pub(crate) fn build(&self) -> Result<types::ProvisionedThroughput, TableError> {
        let (read_capacity_units, write_capacity_units) =
            match (self.read_capacity_units, self.write_capacity_units) {
                (Some(read), Some(write)) => (read, write),
                (None, Some(_)) => {
                    return Err(TableError::MissingProvisionedThroughput(
                        MissingCapacity::Read,
                    ));
                }
                (Some(_), None) => {
                    return Err(TableError::MissingProvisionedThroughput(
                        MissingCapacity::Write,
                    ));
                }
                (None, None) => {
                    return Err(TableError::MissingProvisionedThroughput(
                        MissingCapacity::ReadAndWrite,
                    ));
                }
            };
        let provisioned_throughput = types::ProvisionedThroughput::builder()
            .read_capacity_units(read_capacity_units)
            .write_capacity_units(write_capacity_units)
            .build()?;
        Ok(provisioned_throughput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_capacity_build() {
        let spec = CapacitySpec {
            read_capacity_units: Some(5),
            write_capacity_units: Some(3),
        };
        let actual = spec.build().unwrap();
        assert_eq!(actual.read_capacity_units(), 5);
        assert_eq!(actual.write_capacity_units(), 3);
    }

    #[rstest]
    #[case::missing_read(
        CapacitySpec {
            write_capacity_units: Some(1),
            ..Default::default()
        },
        MissingCapacity::Read
    )]
    #[case::missing_write(
        CapacitySpec {
            read_capacity_units: Some(1),
            ..Default::default()
        },
        MissingCapacity::Write
    )]
    #[case::missing_both(
        CapacitySpec::default(),
        MissingCapacity::ReadAndWrite
    )]
    fn test_capacity_build_missing(#[case] spec: CapacitySpec, #[case] expected: MissingCapacity) {
        let actual = spec.build();
        assert!(matches!(
            actual,
            Err(TableError::MissingProvisionedThroughput(missing)) if missing == expected
        ));
    }
}
