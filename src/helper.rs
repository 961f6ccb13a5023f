//! Create a table only when it does not exist yet.
//!
//! [`TableHelper`] remembers which tables are known to exist so repeated
//! calls for the same name skip the existence check entirely.

use crate::table::{TableBuilder, request::CreateTable};

use aws_sdk_dynamodb::{Client, error, operation};
use dashmap::DashSet;
use once_cell::sync::Lazy;
use std::future::Future;

static SHARED: Lazy<TableHelper> = Lazy::new(TableHelper::default);

/// A storage service client able to tell whether a table exists.
pub trait TableExists {
    /// Error of the existence check.
    type Error;

    /// Check whether `table_name` exists.
    fn table_exists(
        &self,
        table_name: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "dynamodb_table_builder.table_exists",
        skip(client),
        err
    )
)]
async fn describe_table_exists(
    client: &Client,
    table_name: &str,
) -> Result<bool, error::SdkError<operation::describe_table::DescribeTableError>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => Ok(true),
        Err(sdk_error)
            if sdk_error.as_service_error().is_some_and(
                operation::describe_table::DescribeTableError::is_resource_not_found_exception,
            ) =>
        {
            Ok(false)
        }
        Err(sdk_error) => Err(sdk_error),
    }
}

impl TableExists for Client {
    type Error = error::SdkError<operation::describe_table::DescribeTableError>;

    fn table_exists(
        &self,
        table_name: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        describe_table_exists(self, table_name)
    }
}

/// Failure of [`TableHelper::create_table_if_necessary`].
#[derive(Debug, thiserror::Error)]
pub enum EnsureTableError<C, E> {
    /// The existence check failed.
    #[error("failed to check whether the table exists")]
    Exists(#[source] E),
    /// Validating or creating the table failed.
    #[error("failed to create the table")]
    Create(#[source] C),
}

/// Result of [`TableHelper::create_table_if_necessary`] for client `C`.
pub type EnsureTableResult<C> = Result<
    Option<<C as CreateTable>::Output>,
    EnsureTableError<<C as CreateTable>::Error, <C as TableExists>::Error>,
>;

/// Idempotent table creation with memoized existence checks.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::ScalarAttributeType};
/// use dynamodb_table_builder::helper::TableHelper;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// TableHelper::shared()
///     .create_table_if_necessary(client, "users", |table| {
///         table
///             .primary()
///             .hash()
///             .name("id")
///             .attribute_type(ScalarAttributeType::S)
///             .read_capacity(1)
///             .write_capacity(1);
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TableHelper {
    existing_tables: DashSet<String>,
}

impl TableHelper {
    /// The process-wide helper.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Create `table_name` with the definition from `define_table` unless it
    /// is already known to exist.
    ///
    /// Returns `None` when the table already existed and the client output
    /// when it was created.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_table_builder.create_table_if_necessary",
            skip(self, client, define_table)
        )
    )]
    pub async fn create_table_if_necessary<C, F>(
        &self,
        client: &C,
        table_name: &str,
        define_table: F,
    ) -> EnsureTableResult<C>
    where
        C: CreateTable + TableExists,
        F: FnOnce(&mut TableBuilder),
    {
        if self.existing_tables.contains(table_name) {
            return Ok(None);
        }
        if client
            .table_exists(table_name)
            .await
            .map_err(EnsureTableError::Exists)?
        {
            self.existing_tables.insert(table_name.to_string());
            return Ok(None);
        }
        let mut table = TableBuilder::new(table_name);
        define_table(&mut table);
        let output = table
            .create(client)
            .await
            .map_err(EnsureTableError::Create)?;
        self.existing_tables.insert(table_name.to_string());
        Ok(Some(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::TableError, table::request::TableCreationRequest};

    use aws_sdk_dynamodb::types;
    use parking_lot::Mutex;
    use rstest::rstest;
    use std::{
        future,
        sync::atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, thiserror::Error)]
    #[error("describe table failed")]
    struct DescribeFailed;

    #[derive(Debug, Default)]
    struct FakeClient {
        exists: bool,
        describe_fails: bool,
        existence_checks: AtomicUsize,
        requests: Mutex<Vec<TableCreationRequest>>,
    }

    impl TableExists for FakeClient {
        type Error = DescribeFailed;

        fn table_exists(
            &self,
            _table_name: &str,
        ) -> impl Future<Output = Result<bool, Self::Error>> + Send {
            self.existence_checks.fetch_add(1, Ordering::SeqCst);
            let result = if self.describe_fails {
                Err(DescribeFailed)
            } else {
                Ok(self.exists)
            };
            future::ready(result)
        }
    }

    impl CreateTable for FakeClient {
        type Output = String;
        type Error = TableError;

        fn create_table(
            &self,
            request: TableCreationRequest,
        ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
            let table_name = request.table_name().to_string();
            self.requests.lock().push(request);
            future::ready(Ok(table_name))
        }
    }

    fn define(table: &mut TableBuilder) {
        table
            .primary()
            .hash()
            .name("id")
            .attribute_type(types::ScalarAttributeType::S)
            .read_capacity(1)
            .write_capacity(1);
    }

    #[tokio::test]
    async fn test_existing_table_is_checked_once() {
        let helper = TableHelper::default();
        let client = FakeClient {
            exists: true,
            ..Default::default()
        };
        for _ in 0..5 {
            let actual = helper
                .create_table_if_necessary(&client, "a", define)
                .await
                .unwrap();
            assert_eq!(actual, None);
        }
        assert_eq!(client.existence_checks.load(Ordering::SeqCst), 1);
        assert!(client.requests.lock().is_empty());
    }

    #[tokio::test]
    async fn test_missing_table_is_created_once() {
        let helper = TableHelper::default();
        let client = FakeClient::default();
        let actual = helper
            .create_table_if_necessary(&client, "a", define)
            .await
            .unwrap();
        assert_eq!(actual.as_deref(), Some("a"));
        let again = helper
            .create_table_if_necessary(&client, "a", define)
            .await
            .unwrap();
        assert_eq!(again, None);
        assert_eq!(client.existence_checks.load(Ordering::SeqCst), 1);
        let requests = client.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].table_name(), "a");
        assert_eq!(requests[0].key_schema()[0].attribute_name(), "id");
    }

    #[rstest]
    #[case::memoized_per_table_name("b", 2)]
    #[case::same_table_name("a", 1)]
    #[tokio::test]
    async fn test_memoization_is_per_table_name(
        #[case] second_table_name: &str,
        #[case] expected_checks: usize,
    ) {
        let helper = TableHelper::default();
        let client = FakeClient {
            exists: true,
            ..Default::default()
        };
        helper
            .create_table_if_necessary(&client, "a", define)
            .await
            .unwrap();
        helper
            .create_table_if_necessary(&client, second_table_name, define)
            .await
            .unwrap();
        assert_eq!(
            client.existence_checks.load(Ordering::SeqCst),
            expected_checks
        );
    }

    #[tokio::test]
    async fn test_invalid_definition_is_not_sent_nor_memoized() {
        let helper = TableHelper::default();
        let client = FakeClient::default();
        let actual = helper
            .create_table_if_necessary(&client, "a", |_| {})
            .await;
        assert!(matches!(
            actual,
            Err(EnsureTableError::Create(TableError::HashRequired))
        ));
        assert!(client.requests.lock().is_empty());
        assert!(!helper.existing_tables.contains("a"));
    }

    #[tokio::test]
    async fn test_existence_check_failure() {
        let helper = TableHelper::default();
        let client = FakeClient {
            describe_fails: true,
            ..Default::default()
        };
        let actual = helper
            .create_table_if_necessary(&client, "a", define)
            .await;
        assert!(matches!(actual, Err(EnsureTableError::Exists(DescribeFailed))));
        assert!(client.requests.lock().is_empty());
    }

    #[test]
    fn test_shared_is_a_single_instance() {
        assert!(std::ptr::eq(TableHelper::shared(), TableHelper::shared()));
    }
}
