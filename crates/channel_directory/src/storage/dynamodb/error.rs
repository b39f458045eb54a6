//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `channel_directory_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use channel_directory_core::storage::RepositoryError;

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// Channel writes are unconditional, so a conditional check failure is not
/// expected and falls through to the generic arm.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Transport-level failures never reached DynamoDB; report them as such.
fn connection_failure<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(
            "Request to DynamoDB timed out".to_string(),
        )),
        SdkError::DispatchFailure(_) => Some(RepositoryError::ConnectionFailed(
            "Could not reach DynamoDB".to_string(),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    use super::*;

    fn table_missing() -> ResourceNotFoundException {
        ResourceNotFoundException::builder()
            .message("Requested resource not found")
            .build()
    }

    #[test]
    fn test_timeout_maps_to_connection_failed() {
        let query: SdkError<QueryError, ()> = SdkError::timeout_error("deadline elapsed");
        let put: SdkError<PutItemError, ()> = SdkError::timeout_error("deadline elapsed");

        let expected =
            RepositoryError::ConnectionFailed("Request to DynamoDB timed out".to_string());
        assert_eq!(map_query_error(query), expected);
        assert_eq!(map_put_item_error(put), expected);
    }

    #[test]
    fn test_missing_table_maps_to_query_failed() {
        let query: SdkError<QueryError, ()> = SdkError::service_error(
            QueryError::ResourceNotFoundException(table_missing()),
            (),
        );
        let put: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ResourceNotFoundException(table_missing()),
            (),
        );

        let expected = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(map_query_error(query), expected);
        assert_eq!(map_put_item_error(put), expected);
    }

    #[test]
    fn test_throttling_maps_to_query_failed() {
        let query: SdkError<QueryError, ()> = SdkError::service_error(
            QueryError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );

        assert_eq!(
            map_query_error(query),
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        );
    }
}
