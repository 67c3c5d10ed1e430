//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `carstore_core::storage`.
//! Transport failures (dispatch, timeout) become `ConnectionFailed`; service
//! errors become `QueryFailed`. Both carry the SDK's error text unchanged; the
//! service error class only goes to the logs.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use carstore_core::storage::RepositoryError;

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(connection_error) = map_transport_error(&err) {
        return connection_error;
    }
    let err = err.into_service_error();
    let class = match &err {
        GetItemError::ResourceNotFoundException(_) => "table_not_found",
        GetItemError::ProvisionedThroughputExceededException(_) => "throughput_exceeded",
        GetItemError::RequestLimitExceeded(_) => "request_limit_exceeded",
        GetItemError::InternalServerError(_) => "internal_server_error",
        _ => "other",
    };
    query_failed("GetItem", class, &err)
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(connection_error) = map_transport_error(&err) {
        return connection_error;
    }
    let err = err.into_service_error();
    let class = match &err {
        PutItemError::ResourceNotFoundException(_) => "table_not_found",
        PutItemError::ProvisionedThroughputExceededException(_) => "throughput_exceeded",
        PutItemError::RequestLimitExceeded(_) => "request_limit_exceeded",
        PutItemError::ItemCollectionSizeLimitExceededException(_) => "item_collection_too_large",
        PutItemError::TransactionConflictException(_) => "transaction_conflict",
        PutItemError::InternalServerError(_) => "internal_server_error",
        _ => "other",
    };
    query_failed("PutItem", class, &err)
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(connection_error) = map_transport_error(&err) {
        return connection_error;
    }
    let err = err.into_service_error();
    let class = match &err {
        ScanError::ResourceNotFoundException(_) => "table_not_found",
        ScanError::ProvisionedThroughputExceededException(_) => "throughput_exceeded",
        ScanError::RequestLimitExceeded(_) => "request_limit_exceeded",
        ScanError::InternalServerError(_) => "internal_server_error",
        _ => "other",
    };
    query_failed("Scan", class, &err)
}

fn query_failed<E: Error>(operation: &'static str, class: &'static str, err: &E) -> RepositoryError {
    let detail = DisplayErrorContext(err).to_string();
    tracing::warn!(operation, class, error = %detail, "DynamoDB request failed");
    RepositoryError::QueryFailed(format!("{} failed: {}", operation, detail))
}

/// Map SDK errors that never reached the service to `ConnectionFailed`.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError>
where
    E: Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}
