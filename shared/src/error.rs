use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ReferencedEntity(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("Transaction could not be executed.")]
    TransactionError(#[source] sqlx::Error),
    #[error("An error occurred while executing a database operation.")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    BlockingTaskError(#[from] tokio::task::JoinError),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("Login failed.")]
    UnauthenticatedError,
    #[error("Invalid authorization information.")]
    UnauthorizedError,
    #[error("{0}")]
    ConversionEntityError(String),
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23503" || code == "23001")
}

impl AppError {
    /// DELETE 実行時の sqlx エラーを分類する。
    /// 外部キー制約違反（23503, 23001）は参照中のレコードがあるということなので 409 として返す。
    pub fn from_delete_error(e: sqlx::Error, referenced_message: impl Into<String>) -> Self {
        if is_foreign_key_violation(&e) {
            AppError::ReferencedEntity(referenced_message.into())
        } else {
            AppError::SpecificOperationError(e)
        }
    }

    /// INSERT / UPDATE 実行時の sqlx エラーを分類する。
    /// 事前チェックの後に参照先が消えた場合の外部キー制約違反は `missing` を返す。
    pub fn from_write_error(e: sqlx::Error, missing: AppError) -> Self {
        if is_foreign_key_violation(&e) {
            missing
        } else {
            AppError::SpecificOperationError(e)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ReferencedEntity(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedError => StatusCode::FORBIDDEN,
            AppError::UnauthorizedError => StatusCode::UNAUTHORIZED,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::BlockingTaskError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 500 系の詳細はログにのみ出し、レスポンスには含めない
        let message = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error.".to_string()
        } else {
            self.to_string()
        };

        (status_code, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message_and_status() {
        let res = AppError::EntityNotFound("client not found".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = AppError::ReferencedEntity("still referenced".into()).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let res = AppError::UnauthorizedError.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn server_errors_map_to_500() {
        let res = AppError::NoRowsAffectedError("nothing".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = AppError::SpecificOperationError(sqlx::Error::RowNotFound).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_database_errors_are_not_treated_as_references() {
        let e = AppError::from_delete_error(sqlx::Error::RowNotFound, "referenced");
        assert!(matches!(e, AppError::SpecificOperationError(_)));

        let e = AppError::from_write_error(
            sqlx::Error::RowNotFound,
            AppError::EntityNotFound("gone".into()),
        );
        assert!(matches!(e, AppError::SpecificOperationError(_)));
    }

    #[derive(Debug)]
    struct PgCodeError(&'static str);

    impl std::fmt::Display for PgCodeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "database error {}", self.0)
        }
    }

    impl std::error::Error for PgCodeError {}

    impl sqlx::error::DatabaseError for PgCodeError {
        fn message(&self) -> &str {
            "database error"
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.0.into())
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.0 {
                "23503" => sqlx::error::ErrorKind::ForeignKeyViolation,
                _ => sqlx::error::ErrorKind::Other,
            }
        }
    }

    fn db_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgCodeError(code)))
    }

    #[test]
    fn foreign_key_violation_on_write_becomes_the_given_error() {
        let e = AppError::from_write_error(
            db_error("23503"),
            AppError::EntityNotFound("Reservation was not found.".into()),
        );
        assert!(matches!(e, AppError::EntityNotFound(_)));
        assert_eq!(e.into_response().status(), StatusCode::NOT_FOUND);

        let e = AppError::from_write_error(
            db_error("23514"),
            AppError::EntityNotFound("Reservation was not found.".into()),
        );
        assert!(matches!(e, AppError::SpecificOperationError(_)));
    }

    #[test]
    fn foreign_key_violation_on_delete_is_a_conflict() {
        let e = AppError::from_delete_error(db_error("23503"), "still referenced");
        assert_eq!(e.into_response().status(), StatusCode::CONFLICT);

        let e = AppError::from_delete_error(db_error("23001"), "still referenced");
        assert!(matches!(e, AppError::ReferencedEntity(_)));
    }
}
