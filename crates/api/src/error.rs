use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio_core::error::CoreError;
use serde_json::json;

/// Error returned by every handler.
///
/// Renders as `{"error": <message>, "code": <CODE>}` with the matching
/// status. Internal failures are logged and replaced by a generic message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request body or query.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Response extension carried by every rendered [`AppError`].
///
/// The error-page middleware looks for it to decide which responses to
/// decorate with the site settings.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub code: &'static str,
    pub message: String,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Status, machine code and client-facing message for one error.
struct Classified {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Classified {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            INTERNAL_MESSAGE,
        )
    }
}

impl AppError {
    /// Not-found for an entity looked up by id, slug or path.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        AppError::Core(CoreError::not_found(entity, key))
    }

    fn classify(&self) -> Classified {
        match self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => {
                Classified::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Classified {
            status,
            code,
            message,
        } = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        let mut response = (status, axum::Json(body)).into_response();
        response
            .extensions_mut()
            .insert(ErrorDetails { code, message });
        response
    }
}

fn classify_core_error(err: &CoreError) -> Classified {
    match err {
        CoreError::NotFound { entity, key } => Classified::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} '{key}' not found"),
        ),
        CoreError::Validation(msg) => {
            Classified::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        CoreError::Conflict(msg) => Classified::new(StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => {
            Classified::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            Classified::internal()
        }
    }
}

/// Map database failures the client can act on; everything else is a 500.
///
/// | Condition                              | Status |
/// |----------------------------------------|--------|
/// | `RowNotFound`                          | 404    |
/// | `23505` on a `uq_*` constraint         | 409    |
/// | `23503` foreign key violation          | 400    |
/// | `22001` value too long for its column  | 400    |
fn classify_sqlx_error(err: &sqlx::Error) -> Classified {
    let db_err = match err {
        sqlx::Error::RowNotFound => {
            return Classified::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found");
        }
        sqlx::Error::Database(db_err) => db_err,
        other => {
            tracing::error!(error = %other, "Database error");
            return Classified::internal();
        }
    };

    match db_err.code().as_deref() {
        Some("23505") => {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return Classified::new(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
        Some("23503") => {
            return Classified::new(
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Referenced record does not exist",
            );
        }
        Some("22001") => {
            return Classified::new(
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Value too long for field",
            );
        }
        _ => {}
    }

    tracing::error!(error = %db_err, "Database error");
    Classified::internal()
}
