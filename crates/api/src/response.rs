//! Shared response envelope types for the management API.
//!
//! Management responses use a `{ "data": ... }` envelope. Public page
//! handlers return their page payload directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
