//! Shared success envelope for API handlers.
//!
//! Every success body is a JSON object with `"success": true` merged into
//! the payload's own fields. Payloads are small `Serialize` structs, one per
//! response shape, so the wire format is checked at compile time.

use axum::Json;
use serde::Serialize;

/// `{ "success": true, ...T }` response envelope.
///
/// `T` must serialize as a JSON object.
///
/// ```ignore
/// Ok(ok(DeletedResponse { deleted: id }))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

/// Wrap a payload in a successful envelope.
pub fn ok<T: Serialize>(body: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        body,
    })
}
