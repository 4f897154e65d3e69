//! JSON response construction.
//!
//! Axum's `Json` always writes compact bodies. The directory's wire
//! contract is pretty-printed JSON by default with a configured compact
//! mode, so payloads go through this responder instead. Serialization
//! follows struct field declaration order, which keeps repeated requests
//! over an unchanged store byte-identical.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::infrastructure::config::JsonFormat;

/// A serializable payload plus the formatting mode to write it with.
pub struct FormattedJson<T> {
    format: JsonFormat,
    payload: T,
}

impl<T> FormattedJson<T> {
    pub fn new(format: JsonFormat, payload: T) -> Self {
        Self { format, payload }
    }
}

impl<T: Serialize> IntoResponse for FormattedJson<T> {
    fn into_response(self) -> Response {
        let body = match self.format {
            JsonFormat::Compact => serde_json::to_vec(&self.payload),
            JsonFormat::Pretty => serde_json::to_vec_pretty(&self.payload),
        };

        match body {
            Ok(bytes) => {
                ([(header::CONTENT_TYPE, "application/json")], bytes).into_response()
            }
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize response: {}", e),
            )
                .into_response(),
        }
    }
}
