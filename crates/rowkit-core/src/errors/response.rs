// ABOUTME: HTTP adapters for the error responder: axum IntoResponse and a plain `http` handler wrapper
// ABOUTME: Both adapters delegate to `respond` and write the same JSON error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::{header, HeaderValue, Request, StatusCode};
use serde::Serialize;

use super::api::{respond, ApiError, ErrorBody, HandlerError};
use crate::constants::messages;

/// Resolve the status and body, demoting API errors with an unusable status to a 500
fn resolve(error: &HandlerError) -> (StatusCode, ErrorBody) {
    let (code, body) = respond(error);
    StatusCode::from_u16(code).map_or_else(
        |_| (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal()),
        |status| (status, body),
    )
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let (status, body) = resolve(&self);
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        HandlerError::from(self).into_response()
    }
}

/// Serialize `value` as the JSON body of a response with the given status
///
/// Sets `Content-Type: application/json`. If serialization fails the response
/// degrades to the pre-rendered internal error body.
pub fn write_json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> http::Response<String> {
    match serde_json::to_string(value) {
        Ok(body) => json_response(status, body),
        Err(_) => json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::INTERNAL_SERVER_ERROR_BODY.to_owned(),
        ),
    }
}

fn json_response(status: StatusCode, body: String) -> http::Response<String> {
    let mut response = http::Response::new(body);
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// Plain `http` response for a handler error
pub fn http_error_response(error: &HandlerError) -> http::Response<String> {
    let (status, body) = resolve(error);
    write_json(status, &body)
}

/// Wrap a fallible `http` handler so every error becomes a JSON error response
///
/// ```
/// use http::{Request, Response, StatusCode};
/// use rowkit_core::errors::{http_error_wrapper, ApiError, HandlerError};
///
/// let handler = http_error_wrapper(|_request: Request<()>| -> Result<Response<String>, HandlerError> {
///     Err(ApiError::with_message(404, "not found").into())
/// });
///
/// let response = handler(Request::new(()));
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// assert_eq!(response.body(), r#"{"statusCode":404,"msg":"not found"}"#);
/// ```
pub fn http_error_wrapper<B, F>(handler: F) -> impl Fn(Request<B>) -> http::Response<String>
where
    F: Fn(Request<B>) -> Result<http::Response<String>, HandlerError>,
{
    move |request| handler(request).unwrap_or_else(|error| http_error_response(&error))
}
