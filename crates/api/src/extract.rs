//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that reports malformed or mistyped bodies as a
/// 400 [`AppError::BadRequest`] in the standard error envelope, instead of
/// axum's plain-text 415/422 rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
