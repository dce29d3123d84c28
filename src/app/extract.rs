//! Request extractors whose rejections answer with the `AppError` JSON body.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
};

use crate::app::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Raw UTF-8 body, used for CSV uploads.
pub struct TextBody(pub String);

#[async_trait]
impl<S> FromRequest<S> for TextBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = String::from_request(req, state).await?;
        Ok(Self(body))
    }
}
