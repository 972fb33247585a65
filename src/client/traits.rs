use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Status and fully read body of one HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// HTTP transport the request sender is built on.
///
/// Implementations must read the whole body before returning, whatever the
/// status, and release the underlying response on every path.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `form` as `application/x-www-form-urlencoded`
    async fn post<F>(&self, url: &str, form: &F) -> Result<HttpResponse>
    where
        F: Serialize + Send + Sync + ?Sized;

    async fn get(&self, url: &str) -> Result<HttpResponse>;
}
