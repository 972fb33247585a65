use serde::Serialize;
use tracing::{debug, warn};

use crate::client::traits::{HttpResponse, Transport};
use crate::error::{Result, UrError};

/// Sends single requests over a borrowed transport and turns non-200
/// responses into [`UrError::Connection`]
pub struct RequestSender<'s, T> {
    transport: &'s T,
}

impl<'s, T: Transport> RequestSender<'s, T> {
    pub fn new(transport: &'s T) -> Self {
        Self { transport }
    }

    pub async fn post<F>(&self, url: &str, form: &F) -> Result<String>
    where
        F: Serialize + Send + Sync + ?Sized,
    {
        debug!("POST {}", url);
        let response = self.transport.post(url, form).await?;
        ensure_success(url, response)
    }

    pub async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.transport.get(url).await?;
        ensure_success(url, response)
    }
}

impl<T> Clone for RequestSender<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RequestSender<'_, T> {}

fn ensure_success(url: &str, response: HttpResponse) -> Result<String> {
    if response.status == 200 {
        return Ok(response.body);
    }

    warn!("{} returned status {}", url, response.status);
    Err(UrError::Connection {
        url: url.to_string(),
        body: response.body,
    })
}
