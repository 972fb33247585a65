use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

use crate::client::traits::{HttpResponse, Transport};
use crate::client::types::ClientConfig;
use crate::error::Result;

/// Long-lived HTTP session shared by every request of a process.
///
/// Build it once where the process starts, lend it to [`RequestSender`]s by
/// reference, and drop it to close the connection pool.
///
/// [`RequestSender`]: crate::client::RequestSender
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn read(response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Received status {} with {} bytes", status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for Session {
    async fn post<F>(&self, url: &str, form: &F) -> Result<HttpResponse>
    where
        F: Serialize + Send + Sync + ?Sized,
    {
        let response = self.client.post(url).form(form).send().await?;
        Self::read(response).await
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }
}
