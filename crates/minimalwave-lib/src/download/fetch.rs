use super::types::RemoteBody;
use crate::error::MinimalWaveError;
use crate::identifier::Identifier;
use futures::{StreamExt, TryStreamExt};
use reqwest::{Client, StatusCode};
use std::future::Future;
use url::Url;

/// Issues the single request for a recording.
pub trait Fetch {
    fn fetch(
        &self,
        identifier: &Identifier,
    ) -> impl Future<Output = Result<RemoteBody, MinimalWaveError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(base_url: Url, user_agent: &str) -> Result<Self, MinimalWaveError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, identifier: &Identifier) -> Result<RemoteBody, MinimalWaveError> {
        let url = identifier.download_url(&self.base_url)?;
        tracing::debug!(identifier = %identifier, url = %url, "Requesting recording");

        let response = self.client.get(url.clone()).send().await?;
        if response.status() != StatusCode::OK {
            return Err(MinimalWaveError::UnexpectedStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let content_length = response.content_length();
        tracing::debug!(url = %url, content_length = ?content_length, "Connected");

        Ok(RemoteBody {
            content_length,
            chunks: response
                .bytes_stream()
                .map_err(MinimalWaveError::from)
                .boxed(),
        })
    }
}
