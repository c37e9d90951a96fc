use std::time::Duration;
use log::{debug, trace, error};

use crate::transport::{
  OutboundRequest, RawResponse, Transport, TransportFuture
};

/// reqwest-backed transport for the Together completion endpoint
pub struct TogetherTransport
{   http_client: reqwest::Client
}

impl TogetherTransport
{   /// Create a transport, `timeout` of `None` keeps reqwest defaults
    pub fn new(timeout: Option<Duration>)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating TogetherTransport, timeout={:?}", timeout);
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout
        {   builder = builder.timeout(t);
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::Http(e.to_string())
        })?;
        Ok(TogetherTransport { http_client })
    }

    async fn post(
      &self
    , request: OutboundRequest
    ) -> Result<RawResponse, crate::error::Error>
    {   debug!("POST {}", request.url);
        trace!("Request body: {}", request.body);

        let mut call = self.http_client.post(&request.url);
        for (name, value) in &request.headers
        {   call = call.header(name.as_str(), value.as_str());
        }

        let response = call
          .body(request.body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::Http(e.to_string())
          })?;

        let status = response.status();
        trace!("Response status: {}", status);

        let body = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          crate::error::Error::Http(e.to_string())
        })?;

        Ok(RawResponse
        {   status: status.as_u16()
          , body
        })
    }
}

impl Transport for TogetherTransport
{   fn send(&self, request: OutboundRequest) -> TransportFuture<'_>
    {   Box::pin(self.post(request))
    }
}
