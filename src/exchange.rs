//! One request/response exchange against a completion endpoint

use std::io::Write;
use log::{debug, error, info};

use crate::request::{first_choice_text, CompletionRequest};
use crate::transport::{OutboundRequest, RawResponse, Transport};

pub const USER_AGENT: &str
  = concat!("tcomplete/", env!("CARGO_PKG_VERSION"));

/// What one exchange produced
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeReport
{   pub status: u16
  , pub body: String
  , /// Extracted `choices[0].text`, or why it could not be read
    pub output: Result<String, crate::error::Error>
}

/// Sends a completion request once and reports the outcome.
/// Holds no per-call state, so repeated runs are independent.
pub struct Exchange<T: Transport>
{   transport: T
  , api_url: String
  , api_key: String
}

impl<T: Transport> Exchange<T>
{   pub fn new(
      transport: T
    , api_url: impl Into<String>
    , api_key: impl Into<String>
    ) -> Self
    {   Exchange
        {   transport
          , api_url: api_url.into()
          , api_key: api_key.into()
        }
    }

    /// Build an exchange from resolved configuration
    pub fn from_config(
      transport: T
    , config: &crate::config::ProbeConfig
    ) -> Self
    {   Exchange::new(
          transport
        , config.api_url.clone()
        , config.api_key.clone()
        )
    }

    /// Validate and encode `request` into the POST the transport
    /// will send
    pub fn prepare(
      &self
    , request: &CompletionRequest
    ) -> Result<OutboundRequest, crate::error::Error>
    {   request.validate()?;
        let body = serde_json::to_string(request).map_err(|e| {
          error!("Failed to encode request: {}", e);
          crate::error::Error::Parse(e.to_string())
        })?;

        Ok(OutboundRequest
        {   url: self.api_url.clone()
          , headers: vec![
              ( "Authorization".to_string()
              , format!("Bearer {}", self.api_key)
              )
            , ( "Content-Type".to_string()
              , "application/json".to_string()
              )
            , ( "User-Agent".to_string()
              , USER_AGENT.to_string()
              )
            ]
          , body
        })
    }

    /// Send the request, print status, raw body and extracted text
    /// to `out`. Parse failures are printed, transport failures
    /// are returned.
    pub async fn run<W: Write>(
      &self
    , request: &CompletionRequest
    , out: &mut W
    ) -> Result<ExchangeReport, crate::error::Error>
    {   debug!("Running exchange for model: {}", request.model);
        let outbound = self.prepare(request)?;

        let RawResponse { status, body }
          = self.transport.send(outbound).await?;
        info!("Completion endpoint answered {}", status);

        writeln!(out, "STATUS CODE: {}", status)?;
        writeln!(out, "RAW RESPONSE: {}", body)?;

        let output = first_choice_text(&body);
        match &output
        {   Ok(text) => {
              writeln!(out, "OUTPUT: {}", text)?;
            }
          , Err(e) => {
              error!("Could not extract completion: {}", e);
              writeln!(out, "Error parsing response: {}", e)?;
            }
        }
        out.flush()?;

        Ok(ExchangeReport
        {   status
          , body
          , output
        })
    }
}
