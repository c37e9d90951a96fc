//! Transport seam between the exchange and the network

use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`Transport::send`], keeps the trait object-safe
pub type TransportFuture<'a> = Pin<
  Box<dyn Future<Output = Result<RawResponse, crate::error::Error>>
    + Send + 'a>
>;

/// A fully prepared POST: url, ordered headers, encoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest
{   pub url: String
  , pub headers: Vec<(String, String)>
  , pub body: String
}

impl OutboundRequest
{   /// First header value matching `name`, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str>
    {   self.headers
          .iter()
          .find(|(k, _)| k.eq_ignore_ascii_case(name))
          .map(|(_, v)| v.as_str())
    }
}

/// Status and body exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse
{   pub status: u16
  , pub body: String
}

/// Sends one prepared request.
/// Non-2xx statuses are a normal `Ok` response, only failures
/// to obtain a response at all are errors.
pub trait Transport: Send + Sync
{   fn send(&self, request: OutboundRequest) -> TransportFuture<'_>;
}
