//! Environment-driven configuration for the completion probe

use std::time::Duration;
use log::{debug, error};

/// Default Together AI completion endpoint
pub const DEFAULT_API_URL: &str
  = "https://api.together.xyz/v1/completions";

pub const API_KEY_VAR: &str = "TOGETHER_API_KEY";
pub const API_URL_VAR: &str = "TOGETHER_API_URL";
pub const TIMEOUT_VAR: &str = "TOGETHER_TIMEOUT_SECS";

/// Probe configuration
#[derive(Clone)]
pub struct ProbeConfig
{   /// Completion endpoint URL
    pub api_url: String
  , /// Bearer token
    pub api_key: String
  , /// Request timeout, transport default when unset
    pub timeout: Option<Duration>
}

impl std::fmt::Debug for ProbeConfig
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("ProbeConfig")
          .field("api_url", &self.api_url)
          .field("api_key", &"<redacted>")
          .field("timeout", &self.timeout)
          .finish()
    }
}

impl ProbeConfig
{   /// Load from the process environment, reading `.env` first
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   match dotenvy::dotenv()
        {   Ok(path) => {
              debug!("Loaded environment from {}", path.display())
            }
          , Err(e) if e.not_found() => {
              debug!("No .env file found")
            }
          , Err(e) => {
              error!("Failed to read .env: {}", e);
              return Err(
                crate::error::Error::InvalidConfiguration(
                  format!(".env: {}", e)
                )
              );
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let api_key = lookup(API_KEY_VAR)
          .map(|k| k.trim().to_string())
          .filter(|k| !k.is_empty())
          .ok_or_else(|| {
            error!("{} is not set", API_KEY_VAR);
            crate::error::Error::MissingApiKey(
              API_KEY_VAR.to_string()
            )
          })?;

        let api_url = lookup(API_URL_VAR)
          .map(|u| u.trim().to_string())
          .filter(|u| !u.is_empty())
          .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR)
        {   None => None
          , Some(raw) => Some(parse_timeout(&raw)?)
        };

        debug!(
          "Resolved config: url={}, timeout={:?}",
          api_url, timeout
        );
        Ok(ProbeConfig
        {   api_url
          , api_key
          , timeout
        })
    }
}

fn parse_timeout(raw: &str)
  -> Result<Duration, crate::error::Error>
{   match raw.trim().parse::<u64>()
    {   Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs))
      , _ => {
          error!("Bad {} value: {:?}", TIMEOUT_VAR, raw);
          Err(crate::error::Error::InvalidConfiguration(
            format!(
              "{} must be a positive integer, got {:?}",
              TIMEOUT_VAR, raw
            )
          ))
        }
    }
}
