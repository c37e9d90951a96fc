use std::fmt;

/// Error type for completion probe operations
/// Implements Clone so reports can carry it by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is missing or blank
    MissingApiKey(String)
  , /// Invalid configuration value
    InvalidConfiguration(String)
  , /// HTTP transport error (connect, DNS, TLS, timeout)
    Http(String)
  , /// Failed to parse API response
    Parse(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// A required response field was absent
    MissingField(String)
  , /// Writing the report failed
    Io(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f, "Missing API key: set {}", var)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Http(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::Parse(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::MissingField(field) => {
              write!(f, "Response is missing field: {}", field)
            }
          , Error::Io(msg) => {
              write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{   fn from(e: std::io::Error) -> Self
    {   Error::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests
{   use super::Error;

    #[test]
    fn display_names_the_missing_variable()
    {   let e = Error::MissingApiKey("TOGETHER_API_KEY".into());
        assert_eq!(
          e.to_string()
        , "Missing API key: set TOGETHER_API_KEY"
        );
    }
}
