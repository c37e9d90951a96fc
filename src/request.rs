//! Completion request body and response text extraction

use serde::Serialize;
use log::error;

pub const PROBE_MODEL: &str = "openai/gpt-oss-20b";
pub const PROBE_PROMPT: &str
  = "Explain the stock market in simple words.";
pub const PROBE_MAX_TOKENS: u32 = 200;
pub const PROBE_TEMPERATURE: f64 = 0.7;

/// Accepted sampling temperature range, inclusive
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 2.0);
/// Accepted generation limit range, inclusive
pub const MAX_TOKENS_RANGE: (u32, u32) = (50, 4000);

/// Text completion request body
/// Field order is the wire order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest
{   /// Remote model identifier
    pub model: String
  , /// The prompt text
    pub prompt: String
  , /// Upper bound on generated tokens
    pub max_tokens: u32
  , /// Sampling temperature
    pub temperature: f64
}

impl CompletionRequest
{   /// Build a request, rejecting out-of-range sampling values
    pub fn new(
      model: impl Into<String>
    , prompt: impl Into<String>
    , max_tokens: u32
    , temperature: f64
    ) -> Result<Self, crate::error::Error>
    {   let request = CompletionRequest
        {   model: model.into()
          , prompt: prompt.into()
          , max_tokens
          , temperature
        };
        request.validate()?;
        Ok(request)
    }

    /// The fixed request this probe sends
    pub fn probe() -> Self
    {   CompletionRequest
        {   model: PROBE_MODEL.to_string()
          , prompt: PROBE_PROMPT.to_string()
          , max_tokens: PROBE_MAX_TOKENS
          , temperature: PROBE_TEMPERATURE
        }
    }

    /// Check model, temperature and token limit are sendable
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.model.trim().is_empty()
        {   return Err(invalid("model must not be empty".into()));
        }
        let (t_lo, t_hi) = TEMPERATURE_RANGE;
        // NaN fails both comparisons, so test inclusion
        if !(self.temperature >= t_lo && self.temperature <= t_hi)
        {   return Err(invalid(format!(
              "temperature must be within [{}, {}], got {}",
              t_lo, t_hi, self.temperature
            )));
        }
        let (m_lo, m_hi) = MAX_TOKENS_RANGE;
        if self.max_tokens < m_lo || self.max_tokens > m_hi
        {   return Err(invalid(format!(
              "max_tokens must be within [{}, {}], got {}",
              m_lo, m_hi, self.max_tokens
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> crate::error::Error
{   error!("Rejected completion request: {}", msg);
    crate::error::Error::InvalidConfiguration(msg)
}

/// Decode a raw body and return `choices[0].text`.
/// Only the first choice is inspected; other choices and
/// unknown fields are ignored. A non-string `text` is
/// rendered as its JSON value.
pub fn first_choice_text(body: &str)
  -> Result<String, crate::error::Error>
{   let value: serde_json::Value = serde_json::from_str(body)
      .map_err(|e| crate::error::Error::Parse(e.to_string()))?;

    let choices = value.get("choices")
      .ok_or_else(|| {
        crate::error::Error::MissingField("choices".into())
      })?
      .as_array()
      .ok_or_else(|| {
        crate::error::Error::Parse("choices is not an array".into())
      })?;

    let first = choices.first()
      .ok_or(crate::error::Error::NoChoicesInResponse)?;

    match first.get("text")
    {   Some(serde_json::Value::String(text)) => Ok(text.clone())
      , Some(other) => Ok(other.to_string())
      , None => Err(crate::error::Error::MissingField(
          "choices[0].text".into()
        ))
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::error::Error;

    #[test]
    fn probe_request_serializes_in_wire_order()
    {   let json = serde_json::to_string(
          &CompletionRequest::probe()
        ).unwrap();
        assert_eq!(
          json
        , r#"{"model":"openai/gpt-oss-20b","prompt":"Explain the stock market in simple words.","max_tokens":200,"temperature":0.7}"#
        );
    }

    #[test]
    fn probe_request_is_within_limits()
    {   assert_eq!(CompletionRequest::probe().validate(), Ok(()));
    }

    #[test]
    fn new_accepts_range_bounds()
    {   assert!(CompletionRequest::new("m", "p", 50, 0.0).is_ok());
        assert!(CompletionRequest::new("m", "p", 4000, 2.0).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_values()
    {   let cases = [
          (200, -0.1)
        , (200, 2.5)
        , (200, f64::NAN)
        , (49, 0.7)
        , (4001, 0.7)
        , (0, 0.7)
        ];
        for (max_tokens, temperature) in cases
        {   assert!(matches!(
              CompletionRequest::new("m", "p", max_tokens, temperature)
            , Err(Error::InvalidConfiguration(_))
            ), "accepted max_tokens={} temperature={}", max_tokens, temperature);
        }
    }

    #[test]
    fn new_rejects_blank_model()
    {   assert!(matches!(
          CompletionRequest::new("  ", "p", 200, 0.7)
        , Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn reads_first_choice()
    {   let body = r#"{"id":"x","choices":[{"text":"a","index":0,"finish_reason":"length"},{"text":"b"}]}"#;
        assert_eq!(first_choice_text(body).unwrap(), "a");
    }

    #[test]
    fn later_choices_may_differ_in_shape()
    {   let body = r#"{"choices":[{"text":"a"},{"message":{"content":"b"}}]}"#;
        assert_eq!(first_choice_text(body).unwrap(), "a");
    }

    #[test]
    fn provider_fields_of_any_type_are_ignored()
    {   let body = r#"{"choices":[{"text":"a","index":"0","logprobs":{"tokens":[]},"finish_reason":7}],"usage":null}"#;
        assert_eq!(first_choice_text(body).unwrap(), "a");
    }

    #[test]
    fn non_string_text_is_rendered_as_json()
    {   assert_eq!(
          first_choice_text(r#"{"choices":[{"text":null}]}"#).unwrap()
        , "null"
        );
        assert_eq!(
          first_choice_text(r#"{"choices":[{"text":5}]}"#).unwrap()
        , "5"
        );
    }

    #[test]
    fn rejects_non_json()
    {   assert!(matches!(
          first_choice_text("not json")
        , Err(Error::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_choices()
    {   assert_eq!(
          first_choice_text(r#"{"choices":[]}"#)
        , Err(Error::NoChoicesInResponse)
        );
    }

    #[test]
    fn reports_missing_keys()
    {   assert_eq!(
          first_choice_text(r#"{"error":{"message":"bad key"}}"#)
        , Err(Error::MissingField("choices".into()))
        );
        assert_eq!(
          first_choice_text(r#"{"choices":[{"message":{}}]}"#)
        , Err(Error::MissingField("choices[0].text".into()))
        );
    }

    #[test]
    fn rejects_choices_that_are_not_a_list()
    {   assert!(matches!(
          first_choice_text(r#"{"choices":"nope"}"#)
        , Err(Error::Parse(_))
        ));
        assert!(matches!(
          first_choice_text(r#"{"choices":null}"#)
        , Err(Error::Parse(_))
        ));
    }
}
