pub mod error;
pub mod config;
pub mod request;
pub mod transport;
pub mod providers;
pub mod exchange;

/*

tcomplete sends one text-completion request to Together AI and
prints what came back: the status, the raw body, and choices[0].text.

tcomplete/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and run_probe
│   ├── main.rs         # Binary: logger, config, one exchange
│   ├── error.rs        # Error enum
│   ├── config.rs       # TOGETHER_* environment configuration
│   ├── request.rs      # Request/response body types
│   ├── transport.rs    # Transport trait and raw request/response
│   ├── exchange.rs     # Send once, print, extract
│   └── providers/
│       ├── mod.rs
│       └── together.rs # reqwest transport
└── tests/              # Mock-transport and wiremock tests

*/

pub use config::ProbeConfig;
pub use error::Error;
pub use exchange::{Exchange, ExchangeReport};
pub use request::{first_choice_text, CompletionRequest};
pub use transport::{OutboundRequest, RawResponse, Transport};

/// Run the fixed probe request against the live endpoint,
/// writing the result lines to `out`
pub async fn run_probe<W: std::io::Write>(
  config: &ProbeConfig
, out: &mut W
) -> Result<ExchangeReport, Error>
{   let transport
      = providers::TogetherTransport::new(config.timeout)?;
    let exchange = Exchange::from_config(transport, config);
    exchange.run(&CompletionRequest::probe(), out).await
}
