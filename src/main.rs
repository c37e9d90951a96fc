use std::process::ExitCode;
use log::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode
{   env_logger::init();

    let config = match tcomplete::ProbeConfig::from_env()
    {   Ok(c) => c
      , Err(e) => {
          eprintln!("{}", e);
          return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match tcomplete::run_probe(&config, &mut stdout).await
    {   Ok(_) => ExitCode::SUCCESS
      , Err(e) => {
          error!("Exchange failed: {}", e);
          eprintln!("{}", e);
          ExitCode::FAILURE
        }
    }
}
