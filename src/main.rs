use clap::Parser;
use kindred::api::CompareClient;
use kindred::core::config::{self, KindredConfig};
use kindred::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "kindred", about = "Find out what you have in common with someone")]
struct Args {
    /// Base URL of the comparison server (overrides config and KINDRED_SERVER_URL)
    #[arg(short, long)]
    server_url: Option<String>,

    /// Prefill the handle field
    #[arg(long)]
    handle: Option<String>,

    /// Ask the server for its greeting and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is loaded before the logger exists, so a load error is held and logged below
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (KindredConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config, args.server_url.as_deref());

    // File logger, so nothing scribbles over the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Kindred starting up against {}", resolved.server_url);

    if args.check {
        let client = CompareClient::new(resolved.server_url.clone());
        return match client.greeting().await {
            Ok(message) => {
                println!("{}: {}", client.base_url(), message);
                Ok(())
            }
            Err(e) => {
                log::warn!("Server check failed: {}", e);
                Err(std::io::Error::other(format!(
                    "{} is not answering: {}",
                    client.base_url(),
                    e
                )))
            }
        };
    }

    tui::run(resolved, args.handle)
}
