use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use codex::api::Codex;
use codex::core::config;
use codex::core::state::SharedState;

#[derive(Parser)]
#[command(name = "codex", about = "Client for the Codex document assistant backend")]
struct Args {
    /// Backend base URL (overrides config file and CODEX_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Documents to upload
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to codex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("codex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let loaded = config::load_config()?;
    let resolved = config::resolve(&loaded, args.base_url.as_deref());

    log::info!("Codex starting up against {}", resolved.base_url);

    let state = SharedState::new();
    let client = Codex::new(resolved.base_url, state.clone());

    // Probe in the background; uploads are allowed to race it.
    let probe = client.spawn_connect();
    log::info!("Codex ready!");

    for path in &args.files {
        match client.upload_file(path).await {
            Some(response) => println!("{}: {response}", path.display()),
            None => println!("{}: upload failed (see codex.log)", path.display()),
        }
    }

    let _ = probe.await;
    println!(
        "backend {}: {}",
        client.base_url(),
        if state.connected() {
            "connected"
        } else {
            "not connected"
        }
    );

    Ok(())
}
