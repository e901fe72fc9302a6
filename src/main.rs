use clap::Parser;
use quill::client::{AuthService, HttpAuthService, InMemoryUsers, LocalAuthService};
use quill::core::config::{self, CliOverrides};
use quill::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "quill", about = "Terminal journaling client")]
struct Args {
    /// Base URL of the journal server
    #[arg(short, long)]
    server: Option<String>,

    /// Sign in against built-in demo accounts instead of a server
    #[arg(long)]
    offline: bool,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().map_err(|e| io::Error::other(e.to_string()))?;
    let config = config::resolve(
        &file_config,
        &CliOverrides {
            server_url: args.server,
            offline: args.offline,
            log_file: args.log_file,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    log::info!("Quill starting up with config: {:?}", config);

    let (service, label): (Arc<dyn AuthService>, String) = if config.offline {
        (
            Arc::new(LocalAuthService::new(InMemoryUsers::with_demo_users())),
            "offline (demo accounts)".to_string(),
        )
    } else {
        let service = HttpAuthService::new(config.server_url.clone())
            .map_err(|e| io::Error::other(e.to_string()))?;
        (Arc::new(service), config.server_url.clone())
    };

    tui::run(service, label)
}
