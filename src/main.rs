use anyhow::Result;
use clap::{Parser, Subcommand};
use migratrack::server::{self, MigrateDirection, ServerConfig};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about = "MigraTrack migration engagement tracker")]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve {
        #[clap(short, long, default_value = "3000")]
        port: u16,
        #[clap(short, long, default_value = "migratrack.db")]
        database: String,
        #[clap(long)]
        cors_origin: Option<String>,
        #[clap(long, default_value = "uploads")]
        upload_dir: String,
    },
    /// Run database migrations
    Migrate {
        #[clap(short, long, default_value = "migratrack.db")]
        database: String,
        #[clap(subcommand)]
        direction: MigrateDirection,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    match cli.command {
        Command::Serve {
            port,
            database,
            cors_origin,
            upload_dir,
        } => {
            info!("Starting server on port {}", port);
            let config = ServerConfig {
                port,
                database_path: database,
                cors_origin,
                upload_dir,
            };
            server::start_server(config).await?;
        }
        Command::Migrate {
            database,
            direction,
        } => {
            server::migrate_database(&database, direction).await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
