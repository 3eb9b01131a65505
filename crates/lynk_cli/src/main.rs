mod app;

use anyhow::Result;
use app::App;
use clap::{Parser, Subcommand};
use lynk_core::{LynkConfig, EVENT_RESOURCE_ENRICH};
use lynk_gateway::GatewayServer;
use lynk_memory::EntryType;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "lynk.toml", env = "LYNK_CONFIG")]
    config: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP enrichment gateway
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Enrich one URL and print the resulting context as JSON
    Enrich {
        #[arg(long)]
        url: String,
        #[arg(long)]
        resource_id: Option<String>,
        #[arg(long, default_value = EVENT_RESOURCE_ENRICH)]
        event: String,
        #[arg(long)]
        persona: Option<String>,
        /// Capability to generate (repeatable). Omit to generate everything.
        #[arg(long = "need", value_name = "CAPABILITY")]
        needs: Vec<String>,
        /// Use canned offline responses instead of network providers
        #[arg(long)]
        offline: bool,
    },
    /// Print the number of canonical tags and categories.
    ///
    /// Reads the SQLite store, so `memory.db_path` or LYNK_DB_PATH must be set.
    Stats,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries command output.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = LynkConfig::load_or_default(&args.config);

    match args.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.gateway.host = host;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }

            info!("Initializing Lynk...");
            let app = App::build(&config).await?;
            GatewayServer::new(app.engine, &config.gateway.host, config.gateway.port)
                .serve()
                .await?;
        }
        Command::Enrich {
            url,
            resource_id,
            event,
            persona,
            needs,
            offline,
        } => {
            if offline {
                config.llm.offline = true;
            }
            let needs = app::parse_needs(&needs)?;
            let app = App::build(&config).await?;

            let input = app::enrich_input(url, resource_id, event, persona, needs);
            let context = app.engine.enrich(&input).await?;
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
        Command::Stats => {
            if config.memory.db_path.is_none() {
                anyhow::bail!(
                    "No memory database configured: set memory.db_path in {} or LYNK_DB_PATH",
                    args.config
                );
            }
            let memory = app::build_memory(&config.memory).await?;
            let Some(memory) = memory else {
                anyhow::bail!("Memory is disabled in the config");
            };
            let stats = serde_json::json!({
                "tags": memory.count(EntryType::Tag).await?,
                "categories": memory.count(EntryType::Category).await?,
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
