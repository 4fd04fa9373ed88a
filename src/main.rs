use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use nilai::{tui, ChatSession, Commands, Container, ProxyClient, ProxyConfig};

#[derive(Parser)]
#[command(name = "nilai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // The full-screen client owns the terminal, so it gets no log output.
    if !matches!(cli.command, Commands::Chat { .. }) {
        let level = if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    match cli.command {
        Commands::Serve { port, public } => {
            let config = ProxyConfig::from_env()
                .context("refusing to start without provider credentials")?
                .with_port(port)
                .with_public(public);

            let listener = tokio::net::TcpListener::bind(config.bind_addr())
                .await
                .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

            let container = Arc::new(Container::new(&config));
            nilai::serve(listener, container, async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutting down");
            })
            .await?;
        }

        Commands::Chat { server } => {
            tui::run(Arc::new(ProxyClient::new(server))).await?;
        }

        Commands::Send { message, server } => {
            let client = ProxyClient::new(server);
            let mut session = ChatSession::new();

            if !session.submit(&client, &message).await {
                anyhow::bail!("Message is empty");
            }

            if let Some(reply) = session.conversation().latest() {
                println!("{}", reply.text());
            }
            if let Some(error) = session.last_error() {
                anyhow::bail!("{}", error);
            }
        }
    }

    Ok(())
}
