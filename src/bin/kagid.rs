use std::sync::Arc;

use clap::Parser;
use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

use kagi::client::OAuth2Client;
use kagi::http::server::Server;
use kagi::util::cli::Options;

async fn kagid(opts: Options) -> Result<(), Box<dyn std::error::Error>> {
    let config = opts.client_config();
    config.validate()?;

    let client = Arc::new(OAuth2Client::new(config)?);
    let server = Server::new(client);
    server.serve(opts.listen_addr()).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Options::parse();
    if let Err(e) = kagid(opts).await {
        event!(Level::ERROR, error = %e, "kagid stopped");
        std::process::exit(1);
    }
}
