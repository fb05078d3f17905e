use dioxus_logger::tracing::{self, Level};

use eco::server::{config::Config, error::Error, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run().await {
        tracing::error!("Server stopped with error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    startup::serve(config).await
}
