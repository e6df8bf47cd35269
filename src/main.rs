//! folio command-line entry point.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    folio::logging::init(folio::cli::is_verbose());

    folio::cli::run().await
}
