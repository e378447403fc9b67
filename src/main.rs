use url_ttl_shortener::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    server::init_tracing(&config);
    config.print_summary();

    server::run(config).await
}
