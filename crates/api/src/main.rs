use farmwise_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    farmwise_observability::init();

    let config = ApiConfig::from_env()?;
    let engine = config.load_engine()?;

    let app = farmwise_api::app::build_app(engine);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
