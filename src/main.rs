use clap::Parser;
use trivia::{
    config::Config, db::Db, pagination::Paginator, services::trivia::TriviaService, AppState,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=info,trivia=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let config = Config::parse();

    let db = Db::new(&config.database_url()).await?;
    let state = AppState {
        trivia: TriviaService::new(db, Paginator::new(config.page_size)),
    };
    let routes = trivia::router(state);

    let address = config.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address} with {} questions per page", config.page_size);
    axum::serve(listener, routes).await?;

    Ok(())
}
