use backend::{AppState, PREDICT_PATH, config::Args, create_router};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let trajectory = args.trajectory()?;
    tracing::info!(
        "synthetic trajectories: {} points, {} km apart",
        trajectory.points(),
        trajectory.step_km()
    );

    let app = create_router(AppState { trajectory });

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    tracing::info!("prediction stub on http://{}{PREDICT_PATH}", args.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
