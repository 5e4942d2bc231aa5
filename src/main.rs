use dotenvy::dotenv;
use tracing::{error, info, warn};
use walky_admin::logging::init_tracing;
use walky_admin::metrics::{init_metrics, metrics_app};
use walky_admin::router::init_router;
use walky_admin::state::init_app_state;
use walky_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state()?;

    info!(
        unmapped_route_policy = %state.access_config.unmapped_route_policy,
        "Access control tables validated"
    );

    match init_metrics() {
        Ok(Some(handle)) => {
            let metrics_addr = server_config.metrics_addr();
            tokio::spawn(async move {
                match tokio::net::TcpListener::bind(metrics_addr).await {
                    Ok(listener) => {
                        info!("📊 Metrics available at http://{}/metrics", metrics_addr);
                        if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                            error!(error = %e, "Metrics server stopped");
                        }
                    }
                    Err(e) => {
                        error!(error = %e, addr = %metrics_addr, "Failed to bind metrics listener")
                    }
                }
            });
        }
        Ok(None) => info!("Observability disabled, metrics not exported"),
        Err(e) => warn!(error = %e, "Failed to install Prometheus recorder"),
    }

    let app = init_router(state);
    let listener = tokio::net::TcpListener::bind(server_config.addr()).await?;

    info!("🚀 Server running on http://{}", server_config.addr());
    info!("📖 Scalar UI available at http://{}/scalar", server_config.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
