use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_upstream(router: Router) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{}", addr))
}

/// Base URL of a port that was bound and released, so connections are refused
pub async fn unreachable_base_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}", addr))
}
