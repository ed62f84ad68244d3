//! API server lifecycle: bind, spawn the axum server in a background
//! task, return a handle with a shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::api_router;
use crate::core_state::CoreState;

/// Handle to a running API server.
pub struct ApiServer {
    pub addr: SocketAddr,
    pub started_at: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ApiServer {
    /// Signal graceful shutdown. In-flight requests are allowed to finish.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Signal shutdown and wait for the server task to exit.
    pub async fn stop(mut self) {
        self.shutdown();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("API server task failed: {e}");
            }
        }
    }
}

/// Start the API server on `addr`. Port 0 picks an ephemeral port.
pub async fn start_api_server(core: Arc<CoreState>, addr: SocketAddr) -> Result<ApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind API server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = api_router(core);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        addr,
        started_at: chrono::Utc::now().to_rfc3339(),
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;
    use std::time::Duration;

    use super::*;
    use crate::config::AppConfig;

    fn core_for(encyclopedia: &str, http_timeout_secs: u64) -> Arc<CoreState> {
        let config = AppConfig {
            summary_url: format!("http://{encyclopedia}/page/summary"),
            search_url: format!("http://{encyclopedia}/w/api.php"),
            http_timeout_secs,
            thinking_delay: Duration::ZERO,
            ..AppConfig::default()
        };
        Arc::new(CoreState::from_config(&config).unwrap())
    }

    fn test_core() -> Arc<CoreState> {
        core_for("127.0.0.1:9", 1)
    }

    /// Encyclopedia stand-in that answers every request with a late 404.
    async fn spawn_slow_encyclopedia(delay: Duration) -> SocketAddr {
        let slow = move || async move {
            tokio::time::sleep(delay).await;
            axum::http::StatusCode::NOT_FOUND
        };
        let app = axum::Router::new()
            .route("/page/summary/:title", axum::routing::get(slow))
            .route("/w/api.php", axum::routing::get(slow));

        let listener = tokio::net::TcpListener::bind(loopback()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn loopback() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let server = start_api_server(test_core(), loopback())
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);
        assert!(!server.started_at.is_empty());

        let url = format!("http://{}/api/health", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        drop(resp);

        server.stop().await;
        assert!(reqwest::get(&url).await.is_err());
    }

    #[tokio::test]
    async fn conversation_over_http() {
        let server = start_api_server(test_core(), loopback()).await.unwrap();
        let base = format!("http://{}/api", server.addr);
        let client = reqwest::Client::new();

        let created: serde_json::Value = client
            .post(format!("{base}/conversations"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["conversation_id"].as_str().unwrap();

        let reply: serde_json::Value = client
            .post(format!("{base}/conversations/{id}/messages"))
            .json(&serde_json::json!({"message": "I have chest pain"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            reply["reply"]["text"],
            crate::knowledge::replies::EMERGENCY_MESSAGE
        );

        server.stop().await;
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let server = start_api_server(test_core(), loopback()).await.unwrap();
        let err = start_api_server(test_core(), server.addr).await.err().unwrap();
        assert!(err.contains("Failed to bind"));
        server.stop().await;
    }

    #[tokio::test]
    async fn disconnected_client_still_gets_reply_in_transcript() {
        let encyclopedia = spawn_slow_encyclopedia(Duration::from_millis(500)).await;
        let server = start_api_server(core_for(&encyclopedia.to_string(), 5), loopback())
            .await
            .unwrap();
        let base = format!("http://{}/api", server.addr);

        let created: serde_json::Value = reqwest::Client::new()
            .post(format!("{base}/conversations"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["conversation_id"].as_str().unwrap().to_string();

        // Give up long before the lookup can finish.
        let impatient = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let sent = impatient
            .post(format!("{base}/conversations/{id}/messages"))
            .json(&serde_json::json!({"message": "sprained ankle"}))
            .send()
            .await;
        assert!(sent.is_err());

        let mut messages = Vec::new();
        for _ in 0..50 {
            let transcript: serde_json::Value = reqwest::get(format!("{base}/conversations/{id}/messages"))
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            messages = transcript["messages"].as_array().cloned().unwrap_or_default();
            if messages.len() == 3 && transcript["responding"] == false {
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["text"], "sprained ankle");
        assert_eq!(
            messages[2]["text"],
            crate::knowledge::replies::DEFAULT_RESPONSE
        );

        server.stop().await;
    }
}
