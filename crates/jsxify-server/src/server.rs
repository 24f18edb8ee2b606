//! Playground server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::live::{reply, LiveHub, LiveMessage};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the playground server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory of HTML files watched for changes
    pub src_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("html"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: ServerConfig,
    live: LiveHub,
}

/// Body of `POST /api/convert`.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub html: Option<String>,
}

/// Successful conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub jsx: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Playground server.
pub struct PlaygroundServer {
    config: ServerConfig,
}

impl PlaygroundServer {
    /// Create a new playground server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Start serving until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let address = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = address
            .parse()
            .map_err(|_| ServerError::InvalidAddress(address))?;

        let state = Arc::new(ServerState {
            config: self.config.clone(),
            live: LiveHub::new(),
        });

        let (watcher, mut rx) = FileWatcher::new(&[self.config.src_dir.clone()])
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let watch_state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&watch_state, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state);

        tracing::info!("Starting playground at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: Arc<ServerState>) -> Router {
    let api = Router::new()
        .route("/api/convert", post(convert_handler))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(index_handler))
        .route("/__live", get(ws_handler))
        .nest_service("/src", ServeDir::new(&state.config.src_dir))
        .merge(api)
        .with_state(state)
}

/// Handle file watch events.
async fn handle_watch_event(state: &ServerState, event: WatchEvent) {
    match event {
        WatchEvent::HtmlChanged(path) => {
            tracing::info!("HTML modified: {}", path.display());
            state
                .live
                .send(file_message(&state.config.src_dir, &path).await);
        }
        WatchEvent::HtmlRemoved(path) => {
            tracing::debug!("HTML removed: {}", path.display());
        }
    }
}

/// Convert a watched file into the message broadcast to clients.
async fn file_message(src_dir: &Path, path: &Path) -> LiveMessage {
    let relative = path
        .strip_prefix(src_dir)
        .unwrap_or(path)
        .display()
        .to_string();

    let html = match tokio::fs::read_to_string(path).await {
        Ok(html) => html,
        Err(e) => {
            return LiveMessage::Error {
                message: format!("{}: {}", relative, e),
            }
        }
    };

    match jsxify::convert(html.as_str()) {
        Ok(jsx) => LiveMessage::FileConverted {
            path: relative,
            jsx,
        },
        Err(e) => {
            tracing::warn!("Failed to convert {}: {}", relative, e);
            LiveMessage::Error {
                message: format!("{}: {}", relative, e),
            }
        }
    }
}

/// Handler for the playground page.
async fn index_handler() -> impl IntoResponse {
    Html(PLAYGROUND_PAGE)
}

/// Handler for `POST /api/convert`.
async fn convert_handler(Json(request): Json<ConvertRequest>) -> Response {
    match jsxify::convert(request.html.as_deref()) {
        Ok(jsx) => Json(ConvertResponse { jsx }).into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Handler for the live WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
///
/// Answers `convert` requests from the client and forwards broadcasts from
/// the file watcher.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.live.subscribe();

    if !send(&mut socket, &LiveMessage::Connected).await {
        return;
    }

    loop {
        tokio::select! {
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if !send(&mut socket, &reply(text.as_str())).await {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            broadcast = rx.recv() => match broadcast {
                Ok(msg) => {
                    if !send(&mut socket, &msg).await {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Live client lagged by {} messages", skipped);
                }
                Err(RecvError::Closed) => break,
            },
        }
    }
}

/// Send a message, returning false once the socket is unusable.
async fn send(socket: &mut WebSocket, msg: &LiveMessage) -> bool {
    let json = match serde_json::to_string(msg) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode live message: {}", e);
            return true;
        }
    };
    socket.send(Message::Text(json.into())).await.is_ok()
}

const PLAYGROUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>jsxify playground</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem; }
    main { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    textarea, pre { width: 100%; min-height: 60vh; box-sizing: border-box; font-family: ui-monospace, monospace; font-size: 0.9rem; }
    pre { background: #f5f5f5; padding: 1rem; border-radius: 0.5rem; overflow: auto; margin: 0; }
    .error { color: #b00020; }
    #files li { font-family: ui-monospace, monospace; }
  </style>
</head>
<body>
  <h1>jsxify</h1>
  <main>
    <textarea id="html" placeholder="Paste HTML here"></textarea>
    <pre id="jsx"></pre>
  </main>
  <h2>Watched files</h2>
  <ul id="files"></ul>
  <script>
    (function() {
      'use strict';

      const input = document.getElementById('html');
      const output = document.getElementById('jsx');
      const files = document.getElementById('files');
      const ws = new WebSocket('ws://' + location.host + '/__live');

      function show(text, isError) {
        output.textContent = text;
        output.className = isError ? 'error' : '';
      }

      input.addEventListener('input', function() {
        if (ws.readyState === WebSocket.OPEN) {
          ws.send(JSON.stringify({ type: 'convert', html: input.value }));
        }
      });

      ws.onmessage = function(event) {
        const msg = JSON.parse(event.data);

        switch (msg.type) {
          case 'converted':
            show(msg.jsx || '', false);
            break;

          case 'file_converted': {
            const item = document.createElement('li');
            item.textContent = msg.path;
            item.title = msg.jsx || '';
            item.onclick = function() { show(msg.jsx || '', false); };
            files.prepend(item);
            break;
          }

          case 'error':
            show(msg.message, true);
            break;
        }
      };

      ws.onclose = function() {
        show('Disconnected from server', true);
      };
    })();
  </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = PlaygroundServer::new(ServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert_eq!(server.config.src_dir, PathBuf::from("html"));
    }

    #[tokio::test]
    async fn converts_posted_html() {
        let response = convert_handler(Json(ConvertRequest {
            html: Some(r#"<label for="a">A</label>"#.to_string()),
        }))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "jsx": r#"<label htmlFor="a">A</label>"# })
        );
    }

    #[tokio::test]
    async fn blank_html_converts_to_null() {
        let response = convert_handler(Json(ConvertRequest { html: None })).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "jsx": null }));
    }

    #[tokio::test]
    async fn converts_watched_files() {
        let temp = tempdir().unwrap();
        let page = temp.path().join("card.html");
        fs::write(&page, r#"<div class="card"></div>"#).unwrap();

        assert_eq!(
            file_message(temp.path(), &page).await,
            LiveMessage::FileConverted {
                path: "card.html".to_string(),
                jsx: Some(r#"<div className="card" />"#.to_string()),
            }
        );
    }

    #[tokio::test]
    async fn unreadable_watched_file_is_an_error() {
        let temp = tempdir().unwrap();
        let message = file_message(temp.path(), &temp.path().join("gone.html")).await;

        assert!(matches!(message, LiveMessage::Error { .. }));
    }

    #[tokio::test]
    async fn broadcasts_watch_events() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.html"), "<p>a</p>").unwrap();

        let state = ServerState {
            config: ServerConfig {
                src_dir: temp.path().to_path_buf(),
                ..Default::default()
            },
            live: LiveHub::new(),
        };
        let mut rx = state.live.subscribe();

        handle_watch_event(
            &state,
            WatchEvent::HtmlChanged(temp.path().join("a.html")),
        )
        .await;

        assert_eq!(
            rx.recv().await.unwrap(),
            LiveMessage::FileConverted {
                path: "a.html".to_string(),
                jsx: Some("<p>a</p>".to_string()),
            }
        );
    }
}
