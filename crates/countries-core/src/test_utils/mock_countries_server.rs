// src/test_utils/mock_countries_server.rs
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn ok(body: Vec<u8>) -> Self {
        Self { status: 200, body }
    }

    pub fn with_status(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

#[derive(Clone)]
struct MockServerState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    request_count: Arc<Mutex<usize>>,
}

async fn countries_handler(
    axum::extract::State(state): axum::extract::State<MockServerState>,
) -> impl IntoResponse {
    *state.request_count.lock().unwrap() += 1;

    match state.responses.lock().unwrap().pop_front() {
        Some(resp) => {
            log::debug!(
                "Mock countries server sending {} with {} bytes",
                resp.status,
                resp.body.len()
            );
            let status = StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "application/json")], resp.body)
        }
        None => {
            log::error!("Mock countries server ran out of responses!");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::CONTENT_TYPE, "application/json")],
                Vec::new(),
            )
        }
    }
}

pub struct MockCountriesServer {
    addr: SocketAddr,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    request_count: Arc<Mutex<usize>>,
}

impl MockCountriesServer {
    pub async fn start(responses: Vec<MockResponse>) -> Self {
        let state = MockServerState {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            request_count: Arc::new(Mutex::new(0)),
        };
        let request_count = state.request_count.clone();

        let app = Router::new()
            .route("/countries.json", get(countries_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap_or_else(|e| {
            panic!("Failed to bind mock server to 127.0.0.1:0. Error: {}", e);
        });
        let addr = listener.local_addr().unwrap();
        log::info!("Mock countries server listening on {}", addr);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap_or_else(|e| {
                    log::error!("Mock countries server error: {}", e);
                });
        });

        MockCountriesServer {
            addr,
            shutdown_tx,
            request_count,
        }
    }

    pub fn countries_url(&self) -> String {
        format!("http://{}/countries.json", self.addr)
    }

    pub fn request_count(&self) -> usize {
        *self.request_count.lock().unwrap()
    }

    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            log::warn!("Mock countries server shutdown signal already sent or receiver dropped.");
        }
    }
}
