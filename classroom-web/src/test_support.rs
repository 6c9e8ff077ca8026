//! In-process stand-in for the REST backend used by the native test suite.

use crate::api::ApiClient;
use crate::token::{MemoryTokenStore, TokenVault};
use axum::Router;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::{self, Next};
use axum::response::Response;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Traffic {
    hits: Arc<AtomicUsize>,
    authorizations: Arc<Mutex<Vec<Option<String>>>>,
}

/// A running fake backend. The server task lives until the test runtime shuts down.
pub struct FakeBackend {
    pub base_url: String,
    traffic: Traffic,
}

impl FakeBackend {
    /// Serves `routes` under `/api` on an ephemeral port.
    pub async fn start(routes: Router) -> Self {
        let traffic = Traffic::default();
        let app = Router::new()
            .nest("/api", routes)
            .layer(middleware::from_fn_with_state(traffic.clone(), record));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("fake backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend stopped");
        });
        Self {
            base_url: format!("http://{addr}/api"),
            traffic,
        }
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.traffic.hits.load(Ordering::SeqCst)
    }

    /// `Authorization` header of every request, in arrival order.
    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.traffic
            .authorizations
            .lock()
            .expect("authorizations lock")
            .clone()
    }

    /// A client for this backend over an in-memory token store.
    pub fn client(&self, store: &MemoryTokenStore) -> ApiClient {
        ApiClient::new(&self.base_url, TokenVault::new(store.clone()))
    }
}

async fn record(State(traffic): State<Traffic>, request: Request, next: Next) -> Response {
    traffic.hits.fetch_add(1, Ordering::SeqCst);
    let authorization = header_text(request.headers(), "authorization");
    traffic
        .authorizations
        .lock()
        .expect("authorizations lock")
        .push(authorization);
    next.run(request).await
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// A client pointed at a port nothing listens on.
pub fn unreachable_client(store: &MemoryTokenStore) -> ApiClient {
    ApiClient::new("http://127.0.0.1:9/api", TokenVault::new(store.clone()))
}
