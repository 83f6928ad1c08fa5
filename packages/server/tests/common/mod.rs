// Shared test helpers: a throwaway Firecrawl stand-in served by axum.

use axum::{extract::State, http::StatusCode, routing::post, Router};
use firecrawl_client::{FirecrawlClient, FirecrawlConfig};
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

pub struct MockFirecrawl {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl MockFirecrawl {
    /// Serve `body` with `status` for every `POST /v1/scrape`
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route(
                "/v1/scrape",
                post(move |State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }),
            )
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

        Self { addr, hits }
    }

    pub fn client(&self) -> FirecrawlClient {
        client_for(self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn client_for(addr: SocketAddr) -> FirecrawlClient {
    FirecrawlClient::new(FirecrawlConfig::with_api_url(
        "fc-test-key",
        format!("http://{}", addr),
    ))
}

/// Address nothing is listening on
pub async fn refused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}
