// File: crates/idle-viewer/tests/pipeline.rs
// Purpose: End-to-end runs of the viewer against an in-process HTTP server.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use idle_chart::RenderOptions;
use idle_viewer::{Container, FileContainer, HttpLoader, LoadError, MemoryContainer, Outcome, PlayerLoader, Viewer};

const SCENARIO_A: &str =
    r#"{"alice": {"events": [{"timestamp": 1700000000000, "level": 5, "remaining_time": 86400}]}}"#;

async fn serve(status: StatusCode, body: &'static str) -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/api/players",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, [("content-type", "application/json")], body)
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, hits)
}

fn opts() -> RenderOptions {
    RenderOptions { width: 480, height: 320, ..RenderOptions::default() }
}

fn viewer(addr: SocketAddr) -> Viewer<HttpLoader> {
    let loader = HttpLoader::new(&format!("http://{addr}")).expect("valid base url");
    Viewer::new(loader, opts())
}

#[tokio::test]
async fn single_player_is_rendered_into_container() {
    let (addr, hits) = serve(StatusCode::OK, SCENARIO_A).await;
    let mut container = MemoryContainer::new();

    let outcome = viewer(addr).run(&mut container).await;

    assert_eq!(outcome, Outcome::Rendered { players: 1, series: 2 });
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    let chart = container.chart().expect("chart mounted");
    assert_eq!((chart.width, chart.height), (480, 320));
    assert_eq!(chart.series, 2);
    let img = image::load_from_memory(&chart.png).expect("valid png");
    assert_eq!((img.width(), img.height()), (480, 320));
}

#[tokio::test]
async fn empty_object_renders_chart_without_series() {
    let (addr, _) = serve(StatusCode::OK, "{}").await;
    let mut container = MemoryContainer::new();

    let outcome = viewer(addr).run(&mut container).await;

    assert_eq!(outcome, Outcome::Rendered { players: 0, series: 0 });
    assert!(container.is_mounted());
}

#[tokio::test]
async fn unreachable_server_leaves_container_untouched() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let mut container = MemoryContainer::new();

    let outcome = viewer(addr).run(&mut container).await;

    assert!(matches!(outcome, Outcome::Failed(_)));
    assert!(!container.is_mounted());
}

#[tokio::test]
async fn error_status_is_reported() {
    let (addr, _) = serve(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "boom"}"#).await;
    let loader = HttpLoader::new(&format!("http://{addr}")).expect("valid base url");

    match loader.load().await {
        Err(LoadError::Status { status, .. }) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }

    let mut container = MemoryContainer::new();
    assert!(!viewer(addr).run(&mut container).await.is_rendered());
    assert!(!container.is_mounted());
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let (addr, _) =
        serve(StatusCode::OK, r#"{"alice": {"events": [{"timestamp": 1700000000000, "level": 5}]}}"#).await;
    let loader = HttpLoader::new(&format!("http://{addr}")).expect("valid base url");

    assert!(matches!(loader.load().await, Err(LoadError::Decode { .. })));
}

#[tokio::test]
async fn file_container_receives_png() {
    let (addr, _) = serve(StatusCode::OK, SCENARIO_A).await;
    let dir = std::path::PathBuf::from("target/test_out/pipeline");
    std::fs::create_dir_all(&dir).expect("create out dir");
    let mut container = FileContainer::open(&dir).expect("dir exists");

    let outcome = viewer(addr).run(&mut container).await;

    assert!(outcome.is_rendered());
    let bytes = std::fs::read(container.path()).expect("png written");
    assert!(bytes.starts_with(b"\x89PNG"));
}
