//! End-to-end tests against real sockets.

use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use monkeylines::generator::{Exchange, PLACEHOLDER};

mod common;

async fn read_tcp_line(addr: std::net::SocketAddr) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let mut buf = String::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_string(&mut buf))
        .await
        .expect("server did not close the connection")
        .unwrap();
    buf
}

#[tokio::test]
async fn tcp_client_gets_exactly_one_line() {
    let server = common::TestServer::start().await;

    let text = read_tcp_line(server.tcp).await;
    assert!(text.ends_with('\n'), "{text:?}");
    assert_eq!(text.lines().count(), 1, "{text:?}");
    let line = text.trim_end_matches('\n');
    assert!(!line.contains(PLACEHOLDER));
    assert!(common::sentences().contains(line), "not a corpus line: {line:?}");

    server.stop().await;
}

#[tokio::test]
async fn tcp_serves_many_clients_concurrently() {
    let server = common::TestServer::start().await;

    let sentences = common::sentences();
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..50 {
        let addr = server.tcp;
        tasks.spawn(async move { read_tcp_line(addr).await });
    }
    while let Some(result) = tasks.join_next().await {
        let text = result.unwrap();
        assert_eq!(text.matches('\n').count(), 1, "{text:?}");
        assert!(sentences.contains(text.trim_end_matches('\n')), "{text:?}");
    }

    server.stop().await;
}

#[tokio::test]
async fn http_exchange_over_the_wire() {
    let server = common::TestServer::start().await;
    let client = common::client();

    let res = client.get(server.url("/exchange")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    let exchange: Exchange = res.json().await.unwrap();
    assert!(!exchange.insult.is_empty());
    assert!(!exchange.comeback.is_empty());

    let res = client.get(server.url("/line")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert_eq!(body.matches('\n').count(), 1);

    server.stop().await;
}

#[tokio::test]
async fn index_advertises_the_bound_tcp_port() {
    let server = common::TestServer::start().await;
    assert_ne!(server.tcp.port(), 0);

    let body = common::client()
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let hint = format!("telnet 127.0.0.1 {}", server.tcp.port());
    assert!(body.contains(&hint), "missing {hint:?} in page");

    server.stop().await;
}

#[tokio::test]
async fn shutdown_stops_accepting() {
    let server = common::TestServer::start().await;
    let (http, tcp) = (server.http, server.tcp);

    assert!(!read_tcp_line(tcp).await.is_empty());
    server.stop().await;

    assert!(TcpStream::connect(tcp).await.is_err(), "TCP still accepting");
    assert!(TcpStream::connect(http).await.is_err(), "HTTP still accepting");
}

#[tokio::test]
async fn startup_fails_on_taken_port() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let mut config = common::local_config();
    config.listener.tcp_bind_address = taken.local_addr().unwrap().to_string();

    let err = monkeylines::lifecycle::Services::start(config).await.err().unwrap();
    assert!(matches!(err, monkeylines::lifecycle::StartupError::TcpBind(_)));
}
