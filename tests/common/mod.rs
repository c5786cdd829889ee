//! Shared utilities for integration and load testing.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use monkeylines::generator::{self, Template, Theme};
use monkeylines::lifecycle::Services;
use monkeylines::MonkeyConfig;

/// Config bound to ephemeral loopback ports.
#[allow(dead_code)]
pub fn local_config() -> MonkeyConfig {
    let mut config = MonkeyConfig::default();
    config.listener.http_bind_address = "127.0.0.1:0".into();
    config.listener.tcp_bind_address = "127.0.0.1:0".into();
    config.timeouts.shutdown_grace_secs = 2;
    config
}

/// Both servers running in the background.
#[allow(dead_code)]
pub struct TestServer {
    pub http: SocketAddr,
    pub tcp: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(local_config()).await
    }

    pub async fn start_with(config: MonkeyConfig) -> Self {
        let services = Services::start(config).await.unwrap();
        let http = services.http_addr().unwrap();
        let tcp = services.tcp_addr().unwrap();

        let (stop, stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(services.serve_until(async {
            let _ = stopped.await;
        }));

        Self { http, tcp, stop, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.http, path)
    }

    /// Signal shutdown and wait for both servers to finish.
    pub async fn stop(self) {
        let _ = self.stop.send(());
        tokio::time::timeout(Duration::from_secs(10), self.handle)
            .await
            .expect("server did not stop in time")
            .unwrap();
    }
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Every line the built-in corpus can render, split by kind.
#[allow(dead_code)]
pub struct Sentences {
    pub insults: HashSet<String>,
    pub comebacks: HashSet<String>,
}

#[allow(dead_code)]
impl Sentences {
    pub fn contains(&self, line: &str) -> bool {
        self.insults.contains(line) || self.comebacks.contains(line)
    }
}

#[allow(dead_code)]
pub fn sentences() -> Sentences {
    let mut insults = HashSet::new();
    let mut comebacks = HashSet::new();
    for theme in generator::corpus().themes() {
        render_all(theme, theme.insults(), &mut insults);
        render_all(theme, theme.comebacks(), &mut comebacks);
    }
    Sentences { insults, comebacks }
}

#[allow(dead_code)]
fn render_all(theme: &Theme, templates: &[Template], out: &mut HashSet<String>) {
    for template in templates {
        let mut combos: Vec<Vec<&'static str>> = vec![Vec::new()];
        for class in template.shape().classes() {
            let list = theme.words().list(*class);
            combos = combos
                .iter()
                .flat_map(|prefix| {
                    list.iter().map(move |word| {
                        let mut next = prefix.clone();
                        next.push(*word);
                        next
                    })
                })
                .collect();
        }
        out.extend(combos.iter().map(|words| template.render(words)));
    }
}
