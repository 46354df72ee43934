//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;
use wiki_server::config::WikiConfig;
use wiki_server::lifecycle::{startup, Shutdown};

/// A wiki server running on a loopback port over a temporary page directory.
pub struct TestWiki {
    pub addr: SocketAddr,
    pub pages: tempfile::TempDir,
    shutdown: Shutdown,
    handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestWiki {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn page_file(&self, title: &str) -> PathBuf {
        self.pages.path().join(format!("{title}.txt"))
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop")
            .unwrap()
            .unwrap();
    }
}

pub fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Start a wiki with the shipped templates; `tweak` adjusts the config.
#[allow(dead_code)]
pub async fn start_wiki_with(tweak: impl FnOnce(&mut WikiConfig)) -> TestWiki {
    let pages = tempfile::tempdir().unwrap();

    let mut config = WikiConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.pages.directory = pages.path().to_path_buf();
    config.templates.directory = templates_dir();
    tweak(&mut config);

    let server = startup::prepare(config).await.unwrap();
    let listener = startup::bind(server.config()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signal = shutdown.signal();
    let handle = tokio::spawn(async move { server.run_until(listener, signal).await });

    TestWiki {
        addr,
        pages,
        shutdown,
        handle,
    }
}

#[allow(dead_code)]
pub async fn start_wiki() -> TestWiki {
    start_wiki_with(|_| {}).await
}

/// A client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
