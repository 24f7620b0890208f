//! Shared fixtures for tests that need a document root on disk.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub const INDEX_HTML: &[u8] = b"<h1>Welcome</h1>\n";
pub const ABOUT_HTML: &[u8] = b"<p>About: one tiny static file server.</p>";

/// A scratch directory removed on drop.
pub struct TempRoot {
    path: PathBuf,
}

impl TempRoot {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("pico-test-{}-{}", std::process::id(), id));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    /// Root holding `index.html` (17 bytes) and `about.html` (42 bytes).
    pub fn with_site() -> Self {
        let root = Self::new();
        root.write("index.html", INDEX_HTML);
        root.write("about.html", ABOUT_HTML);
        root
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, contents: &[u8]) {
        let file = self.path.join(name);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(file, contents).unwrap();
    }

    pub fn mkdir(&self, name: &str) {
        std::fs::create_dir_all(self.path.join(name)).unwrap();
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Splits a raw response into its head (status line and headers) and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..end].to_vec()).unwrap();
    (head, raw[end + 4..].to_vec())
}

pub fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines()
        .skip(1)
        .filter_map(|line| line.split_once(": "))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}
