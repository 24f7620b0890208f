//! What the server serves.
//!
//! Either files under a document root, or one document held in memory that
//! answers every target.

pub mod resolver;

pub use resolver::{DocumentRoot, ResolvedResource, DEFAULT_INDEX};

use bytes::Bytes;

use crate::config::StaticFilesConfig;

/// Content source handed to every connection.
#[derive(Debug, Clone)]
pub enum Site {
    /// Static files resolved against a document root
    Directory(DocumentRoot),
    /// A single document served for any target
    Fixed(Bytes),
}

impl Site {
    /// Builds the site described by the `static_files` section. When a fixed
    /// document is configured it is read into memory once, here.
    pub fn from_config(cfg: &StaticFilesConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        match &cfg.document {
            Some(path) => {
                let doc = std::fs::read(path)
                    .with_context(|| format!("failed to load document {}", path.display()))?;
                tracing::info!(document = %path.display(), bytes = doc.len(), "Serving fixed document");
                Ok(Site::Fixed(Bytes::from(doc)))
            }
            None => {
                let root = DocumentRoot::new(&cfg.root, cfg.index.clone())?;
                tracing::info!(root = %root.path().display(), index = root.index(), "Serving static files");
                Ok(Site::Directory(root))
            }
        }
    }
}
