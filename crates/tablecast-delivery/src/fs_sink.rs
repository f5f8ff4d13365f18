//! Filesystem-backed file sink

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::traits::FileSink;

/// A [`FileSink`] that writes payloads into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink rooted at the given directory
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory payloads are written into
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[async_trait]
impl FileSink for DirectorySink {
    async fn save(&self, payload: &str, filename: &str) -> Result<(), DeliveryError> {
        let path = self.dir.join(filename);
        tokio::fs::write(&path, payload)
            .await
            .map_err(DeliveryError::sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_payload_under_filename() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        assert_eq!(sink.dir(), dir.path());

        sink.save("\u{FEFF}a,b", "out.csv").await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(written, "\u{FEFF}a,b");
    }

    #[tokio::test]
    async fn test_missing_directory_is_a_sink_error() {
        let sink = DirectorySink::new("/nonexistent/tablecast-test");
        let err = sink.save("x", "out.csv").await.unwrap_err();
        assert!(matches!(err, DeliveryError::Sink(_)));
    }
}
