//! Saving the generated image to disk.

use std::future::Future;
use std::path::{Path, PathBuf};

use pupstyle_generation::{Client, GenerationError};

use crate::platform::{OpenError, OpenRequest, Opener};

/// File name suggested in the save dialog.
pub const DEFAULT_FILE_NAME: &str = "goodnatured-pup.png";

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("fetching image failed: {0}")]
    Fetch(#[from] GenerationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a download ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { path: PathBuf, bytes: usize },
    /// The user dismissed the save dialog.
    Cancelled,
    /// Saving failed and the image was opened in the browser instead.
    OpenedInBrowser,
}

/// Writes already-fetched image bytes to `dest`.
pub async fn save_artifact(bytes: &[u8], dest: &Path) -> Result<usize, DownloadError> {
    tokio::fs::write(dest, bytes).await?;
    Ok(bytes.len())
}

/// Fetches the image, asks `choose` for a destination and writes it there.
///
/// Any fetch or write failure falls back to opening `url` with `opener`;
/// only a failure of that fallback is returned as an error.
pub async fn download<O, F, Fut>(
    client: &Client,
    url: &str,
    choose: F,
    opener: &O,
) -> Result<DownloadOutcome, OpenError>
where
    O: Opener,
    F: FnOnce(&'static str) -> Fut,
    Fut: Future<Output = Option<PathBuf>>,
{
    match fetch_and_save(client, url, choose).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            tracing::warn!(url, error = %e, "download failed, opening in browser");
            opener.open(&OpenRequest::new(url))?;
            Ok(DownloadOutcome::OpenedInBrowser)
        }
    }
}

async fn fetch_and_save<F, Fut>(
    client: &Client,
    url: &str,
    choose: F,
) -> Result<DownloadOutcome, DownloadError>
where
    F: FnOnce(&'static str) -> Fut,
    Fut: Future<Output = Option<PathBuf>>,
{
    let bytes = client.fetch_artifact(url).await?;

    let Some(path) = choose(DEFAULT_FILE_NAME).await else {
        tracing::debug!("save dialog cancelled");
        return Ok(DownloadOutcome::Cancelled);
    };

    let written = save_artifact(&bytes, &path).await?;
    tracing::info!(path = %path.display(), bytes = written, "image saved");
    Ok(DownloadOutcome::Saved {
        path,
        bytes: written,
    })
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::platform::testing::RecordingOpener;

    /// One-shot HTTP server answering a GET with `status` and `body`.
    async fn mock_image(status: u16, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = stream.read(&mut buf).await.unwrap();

            let head = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).await.unwrap();
            stream.write_all(body).await.unwrap();
        });

        format!("http://127.0.0.1:{port}/out/result.png")
    }

    #[tokio::test]
    async fn saves_to_chosen_path() {
        let url = mock_image(200, b"\x89PNGdata").await;
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pup.png");
        let client = Client::new("").unwrap();
        let opener = RecordingOpener::default();

        let chosen = dest.clone();
        let outcome = download(
            &client,
            &url,
            |suggested| {
                assert_eq!(suggested, DEFAULT_FILE_NAME);
                async move { Some(chosen) }
            },
            &opener,
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            DownloadOutcome::Saved {
                path: dest.clone(),
                bytes: 8
            }
        );
        assert_eq!(std::fs::read(&dest).unwrap(), b"\x89PNGdata");
        assert!(opener.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn cancel_is_not_a_failure() {
        let url = mock_image(200, b"img").await;
        let client = Client::new("").unwrap();
        let opener = RecordingOpener::default();

        let outcome = download(&client, &url, |_| async { None }, &opener)
            .await
            .unwrap();

        assert_eq!(outcome, DownloadOutcome::Cancelled);
        assert!(opener.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_opens_browser() {
        let url = mock_image(404, b"").await;
        let client = Client::new("").unwrap();
        let opener = RecordingOpener::default();

        let outcome = download(&client, &url, |_| async { None }, &opener)
            .await
            .unwrap();

        assert_eq!(outcome, DownloadOutcome::OpenedInBrowser);
        assert_eq!(*opener.opened.borrow(), vec![OpenRequest::new(url)]);
    }

    #[tokio::test]
    async fn write_failure_opens_browser() {
        let url = mock_image(200, b"img").await;
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("pup.png");
        let client = Client::new("").unwrap();
        let opener = RecordingOpener::default();

        let outcome = download(&client, &url, move |_| async move { Some(dest) }, &opener)
            .await
            .unwrap();

        assert_eq!(outcome, DownloadOutcome::OpenedInBrowser);
    }

    #[tokio::test]
    async fn fallback_failure_is_returned() {
        let url = mock_image(500, b"").await;
        let client = Client::new("").unwrap();
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };

        let err = download(&client, &url, |_| async { None }, &opener)
            .await
            .unwrap_err();
        assert_eq!(err.url, url);
    }

    #[tokio::test]
    async fn save_artifact_reports_length() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a.png");
        assert_eq!(save_artifact(b"12345", &dest).await.unwrap(), 5);
    }
}
