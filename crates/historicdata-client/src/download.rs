//! Streaming file download to local disk.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::client::{HistoricalDataClient, Result};

impl HistoricalDataClient {
    /// Downloads a file from the historical data service into
    /// `store_directory`, or the current working directory if none is given.
    ///
    /// `file_path` is the server-relative path as returned by
    /// [`file_list`](Self::file_list); the local file takes its final
    /// `/`-delimited segment as its name. Returns that name on success.
    ///
    /// The body is streamed to disk chunk by chunk. There is no retry, resume
    /// or integrity check; a transfer that fails mid-stream leaves a partial
    /// file behind.
    ///
    /// # Errors
    ///
    /// Transport and filesystem failures propagate as
    /// [`ClientError::Http`](crate::ClientError::Http) and
    /// [`ClientError::Io`](crate::ClientError::Io).
    pub async fn download_file(
        &self,
        file_path: &str,
        store_directory: Option<&Path>,
    ) -> Result<String> {
        let file_name = local_file_name(file_path).to_owned();
        let destination = store_directory.map_or_else(
            || PathBuf::from(&file_name),
            |directory| directory.join(&file_name),
        );

        let response = self
            .http
            .get(&self.config.download_url)
            .query(&[("filePath", file_path)])
            .header("ssoid", &self.config.session_token)
            .send()
            .await?;

        // The file handle is scoped to the transfer and closed on every exit
        // path, mid-stream failures included.
        let mut file = File::create(&destination).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if !chunk.is_empty() {
                file.write_all(&chunk).await?;
            }
        }
        file.flush().await?;

        tracing::debug!(file = %destination.display(), "download complete");
        Ok(file_name)
    }
}

/// Final `/`-delimited segment of a server-relative file path.
fn local_file_name(file_path: &str) -> &str {
    file_path.rsplit('/').next().unwrap_or(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server_uri: &str) -> HistoricalDataClient {
        let config = ClientConfig {
            session_token: "token".to_string(),
            download_url: format!("{server_uri}/api/DownloadFile"),
            ..ClientConfig::default()
        };
        HistoricalDataClient::new(config).unwrap()
    }

    async fn mount_download(server: &MockServer, file_path: &str, payload: &[u8]) {
        Mock::given(method("GET"))
            .and(path("/api/DownloadFile"))
            .and(query_param("filePath", file_path))
            .and(header("ssoid", "token"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.to_vec()))
            .mount(server)
            .await;
    }

    #[test]
    fn test_local_file_name() {
        assert_eq!(local_file_name("data/2021/market/1.234.bz2"), "1.234.bz2");
        assert_eq!(local_file_name("1.234.bz2"), "1.234.bz2");
    }

    #[tokio::test]
    async fn test_download_into_directory_writes_streamed_bytes() {
        let server = MockServer::start().await;
        let payload = b"compressed market data";
        mount_download(&server, "data/2021/market/1.234.bz2", payload).await;

        let directory = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri());
        let name = client
            .download_file("data/2021/market/1.234.bz2", Some(directory.path()))
            .await
            .unwrap();

        assert_eq!(name, "1.234.bz2");
        let written = tokio::fs::read(directory.path().join("1.234.bz2"))
            .await
            .unwrap();
        assert_eq!(written, payload);
    }

    #[tokio::test]
    async fn test_download_without_directory_uses_working_directory() {
        let server = MockServer::start().await;
        let payload = b"event data";
        mount_download(&server, "data/2021/event/5.678.bz2", payload).await;

        let client = test_client(&server.uri());
        let name = client
            .download_file("data/2021/event/5.678.bz2", None)
            .await
            .unwrap();

        assert_eq!(name, "5.678.bz2");
        // The bare name resolves against the working directory.
        let destination = std::env::current_dir().unwrap().join(&name);
        let written = tokio::fs::read(&destination).await.unwrap();
        assert_eq!(written, payload);
        tokio::fs::remove_file(&destination).await.unwrap();
    }

    #[tokio::test]
    async fn test_download_failure_propagates_as_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let directory = tempfile::tempdir().unwrap();
        let client = test_client(&format!("http://{addr}"));
        let err = client
            .download_file("data/2021/market/1.234.bz2", Some(directory.path()))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::ClientError::Http(_)));
    }
}
