use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;

use super::models::ApiConfig;

/// Field name the server expects the file under.
const FILE_FIELD: &str = "file";
const UPLOAD_MIME: &str = "text/csv";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Server rejected upload: {0}")]
    ApiError(String),

    #[error("Server returned an empty response")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Uploads the file as a single multipart part named `file` and returns
    /// the processed result as opaque bytes. No retry on failure.
    pub async fn upload_file(&self, filename: &str, contents: Bytes) -> Result<Bytes> {
        let client = Client::new();

        let part = Part::bytes(contents.to_vec())
            .file_name(filename.to_string())
            .mime_str(UPLOAD_MIME)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::ApiError(format!("Upload request failed: {}", e)))?;

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::EmptyResponse);
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: server.url(),
        })
    }

    #[tokio::test]
    async fn test_upload_returns_response_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/file")
            .with_status(200)
            .with_header(
                "content-type",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            )
            .with_body(b"PK\x03\x04processed".as_slice())
            .create_async()
            .await;

        let result = client_for(&server)
            .upload_file("report.csv", Bytes::from_static(b"a,b\n1,2\n"))
            .await
            .unwrap();

        assert!(result.starts_with(b"PK"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_maps_server_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/file")
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server)
            .upload_file("report.csv", Bytes::from_static(b"a,b\n"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/file")
            .with_status(200)
            .create_async()
            .await;

        let err = client_for(&server)
            .upload_file("report.csv", Bytes::from_static(b"a,b\n"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::EmptyResponse));
    }
}
