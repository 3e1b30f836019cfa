//! Media upload: staging and multipart submission

mod stager;
mod types;

use log::info;
use reqwest::multipart::{Form, Part};
use reqwest::Body;

use crate::error::{Error, Result};
use crate::fetch::{ensure_success, HttpClient};

pub use stager::*;
pub use types::*;

/// Values of the upload page: an optional label and the staged files
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub name: String,
    pub files: FileStager,
}

/// Outcome of an accepted upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub status: u16,
    pub files: usize,
    pub bytes: u64,
}

/// Sends staged files as `multipart/form-data` through the blob client
#[derive(Debug, Clone)]
pub struct Uploader {
    http: HttpClient,
    path: String,
}

impl Uploader {
    /// Create a new Uploader posting to `path`
    pub fn new(http: HttpClient, path: &str) -> Self {
        Self {
            http,
            path: path.to_string(),
        }
    }

    /// The upload endpoint path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Upload `files` under an optional label.
    ///
    /// Each file becomes one `files` part; a non-empty `name` is sent as a
    /// text part.
    pub async fn upload(&self, name: &str, files: &[StagedFile]) -> Result<UploadReceipt> {
        if files.is_empty() {
            return Err(Error::NothingToUpload);
        }

        let mut form = Form::new();
        if !name.is_empty() {
            form = form.text("name", name.to_string());
        }
        for file in files {
            let mime = if file.mime_type.is_empty() {
                "application/octet-stream"
            } else {
                file.mime_type.as_str()
            };
            let part = Part::stream_with_length(Body::from(file.data.clone()), file.size)
                .file_name(file.name.clone())
                .mime_str(mime)?;
            form = form.part("files", part);
        }

        let bytes: u64 = files.iter().map(|f| f.size).sum();
        info!("Uploading {} file(s), {} bytes to {}", files.len(), bytes, self.path);

        let response = self.http.put(&self.path)?.multipart(form).execute_raw().await?;
        let response = ensure_success(response).await?;

        Ok(UploadReceipt {
            status: response.status().as_u16(),
            files: files.len(),
            bytes,
        })
    }

    /// Upload everything staged in `form`
    pub async fn submit(&self, form: &UploadForm) -> Result<UploadReceipt> {
        self.upload(&form.name, form.files.files()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientOptions;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn uploader_for(server: &MockServer) -> Uploader {
        let options = ClientOptions::default().with_base_url(&server.uri());
        Uploader::new(HttpClient::blob(&options).unwrap(), &options.upload_path)
    }

    #[tokio::test]
    async fn empty_upload_is_rejected_locally() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = uploader_for(&mock_server).upload("", &[]).await.unwrap_err();
        assert!(matches!(err, Error::NothingToUpload));
    }

    #[tokio::test]
    async fn staged_files_are_sent_as_parts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/upload"))
            .and(body_string_contains("filename=\"intro.mp4\""))
            .and(body_string_contains("filename=\"theme.wav\""))
            .and(body_string_contains("Launch assets"))
            .and(body_string_contains("video-bytes"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut form = UploadForm {
            name: "Launch assets".to_string(),
            ..Default::default()
        };
        form.files.stage(vec![
            StagedFile::new("intro.mp4", "video/mp4", b"video-bytes".to_vec()),
            StagedFile::new("theme.wav", "audio/wav", b"audio".to_vec()),
        ]);

        let receipt = uploader_for(&mock_server).submit(&form).await.unwrap();
        assert_eq!(
            receipt,
            UploadReceipt {
                status: 201,
                files: 2,
                bytes: 16
            }
        );
    }

    #[tokio::test]
    async fn server_rejection_surfaces() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(413).set_body_string("too large"))
            .mount(&mock_server)
            .await;

        let files = [StagedFile::new("a.mp4", "video/mp4", vec![1, 2, 3])];
        let err = uploader_for(&mock_server).upload("", &files).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 413, .. }));
    }
}
