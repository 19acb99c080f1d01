use crate::error::{TransportError, TransportResult};
use crate::languages::Language;
use crate::upload::types::{ProgressSnapshot, UploadRequest, PROGRESS_ENDPOINT};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// The remote service that does the actual translation.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Uploads the file and returns the archive bytes.
    async fn translate(&self, request: UploadRequest) -> TransportResult<Vec<u8>>;

    async fn progress(&self) -> TransportResult<ProgressSnapshot>;
}

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    /// Unset means a translation may take as long as the backend needs.
    request_timeout: Option<Duration>,
    progress_timeout: Duration,
}

impl HttpBackend {
    pub fn new(
        base_url: &str,
        request_timeout: Option<Duration>,
        progress_timeout: Duration,
    ) -> TransportResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("localis/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
            progress_timeout,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn translate_request(&self, url: &str) -> RequestBuilder {
        let builder = self.client.post(url);
        match self.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    fn progress_request(&self) -> RequestBuilder {
        self.client
            .get(self.url(PROGRESS_ENDPOINT))
            .timeout(self.progress_timeout)
    }

    fn build_form(request: UploadRequest) -> TransportResult<Form> {
        let fields = request.text_fields();
        let part = Part::bytes(request.file.bytes)
            .file_name(request.file.name)
            .mime_str("application/octet-stream")?;

        let form = fields
            .into_iter()
            .fold(Form::new().part(request.file_field, part), |form, (name, value)| {
                form.text(name, value)
            });
        Ok(form)
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    async fn translate(&self, request: UploadRequest) -> TransportResult<Vec<u8>> {
        let url = self.url(request.endpoint);
        let languages: Vec<String> = request.languages.iter().map(Language::to_string).collect();
        log::info!(
            "Uploading '{}' ({} bytes) to {} for {}",
            request.file.name,
            request.file.bytes.len(),
            url,
            languages.join(", ")
        );

        let form = Self::build_form(request)?;
        let response = self.translate_request(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        log::info!("Received {} byte archive from {}", body.len(), url);
        Ok(body.to_vec())
    }

    async fn progress(&self) -> TransportResult<ProgressSnapshot> {
        let response = self.progress_request().send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let backend =
            HttpBackend::new("http://localhost:8000/", None, Duration::from_secs(5)).unwrap();
        assert_eq!(
            backend.url("/translate_json_files_new/"),
            "http://localhost:8000/translate_json_files_new/"
        );
        assert_eq!(
            backend.url(PROGRESS_ENDPOINT),
            "http://localhost:8000/translation_progress/"
        );
    }

    #[test]
    fn test_only_progress_polls_time_out_by_default() {
        let backend =
            HttpBackend::new("http://localhost:8000", None, Duration::from_secs(10)).unwrap();

        let translate = backend
            .translate_request("http://localhost:8000/translate_json_files_new/")
            .build()
            .unwrap();
        assert_eq!(translate.timeout(), None);

        let progress = backend.progress_request().build().unwrap();
        assert_eq!(progress.timeout(), Some(&Duration::from_secs(10)));
    }

    #[test]
    fn test_configured_request_timeout_is_applied() {
        let backend = HttpBackend::new(
            "http://localhost:8000",
            Some(Duration::from_secs(600)),
            Duration::from_secs(10),
        )
        .unwrap();

        let translate = backend
            .translate_request("http://localhost:8000/translate_and_download_document/")
            .build()
            .unwrap();
        assert_eq!(translate.timeout(), Some(&Duration::from_secs(600)));
    }
}
