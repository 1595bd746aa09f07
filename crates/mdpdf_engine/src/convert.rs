use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_info, engine_warn};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use url::Url;

use crate::persist::{PersistError, StagedFile};

/// Gotenberg route that renders Markdown through an HTML wrapper.
pub const CONVERT_ROUTE: &str = "/forms/chromium/convert/markdown";
pub const OUTPUT_EXTENSION: &str = "pdf";
/// Multipart field name shared by both uploaded parts.
pub const FORM_FIELD: &str = "files";
pub const TEMPLATE_FILENAME: &str = "index.html";
/// Name the template refers to; the source is always uploaded under it.
pub const SOURCE_FILENAME: &str = "file.md";

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Markdown to PDF</title>
  </head>
  <body>
    {{ toHTML "file.md" }}
  </body>
</html>"#;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("failed to read {path:?}: {source}")]
    ReadSource { path: PathBuf, source: io::Error },
    #[error("network error: {0}")]
    Network(String),
    #[error("conversion failed with status: {status}, body: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("failed to write {path:?}: {source}")]
    WriteOutput { path: PathBuf, source: PersistError },
}

/// `notes/a.md` becomes `notes/a.pdf`.
pub fn output_path_for(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

#[async_trait::async_trait]
pub trait Converter: Send + Sync {
    /// Converts `source` and returns the path of the written output.
    async fn convert(&self, source: &Path) -> Result<PathBuf, ConvertError>;
}

/// Posts sources to a Gotenberg instance. No timeout, no retry.
///
/// The endpoint is taken as configured; a malformed one fails each conversion
/// rather than startup.
#[derive(Debug, Clone)]
pub struct GotenbergConverter {
    client: reqwest::Client,
    endpoint: String,
}

impl GotenbergConverter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConvertError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| ConvertError::Network(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// `{endpoint}/forms/chromium/convert/markdown`, tolerating a trailing `/`.
    pub fn conversion_url(&self) -> Result<Url, ConvertError> {
        let base = self.endpoint.trim_end_matches('/');
        Url::parse(&format!("{base}{CONVERT_ROUTE}")).map_err(|err| {
            ConvertError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: err.to_string(),
            }
        })
    }

    async fn build_form(&self, source: &Path) -> Result<Form, ConvertError> {
        let read_err = |source_err: io::Error| ConvertError::ReadSource {
            path: source.to_path_buf(),
            source: source_err,
        };
        let file = tokio::fs::File::open(source).await.map_err(read_err)?;
        let len = file.metadata().await.map_err(read_err)?.len();
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));

        Ok(Form::new()
            .part(
                FORM_FIELD,
                Part::text(INDEX_HTML).file_name(TEMPLATE_FILENAME),
            )
            .part(
                FORM_FIELD,
                Part::stream_with_length(body, len).file_name(SOURCE_FILENAME),
            ))
    }
}

#[async_trait::async_trait]
impl Converter for GotenbergConverter {
    async fn convert(&self, source: &Path) -> Result<PathBuf, ConvertError> {
        let url = self.conversion_url()?;
        let form = self.build_form(source).await?;
        engine_info!("POST {} for {:?}", url, source);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Gotenberg answers a finished conversion with 200 only.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            engine_warn!("Conversion of {:?} rejected with {}", source, status);
            return Err(ConvertError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let output = output_path_for(source);
        let write_err = |err: PersistError| ConvertError::WriteOutput {
            path: output.clone(),
            source: err,
        };

        // Stream into a sibling temp file so a failed transfer never leaves a partial PDF.
        let staged = StagedFile::create(&output).map_err(write_err)?;
        let handle = staged
            .handle()
            .map_err(|err| write_err(PersistError::Io(err)))?;
        let mut out = tokio::fs::File::from_std(handle);

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            out.write_all(&chunk)
                .await
                .map_err(|err| write_err(PersistError::Io(err)))?;
            written += chunk.len() as u64;
        }
        out.flush()
            .await
            .map_err(|err| write_err(PersistError::Io(err)))?;
        drop(out);

        let output = staged.commit().map_err(write_err)?;
        engine_debug!("Wrote {} bytes to {:?}", written, output);
        Ok(output)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ConvertError {
    ConvertError::Network(err.to_string())
}
