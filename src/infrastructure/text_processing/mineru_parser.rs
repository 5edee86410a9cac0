use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::application::ports::{DocumentParser, ParserError};
use crate::domain::{Document, ParsedText};
use crate::presentation::config::ParserSettings;

use super::parser_response::ParserResponse;

/// Fixed options sent with every parse request.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub lang: String,
    pub backend: String,
    pub parse_method: String,
    pub formula_enable: bool,
    pub table_enable: bool,
}

impl From<&ParserSettings> for ParseOptions {
    fn from(settings: &ParserSettings) -> Self {
        Self {
            lang: settings.lang.clone(),
            backend: settings.backend.clone(),
            parse_method: settings.parse_method.clone(),
            formula_enable: settings.formula_enable,
            table_enable: settings.table_enable,
        }
    }
}

/// Client for a MinerU-compatible `/file_parse` endpoint.
pub struct MineruParser {
    client: Client,
    base_url: String,
    options: ParseOptions,
}

impl MineruParser {
    pub fn new(base_url: &str, options: ParseOptions, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            options,
        }
    }

    fn build_form(&self, data: &[u8], document: &Document) -> Result<Form, ParserError> {
        let file = Part::bytes(data.to_vec())
            .file_name(document.filename.clone())
            .mime_str(document.content_type.as_mime())
            .map_err(|e| ParserError::Transport(format!("invalid mime type: {e}")))?;

        Ok(Form::new()
            .part("files", file)
            .text("lang_list", self.options.lang.clone())
            .text("backend", self.options.backend.clone())
            .text("parse_method", self.options.parse_method.clone())
            .text("formula_enable", self.options.formula_enable.to_string())
            .text("table_enable", self.options.table_enable.to_string())
            .text("return_md", "true")
            .text("return_content_list", "true"))
    }
}

#[async_trait]
impl DocumentParser for MineruParser {
    #[tracing::instrument(
        skip(self, data),
        fields(
            filename = %document.filename,
            content_type = %document.content_type.as_mime()
        )
    )]
    async fn parse(&self, data: &[u8], document: &Document) -> Result<ParsedText, ParserError> {
        let url = format!("{}/file_parse", self.base_url);
        let form = self.build_form(data, document)?;

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ParserError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ParserError::Transport(format!("reading response body: {e}")))?;

        if !status.is_success() {
            return Err(ParserError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|e| ParserError::MalformedResponse(e.to_string()))?;

        let parsed = ParserResponse::classify(&body, Some(document.stem()));
        tracing::debug!(shape = ?parsed.shape(), "Parser response classified");

        Ok(parsed.into_parsed_text())
    }
}
