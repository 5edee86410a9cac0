use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{DocumentParser, ExecutorError, JobExecutor};
use crate::domain::{Document, ParseOutcome};

pub struct ParseRequest {
    pub document: Document,
    pub data: Bytes,
}

/// Turns an uploaded document into Markdown plus its paragraph segmentation.
pub struct ParseExecutor {
    parser: Arc<dyn DocumentParser>,
}

impl ParseExecutor {
    pub fn new(parser: Arc<dyn DocumentParser>) -> Self {
        Self { parser }
    }
}

#[async_trait]
impl JobExecutor for ParseExecutor {
    type Payload = ParseRequest;
    type Output = ParseOutcome;

    #[tracing::instrument(
        skip(self, request),
        fields(
            filename = %request.document.filename,
            size_bytes = request.document.size_bytes
        )
    )]
    async fn execute(&self, request: ParseRequest) -> Result<ParseOutcome, ExecutorError> {
        let parsed = self.parser.parse(&request.data, &request.document).await?;

        tracing::debug!(
            source = ?parsed.source,
            chars = parsed.markdown.len(),
            "Document parsed"
        );

        Ok(ParseOutcome::from(parsed))
    }
}
