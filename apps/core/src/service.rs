//! JSON-lines recommendation service.
//!
//! Each input line is one request object, each output line one response
//! object. A bad line gets an error object and the loop keeps reading.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::classify::{ClassifierTables, QueryAnalyzer};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::recommend::{Chooser, RecommendationDataset, RecommendationSelector};

/// Bytes allowed per request line beyond the query itself.
const LINE_OVERHEAD: usize = 1024;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    /// Free-text query. Absent or `null` means empty.
    #[serde(default)]
    pub recomnquery_val: Option<String>,
}

impl RecommendRequest {
    pub fn query(&self) -> &str {
        self.recomnquery_val.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Result { result: String },
    Error { error: String },
}

/// Classifier and selector wired together
pub struct AdvisorService {
    analyzer: QueryAnalyzer,
    selector: RecommendationSelector,
    max_query_length: usize,
}

impl AdvisorService {
    pub fn new(
        config: &AppConfig,
        dataset: Arc<RecommendationDataset>,
        chooser: Arc<dyn Chooser>,
    ) -> Self {
        let tables = Arc::new(ClassifierTables::new());
        Self {
            analyzer: QueryAnalyzer::new(tables.clone()),
            selector: RecommendationSelector::new(tables, dataset, chooser),
            max_query_length: config.max_query_length,
        }
    }

    /// Classify a query and return the selected recommendation text.
    pub fn recommend(&self, query: &str) -> Result<String, AppError> {
        let length = query.chars().count();
        if length > self.max_query_length {
            return Err(AppError::Validation(format!(
                "Query is {} characters, maximum is {}",
                length, self.max_query_length
            )));
        }

        let classification = self.analyzer.analyze(query);
        if !classification.has_subject() {
            debug!("No subject detected in '{}'", classification.cleaned);
        }
        let recommendation = self.selector.select(&classification);
        info!(
            "Route: {} ({}us)",
            recommendation.route, classification.processing_time_us
        );
        Ok(recommendation.text)
    }

    /// Handle one raw request line.
    pub fn handle_line(&self, line: &str) -> RecommendResponse {
        let outcome = serde_json::from_str::<RecommendRequest>(line)
            .map_err(AppError::from)
            .and_then(|request| self.recommend(request.query()));

        match outcome {
            Ok(result) => RecommendResponse::Result { result },
            Err(e) => Self::rejected(e),
        }
    }

    fn rejected(e: AppError) -> RecommendResponse {
        warn!("Request rejected: {}", e);
        RecommendResponse::Error {
            error: e.to_string(),
        }
    }

    /// Longest request line read into memory, in bytes.
    fn max_line_bytes(&self) -> usize {
        self.max_query_length
            .saturating_mul(4)
            .saturating_add(LINE_OVERHEAD)
    }

    /// Serve requests until the reader reaches end of input.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> Result<usize, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let limit = self.max_line_bytes();
        let mut buf = Vec::new();
        let mut handled = 0;

        loop {
            buf.clear();
            let read = (&mut reader)
                .take(limit as u64 + 1)
                .read_until(b'\n', &mut buf)
                .await?;
            if read == 0 {
                break;
            }

            let response = if buf.len() > limit && !buf.ends_with(b"\n") {
                skip_line(&mut reader).await?;
                Self::rejected(AppError::Validation(format!(
                    "Request line exceeds {} bytes",
                    limit
                )))
            } else {
                match std::str::from_utf8(&buf) {
                    Ok(line) if line.trim().is_empty() => continue,
                    Ok(line) => {
                        let request_id = Uuid::new_v4();
                        let _span = info_span!("request", id = %request_id).entered();
                        self.handle_line(line.trim())
                    }
                    Err(e) => Self::rejected(AppError::Validation(format!(
                        "Request is not valid UTF-8: {}",
                        e
                    ))),
                }
            };

            write_response(&mut writer, &response).await?;
            handled += 1;
        }

        info!("Input closed after {} requests", handled);
        Ok(handled)
    }
}

async fn write_response<W>(writer: &mut W, response: &RecommendResponse) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let mut payload = serde_json::to_string(response)
        .map_err(|e| AppError::Internal(format!("Failed to encode response: {}", e)))?;
    payload.push('\n');
    writer.write_all(payload.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Discard input up to and including the next newline.
async fn skip_line<R>(reader: &mut R) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let (consumed, done) = {
            let available = reader.fill_buf().await?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|byte| *byte == b'\n') {
                Some(pos) => (pos + 1, true),
                None => (available.len(), false),
            }
        };
        reader.consume(consumed);
        if done {
            return Ok(());
        }
    }
}
