//! Firebase Realtime-Database-style REST sink.
//!
//! Stores the terminal report as JSON at
//! `{base}/{collection}/{student}/{report_id}.json`, optionally passing
//! an `auth` query token. Fire-and-forget from the engine's point of
//! view: a failed delivery is reported upward but never retried here.

use async_trait::async_trait;
use tracing::instrument;

use longhand_core::model::StudentId;
use longhand_core::report::TerminalReport;
use longhand_core::traits::ReportSink;

use crate::error::SinkError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// REST sink for Firebase-style realtime databases.
pub struct FirebaseSink {
    base_url: String,
    collection: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl FirebaseSink {
    pub fn new(base_url: &str, collection: &str, auth_token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            auth_token,
            client,
        }
    }

    fn report_url(&self, student: &StudentId, report: &TerminalReport) -> String {
        format!(
            "{}/{}/{}/{}.json",
            self.base_url, self.collection, student, report.id
        )
    }
}

#[async_trait]
impl ReportSink for FirebaseSink {
    fn name(&self) -> &str {
        "firebase"
    }

    #[instrument(skip(self, report), fields(student = %student, report_id = %report.id))]
    async fn deliver(&self, report: &TerminalReport, student: &StudentId) -> anyhow::Result<()> {
        let mut request = self.client.put(self.report_url(student, report)).json(report);
        if let Some(token) = &self.auth_token {
            request = request.query(&[("auth", token)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SinkError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                SinkError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let message = response.text().await.unwrap_or_default();
            return Err(SinkError::AuthenticationFailed(message).into());
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SinkError::ApiError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        tracing::info!(percent = report.percent, passed = report.passed, "report delivered");
        Ok(())
    }
}
