//! # リクエスト結果ログ
//!
//! リクエスト完了時に、応答の区分（成功 / 拒否 / 失敗）と処理時間を 1 行で出力する。
//! `TraceLayer` のスパン内に置くため、`request_id` と `uri` はスパンフィールドとして
//! JSON ログに含まれる。
//!
//! | 区分 | ステータス | レベル |
//! |------|-----------|--------|
//! | `success` | 1xx〜3xx | INFO |
//! | `rejected` | 4xx（必須項目の欠落など） | WARN |
//! | `failed` | 5xx（送信失敗、パニック） | ERROR |
//!
//! `/health` は監視からの定期アクセスなので出力しない。

use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

/// 応答ステータスの区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    Rejected,
    Failed,
}

impl RequestOutcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() {
            Self::Rejected
        } else {
            Self::Success
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

/// 応答の区分に応じたレベルでリクエスト結果を出力する
pub async fn log_request_outcome(request: Request, next: Next) -> Response {
    if request.uri().path().starts_with("/health") {
        return next.run(request).await;
    }

    let started = Instant::now();
    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let outcome = RequestOutcome::from_status(response.status());

    match outcome {
        RequestOutcome::Success => tracing::info!(
            http.status_code = status,
            http.latency_ms = latency_ms,
            http.outcome = outcome.as_str(),
            "リクエスト完了"
        ),
        RequestOutcome::Rejected => tracing::warn!(
            http.status_code = status,
            http.latency_ms = latency_ms,
            http.outcome = outcome.as_str(),
            "リクエストを拒否"
        ),
        RequestOutcome::Failed => tracing::error!(
            http.status_code = status,
            http.latency_ms = latency_ms,
            http.outcome = outcome.as_str(),
            "リクエスト処理に失敗"
        ),
    }

    response
}
