//! # Web エラーハンドリング
//!
//! 送信処理のエラー定義と、axum レスポンスへの変換。
//!
//! | エラー種別 | HTTP ステータス | 応答本文 |
//! |-----------|----------------|---------|
//! | `Validation` | 400 | 必須項目メッセージ |
//! | `PayloadTooLarge` | 413 | サイズ超過メッセージ |
//! | `NotConfigured` | 500 | 汎用の送信失敗メッセージ |
//! | `Delivery` | 500 | 汎用の送信失敗メッセージ |
//! | パニック | 500 | 汎用の内部エラーメッセージ |
//!
//! 500 系の詳細はログにのみ出力し、応答本文には含めない。

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gazeta_domain::{
    DomainError,
    notification::NotificationError,
    submission::{DELIVERY_FAILED_MESSAGE, INTERNAL_ERROR_MESSAGE, PAYLOAD_TOO_LARGE_MESSAGE},
};
use gazeta_shared::{FormResponse, event_log::error};
use thiserror::Error;

/// 送信処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// 必須項目の欠落、または解釈できないボディ
    #[error("{0}")]
    Validation(String),

    /// ボディがサイズ上限を超えている
    #[error("リクエストボディがサイズ上限を超えています")]
    PayloadTooLarge,

    /// 送信先の認証情報が未設定
    #[error("通知の送信先が設定されていません")]
    NotConfigured,

    /// 通知プロバイダへの送信に失敗
    #[error("通知の送信に失敗: {0}")]
    Delivery(String),
}

impl From<DomainError> for SubmitError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => Self::Validation(message),
        }
    }
}

impl From<NotificationError> for SubmitError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::NotConfigured => Self::NotConfigured,
            NotificationError::Delivery(detail) => Self::Delivery(detail),
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        match self {
            SubmitError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(FormResponse::failed(message))).into_response()
            }
            SubmitError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(FormResponse::failed(PAYLOAD_TOO_LARGE_MESSAGE)),
            )
                .into_response(),
            SubmitError::NotConfigured | SubmitError::Delivery(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FormResponse::failed(DELIVERY_FAILED_MESSAGE)),
            )
                .into_response(),
        }
    }
}

/// 汎用の 500 応答
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FormResponse::failed(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

/// `CatchPanicLayer` 用のパニックハンドラ
///
/// パニックの内容はログにのみ出力し、応答は [`internal_error_response`] とする。
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    tracing::error!(
        error.category = error::category::INTERNAL,
        error.kind = error::kind::PANIC,
        panic = %detail,
        "リクエスト処理中にパニックが発生"
    );

    internal_error_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn body_of(response: Response) -> FormResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validationは400と本文のメッセージを返す() {
        let response = SubmitError::Validation("Все поля обязательны для заполнения".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            FormResponse::failed("Все поля обязательны для заполнения")
        );
    }

    #[tokio::test]
    async fn test_payload_too_largeは413を返す() {
        let response = SubmitError::PayloadTooLarge.into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_of(response).await,
            FormResponse::failed(PAYLOAD_TOO_LARGE_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_deliveryは500で詳細を含めない() {
        let response =
            SubmitError::Delivery("Telegram API 401: Unauthorized".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body, FormResponse::failed(DELIVERY_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_not_configuredは500の汎用メッセージ() {
        let response = SubmitError::NotConfigured.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            FormResponse::failed(DELIVERY_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_パニックは汎用の内部エラーになる() {
        let response = handle_panic(Box::new("boom with secret"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            FormResponse::failed(INTERNAL_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_通知エラーからの変換() {
        assert_eq!(
            SubmitError::from(NotificationError::NotConfigured),
            SubmitError::NotConfigured
        );
        assert_eq!(
            SubmitError::from(NotificationError::Delivery("timeout".to_string())),
            SubmitError::Delivery("timeout".to_string())
        );
    }
}
