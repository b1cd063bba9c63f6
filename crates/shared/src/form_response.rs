//! # フォーム送信レスポンスエンベロープ
//!
//! `/api/submit-form` が返す唯一のレスポンス形式を提供する。
//!
//! ```json
//! { "success": true,  "message": "..." }
//! { "success": false, "error":   "..." }
//! ```

use serde::{Deserialize, Serialize};

/// フォーム送信 API のレスポンス型
///
/// この型は以下の場所で使用される:
/// - Web ハンドラ（Serialize でレスポンスを返す）
/// - クライアントフォームモデル（Deserialize でサーバー応答を受け取る）
///
/// ## 使用例
///
/// ```
/// use gazeta_shared::FormResponse;
///
/// let response = FormResponse::succeeded("ok");
/// assert!(response.success);
/// assert_eq!(response.message.as_deref(), Some("ok"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormResponse {
    /// 送信が受け付けられたか
    pub success: bool,
    /// 成功時のユーザー向けメッセージ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 失敗時のユーザー向けエラーメッセージ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:   Option<String>,
}

impl FormResponse {
    /// 成功レスポンスを作成する
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error:   None,
        }
    }

    /// 失敗レスポンスを作成する
    ///
    /// `error` は呼び出し元にそのまま表示される。内部情報を含めないこと。
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error:   Some(error.into()),
        }
    }
}
