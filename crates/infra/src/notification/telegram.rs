//! Telegram 通知送信実装
//!
//! Telegram Bot API の `sendMessage` を使用して、設定済みのチャットへ
//! HTML パースモードでテキストを送信する。
//!
//! Bot トークンはリクエスト URL のパスに含まれるため、エラーやログに
//! URL を残さないこと（`reqwest::Error::without_url` で除去する）。

use std::fmt;

use async_trait::async_trait;
use gazeta_domain::notification::{DeliveryReceipt, NotificationError, NotificationResult};
use serde::{Deserialize, Serialize};

use super::NotificationSender;

/// Telegram Bot API のデフォルトのベース URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Telegram 送信設定
///
/// トークンまたはチャット ID が未設定でもサーバーは起動できる。
/// その場合、送信のたびに [`NotificationError::NotConfigured`] を返す。
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token:    Option<String>,
    pub chat_id:      Option<String>,
    pub api_base_url: String,
}

impl TelegramConfig {
    /// 送信に必要な認証情報が揃っているか
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        let token = self.bot_token.as_deref().filter(|t| !t.trim().is_empty())?;
        let chat_id = self.chat_id.as_deref().filter(|c| !c.trim().is_empty())?;
        Some((token, chat_id))
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token:    None,
            chat_id:      None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("chat_id", &self.chat_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// `sendMessage` のリクエストボディ
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id:    &'a str,
    text:       &'a str,
    parse_mode: &'static str,
}

/// Bot API のエラー応答（`{"ok": false, "error_code": 400, "description": "..."}`）
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    description: Option<String>,
}

/// Telegram 通知送信
///
/// `reqwest::Client` をラップする。リトライは行わない。
#[derive(Clone)]
pub struct TelegramNotificationSender {
    config: TelegramConfig,
    client: reqwest::Client,
}

impl TelegramNotificationSender {
    pub fn new(config: TelegramConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(mut config: TelegramConfig, client: reqwest::Client) -> Self {
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Self { config, client }
    }

    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }
}

impl fmt::Debug for TelegramNotificationSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotificationSender")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl NotificationSender for TelegramNotificationSender {
    async fn send(&self, text: &str) -> NotificationResult {
        let Some((token, chat_id)) = self.config.credentials() else {
            return Err(NotificationError::NotConfigured);
        };

        let url = format!("{}/bot{token}/sendMessage", self.config.api_base_url);
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let raw = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let reason = serde_json::from_str::<ApiErrorBody>(&raw)
                .ok()
                .and_then(|body| body.description)
                .unwrap_or(raw);
            tracing::warn!(status = status.as_u16(), reason = %reason, "Telegram API がエラーを返却");
            return Err(NotificationError::Delivery(format!(
                "Telegram API {}: {reason}",
                status.as_u16()
            )));
        }

        let raw = serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw));
        Ok(DeliveryReceipt { raw })
    }
}

/// トランスポート層のエラーを URL（トークン）を除いた理由に変換する
fn transport_error(err: reqwest::Error) -> NotificationError {
    NotificationError::Delivery(format!("Telegram API への接続に失敗: {}", err.without_url()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(token: Option<&str>, chat_id: Option<&str>) -> TelegramConfig {
        TelegramConfig {
            bot_token: token.map(str::to_string),
            chat_id: chat_id.map(str::to_string),
            ..TelegramConfig::default()
        }
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TelegramNotificationSender>();
    }

    #[test]
    fn test_トークンとチャットidが揃えば設定済み() {
        assert!(config(Some("123:abc"), Some("42")).is_configured());
        assert!(!config(None, Some("42")).is_configured());
        assert!(!config(Some("123:abc"), None).is_configured());
        assert!(!config(Some("  "), Some("42")).is_configured());
    }

    #[test]
    fn test_debug出力にトークンを含めない() {
        let sender = TelegramNotificationSender::new(config(Some("123:secret"), Some("42")));

        let debug = format!("{sender:?}");

        assert!(!debug.contains("123:secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("42"));
    }

    #[test]
    fn test_ベースurl末尾のスラッシュを除去する() {
        let sender = TelegramNotificationSender::new(TelegramConfig {
            api_base_url: "http://localhost:8081/".to_string(),
            ..config(Some("t"), Some("c"))
        });

        assert_eq!(sender.config().api_base_url, "http://localhost:8081");
    }

    #[tokio::test]
    async fn test_認証情報が未設定なら送信せずnot_configured() {
        let sender = TelegramNotificationSender::new(TelegramConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..config(None, None)
        });

        let result = sender.send("hello").await;

        assert_eq!(result, Err(NotificationError::NotConfigured));
    }
}
