//! Noop 通知送信実装
//!
//! 通知を実際には送信せず、ログ出力のみ行う。
//! Bot を用意していないローカル開発環境で使用する。

use async_trait::async_trait;
use gazeta_domain::notification::{DeliveryReceipt, NotificationResult};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send(&self, text: &str) -> NotificationResult {
        tracing::info!(
            text.chars = text.chars().count(),
            "Noop: 通知送信をスキップ"
        );
        Ok(DeliveryReceipt {
            raw: serde_json::json!({ "ok": true, "noop": true }),
        })
    }
}
