//! # テスト用モック
//!
//! ユースケース・ハンドラテストで使用するインメモリの通知送信モック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! gazeta-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gazeta_domain::notification::{DeliveryReceipt, NotificationError, NotificationResult};

use crate::notification::NotificationSender;

// ===== MockNotificationSender =====

/// 送信テキストを記録し、あらかじめ決めた結果を返す送信モック
///
/// デフォルトは常に成功する。
#[derive(Clone)]
pub struct MockNotificationSender {
    sent:    Arc<Mutex<Vec<String>>>,
    outcome: Result<(), NotificationError>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(()),
        }
    }

    /// 常に指定のエラーを返すモック
    pub fn failing(error: NotificationError) -> Self {
        Self {
            outcome: Err(error),
            ..Self::new()
        }
    }

    /// これまでに渡されたテキスト
    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(&self, text: &str) -> NotificationResult {
        self.sent.lock().unwrap().push(text.to_string());
        self.outcome.clone().map(|()| DeliveryReceipt {
            raw: serde_json::json!({ "ok": true, "result": { "message_id": 1 } }),
        })
    }
}

/// 送信処理の途中でパニックする送信モック
///
/// パニックがサーバー全体を落とさず 500 応答になることの検証用。
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingNotificationSender;

#[async_trait]
impl NotificationSender for PanickingNotificationSender {
    async fn send(&self, _text: &str) -> NotificationResult {
        panic!("通知送信中の予期しない障害");
    }
}
