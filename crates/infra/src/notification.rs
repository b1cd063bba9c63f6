//! # 通知送信
//!
//! 申し込み通知をオペレーターへ届けるインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait で送信先を抽象化
//! - **2 つの実装**: Telegram（本番用）、Noop（ローカル開発用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択
//! - **リトライしない**: 1 回の送信試行の結果をそのまま返す

mod noop;
mod telegram;

use async_trait::async_trait;
use gazeta_domain::notification::NotificationResult;
pub use noop::NoopNotificationSender;
pub use telegram::{DEFAULT_API_BASE_URL, TelegramConfig, TelegramNotificationSender};

/// 通知送信トレイト
///
/// 整形済みテキストを 1 回だけ送信し、結果を返す。
/// パニックせず、すべての失敗を `NotificationError` として返すこと。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// テキストを送信する
    async fn send(&self, text: &str) -> NotificationResult;
}
