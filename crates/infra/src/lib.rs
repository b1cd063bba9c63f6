//! # Gazeta インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **通知送信**: 整形済みテキストを Telegram Bot API へ届ける
//!
//! ## 依存関係
//!
//! ```text
//! web → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない。送信結果はドメイン層の
//! [`NotificationResult`](gazeta_domain::notification::NotificationResult) で返す。
//!
//! ## モジュール構成
//!
//! - [`notification`] - 通知送信トレイトと実装（Telegram / Noop）
//! - `mock` - テスト用モック（`test-utils` feature）

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;

pub use notification::{
    NoopNotificationSender,
    NotificationSender,
    TelegramConfig,
    TelegramNotificationSender,
};
