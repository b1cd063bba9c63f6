//! # Gazeta ドメイン層
//!
//! 注文フォーム送信の中核となるドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! web → infra → domain
//! ```
//!
//! ドメイン層は HTTP や外部サービスに一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`submission`] - 注文フォーム送信（種別、必須項目検証、正規化）
//! - [`notification`] - 通知メッセージの整形と送信結果の型
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層エラー
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use gazeta_domain::{notification::MessageFormatter, submission::SubmissionRequest};
//!
//! let request = SubmissionRequest::new(
//!     Some("project"),
//!     Some(" Ivan "),
//!     Some("Petrov"),
//!     Some("+7123"),
//!     Some("Need a logo"),
//! )
//! .unwrap();
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 5, 0).unwrap();
//! let text = MessageFormatter::default().format(&request, now);
//! assert!(text.contains("Ivan Petrov"));
//! ```

pub mod clock;
pub mod error;
pub mod notification;
pub mod submission;

pub use error::DomainError;
