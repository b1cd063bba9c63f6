//! # ユースケース層
//!
//! ## 設計方針
//!
//! - **依存性注入**: 通知送信と時刻は `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラはデコードと応答変換のみ行い、ロジックはユースケースに集約

pub mod submission;

pub use submission::SubmissionUseCase;
