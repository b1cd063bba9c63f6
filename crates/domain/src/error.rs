//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落、不正な形式のボディ |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// Web 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// メッセージは呼び出し元へそのまま表示してよい文言であること。
    #[error("{0}")]
    Validation(String),
}
