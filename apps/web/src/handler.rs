//! # HTTP ハンドラ
//!
//! - [`health`] - ヘルスチェック
//! - [`submit`] - 注文フォーム送信

pub mod health;
pub mod submit;

pub use health::health_check;
pub use submit::{SubmitState, submit_form};
