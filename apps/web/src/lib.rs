//! # Gazeta Web サーバー ライブラリ
//!
//! 注文フォームの受付 API と静的ファイル配信を提供する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとミドルウェアの組み立て
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラー → HTTP 応答の変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（キャッシュ制御）
//! - `openapi`: OpenAPI 仕様
//! - `usecase`: 送信ユースケース

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod usecase;
