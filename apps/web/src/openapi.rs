//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Web サーバーの OpenAPI 仕様を Rust の型から生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, submit};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Gazeta API",
      version = "0.1.0",
      description = "注文フォームの申し込みを Telegram に中継する API"
   ),
   paths(
      health::health_check,
      submit::submit_form,
   ),
   components(schemas(
      gazeta_shared::FormResponse,
      gazeta_shared::HealthResponse,
      gazeta_domain::submission::RawSubmission,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "submission", description = "注文フォーム送信"),
   )
)]
pub struct ApiDoc;
