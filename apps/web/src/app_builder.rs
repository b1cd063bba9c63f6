//! # アプリケーション構築
//!
//! DI（送信実装・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use gazeta_domain::{clock::SystemClock, notification::MessageFormatter};
use gazeta_infra::{NoopNotificationSender, NotificationSender, TelegramNotificationSender};
use gazeta_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::{NotificationBackend, WebConfig},
    error::handle_panic,
    handler::{SubmitState, health_check, submit_form},
    middleware::{log_request_outcome, no_cache},
    usecase::SubmissionUseCase,
};

/// 設定に応じた通知送信実装を生成する
pub fn build_sender(config: &WebConfig) -> Arc<dyn NotificationSender> {
    match config.notification_backend {
        NotificationBackend::Telegram => {
            Arc::new(TelegramNotificationSender::new(config.telegram.clone()))
        }
        NotificationBackend::Noop => Arc::new(NoopNotificationSender),
    }
}

/// 設定から送信ハンドラの State を組み立てる
pub fn build_submit_state(
    config: &WebConfig,
    sender: Arc<dyn NotificationSender>,
) -> Arc<SubmitState> {
    let formatter = MessageFormatter::with_offset_hours(config.utc_offset_hours).unwrap_or_default();
    Arc::new(SubmitState {
        usecase: SubmissionUseCase::new(sender, formatter, Arc::new(SystemClock)),
    })
}

/// ルーターを構築する
///
/// API ルートに該当しないパスは `static_dir` から静的ファイルとして配信する
/// （`/` は `index.html`）。
pub fn build_app(submit_state: Arc<SubmitState>, static_dir: &Path) -> Router {
    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: request_id を含むスパンを作成
    // 3. log_request_outcome: リクエスト完了時に結果区分を1行出力（スパン内）
    // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    // 5. CorsLayer: 全オリジンを許可
    // 6. no_cache: /api/ 配下に Cache-Control: no-store（パニック時の 500 も対象）
    // 7. CatchPanicLayer: パニックを汎用の 500 応答に変換
    Router::new()
        .route("/health", get(health_check))
        .route("/api/submit-form", post(submit_form))
        .with_state(submit_state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(no_cache))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(log_request_outcome))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
