//! # Gazeta Web サーバー
//!
//! サイトの静的ファイルを配信し、注文フォームの申し込みを Telegram チャットへ中継する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Browser    │────▶│  gazeta-web  │────▶│ Telegram Bot API │
//! │ (script.js)  │     │  port: 3000  │     │   sendMessage    │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `WEB_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` / `WEB_PORT` | No | ポート番号（デフォルト: `3000`、`PORT` が優先） |
//! | `TELEGRAM_BOT_TOKEN` | No* | Bot トークン |
//! | `TELEGRAM_CHAT_ID` | No* | 通知先チャット ID |
//! | `TELEGRAM_API_BASE_URL` | No | Bot API のベース URL |
//! | `NOTIFICATION_BACKEND` | No | `telegram`（デフォルト）または `noop` |
//! | `NOTIFICATION_UTC_OFFSET_HOURS` | No | 通知に表示する日時の時差（デフォルト: `3`） |
//! | `STATIC_DIR` | No | 静的ファイルのディレクトリ（デフォルト: `public`） |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//!
//! *未設定でもサーバーは起動する。その場合、申し込みは 500 で失敗する。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p gazeta-web
//!
//! # Bot なしでローカル確認
//! NOTIFICATION_BACKEND=noop cargo run -p gazeta-web
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use gazeta_shared::observability::init_tracing;
use gazeta_web::{
    app_builder::{build_app, build_sender, build_submit_state},
    config::{NotificationBackend, WebConfig},
};
use tokio::net::TcpListener;

/// Web サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. アプリケーション設定の読み込み
/// 3. トレーシングの初期化
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    let config = WebConfig::from_env().context("設定の読み込みに失敗しました")?;

    init_tracing(config.log_format);
    let _tracing_guard = tracing::info_span!("app", service = "web").entered();

    match config.notification_backend {
        NotificationBackend::Telegram if config.telegram.is_configured() => {
            tracing::info!(
                chat_id = config.telegram.chat_id.as_deref().unwrap_or_default(),
                "Telegram 通知を送信します"
            );
        }
        NotificationBackend::Telegram => {
            tracing::warn!(
                "TELEGRAM_BOT_TOKEN または TELEGRAM_CHAT_ID が未設定です。申し込みは送信できません"
            );
        }
        NotificationBackend::Noop => {
            tracing::warn!("NOTIFICATION_BACKEND=noop: 通知は送信されません");
        }
    }

    let sender = build_sender(&config);
    let app = build_app(build_submit_state(&config, sender), &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} にバインドできません"))?;

    tracing::info!(
        static_dir = %config.static_dir.display(),
        "Web サーバーを起動しました: http://{}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
