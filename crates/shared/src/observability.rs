//! # Observability 基盤
//!
//! `observability` feature 有効時に、トレーシング初期化・HTTP リクエストごとのスパン生成・
//! Request ID（UUID v7）生成器を提供する。ログ形式は [`LogFormat`] で選ぶ。

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 JSON（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する（大文字小文字は区別しない）
    ///
    /// 未知の値は `None`。扱いは呼び出し側の設定読み込みで決める。
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// `RUST_LOG` 未設定時のフィルタ
#[cfg(feature = "observability")]
const DEFAULT_ENV_FILTER: &str = "info,gazeta_web=debug,gazeta_infra=debug";

/// グローバルな tracing subscriber を設定する
///
/// プロセス起動時に一度だけ呼ぶ。`RUST_LOG` でレベルを上書きできる。
#[cfg(feature = "observability")]
pub fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_ENV_FILTER.into());

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// UUID v7 で Request ID を生成する `MakeRequestId` 実装
///
/// `SetRequestIdLayer::x_request_id(MakeRequestUuidV7)` として使用する。
/// クライアントが `X-Request-Id` を送ってきた場合はそちらが優先される。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

/// HTTP リクエスト用のスパンを生成する
///
/// `TraceLayer::new_for_http().make_span_with(make_request_span)` として使用する。
/// `SetRequestIdLayer` の内側に配置すること（`x-request-id` が設定済みである前提）。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_nameは大文字小文字と前後の空白を無視する() {
        assert_eq!(LogFormat::from_name("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name(" JSON "), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name("Pretty"), Some(LogFormat::Pretty));
    }

    #[test]
    fn test_from_nameは未知の値でnoneを返す() {
        assert_eq!(LogFormat::from_name("yaml"), None);
        assert_eq!(LogFormat::from_name(""), None);
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_make_request_uuid_v7がuuid_v7を生成する() {
        use tower_http::request_id::MakeRequestId;

        let request = http::Request::builder().uri("/").body(()).unwrap();
        let id = MakeRequestUuidV7.make_request_id(&request).unwrap();

        let uuid = uuid::Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();
        assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
    }
}
