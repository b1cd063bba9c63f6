//! # Web サーバー設定
//!
//! 環境変数から Web サーバーの設定を読み込む。
//! 起動時に一度だけ構築し、以降は参照で受け渡す。

use std::{env, path::PathBuf};

use gazeta_infra::{TelegramConfig, notification::DEFAULT_API_BASE_URL};
use gazeta_shared::observability::LogFormat;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;
const DEFAULT_STATIC_DIR: &str = "public";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} は有効なポート番号である必要があります: {value}")]
    InvalidPort { name: &'static str, value: String },

    #[error("NOTIFICATION_BACKEND は telegram または noop である必要があります: {0}")]
    UnknownBackend(String),

    #[error("NOTIFICATION_UTC_OFFSET_HOURS は -23〜23 の整数である必要があります: {0}")]
    InvalidUtcOffset(String),

    #[error("LOG_FORMAT は json または pretty である必要があります: {0}")]
    UnknownLogFormat(String),
}

/// 通知の送信先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBackend {
    /// Telegram Bot API へ送信する
    Telegram,
    /// 送信せずログ出力のみ行う（ローカル開発用）
    Noop,
}

impl NotificationBackend {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "telegram" => Ok(Self::Telegram),
            "noop" => Ok(Self::Noop),
            _ => Err(ConfigError::UnknownBackend(value.to_string())),
        }
    }
}

/// Web サーバーの設定
///
/// `Debug` 出力では Bot トークンを伏せる（[`TelegramConfig`] の実装による）。
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// Telegram 送信設定
    pub telegram: TelegramConfig,
    /// 通知の送信先
    pub notification_backend: NotificationBackend,
    /// 通知テキストに表示する日時の UTC からの時差（時間）
    pub utc_offset_hours: i32,
    /// 静的ファイルのルートディレクトリ
    pub static_dir: PathBuf,
    /// ログ出力形式
    pub log_format: LogFormat,
}

impl WebConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    ///
    /// 空文字の値は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match (get("PORT"), get("WEB_PORT")) {
            (Some(value), _) => parse_port("PORT", &value)?,
            (None, Some(value)) => parse_port("WEB_PORT", &value)?,
            (None, None) => DEFAULT_PORT,
        };

        let notification_backend = get("NOTIFICATION_BACKEND")
            .map(|v| NotificationBackend::parse(&v))
            .transpose()?
            .unwrap_or(NotificationBackend::Telegram);

        let utc_offset_hours = get("NOTIFICATION_UTC_OFFSET_HOURS")
            .map(|v| parse_utc_offset(&v))
            .transpose()?
            .unwrap_or(DEFAULT_UTC_OFFSET_HOURS);

        let log_format = get("LOG_FORMAT")
            .map(|v| LogFormat::from_name(&v).ok_or(ConfigError::UnknownLogFormat(v)))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            host: get("WEB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            telegram: TelegramConfig {
                bot_token:    get("TELEGRAM_BOT_TOKEN"),
                chat_id:      get("TELEGRAM_CHAT_ID"),
                api_base_url: get("TELEGRAM_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            },
            notification_backend,
            utc_offset_hours,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            log_format,
        })
    }
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidPort {
        name,
        value: value.to_string(),
    })
}

fn parse_utc_offset(value: &str) -> Result<i32, ConfigError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|hours| (-23..=23).contains(hours))
        .ok_or_else(|| ConfigError::InvalidUtcOffset(value.to_string()))
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、from_lookup で検証する

    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<WebConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        WebConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.notification_backend, NotificationBackend::Telegram);
        assert_eq!(config.utc_offset_hours, 3);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.telegram.api_base_url, "https://api.telegram.org");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.telegram.is_configured());
    }

    #[test]
    fn test_portはweb_portより優先される() {
        let config = load(&[("PORT", "8080"), ("WEB_PORT", "9090")]).unwrap();
        assert_eq!(config.port, 8080);

        let config = load(&[("WEB_PORT", "9090")]).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_不正なポートはエラー() {
        assert_eq!(
            load(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort {
                name:  "PORT",
                value: "http".to_string(),
            }
        );
    }

    #[test]
    fn test_telegramの認証情報を読み込む() {
        let config = load(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TELEGRAM_CHAT_ID", "-100"),
        ])
        .unwrap();

        assert!(config.telegram.is_configured());
        assert_eq!(config.telegram.chat_id.as_deref(), Some("-100"));
    }

    #[test]
    fn test_空文字の認証情報は未設定として扱う() {
        let config = load(&[("TELEGRAM_BOT_TOKEN", ""), ("TELEGRAM_CHAT_ID", "-100")]).unwrap();

        assert_eq!(config.telegram.bot_token, None);
        assert!(!config.telegram.is_configured());
    }

    #[test]
    fn test_debug出力にbotトークンを含めない() {
        let config = load(&[("TELEGRAM_BOT_TOKEN", "123:very-secret")]).unwrap();

        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[test]
    fn test_notification_backendのパース() {
        assert_eq!(
            load(&[("NOTIFICATION_BACKEND", "NOOP")])
                .unwrap()
                .notification_backend,
            NotificationBackend::Noop
        );
        assert_eq!(
            load(&[("NOTIFICATION_BACKEND", "smtp")]).unwrap_err(),
            ConfigError::UnknownBackend("smtp".to_string())
        );
    }

    #[test]
    fn test_utc_offsetの範囲外はエラー() {
        assert_eq!(
            load(&[("NOTIFICATION_UTC_OFFSET_HOURS", "-5")])
                .unwrap()
                .utc_offset_hours,
            -5
        );
        assert_eq!(
            load(&[("NOTIFICATION_UTC_OFFSET_HOURS", "24")]).unwrap_err(),
            ConfigError::InvalidUtcOffset("24".to_string())
        );
    }

    #[test]
    fn test_log_formatのパース() {
        assert_eq!(
            load(&[("LOG_FORMAT", "json")]).unwrap().log_format,
            LogFormat::Json
        );
        assert_eq!(
            load(&[("LOG_FORMAT", "xml")]).unwrap_err(),
            ConfigError::UnknownLogFormat("xml".to_string())
        );
    }
}
