//! # 通知
//!
//! 申し込みをオペレーター向けの通知テキストに整形し、送信結果を表現する。
//!
//! ## 設計方針
//!
//! - **整形は純粋関数**: [`MessageFormatter::format`] は I/O を行わず、
//!   同じ申し込みと時刻からは常に同じテキストを返す
//! - **HTML パースモード前提**: 見出しは `<b>` で装飾し、利用者入力は HTML エスケープする
//! - **送信結果は `Result`**: 成功時はプロバイダの応答をそのまま保持し、失敗時は
//!   [`NotificationError`] で理由を区別する

use chrono::{DateTime, FixedOffset, Offset, Utc};
use thiserror::Error;

use crate::submission::{SubmissionKind, SubmissionRequest};

/// 見出しと本文を区切る罫線
const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// 日時の表示形式（ru-RU: `DD.MM.YYYY, HH:MM`）
const DATE_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// デフォルトの表示タイムゾーン（UTC+3）
const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;

/// 通知送信エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// 送信先の認証情報（Bot トークン / チャット ID）が設定されていない
    #[error("通知の送信先が設定されていません（bot token / chat id）")]
    NotConfigured,

    /// プロバイダへの送信に失敗（ネットワーク障害または非 2xx 応答）
    #[error("通知の送信に失敗: {0}")]
    Delivery(String),
}

/// 送信成功時のプロバイダ応答
///
/// 内容は解釈せず、そのまま保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub raw: serde_json::Value,
}

/// 1 回の送信試行の結果
pub type NotificationResult = Result<DeliveryReceipt, NotificationError>;

/// 通知メッセージ整形
///
/// 日時は `utc_offset` に変換した上で ru-RU 形式で表示する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFormatter {
    utc_offset: FixedOffset,
}

impl MessageFormatter {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self { utc_offset }
    }

    /// UTC からの時差（時間単位）で作成する
    ///
    /// 範囲外（±24 時間以上）の場合は `None`。
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    /// 申し込みを通知テキストに整形する
    pub fn format(&self, request: &SubmissionRequest, now: DateTime<Utc>) -> String {
        let label = match request.kind() {
            SubmissionKind::Project => "📋 ЗАКАЗ ПРОЕКТА",
            SubmissionKind::Service => "🔧 ЗАКАЗ УСЛУГИ",
        };
        let date = now.with_timezone(&self.utc_offset).format(DATE_FORMAT);

        format!(
            "{label}\n\
             {SEPARATOR}\n\
             \n\
             👤 <b>Клиент:</b> {first_name} {last_name}\n\
             📱 <b>Телефон:</b> {phone}\n\
             📝 <b>Описание:</b>\n\
             {description}\n\
             \n\
             ⏰ <b>Дата:</b> {date}",
            first_name = escape_html(request.first_name()),
            last_name = escape_html(request.last_name()),
            phone = escape_html(request.phone()),
            description = escape_html(request.description()),
        )
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::with_offset_hours(DEFAULT_UTC_OFFSET_HOURS).unwrap_or(Self::new(Utc.fix()))
    }
}

/// Telegram の HTML パースモードで特別な意味を持つ文字をエスケープする
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
