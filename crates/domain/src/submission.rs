//! # 注文フォーム送信
//!
//! サイトの注文フォームから届く 1 件の申し込み（Submission）を表す。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`SubmissionKind`] | 申し込み種別 | プロジェクト注文 / サービス注文 |
//! | [`RawSubmission`] | 受信した申し込み | 各項目は省略可能な文字列 |
//! | [`SubmissionRequest`] | 申し込み | 5 項目すべて必須、前後の空白は除去済み |
//!
//! ## 不変条件
//!
//! - `SubmissionRequest` は 5 項目すべてが空白除去後に空でない場合のみ生成できる
//! - 生成できなかった申し込みが通知送信に渡ることはない
//!
//! 永続化は行わない。ライフサイクルは 1 リクエスト内で完結する。

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

/// 必須項目が欠けている場合のエラーメッセージ
pub const REQUIRED_FIELDS_MESSAGE: &str = "Все поля обязательны для заполнения";

/// 送信成功時にユーザーへ返す確認メッセージ
pub const SUBMISSION_ACCEPTED_MESSAGE: &str =
    "Заявка успешно отправлена! Мы свяжемся с вами в ближайшее время.";

/// 通知送信に失敗した場合のエラーメッセージ（詳細は含めない）
pub const DELIVERY_FAILED_MESSAGE: &str = "Ошибка при отправке заявки. Попробуйте позже.";

/// ボディがサイズ上限を超えた場合のエラーメッセージ
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Слишком большой объём данных заявки";

/// 予期しない内部障害時のエラーメッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "Внутренняя ошибка сервера";

/// 申し込み種別
///
/// ワイヤ上は `"project"` / `"service"` で表現される。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionKind {
    /// プロジェクト注文
    Project,
    /// サービス注文
    Service,
}

impl SubmissionKind {
    /// ワイヤ上のラベルから種別を決定する
    ///
    /// `"project"` 以外の値はすべて [`Service`](SubmissionKind::Service) として扱う。
    /// 未知の値でも申し込み自体は拒否しない。
    pub fn from_label(label: &str) -> Self {
        match label {
            "project" => Self::Project,
            _ => Self::Service,
        }
    }
}

/// 受信したままの申し込み（`POST /api/submit-form` のボディ）
///
/// 5 項目はいずれも省略可能な文字列。欠落は [`SubmissionRequest::try_from_raw`] で
/// 400 として扱う。文字列以外の値を含むボディはデシリアライズの段階で拒否される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    /// 申し込み種別（`"project"` 以外はサービス注文として扱う）
    #[serde(rename = "type")]
    #[cfg_attr(feature = "openapi", schema(example = "project"))]
    pub kind:        Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Ivan"))]
    pub first_name:  Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Petrov"))]
    pub last_name:   Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "+7123"))]
    pub phone:       Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Need a logo"))]
    pub description: Option<String>,
}

/// 申し込み（検証・正規化済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    kind:        SubmissionKind,
    first_name:  String,
    last_name:   String,
    phone:       String,
    description: String,
}

impl SubmissionRequest {
    /// 受信した各項目から申し込みを生成する
    ///
    /// いずれかの項目が欠けている、または空白のみの場合は
    /// [`REQUIRED_FIELDS_MESSAGE`] を持つ `DomainError::Validation` を返す。
    /// 成功時、氏名・電話番号・説明は前後の空白を除去して保持する。
    pub fn new(
        kind: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, DomainError> {
        let (Some(kind), Some(first_name), Some(last_name), Some(phone), Some(description)) = (
            required(kind),
            required(first_name),
            required(last_name),
            required(phone),
            required(description),
        ) else {
            return Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        Ok(Self {
            kind:        SubmissionKind::from_label(kind),
            first_name:  first_name.to_string(),
            last_name:   last_name.to_string(),
            phone:       phone.to_string(),
            description: description.to_string(),
        })
    }

    /// 受信したままの申し込みを検証する
    pub fn try_from_raw(raw: &RawSubmission) -> Result<Self, DomainError> {
        Self::new(
            raw.kind.as_deref(),
            raw.first_name.as_deref(),
            raw.last_name.as_deref(),
            raw.phone.as_deref(),
            raw.description.as_deref(),
        )
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// 「名 姓」形式の氏名
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// 空白除去後に空でない値だけを通す
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
