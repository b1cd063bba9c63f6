//! # 注文フォーム送信ハンドラ
//!
//! `POST /api/submit-form`
//!
//! 1. ボディを JSON または `application/x-www-form-urlencoded` としてデコード
//! 2. 必須項目を検証・正規化（[`SubmissionRequest`]）
//! 3. 通知テキストを整形して送信（[`SubmissionUseCase`]）
//! 4. 結果を [`FormResponse`] で返す
//!
//! デコードできないボディは必須項目エラーと同じ 400 応答になる。
//! サイズ上限（axum の既定値）を超えたボディだけは 413 として区別する。

use std::sync::Arc;

use axum::{
    Form,
    Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
};
use gazeta_domain::submission::{
    REQUIRED_FIELDS_MESSAGE,
    RawSubmission,
    SUBMISSION_ACCEPTED_MESSAGE,
    SubmissionRequest,
};
use gazeta_shared::{FormResponse, event_log::event, log_business_event};

use crate::{error::SubmitError, usecase::SubmissionUseCase};

/// 送信ハンドラの State
pub struct SubmitState {
    pub usecase: SubmissionUseCase,
}

/// Content-Type に応じて JSON またはフォームとしてデコードするエクストラクタ
#[derive(Debug)]
pub struct SubmitFormBody(pub RawSubmission);

impl<S> FromRequest<S> for SubmitFormBody
where
    S: Send + Sync,
{
    type Rejection = SubmitError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

        let decoded = if is_form {
            Form::<RawSubmission>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| (rejection.status(), rejection.body_text()))
        } else {
            Json::<RawSubmission>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| (rejection.status(), rejection.body_text()))
        };

        decoded.map(Self).map_err(|(status, reason)| {
            if status == StatusCode::PAYLOAD_TOO_LARGE {
                tracing::warn!(reason = %reason, "リクエストボディがサイズ上限を超えています");
                return SubmitError::PayloadTooLarge;
            }
            tracing::warn!(reason = %reason, "リクエストボディをデコードできません");
            SubmitError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
        })
    }
}

/// 注文フォームを送信する
#[utoipa::path(
   post,
   path = "/api/submit-form",
   tag = "submission",
   request_body = RawSubmission,
   responses(
      (status = 200, description = "送信成功", body = FormResponse),
      (status = 400, description = "必須項目の欠落、またはデコードできないボディ", body = FormResponse),
      (status = 413, description = "ボディがサイズ上限を超えている", body = FormResponse),
      (status = 500, description = "通知の送信失敗、または内部エラー", body = FormResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn submit_form(
    State(state): State<Arc<SubmitState>>,
    SubmitFormBody(raw): SubmitFormBody,
) -> Result<Json<FormResponse>, SubmitError> {
    let request = SubmissionRequest::try_from_raw(&raw).inspect_err(|_| {
        log_business_event!(
            event.category = event::category::SUBMISSION,
            event.action = event::action::SUBMISSION_REJECTED,
            event.result = event::result::FAILURE,
            "必須項目が不足しているため申し込みを拒否"
        );
    })?;

    state.usecase.submit(&request).await?;

    Ok(Json(FormResponse::succeeded(SUBMISSION_ACCEPTED_MESSAGE)))
}
