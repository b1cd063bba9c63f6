//! # 注文送信ユースケース
//!
//! 検証済みの申し込みを通知テキストに整形し、通知送信を 1 回だけ行う。
//! リトライや永続化は行わない。

use std::sync::Arc;

use gazeta_domain::{
    clock::Clock,
    notification::{MessageFormatter, NotificationError},
    submission::SubmissionRequest,
};
use gazeta_infra::NotificationSender;
use gazeta_shared::{
    event_log::{error, event},
    log_business_event,
};

use crate::error::SubmitError;

/// 注文送信ユースケース
pub struct SubmissionUseCase {
    sender:    Arc<dyn NotificationSender>,
    formatter: MessageFormatter,
    clock:     Arc<dyn Clock>,
}

impl SubmissionUseCase {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        formatter: MessageFormatter,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sender,
            formatter,
            clock,
        }
    }

    /// 申し込みを通知する
    ///
    /// 送信失敗の詳細はログにのみ出力し、[`SubmitError`] として返す。
    #[tracing::instrument(skip_all, fields(submission.kind = %request.kind()))]
    pub async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmitError> {
        let text = self.formatter.format(request, self.clock.now());

        match self.sender.send(&text).await {
            Ok(_) => {
                log_business_event!(
                    event.category = event::category::SUBMISSION,
                    event.action = event::action::SUBMISSION_DELIVERED,
                    event.result = event::result::SUCCESS,
                    submission.kind = %request.kind(),
                    submission.client = %request.full_name(),
                    "申し込みを通知しました"
                );
                Ok(())
            }
            Err(e) => {
                let (error_category, error_kind) = match &e {
                    NotificationError::NotConfigured => {
                        (error::category::CONFIGURATION, error::kind::MISSING_CREDENTIALS)
                    }
                    NotificationError::Delivery(_) => {
                        (error::category::EXTERNAL_SERVICE, error::kind::NOTIFICATION)
                    }
                };
                tracing::error!(
                    error.category = error_category,
                    error.kind = error_kind,
                    error = %e,
                    "申し込みの通知に失敗"
                );
                log_business_event!(
                    event.category = event::category::SUBMISSION,
                    event.action = event::action::SUBMISSION_FAILED,
                    event.result = event::result::FAILURE,
                    submission.kind = %request.kind(),
                    "申し込みを通知できませんでした"
                );
                Err(e.into())
            }
        }
    }
}
