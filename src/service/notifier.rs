use crate::db::MatchStore;
use crate::emitter::EventEmitter;
use crate::error::DispatchError;
use crate::models::{MatchNotificationRequest, NotificationType};
use crate::service::classifier::{self, SkipReason};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// 单次分发的结果, 供测试和 HTTP 响应使用; 调用方永远不会收到错误
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Sent { event_type: NotificationType },
    Skipped { reason: SkipReason },
    Failed { error: String },
}

impl DispatchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, DispatchOutcome::Failed { .. })
    }
}

/// 匹配通知分发服务
pub struct MatchNotifier {
    store: Arc<dyn MatchStore>,
    emitter: Arc<dyn EventEmitter>,
}

impl MatchNotifier {
    pub fn new(store: Arc<dyn MatchStore>, emitter: Arc<dyn EventEmitter>) -> Self {
        Self { store, emitter }
    }

    /// 匹配结果确定后调用, 最多发送一条通知.
    /// 查询或推送失败只记录错误日志, 不影响上游匹配流程.
    pub async fn dispatch_match_notification(
        &self,
        request: &MatchNotificationRequest,
    ) -> DispatchOutcome {
        match self.try_dispatch(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    team_id = %request.team_id,
                    inbox_id = %request.inbox_id,
                    error = %e,
                    "Failed to trigger matching notification"
                );
                DispatchOutcome::Failed { error: e.to_string() }
            }
        }
    }

    /// 后台分发, 调用方无需等待
    pub fn spawn_match_notification(
        self: &Arc<Self>,
        request: MatchNotificationRequest,
    ) -> JoinHandle<DispatchOutcome> {
        let notifier = Arc::clone(self);
        tokio::spawn(async move { notifier.dispatch_match_notification(&request).await })
    }

    async fn try_dispatch(
        &self,
        request: &MatchNotificationRequest,
    ) -> Result<DispatchOutcome, DispatchError> {
        let transaction_id = request.suggestion.transaction_id;

        // 1. 并发查询单据与流水, 均限定团队
        let (inbox, transaction) = futures::try_join!(
            self.store.inbox_by_id(request.inbox_id, request.team_id),
            self.store.transaction_by_id(transaction_id, request.team_id),
        )?;

        // 2. 任一缺失则不发送
        let (inbox, transaction) = match (inbox, transaction) {
            (Some(inbox), Some(transaction)) => (inbox, transaction),
            (inbox, transaction) => {
                let has_inbox = inbox.is_some();
                let has_transaction = transaction.is_some();
                tracing::warn!(
                    team_id = %request.team_id,
                    inbox_id = %request.inbox_id,
                    transaction_id = %transaction_id,
                    has_inbox,
                    has_transaction,
                    "Missing data for notification"
                );
                return Ok(DispatchOutcome::Skipped {
                    reason: SkipReason::MissingData { has_inbox, has_transaction },
                });
            }
        };

        // 3. 分类并构建事件
        let event = match classifier::classify(request, &inbox, &transaction) {
            Ok(event) => event,
            Err(reason) => {
                tracing::warn!(
                    team_id = %request.team_id,
                    inbox_id = %request.inbox_id,
                    transaction_id = %transaction_id,
                    action = ?request.action,
                    match_type = ?request.suggestion.match_type,
                    reason = ?reason,
                    "No matching notification for action"
                );
                return Ok(DispatchOutcome::Skipped { reason });
            }
        };

        // 4. 推送
        let event_type = event.notification_type();
        self.emitter.emit(&event).await?;

        tracing::info!(
            event_type = %event_type,
            team_id = %request.team_id,
            inbox_id = %request.inbox_id,
            transaction_id = %transaction_id,
            "Triggered match notification"
        );

        Ok(DispatchOutcome::Sent { event_type })
    }
}
