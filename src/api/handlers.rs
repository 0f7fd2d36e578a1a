use crate::models::MatchNotificationRequest;
use crate::service::{DispatchOutcome, MatchNotifier};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// 响应体
#[derive(Debug, Serialize)]
pub struct NotifyMatchResponse {
    pub success: bool,
    pub message: String,
    pub outcome: DispatchOutcome,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 匹配通知接口
/// 通知失败不能影响匹配流程, 所以始终返回 200, 结果放在 outcome 里
pub async fn notify_match(
    State(notifier): State<Arc<MatchNotifier>>,
    Json(req): Json<MatchNotificationRequest>,
) -> Response {
    let outcome = notifier.dispatch_match_notification(&req).await;

    let message = match &outcome {
        DispatchOutcome::Sent { event_type } => format!("Triggered {} notification", event_type),
        DispatchOutcome::Skipped { .. } => "No notification sent".to_string(),
        DispatchOutcome::Failed { error } => format!("Error: {}", error),
    };

    let response = NotifyMatchResponse {
        success: !outcome.is_failed(),
        message,
        outcome,
    };
    (StatusCode::OK, Json(response)).into_response()
}
