use crate::models::MatchType;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 自动匹配通知允许的匹配类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoMatchType {
    AutoMatched,
}

/// 待审核通知允许的匹配类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMatchType {
    HighConfidence,
    Suggested,
}

// action 决定通知种类, 标签随之收敛
impl From<MatchType> for AutoMatchType {
    fn from(_: MatchType) -> Self {
        AutoMatchType::AutoMatched
    }
}

// 建议匹配中出现 auto_matched 标签时按高置信度处理
impl From<MatchType> for ReviewMatchType {
    fn from(value: MatchType) -> Self {
        match value {
            MatchType::Suggested => ReviewMatchType::Suggested,
            MatchType::HighConfidence | MatchType::AutoMatched => ReviewMatchType::HighConfidence,
        }
    }
}

/// 跨币种匹配通知: 分别携带单据与流水的金额和币种
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCurrencyPayload {
    pub team_id: Uuid,
    pub inbox_id: Uuid,
    pub transaction_id: Uuid,
    pub document_name: String,
    pub document_amount: f64,
    pub document_currency: String,
    pub transaction_amount: f64,
    pub transaction_currency: String,
    pub transaction_name: String,
    pub confidence_score: f64,
    pub match_type: MatchType,
}

/// 同币种匹配通知, `M` 限定可出现的匹配类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPayload<M> {
    pub team_id: Uuid,
    pub inbox_id: Uuid,
    pub transaction_id: Uuid,
    pub document_name: String,
    pub amount: f64,
    pub currency: String,
    pub transaction_name: String,
    pub confidence_score: f64,
    pub match_type: M,
    pub is_cross_currency: bool,
}

pub type AutoMatchedPayload = MatchedPayload<AutoMatchType>;
pub type NeedsReviewPayload = MatchedPayload<ReviewMatchType>;

/// 推送给任务队列的通知事件, `type` 字段区分种类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    InboxCrossCurrencyMatched(CrossCurrencyPayload),
    InboxAutoMatched(AutoMatchedPayload),
    InboxNeedsReview(NeedsReviewPayload),
}

/// 通知种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    InboxCrossCurrencyMatched,
    InboxAutoMatched,
    InboxNeedsReview,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::InboxCrossCurrencyMatched => "inbox_cross_currency_matched",
            NotificationType::InboxAutoMatched => "inbox_auto_matched",
            NotificationType::InboxNeedsReview => "inbox_needs_review",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NotificationEvent {
    pub fn notification_type(&self) -> NotificationType {
        match self {
            NotificationEvent::InboxCrossCurrencyMatched(_) => NotificationType::InboxCrossCurrencyMatched,
            NotificationEvent::InboxAutoMatched(_) => NotificationType::InboxAutoMatched,
            NotificationEvent::InboxNeedsReview(_) => NotificationType::InboxNeedsReview,
        }
    }

    pub fn transaction_id(&self) -> Uuid {
        match self {
            NotificationEvent::InboxCrossCurrencyMatched(p) => p.transaction_id,
            NotificationEvent::InboxAutoMatched(p) => p.transaction_id,
            NotificationEvent::InboxNeedsReview(p) => p.transaction_id,
        }
    }
}
