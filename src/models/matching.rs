use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 匹配质量标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    AutoMatched,
    HighConfidence,
    Suggested,
}

/// 调用方对匹配结果的处理意图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchAction {
    AutoMatched,
    SuggestionCreated,
    /// 其他未知取值, 反序列化时兜底
    #[serde(other)]
    Unrecognized,
}

/// 匹配引擎的输出结果 (只读)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub transaction_id: Uuid,
    pub confidence_score: f64,
    pub match_type: MatchType,
}

/// 一次匹配通知请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchNotificationRequest {
    pub team_id: Uuid,
    pub inbox_id: Uuid,
    pub action: MatchAction,
    pub suggestion: MatchResult,
}
