//! 匹配通知分类规则
//!
//! 纯函数: 相同的单据、流水与请求总是得到相同的事件.
//! 跨币种优先于 `action`; 其余情况按 `action` 决定自动匹配或待审核.

use crate::models::{
    AutoMatchType, CrossCurrencyPayload, InboxItem, MatchAction, MatchNotificationRequest,
    MatchedPayload, NotificationEvent, ReviewMatchType, TransactionItem,
};
use bigdecimal::BigDecimal;
use serde::Serialize;

pub const DEFAULT_DOCUMENT_NAME: &str = "Document";
pub const DEFAULT_TRANSACTION_NAME: &str = "Transaction";
pub const DEFAULT_CURRENCY: &str = "USD";

/// 不发送通知的原因
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// 单据或流水在该团队下不存在
    MissingData { has_inbox: bool, has_transaction: bool },
    UnrecognizedAction,
}

// 空字符串等同于缺失
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// 经十进制字符串转换, 保证 75.20 得到最接近的 f64
fn amount_or_zero(amount: Option<&BigDecimal>) -> f64 {
    amount
        .and_then(|a| a.to_string().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// 单据名称: 显示名 -> 文件名 -> "Document"
pub fn document_name(inbox: &InboxItem) -> String {
    non_blank(inbox.display_name.as_deref())
        .or_else(|| non_blank(inbox.file_name.as_deref()))
        .unwrap_or(DEFAULT_DOCUMENT_NAME)
        .to_string()
}

/// 流水名称: 名称 -> "Transaction"
pub fn transaction_name(transaction: &TransactionItem) -> String {
    non_blank(Some(transaction.name.as_str()))
        .unwrap_or(DEFAULT_TRANSACTION_NAME)
        .to_string()
}

/// 两边币种都存在且不相同才算跨币种, 任一缺失按同币种处理
pub fn is_cross_currency(inbox: &InboxItem, transaction: &TransactionItem) -> bool {
    match (
        non_blank(inbox.currency.as_deref()),
        non_blank(transaction.currency.as_deref()),
    ) {
        (Some(document), Some(bank)) => document != bank,
        _ => false,
    }
}

/// 根据单据、流水和请求生成唯一的通知事件; 不应发送时返回跳过原因
pub fn classify(
    request: &MatchNotificationRequest,
    inbox: &InboxItem,
    transaction: &TransactionItem,
) -> Result<NotificationEvent, SkipReason> {
    let suggestion = &request.suggestion;
    let document_name = document_name(inbox);
    let transaction_name = transaction_name(transaction);
    let inbox_currency = non_blank(inbox.currency.as_deref());
    let transaction_currency = non_blank(transaction.currency.as_deref());
    let document_amount = amount_or_zero(inbox.amount.as_ref());

    if is_cross_currency(inbox, transaction) {
        return Ok(NotificationEvent::InboxCrossCurrencyMatched(CrossCurrencyPayload {
            team_id: request.team_id,
            inbox_id: request.inbox_id,
            transaction_id: suggestion.transaction_id,
            document_name,
            document_amount,
            document_currency: inbox_currency.unwrap_or(DEFAULT_CURRENCY).to_string(),
            transaction_amount: amount_or_zero(Some(&transaction.amount)),
            transaction_currency: transaction_currency.unwrap_or(DEFAULT_CURRENCY).to_string(),
            transaction_name,
            confidence_score: suggestion.confidence_score,
            match_type: suggestion.match_type,
        }));
    }

    let currency = inbox_currency
        .or(transaction_currency)
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string();

    match request.action {
        MatchAction::AutoMatched => {
            Ok(NotificationEvent::InboxAutoMatched(matched_payload(
                request,
                document_name,
                document_amount,
                currency,
                transaction_name,
                AutoMatchType::from(suggestion.match_type),
            )))
        }
        MatchAction::SuggestionCreated => {
            Ok(NotificationEvent::InboxNeedsReview(matched_payload(
                request,
                document_name,
                document_amount,
                currency,
                transaction_name,
                ReviewMatchType::from(suggestion.match_type),
            )))
        }
        MatchAction::Unrecognized => Err(SkipReason::UnrecognizedAction),
    }
}

fn matched_payload<M>(
    request: &MatchNotificationRequest,
    document_name: String,
    amount: f64,
    currency: String,
    transaction_name: String,
    match_type: M,
) -> MatchedPayload<M> {
    MatchedPayload {
        team_id: request.team_id,
        inbox_id: request.inbox_id,
        transaction_id: request.suggestion.transaction_id,
        document_name,
        amount,
        currency,
        transaction_name,
        confidence_score: request.suggestion.confidence_score,
        match_type,
        is_cross_currency: false,
    }
}
