use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// 银行流水 (可与单据匹配的交易记录)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub amount: BigDecimal,
    pub currency: Option<String>,
}
