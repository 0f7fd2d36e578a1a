use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// 收件箱单据 (已上传待对账的文档)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InboxItem {
    pub id: Uuid,
    pub team_id: Uuid,
    pub display_name: Option<String>,
    pub file_name: Option<String>,
    pub amount: Option<BigDecimal>,
    pub currency: Option<String>,
}
