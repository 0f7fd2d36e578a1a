use crate::models::{InboxItem, TransactionItem};
use sqlx::PgPool;
use uuid::Uuid;

/// 按ID查询收件箱单据 (限定团队, 防止跨租户读取)
pub async fn get_inbox_by_id(
    pool: &PgPool,
    id: Uuid,
    team_id: Uuid,
) -> Result<Option<InboxItem>, sqlx::Error> {
    sqlx::query_as::<_, InboxItem>(
        r#"
        SELECT id, team_id, display_name, file_name, amount, currency
        FROM inbox
        WHERE id = $1
          AND team_id = $2
        "#
    )
    .bind(id)
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

/// 按ID查询交易流水 (限定团队)
pub async fn get_transaction_by_id(
    pool: &PgPool,
    id: Uuid,
    team_id: Uuid,
) -> Result<Option<TransactionItem>, sqlx::Error> {
    sqlx::query_as::<_, TransactionItem>(
        r#"
        SELECT id, team_id, name, amount, currency
        FROM transactions
        WHERE id = $1
          AND team_id = $2
        "#
    )
    .bind(id)
    .bind(team_id)
    .fetch_optional(pool)
    .await
}
