use crate::db::queries;
use crate::error::StoreError;
use crate::models::{InboxItem, TransactionItem};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// 通知分发所需的只读查询, 均按团队隔离
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn inbox_by_id(&self, id: Uuid, team_id: Uuid) -> Result<Option<InboxItem>, StoreError>;

    async fn transaction_by_id(
        &self,
        id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<TransactionItem>, StoreError>;
}

/// 基于 Postgres 的查询实现
#[derive(Clone)]
pub struct PgMatchStore {
    pool: PgPool,
}

impl PgMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchStore for PgMatchStore {
    async fn inbox_by_id(&self, id: Uuid, team_id: Uuid) -> Result<Option<InboxItem>, StoreError> {
        Ok(queries::get_inbox_by_id(&self.pool, id, team_id).await?)
    }

    async fn transaction_by_id(
        &self,
        id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<TransactionItem>, StoreError> {
        Ok(queries::get_transaction_by_id(&self.pool, id, team_id).await?)
    }
}
