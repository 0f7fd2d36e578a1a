//! 集成测试共用的存储、推送端、数据构造与日志捕获

#![allow(dead_code)]

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use inbox_match_notify::emitter::EventEmitter;
use inbox_match_notify::error::{EmitError, StoreError};
use inbox_match_notify::models::{
    InboxItem, MatchAction, MatchNotificationRequest, MatchResult, MatchType, NotificationEvent,
    TransactionItem,
};
use inbox_match_notify::MatchStore;
use std::collections::HashMap;
use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

// 存储

/// 按团队隔离的内存存储
#[derive(Default)]
pub struct InMemoryStore {
    inbox: Mutex<HashMap<Uuid, InboxItem>>,
    transactions: Mutex<HashMap<Uuid, TransactionItem>>,
}

impl InMemoryStore {
    pub fn insert_inbox(&self, item: InboxItem) {
        self.inbox.lock().unwrap().insert(item.id, item);
    }

    pub fn insert_transaction(&self, item: TransactionItem) {
        self.transactions.lock().unwrap().insert(item.id, item);
    }
}

#[async_trait]
impl MatchStore for InMemoryStore {
    async fn inbox_by_id(&self, id: Uuid, team_id: Uuid) -> Result<Option<InboxItem>, StoreError> {
        Ok(self
            .inbox
            .lock()
            .unwrap()
            .get(&id)
            .filter(|item| item.team_id == team_id)
            .cloned())
    }

    async fn transaction_by_id(
        &self,
        id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<TransactionItem>, StoreError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .get(&id)
            .filter(|item| item.team_id == team_id)
            .cloned())
    }
}

/// 流水查询总是失败的存储
pub struct FailingStore;

#[async_trait]
impl MatchStore for FailingStore {
    async fn inbox_by_id(&self, _id: Uuid, _team_id: Uuid) -> Result<Option<InboxItem>, StoreError> {
        Ok(None)
    }

    async fn transaction_by_id(
        &self,
        _id: Uuid,
        _team_id: Uuid,
    ) -> Result<Option<TransactionItem>, StoreError> {
        Err(StoreError::Unavailable("connection reset by peer".to_string()))
    }
}

// 推送端

/// 模拟任务队列不可用, 每次推送都返回 503
#[derive(Default)]
pub struct FailingEmitter {
    pub attempts: Mutex<Vec<NotificationEvent>>,
}

#[async_trait]
impl EventEmitter for FailingEmitter {
    async fn emit(&self, event: &NotificationEvent) -> Result<(), EmitError> {
        self.attempts.lock().unwrap().push(event.clone());
        Err(EmitError::HttpStatus(503))
    }
}

// 测试数据

pub struct Scenario {
    pub team_id: Uuid,
    pub inbox: InboxItem,
    pub transaction: TransactionItem,
}

impl Scenario {
    pub fn new(
        inbox_currency: Option<&str>,
        inbox_amount: Option<&str>,
        transaction_currency: Option<&str>,
        transaction_amount: &str,
    ) -> Self {
        let team_id = Uuid::new_v4();
        Self {
            team_id,
            inbox: InboxItem {
                id: Uuid::new_v4(),
                team_id,
                display_name: None,
                file_name: None,
                amount: inbox_amount.map(|a| BigDecimal::from_str(a).unwrap()),
                currency: inbox_currency.map(str::to_string),
            },
            transaction: TransactionItem {
                id: Uuid::new_v4(),
                team_id,
                name: String::new(),
                amount: BigDecimal::from_str(transaction_amount).unwrap(),
                currency: transaction_currency.map(str::to_string),
            },
        }
    }

    pub fn display_name(mut self, name: &str) -> Self {
        self.inbox.display_name = Some(name.to_string());
        self
    }

    pub fn file_name(mut self, name: &str) -> Self {
        self.inbox.file_name = Some(name.to_string());
        self
    }

    pub fn transaction_name(mut self, name: &str) -> Self {
        self.transaction.name = name.to_string();
        self
    }

    pub fn request(&self, action: MatchAction, match_type: MatchType) -> MatchNotificationRequest {
        MatchNotificationRequest {
            team_id: self.team_id,
            inbox_id: self.inbox.id,
            action,
            suggestion: MatchResult {
                transaction_id: self.transaction.id,
                confidence_score: 0.93,
                match_type,
            },
        }
    }

    /// 同时包含单据和流水的存储
    pub fn store(&self) -> Arc<InMemoryStore> {
        let store = InMemoryStore::default();
        store.insert_inbox(self.inbox.clone());
        store.insert_transaction(self.transaction.clone());
        Arc::new(store)
    }
}

// 日志捕获

/// 收集格式化后的 `tracing` 输出
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// 安装线程内 subscriber; `#[tokio::test]` 为单线程运行时, 测试中的日志都会被捕获
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
