pub mod bus;
pub mod task_queue;

use crate::error::EmitError;
use crate::models::NotificationEvent;
use async_trait::async_trait;

pub use bus::NotificationBus;
pub use task_queue::TaskQueueEmitter;

/// 通知投递系统中的逻辑事件名
pub const NOTIFICATION_TASK: &str = "notification";

/// 通知事件推送端
#[async_trait]
pub trait EventEmitter: Send + Sync {
    async fn emit(&self, event: &NotificationEvent) -> Result<(), EmitError>;
}
