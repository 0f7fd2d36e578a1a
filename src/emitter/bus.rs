//! 进程内通知总线, 基于 `tokio::sync::broadcast`
//!
//! 嵌入式使用时代替任务队列: 订阅方自行消费 [`NotificationEvent`].

use crate::emitter::EventEmitter;
use crate::error::EmitError;
use crate::models::NotificationEvent;
use async_trait::async_trait;
use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 256;

pub struct NotificationBus {
    sender: broadcast::Sender<NotificationEvent>,
}

impl NotificationBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.sender.subscribe()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl EventEmitter for NotificationBus {
    async fn emit(&self, event: &NotificationEvent) -> Result<(), EmitError> {
        // 没有订阅者时事件会丢失, 按投递失败处理
        self.sender
            .send(event.clone())
            .map(|_| ())
            .map_err(|_| EmitError::ChannelClosed)
    }
}
