//! 任务队列推送: 通过 HTTP 触发通知任务
//!
//! 单次尝试, 不重试; 失败由上层记录日志后吞掉.

use crate::config::EmitterConfig;
use crate::emitter::EventEmitter;
use crate::error::EmitError;
use crate::models::NotificationEvent;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct TriggerBody<'a> {
    payload: &'a NotificationEvent,
}

/// 把通知事件提交到任务队列的 `{base_url}/api/v1/tasks/{task_id}/trigger`
pub struct TaskQueueEmitter {
    client: reqwest::Client,
    trigger_url: String,
    secret_key: Option<String>,
}

impl TaskQueueEmitter {
    pub fn new(config: &EmitterConfig) -> Result<Self, EmitError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            trigger_url: trigger_url(&config.base_url, &config.task_id),
            secret_key: config.secret_key.clone(),
        })
    }

    pub fn trigger_url(&self) -> &str {
        &self.trigger_url
    }
}

fn trigger_url(base_url: &str, task_id: &str) -> String {
    format!("{}/api/v1/tasks/{}/trigger", base_url.trim_end_matches('/'), task_id)
}

#[async_trait]
impl EventEmitter for TaskQueueEmitter {
    async fn emit(&self, event: &NotificationEvent) -> Result<(), EmitError> {
        let mut request = self
            .client
            .post(&self.trigger_url)
            .json(&TriggerBody { payload: event });

        if let Some(secret) = &self.secret_key {
            request = request.bearer_auth(secret);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EmitError::HttpStatus(status.as_u16()));
        }

        tracing::debug!(
            url = %self.trigger_url,
            status = status.as_u16(),
            "notification task triggered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::NOTIFICATION_TASK;

    #[test]
    fn trigger_url_joins_base_and_task() {
        assert_eq!(
            trigger_url("https://api.trigger.dev/", NOTIFICATION_TASK),
            "https://api.trigger.dev/api/v1/tasks/notification/trigger"
        );
        assert_eq!(
            trigger_url("http://localhost:3040", "notification"),
            "http://localhost:3040/api/v1/tasks/notification/trigger"
        );
    }

    #[test]
    fn emitter_built_from_config() {
        let config = crate::AppConfig::default().emitter;
        let emitter = TaskQueueEmitter::new(&config).unwrap();
        assert!(emitter.trigger_url().ends_with("/tasks/notification/trigger"));
    }
}
