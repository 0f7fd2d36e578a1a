use crate::emitter::NOTIFICATION_TASK;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub emitter: EmitterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// 任务队列 (通知投递系统) 配置
#[derive(Clone, Serialize, Deserialize)]
pub struct EmitterConfig {
    pub base_url: String,
    pub secret_key: Option<String>,
    pub task_id: String,
    pub timeout_secs: u64,
}

// 密钥不输出到日志
impl std::fmt::Debug for EmitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmitterConfig")
            .field("base_url", &self.base_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("task_id", &self.task_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// 连接串中的用户名密码不输出到日志
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &redact_url(&self.url))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://***{}", scheme, &rest[at..]),
        None => url.to_string(),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/inbox".to_string(),
                max_connections: 20,
                acquire_timeout_secs: 10,
            },
            emitter: EmitterConfig {
                base_url: "https://api.trigger.dev".to_string(),
                secret_key: None,
                task_id: NOTIFICATION_TASK.to_string(),
                timeout_secs: 10,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> config/default 文件 (可选) -> 环境变量 APP__*
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("database.acquire_timeout_secs", defaults.database.acquire_timeout_secs as i64)?
            .set_default("emitter.base_url", defaults.emitter.base_url)?
            .set_default("emitter.task_id", defaults.emitter.task_id)?
            .set_default("emitter.timeout_secs", defaults.emitter.timeout_secs as i64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
