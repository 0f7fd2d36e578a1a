use thiserror::Error;

/// 存储查询错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// 通知推送错误
#[derive(Debug, Error)]
pub enum EmitError {
    /// HTTP 请求失败 (网络、DNS、超时等)
    #[error("task queue request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 任务队列返回非 2xx 状态码
    #[error("task queue returned HTTP {0}")]
    HttpStatus(u16),

    /// 进程内总线没有订阅者
    #[error("notification channel has no subscribers")]
    ChannelClosed,
}

/// 单次通知分发中的错误, 仅在服务内部流转, 不会抛给调用方
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] StoreError),

    #[error("emit failed: {0}")]
    Emit(#[from] EmitError),
}
