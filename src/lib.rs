pub mod api;
pub mod config;
pub mod db;
pub mod emitter;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::{create_pool, MatchStore, PgMatchStore};
pub use emitter::{EventEmitter, NotificationBus, TaskQueueEmitter};
pub use service::{DispatchOutcome, MatchNotifier};
