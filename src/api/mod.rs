pub mod handlers;

pub use handlers::*;

use crate::service::MatchNotifier;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 构建路由, 所有请求经过 HTTP trace 日志
pub fn router(notifier: Arc<MatchNotifier>) -> Router {
    let notify_routes = Router::new()
        .route("/api/notifications/match", post(notify_match))
        .with_state(notifier);

    Router::new()
        .route("/health", get(health_check))
        .merge(notify_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
