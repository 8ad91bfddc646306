use std::sync::Arc;
use vendo_core::config::AppInfo;
use vendo_order::OrderPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<OrderPipeline>,
    pub app_info: AppInfo,
}
