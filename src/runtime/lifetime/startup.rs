use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::services::ServiceContext;

pub struct StartupContext {
    pub context: ServiceContext,
}

/// 检查 webservice 相关配置，只输出提示，不阻止启动
fn check_grading_config(config: &AppConfig) {
    if config.webservice_token().is_none() {
        warn!("webservice.token is empty, update_grade accepts calls without a token");
    }
    if config.grading.external_username_field.trim().is_empty() {
        warn!("grading.external_username_field is empty, no external user can be resolved");
    }
    debug!(
        "External usernames are read from profile field '{}'",
        config.grading.external_username_field
    );
}

/// 准备服务器启动的上下文
/// 包括存储（已完成迁移）与各协作方
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();
    check_grading_config(config);

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let context = ServiceContext::from_storage(storage, config.grading.clone());

    StartupContext { context }
}
