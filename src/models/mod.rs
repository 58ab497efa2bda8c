pub mod assignments;
pub mod common;
pub mod grades;
pub mod overrides;
pub mod students;
pub mod users;
pub mod webservice;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
