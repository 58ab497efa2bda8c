use serde::Deserialize;

/// 注册用户（由宿主系统的用户同步调用）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}
