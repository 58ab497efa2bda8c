use serde::{Deserialize, Serialize};

/// 消息级别，按严重程度排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Info,
    Warning,
    Error,
}

/// `update_grade` 的返回结构：`{type, name, message}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub name: String,
    pub message: String,
}

impl ResultMessage {
    pub const SUCCESS: &'static str = "success";
    pub const NO_USER: &'static str = "no_user";
    pub const NO_ASSIGNMENT: &'static str = "no_assignment";
    pub const OVERDUE: &'static str = "overdue";
    pub const INVALID_MAX: &'static str = "invalid_max";
    pub const INVALID_POINTS: &'static str = "invalid_points";
    pub const INVALID_TOKEN: &'static str = "invalid_token";
    pub const INTERNAL_ERROR: &'static str = "internal_error";

    pub fn new(message_type: MessageType, name: &str, message: impl Into<String>) -> Self {
        Self {
            message_type,
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub fn info(name: &str, message: impl Into<String>) -> Self {
        Self::new(MessageType::Info, name, message)
    }

    pub fn warning(name: &str, message: impl Into<String>) -> Self {
        Self::new(MessageType::Warning, name, message)
    }

    pub fn error(name: &str, message: impl Into<String>) -> Self {
        Self::new(MessageType::Error, name, message)
    }

    pub fn is_info(&self) -> bool {
        self.message_type == MessageType::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_type_key() {
        let msg = ResultMessage::warning(ResultMessage::OVERDUE, "late");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["name"], "overdue");
        assert_eq!(json["message"], "late");
    }

    #[test]
    fn test_severity_order() {
        assert!(MessageType::Info < MessageType::Warning);
        assert!(MessageType::Warning < MessageType::Error);
    }
}
