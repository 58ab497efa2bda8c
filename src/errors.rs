//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::collections::BTreeMap;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_extassign_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ExtAssignError {
            $($variant(String),)*
        }

        impl ExtAssignError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ExtAssignError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ExtAssignError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ExtAssignError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ExtAssignError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ExtAssignError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_extassign_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Authorization("E007", "Authorization Error"),
    Conflict("E008", "Conflict Error"),
    InvalidInput("E009", "Invalid Input"),
}

impl ExtAssignError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ExtAssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ExtAssignError {}

impl From<sea_orm::DbErr> for ExtAssignError {
    fn from(err: sea_orm::DbErr) -> Self {
        ExtAssignError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ExtAssignError {
    fn from(err: std::io::Error) -> Self {
        ExtAssignError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for ExtAssignError {
    fn from(err: serde_json::Error) -> Self {
        ExtAssignError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExtAssignError>;

/// 按字段归类的校验错误（与表单逐字段提示一致）
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一字段只保留最后一次写入的错误
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.insert(field.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn into_result(self) -> std::result::Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .fields
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl From<ValidationErrors> for ExtAssignError {
    fn from(errors: ValidationErrors) -> Self {
        ExtAssignError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ExtAssignError::database_config("test").code(), "E001");
        assert_eq!(ExtAssignError::validation("test").code(), "E005");
        assert_eq!(ExtAssignError::not_found("test").code(), "E006");
        assert_eq!(ExtAssignError::invalid_input("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ExtAssignError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            ExtAssignError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ExtAssignError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = ExtAssignError::not_found("assignment 3");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("assignment 3"));
    }

    #[test]
    fn test_validation_errors_collect_per_field() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add("duedate", "first");
        errors.add("cutoffdate", "second");
        errors.add("duedate", "replaced");

        assert_eq!(errors.get("duedate"), Some("replaced"));
        assert_eq!(errors.get("cutoffdate"), Some("second"));
        assert_eq!(errors.to_string(), "cutoffdate: second; duedate: replaced");

        let err: ExtAssignError = errors.into();
        assert_eq!(err.code(), "E005");
    }
}
