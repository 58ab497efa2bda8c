use serde::Serialize;

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    ValidationFailed = 1005,
    Conflict = 1009,

    // 作业相关 2xxx
    AssignmentNotFound = 2001,
    GradeNotFound = 2002,
    OverrideNotFound = 2003,
    UserNotFound = 2004,
    NotEnrolled = 2005,

    // Webservice 3xxx
    WebserviceTokenInvalid = 3001,

    InternalServerError = 5000,
}
