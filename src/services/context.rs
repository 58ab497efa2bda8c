//! 业务层共享上下文与错误映射

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::config::GradingConfig;
use crate::errors::{ExtAssignError, ValidationErrors};
use crate::integrations::{Calendar, CompletionTracker, Gradebook};
use crate::models::assignments::entities::AssignmentConfig;
use crate::models::users::entities::EnrolmentRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::{SeaOrmStorage, Storage};

/// 一次请求可用的全部协作方
#[derive(Clone)]
pub struct ServiceContext {
    pub storage: Arc<dyn Storage>,
    pub gradebook: Arc<dyn Gradebook>,
    pub completion: Arc<dyn CompletionTracker>,
    pub calendar: Arc<dyn Calendar>,
    pub grading: GradingConfig,
}

impl ServiceContext {
    /// 同一个数据库实例承担存储与全部协作方
    pub fn from_storage(storage: Arc<SeaOrmStorage>, grading: GradingConfig) -> Self {
        Self {
            storage: storage.clone(),
            gradebook: storage.clone(),
            completion: storage.clone(),
            calendar: storage,
            grading,
        }
    }

    pub(crate) fn from_request(request: &HttpRequest) -> Self {
        request
            .app_data::<actix_web::web::Data<ServiceContext>>()
            .expect("ServiceContext not found in app data")
            .get_ref()
            .clone()
    }
}

#[derive(Debug)]
pub enum ServiceError {
    // 逐字段校验失败，阻止写入
    Invalid(ValidationErrors),
    NotFound(ErrorCode, String),
    Forbidden(String),
    Internal(ExtAssignError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

impl From<ExtAssignError> for ServiceError {
    fn from(err: ExtAssignError) -> Self {
        match err {
            ExtAssignError::NotFound(msg) => ServiceError::NotFound(ErrorCode::NotFound, msg),
            ExtAssignError::Authorization(msg) => ServiceError::Forbidden(msg),
            other => ServiceError::Internal(other),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Invalid(errors)
    }
}

impl ServiceError {
    pub fn into_response(self) -> HttpResponse {
        match self {
            ServiceError::Invalid(errors) => HttpResponse::BadRequest().json(ApiResponse::error(
                ErrorCode::ValidationFailed,
                errors.fields.clone(),
                errors.to_string(),
            )),
            ServiceError::NotFound(code, msg) => {
                HttpResponse::NotFound().json(ApiResponse::error_empty(code, msg))
            }
            ServiceError::Forbidden(msg) => {
                HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, msg))
            }
            ServiceError::Internal(err) => {
                error!("{}", err.format_simple());
                let status = match err {
                    ExtAssignError::Conflict(_) => actix_web::http::StatusCode::CONFLICT,
                    ExtAssignError::Validation(_) | ExtAssignError::InvalidInput(_) => {
                        actix_web::http::StatusCode::BAD_REQUEST
                    }
                    _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                };
                let code = match status {
                    actix_web::http::StatusCode::CONFLICT => ErrorCode::Conflict,
                    actix_web::http::StatusCode::BAD_REQUEST => ErrorCode::BadRequest,
                    _ => ErrorCode::InternalServerError,
                };
                HttpResponse::build(status).json(ApiResponse::error_empty(code, err.message()))
            }
        }
    }
}

/// 把业务结果转换为 HTTP 响应
pub fn respond<T: Serialize>(result: ServiceResult<T>, message: &str) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
        Err(err) => err.into_response(),
    }
}

/// 获取作业，不存在时返回 404
pub async fn load_assignment(
    ctx: &ServiceContext,
    assignment_id: i64,
) -> ServiceResult<AssignmentConfig> {
    ctx.storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(
                ErrorCode::AssignmentNotFound,
                format!("Assignment {assignment_id} not found"),
            )
        })
}

/// 要求用户以教师身份在课程中选课
pub async fn require_teacher(
    ctx: &ServiceContext,
    course_id: i64,
    user_id: i64,
) -> ServiceResult<()> {
    match ctx.storage.get_enrolment_role(course_id, user_id).await? {
        Some(role) if role.can_grade() => Ok(()),
        _ => Err(ServiceError::Forbidden(format!(
            "User {user_id} may not grade in course {course_id}"
        ))),
    }
}

/// 要求用户以学生身份在课程中选课
pub async fn require_student(
    ctx: &ServiceContext,
    course_id: i64,
    user_id: i64,
) -> ServiceResult<()> {
    match ctx.storage.get_enrolment_role(course_id, user_id).await? {
        Some(EnrolmentRole::Student) => Ok(()),
        _ => Err(ServiceError::NotFound(
            ErrorCode::NotEnrolled,
            format!("User {user_id} is not a student in course {course_id}"),
        )),
    }
}
