use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireActingUser};
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::models::grades::requests::{GradeListParams, ManualGradeRequest};
use crate::models::overrides::requests::GrantExtensionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{AssignmentService, GradeService, OverrideService};
use crate::utils::{SafeIDI64, SafeUserIdI64};

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);
static OVERRIDE_SERVICE: Lazy<OverrideService> = Lazy::new(OverrideService::new_lazy);

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Unable to determine the acting user",
    ))
}

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    ASSIGNMENT_SERVICE
        .create_assignment(&req, user_id, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    ASSIGNMENT_SERVICE.get_assignment(&req, user_id, id.0).await
}

// 更新作业设置
pub async fn update_assignment(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    ASSIGNMENT_SERVICE
        .update_assignment(&req, user_id, id.0, body.into_inner())
        .await
}

// 删除作业
pub async fn delete_assignment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    ASSIGNMENT_SERVICE.delete_assignment(&req, user_id, id.0).await
}

// 作业概览
pub async fn get_summary(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    ASSIGNMENT_SERVICE.get_summary(&req, user_id, id.0).await
}

// 成绩列表
pub async fn list_grades(
    req: HttpRequest,
    id: SafeIDI64,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    GRADE_SERVICE
        .list_grades(&req, user_id, id.0, query.into_inner())
        .await
}

// 单个学生成绩
pub async fn get_grade(
    req: HttpRequest,
    id: SafeIDI64,
    student: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    GRADE_SERVICE.get_grade(&req, user_id, id.0, student.0).await
}

// 人工评分
pub async fn update_grade(
    req: HttpRequest,
    id: SafeIDI64,
    student: SafeUserIdI64,
    body: web::Json<ManualGradeRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    GRADE_SERVICE
        .update_grade(&req, user_id, id.0, student.0, body.into_inner())
        .await
}

// 完成状态
pub async fn get_completion(
    req: HttpRequest,
    id: SafeIDI64,
    student: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    GRADE_SERVICE
        .get_completion(&req, user_id, id.0, student.0)
        .await
}

// 延期列表
pub async fn list_overrides(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    OVERRIDE_SERVICE.list_overrides(&req, user_id, id.0).await
}

// 授予延期
pub async fn grant_extension(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<GrantExtensionRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    OVERRIDE_SERVICE
        .grant_extension(&req, user_id, id.0, body.into_inner())
        .await
}

// 删除延期
pub async fn delete_override(
    req: HttpRequest,
    id: SafeIDI64,
    student: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireActingUser::extract_user_id(&req) else {
        return Ok(unauthorized());
    };
    OVERRIDE_SERVICE
        .delete_override(&req, user_id, id.0, student.0)
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireActingUser)
            // 创建作业 - 业务层要求课程教师身份
            .service(web::resource("").route(web::post().to(create_assignment)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_assignment))
                    .route(web::put().to(update_assignment))
                    .route(web::delete().to(delete_assignment)),
            )
            .service(web::resource("/{id}/summary").route(web::get().to(get_summary)))
            .service(web::resource("/{id}/grades").route(web::get().to(list_grades)))
            .service(
                web::resource("/{id}/grades/{user_id}")
                    // 学生只能查看自己的成绩
                    .route(web::get().to(get_grade))
                    .route(web::put().to(update_grade)),
            )
            .service(
                web::resource("/{id}/completion/{user_id}").route(web::get().to(get_completion)),
            )
            .service(
                web::resource("/{id}/overrides")
                    .route(web::get().to(list_overrides))
                    .route(web::post().to(grant_extension)),
            )
            .service(
                web::resource("/{id}/overrides/{user_id}")
                    .route(web::delete().to(delete_override)),
            ),
    );
}
