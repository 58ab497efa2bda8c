/*!
 * 当前操作用户中间件
 *
 * 身份认证由前置网关完成，网关通过 `X-Acting-User` 请求头传入已认证用户的 ID。
 * 此中间件确认该用户存在，并把用户信息放入请求扩展中供处理程序使用。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RequireActingUser;
 *
 * App::new().service(
 *     web::scope("/api/v1/assignments")
 *         .wrap(RequireActingUser)
 *         .route("/{id}", web::get().to(get_assignment)),
 * );
 *
 * async fn get_assignment(req: HttpRequest) -> Result<HttpResponse> {
 *     let user_id = RequireActingUser::extract_user_id(&req);
 *     // ...
 * }
 * ```
 *
 * 请求头缺失、无法解析或用户不存在时返回 401。
 */

use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ServiceContext;

pub const ACTING_USER_HEADER: &str = "X-Acting-User";

#[derive(Clone)]
pub struct RequireActingUser;

fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

async fn resolve_acting_user(req: &ServiceRequest) -> Result<User, String> {
    let user_id = req
        .headers()
        .get(ACTING_USER_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| format!("Missing {ACTING_USER_HEADER} header"))?
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("Invalid {ACTING_USER_HEADER} header"))?;

    let ctx = req
        .app_data::<actix_web::web::Data<ServiceContext>>()
        .ok_or_else(|| "Service context not configured".to_string())?;

    ctx.storage
        .get_user_by_id(user_id)
        .await
        .map_err(|e| {
            info!("Failed to load acting user {}: {}", user_id, e);
            "Failed to retrieve user from storage".to_string()
        })?
        .ok_or_else(|| "User not found".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RequireActingUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireActingUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireActingUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireActingUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireActingUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match resolve_acting_user(&req).await {
                Ok(user) => {
                    debug!("Acting user resolved: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!("Rejected request to {}: {}", req.path(), err);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireActingUser {
    /// 从请求扩展中提取当前用户
    /// 此函数应该在应用了 RequireActingUser 中间件的路由处理程序中使用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    /// 从请求扩展中提取当前用户 ID
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<User>().map(|user| user.id)
    }
}
