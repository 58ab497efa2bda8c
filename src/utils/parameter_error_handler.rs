use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError, UrlencodedError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message))
}

// JSON 请求体解析失败
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let message = format!("Invalid JSON body: {err}");
    InternalError::from_response(err, bad_request(message)).into()
}

// 查询参数解析失败
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Query payload error on {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");
    InternalError::from_response(err, bad_request(message)).into()
}

// 表单解析失败
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    debug!("Form payload error on {}: {}", req.path(), err);
    let message = format!("Invalid form parameters: {err}");
    InternalError::from_response(err, bad_request(message)).into()
}
