use actix_web::{Either, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::models::webservice::requests::UpdateGradeParams;
use crate::services::WebserviceService;

static WEBSERVICE_SERVICE: Lazy<WebserviceService> = Lazy::new(WebserviceService::new_lazy);

/// 令牌也可以放在查询串中
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub wstoken: Option<String>,
}

// 外部评分系统回写成绩（表单或 JSON）
pub async fn update_grade(
    req: HttpRequest,
    query: web::Query<TokenQuery>,
    body: Either<web::Form<UpdateGradeParams>, web::Json<UpdateGradeParams>>,
) -> ActixResult<HttpResponse> {
    let mut params = match body {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };
    if params.wstoken.is_none() {
        params.wstoken = query.into_inner().wstoken;
    }

    WEBSERVICE_SERVICE.update_grade(&req, params).await
}

// 配置路由
pub fn configure_webservice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webservice/rest")
            .service(web::resource("/update_grade").route(web::post().to(update_grade))),
    );
}
