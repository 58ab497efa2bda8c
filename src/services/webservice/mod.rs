pub mod update_grade;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::context::ServiceContext;
use crate::config::AppConfig;
use crate::models::webservice::requests::UpdateGradeParams;

pub struct WebserviceService {
    context: Option<ServiceContext>,
}

impl WebserviceService {
    pub fn new_lazy() -> Self {
        Self { context: None }
    }

    pub(crate) fn get_context(&self, request: &HttpRequest) -> ServiceContext {
        if let Some(context) = &self.context {
            context.clone()
        } else {
            ServiceContext::from_request(request)
        }
    }

    /// 外部评分系统回写成绩。无论结果如何都返回 200，结果放在响应体里
    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        params: UpdateGradeParams,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let expected_token = AppConfig::get().webservice_token();
        let now = chrono::Utc::now().timestamp();
        let result = update_grade::update_grade(&ctx, expected_token, &params, now).await;
        Ok(HttpResponse::Ok().json(result))
    }
}
