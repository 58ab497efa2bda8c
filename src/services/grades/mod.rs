pub mod completion;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::context::{ServiceContext, respond};
use crate::models::grades::requests::{GradeListParams, ManualGradeRequest};

pub struct GradeService {
    context: Option<ServiceContext>,
}

impl GradeService {
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

    pub async fn list_grades(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
        query: GradeListParams,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let now = chrono::Utc::now().timestamp();
        let result = list::list_grades(&ctx, acting_user_id, assignment_id, query, now).await;
        Ok(respond(result, "OK"))
    }

    pub async fn get_grade(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let now = chrono::Utc::now().timestamp();
        let result = detail::get_grade(&ctx, acting_user_id, assignment_id, user_id, now).await;
        Ok(respond(result, "OK"))
    }

    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
        user_id: i64,
        req: ManualGradeRequest,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let now = chrono::Utc::now().timestamp();
        let result =
            update::update_grade(&ctx, acting_user_id, assignment_id, user_id, req, now).await;
        Ok(respond(result, "Grade saved"))
    }

    pub async fn get_completion(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result =
            completion::get_completion(&ctx, acting_user_id, assignment_id, user_id).await;
        Ok(respond(result, "OK"))
    }
}
