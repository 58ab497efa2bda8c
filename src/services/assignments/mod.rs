pub mod create;
pub mod delete;
pub mod detail;
pub mod summary;
pub mod sync;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::context::{ServiceContext, respond};
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};

pub struct AssignmentService {
    context: Option<ServiceContext>,
}

impl AssignmentService {
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

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result = create::create_assignment(&ctx, acting_user_id, req).await;
        Ok(respond(result, "Assignment created"))
    }

    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result = detail::get_assignment(&ctx, acting_user_id, assignment_id).await;
        Ok(respond(result, "OK"))
    }

    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result = update::update_assignment(&ctx, acting_user_id, assignment_id, req).await;
        Ok(respond(result, "Assignment updated"))
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result = delete::delete_assignment(&ctx, acting_user_id, assignment_id).await;
        Ok(respond(result, "Assignment deleted"))
    }

    pub async fn get_summary(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let now = chrono::Utc::now().timestamp();
        let result = summary::get_summary(&ctx, acting_user_id, assignment_id, now).await;
        Ok(respond(result, "OK"))
    }
}
