pub mod delete;
pub mod grant;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::context::{ServiceContext, respond};
use crate::models::overrides::requests::GrantExtensionRequest;

pub struct OverrideService {
    context: Option<ServiceContext>,
}

impl OverrideService {
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

    pub async fn grant_extension(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
        req: GrantExtensionRequest,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result = grant::grant_extension(&ctx, acting_user_id, assignment_id, req).await;
        Ok(respond(result, "Extension granted"))
    }

    pub async fn list_overrides(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result = list::list_overrides(&ctx, acting_user_id, assignment_id).await;
        Ok(respond(result, "OK"))
    }

    pub async fn delete_override(
        &self,
        request: &HttpRequest,
        acting_user_id: i64,
        assignment_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        let ctx = self.get_context(request);
        let result = delete::delete_override(&ctx, acting_user_id, assignment_id, user_id).await;
        Ok(respond(result, "Override removed"))
    }
}
