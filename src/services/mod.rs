pub mod assignments;
pub mod context;
pub mod grades;
pub mod overrides;
pub mod webservice;

pub use assignments::AssignmentService;
pub use context::{ServiceContext, ServiceError, ServiceResult};
pub use grades::GradeService;
pub use overrides::OverrideService;
pub use webservice::WebserviceService;
