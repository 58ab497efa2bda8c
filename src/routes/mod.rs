pub mod assignments;

pub mod webservice;

pub use assignments::configure_assignment_routes;
pub use webservice::configure_webservice_routes;
