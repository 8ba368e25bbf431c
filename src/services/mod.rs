// Backend API clients

pub mod api_error;
pub mod freelancer_api;
pub mod lenient;
