pub mod app;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod product_detail;
pub mod profile;
pub mod register_warranty;
pub mod role_selection;
pub mod service_history;
pub mod service_request;
pub mod session_state;
pub mod toast;
