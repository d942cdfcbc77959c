pub mod auth;
pub mod request_list;
pub mod session;
