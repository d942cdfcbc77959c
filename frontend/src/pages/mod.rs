pub mod all_requests;
pub mod approved_requests;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod my_requests;
pub mod new_request;
pub mod request_detail;
pub mod signup;

pub use all_requests::*;
pub use approved_requests::*;
pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use my_requests::*;
pub use new_request::*;
pub use request_detail::*;
pub use signup::*;
