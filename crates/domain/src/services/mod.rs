pub mod user_service;
pub mod validation_service;
pub mod video_service;

pub use user_service::UserService;
pub use validation_service::ValidationService;
pub use video_service::VideoService;
