pub mod user_repository;
pub mod video_repository;

pub use user_repository::UserRepository;
pub use video_repository::VideoRepository;
