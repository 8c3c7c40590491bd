pub mod in_memory_user_repository;
pub mod in_memory_video_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use in_memory_video_repository::InMemoryVideoRepository;
