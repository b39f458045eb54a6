mod error;
pub mod keys;
mod traits;

pub use error::RepositoryError;
pub use traits::NotificationChannelRepository;
