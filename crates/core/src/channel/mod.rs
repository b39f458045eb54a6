mod error;
mod requests;
mod service;
mod types;
mod validation;

pub use error::{ChannelError, Result};
pub use requests::{
    CreateNotificationChannelRequest, CreateNotificationChannelResponse, ErrorResponse,
    GetNotificationChannelsResponse,
};
pub use service::NotificationChannelService;
pub use types::NotificationChannel;
pub use validation::{validate_new_channel, validate_user_id};
