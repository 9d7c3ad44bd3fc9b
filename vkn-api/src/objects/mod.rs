//! Wire types for the VK Callback API and the VK method responses.

pub mod callback;
pub mod users;

pub use callback::{CallbackEvent, EventObject, MessagePayload};
pub use users::{UserRecord, UsersGetResponse};
