mod conversation;
mod conversation_id;
mod decoded_image;
mod input_origin;
mod message;
mod message_id;
mod message_role;

pub use conversation::Conversation;
pub use conversation_id::ConversationId;
pub use decoded_image::DecodedImage;
pub use input_origin::InputOrigin;
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
