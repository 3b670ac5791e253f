//! Endpoint builders. Each wraps a [`Request`](crate::request::Request), seeds its addressing
//! parameters and adds typed setters over fixed wire keys.

macro_rules! impl_api_request {
    ($builder:ident => $output:ty) => {
        impl $crate::request::ApiRequest for $builder {
            type Output = $output;

            fn request(&self) -> &$crate::request::Request<$output> {
                &self.inner
            }

            fn request_mut(&mut self) -> &mut $crate::request::Request<$output> {
                &mut self.inner
            }

            fn into_request(self) -> $crate::request::Request<$output> {
                self.inner
            }
        }
    };
}

mod delete_message;
mod edit_message_caption;
mod edit_message_reply_markup;
mod edit_message_text;
mod get_me;
mod get_updates;
mod send_message;

pub use delete_message::DeleteMessage;
pub use edit_message_caption::EditMessageCaption;
pub use edit_message_reply_markup::EditMessageReplyMarkup;
pub use edit_message_text::EditMessageText;
pub use get_me::GetMe;
pub use get_updates::GetUpdates;
pub use send_message::SendMessage;
