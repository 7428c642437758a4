pub mod loader;
pub mod message;

pub use loader::Loader;
pub use message::Message;
