pub mod core;
pub mod error;
pub mod extract;
pub mod html;

pub use core::NoticeCore;

pub use error::Error;
pub use error::PluginError;
pub use error::PluginErrorKind;
