use thiserror::Error;

use crate::core::NoticePlugin;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Plugin(Box<PluginError>),

    /// 게시글 id를 게시글 URL에서 다시 찾을 수 없음
    #[error("Notice id `{id}` from {plugin} is not present in its url {url}")]
    InconsistentId {
        plugin: String,
        id: String,
        url: String,
    },
}

impl From<PluginError> for Error {
    fn from(err: PluginError) -> Self {
        Error::Plugin(Box::new(err))
    }
}

#[derive(Debug, Error)]
#[error("Error from plugin {plugin}: {kind:?} - {message}")]
pub struct PluginError {
    kind: PluginErrorKind,
    plugin: String,
    message: String,
}

/// Failure taxonomy shared by every plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginErrorKind {
    /// Network or transport failure
    Request,
    /// Unexpected HTTP status (non-302 on login, non-2xx on fetch)
    Status,
    /// An expected `Set-Cookie` was absent
    MissingCookie,
    /// Expected markup was absent
    Parse,
    /// Unknown category or notice type
    InvalidCategory,
}

impl PluginError {
    fn new<T: NoticePlugin>(kind: PluginErrorKind, message: String) -> Self {
        Self {
            kind,
            plugin: T::IDENTIFIER.to_string(),
            message,
        }
    }

    pub fn request<T: NoticePlugin>(message: String) -> Self {
        Self::new::<T>(PluginErrorKind::Request, message)
    }

    pub fn status<T: NoticePlugin>(message: String) -> Self {
        Self::new::<T>(PluginErrorKind::Status, message)
    }

    pub fn missing_cookie<T: NoticePlugin>(message: String) -> Self {
        Self::new::<T>(PluginErrorKind::MissingCookie, message)
    }

    pub fn parse<T: NoticePlugin>(message: String) -> Self {
        Self::new::<T>(PluginErrorKind::Parse, message)
    }

    pub fn invalid_category<T: NoticePlugin>(message: String) -> Self {
        Self::new::<T>(PluginErrorKind::InvalidCategory, message)
    }

    pub fn kind(&self) -> PluginErrorKind {
        self.kind
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
