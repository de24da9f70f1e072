use kunotice::{PluginError, core::NoticePlugin, extract::ExtractError};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KupidError {
    /// 웹 요청, 응답 오류
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    /// 로그인 응답이 302가 아니거나 페이지 응답이 2xx가 아님
    #[error("Unexpected status {status} from {step}")]
    UnexpectedStatus {
        step: &'static str,
        status: StatusCode,
    },
    /// 응답에 필요한 쿠키가 없음
    #[error("Cookie `{0}` is not included in response")]
    MissingCookie(&'static str),
    /// 로그인 폼 영역의 줄 수가 4가 아님, 페이지가 바뀌었나요?
    #[error("Can't load login form: expected 4 field lines, found {0}")]
    LoginFormShape(usize),
    #[error("Failed to parse page: {0}")]
    Extract(#[from] ExtractError),
    #[error("Row {0} is missing from notice table")]
    RowMissing(usize),
    #[error("View call has {found} numeric arguments, expected {expected}: {call}")]
    ViewArguments {
        call: String,
        found: usize,
        expected: usize,
    },
    #[error("Invalid notice type: {0}")]
    InvalidNoticeType(String),
}

impl KupidError {
    pub fn into_plugin_error<T: NoticePlugin>(self) -> PluginError {
        let message = self.to_string();
        match self {
            KupidError::Request(_) => PluginError::request::<T>(message),
            KupidError::UnexpectedStatus { .. } => PluginError::status::<T>(message),
            KupidError::MissingCookie(_) => PluginError::missing_cookie::<T>(message),
            KupidError::LoginFormShape(_)
            | KupidError::Extract(_)
            | KupidError::RowMissing(_)
            | KupidError::ViewArguments { .. } => PluginError::parse::<T>(message),
            KupidError::InvalidNoticeType(_) => PluginError::invalid_category::<T>(message),
        }
    }
}
