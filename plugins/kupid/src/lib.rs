use futures::{TryStreamExt, stream::FuturesOrdered};
use kunotice::{
    PluginError,
    core::{NoticeInfo, NoticePlugin},
};
use reqwest::redirect::Policy;
use url::Url;

use crate::{
    detail::fetch_detail,
    dispatch::{NoticeHandlers, NoticeType},
    error::KupidError,
    list::{RowViewParameters, fetch_list_page},
    sso::{SessionCredentials, obtain_session},
    utils::default_header,
};

pub mod detail;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod list;
pub mod sso;
mod utils;

/// 포털과 그룹웨어의 기준 주소입니다. 끝의 `/`는 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KupidEndpoints {
    portal: String,
    groupware: String,
}

impl Default for KupidEndpoints {
    fn default() -> Self {
        Self {
            portal: Self::DEFAULT_PORTAL.to_string(),
            groupware: Self::DEFAULT_GROUPWARE.to_string(),
        }
    }
}

impl KupidEndpoints {
    pub const DEFAULT_PORTAL: &'static str = "https://portal.korea.ac.kr";
    pub const DEFAULT_GROUPWARE: &'static str = "https://grw.korea.ac.kr";

    pub fn new(portal: &str, groupware: &str) -> Result<Self, url::ParseError> {
        Url::parse(portal)?;
        Url::parse(groupware)?;
        Ok(Self {
            portal: portal.trim_end_matches('/').to_string(),
            groupware: groupware.trim_end_matches('/').to_string(),
        })
    }

    pub fn portal(&self) -> &str {
        &self.portal
    }

    pub fn groupware(&self) -> &str {
        &self.groupware
    }

    pub(crate) fn portal_root(&self) -> String {
        format!("{}/", self.portal)
    }

    pub(crate) fn intro_url(&self) -> String {
        format!("{}/front/Intro.kpd", self.portal)
    }

    pub(crate) fn login_url(&self) -> String {
        format!("{}/common/Login.kpd", self.portal)
    }

    pub(crate) fn notice_list_url(&self, code: &str, token: &str) -> String {
        format!(
            "{}/GroupWare/user/NoticeList.jsp?kind={code}&compId=148&menuCd=340&language=ko&frame=&token={token}&orgtoken={token}",
            self.groupware
        )
    }

    pub(crate) fn notice_list_referer(&self, code: &str) -> String {
        format!("{}/GroupWare/user/NoticeList.jsp?kind={code}", self.groupware)
    }
}

/// KUPID 로그인 정보
#[derive(Clone)]
pub struct KupidCredential {
    pub id: String,
    pub password: String,
}

impl std::fmt::Debug for KupidCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KupidCredential")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl KupidCredential {
    pub const ID_VAR: &'static str = "KUPID_ID";
    pub const PASSWORD_VAR: &'static str = "KUPID_PASSWORD";

    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
        }
    }

    /// `KUPID_ID`, `KUPID_PASSWORD` 환경 변수에서 읽습니다.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self::new(
            std::env::var(Self::ID_VAR)?,
            std::env::var(Self::PASSWORD_VAR)?,
        ))
    }
}

/// 리다이렉트를 따라가지 않고 쿠키를 직접 헤더에 싣는 HTTP 클라이언트입니다.
pub struct KupidClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoints: KupidEndpoints,
}

impl KupidClient {
    pub fn new() -> Result<Self, KupidError> {
        Self::with_endpoints(KupidEndpoints::default())
    }

    pub fn with_endpoints(endpoints: KupidEndpoints) -> Result<Self, KupidError> {
        let http = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(utils::DEFAULT_USER_AGENT)
            .default_headers(default_header())
            .build()?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &KupidEndpoints {
        &self.endpoints
    }

    pub async fn login(&self, id: &str, password: &str) -> Result<SessionCredentials, KupidError> {
        obtain_session(self, id, password).await
    }

    /// 로그인 후 게시판의 상세 페이지 원문을 목록 순서대로 반환합니다.
    ///
    /// `limit`이 있으면 목록의 앞쪽 행만 가져옵니다.
    pub async fn fetch_notices(
        &self,
        id: &str,
        password: &str,
        notice_type: NoticeType,
        limit: Option<usize>,
    ) -> Result<Vec<String>, KupidError> {
        let handlers = notice_type.handlers();
        let credentials = self.login(id, password).await?;
        let page = fetch_list_page(self, &credentials, notice_type.code()).await?;
        let mut rows = (handlers.list)(&page.html)?;
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        tracing::info!(%notice_type, "Fetching {} notice views", rows.len());

        rows.iter()
            .map(|row| self.fetch_row(&credentials, &page.groupware_session_id, row, handlers))
            .collect::<FuturesOrdered<_>>()
            .try_collect::<Vec<_>>()
            .await
    }

    pub async fn fetch_parsed_notices(
        &self,
        id: &str,
        password: &str,
        notice_type: NoticeType,
        limit: Option<usize>,
    ) -> Result<Vec<NoticeInfo>, KupidError> {
        let parse = notice_type.handlers().parse;
        self.fetch_notices(id, password, notice_type, limit)
            .await?
            .iter()
            .map(|html| parse(html, self.endpoints.portal()))
            .collect()
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, skip(self, credentials, groupware_session_id, handlers), fields(index = %row.index))]
    async fn fetch_row(
        &self,
        credentials: &SessionCredentials,
        groupware_session_id: &str,
        row: &RowViewParameters,
        handlers: &NoticeHandlers,
    ) -> Result<String, KupidError> {
        let html = fetch_detail(self, credentials, groupware_session_id, row).await?;
        Ok((handlers.finish)(&html, self.endpoints.portal()))
    }
}

/// 게시판의 상세 페이지 원문을 모두 가져옵니다.
pub async fn fetch_kupid_notices(
    id: &str,
    password: &str,
    notice_type: NoticeType,
) -> Result<Vec<String>, KupidError> {
    KupidClient::new()?
        .fetch_notices(id, password, notice_type, None)
        .await
}

/// 게시판의 공지사항을 모두 가져와 [`NoticeInfo`]로 변환합니다.
pub async fn fetch_parsed_kupid_notices(
    id: &str,
    password: &str,
    notice_type: NoticeType,
) -> Result<Vec<NoticeInfo>, KupidError> {
    KupidClient::new()?
        .fetch_parsed_notices(id, password, notice_type, None)
        .await
}

macro_rules! kupid_plugin {
    ($name:ident, $notice_type:expr, $identifier:expr, $title:expr, $description:expr) => {
        pub struct $name {
            credential: KupidCredential,
            endpoints: KupidEndpoints,
        }

        impl $name {
            pub fn new(credential: KupidCredential) -> Self {
                Self::with_endpoints(credential, KupidEndpoints::default())
            }

            pub fn with_endpoints(credential: KupidCredential, endpoints: KupidEndpoints) -> Self {
                Self {
                    credential,
                    endpoints,
                }
            }
        }

        impl NoticePlugin for $name {
            const IDENTIFIER: &'static str = $identifier;
            const TITLE: &'static str = $title;
            const DESCRIPTION: &'static str = $description;
            const BASE_URL: &'static str = "https://portal.korea.ac.kr/front/IntroNotice.kpd";

            async fn crawl(&self, posts_limit: u32) -> Result<Vec<NoticeInfo>, PluginError> {
                KupidClient::with_endpoints(self.endpoints.clone())
                    .map_err(KupidError::into_plugin_error::<Self>)?
                    .fetch_parsed_notices(
                        &self.credential.id,
                        &self.credential.password,
                        $notice_type,
                        Some(posts_limit as usize),
                    )
                    .await
                    .map_err(KupidError::into_plugin_error::<Self>)
            }
        }
    };
}

kupid_plugin!(
    KupidNoticePlugin,
    NoticeType::Notice,
    "portal.korea.ac.kr/notice",
    "고려대학교 KUPID 일반공지",
    "고려대학교 포털 KUPID의 일반공지를 제공합니다."
);

kupid_plugin!(
    KupidScholarPlugin,
    NoticeType::Scholar,
    "portal.korea.ac.kr/scholar",
    "고려대학교 KUPID 장학공지",
    "고려대학교 포털 KUPID의 장학공지를 제공합니다."
);

kupid_plugin!(
    KupidSchedulePlugin,
    NoticeType::Schedule,
    "portal.korea.ac.kr/schedule",
    "고려대학교 KUPID 학사일정",
    "고려대학교 포털 KUPID의 학사일정을 제공합니다."
);
