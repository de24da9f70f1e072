use std::sync::LazyLock;

use kunotice::extract::{FieldSpec, extract_all};
use regex::Regex;
use reqwest::header::{COOKIE, REFERER};

use crate::{
    KupidClient,
    error::KupidError,
    sso::{PORTAL_SESSION_COOKIE, SSO_TOKEN_COOKIE, SessionCredentials},
    utils::{decode_euc_kr, first_cookie_value},
};

pub(crate) const GROUPWARE_SESSION_COOKIE: &str = "GRW_SESSIONID";

static VIEW_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"javascript:view\((.+)\);").expect("Failed to compile view call regex")
});
static VIEW1_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"javascript:view1\((.+)\);").expect("Failed to compile view1 call regex")
});
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Failed to compile digits regex"));

/// 목록 페이지의 `view(...)` 호출 인자입니다. 상세 페이지 URL을 만드는 데에만 쓰입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewParameters {
    pub kind: String,
    pub index: String,
    pub message_id: String,
    pub reply_top: String,
    pub reply_pos: String,
    pub reply_to: String,
    pub row_reply: String,
    pub depth: String,
}

impl RowViewParameters {
    const FIELD_COUNT: usize = 8;

    fn from_call(call: &str, skip: usize) -> Result<Self, KupidError> {
        let tokens = DIGITS_RE
            .find_iter(call)
            .skip(skip)
            .map(|m| m.as_str().to_string())
            .collect::<Vec<_>>();
        let Ok::<[String; Self::FIELD_COUNT], _>(
            [kind, index, message_id, reply_top, reply_pos, reply_to, row_reply, depth],
        ) = tokens
            .iter()
            .take(Self::FIELD_COUNT)
            .cloned()
            .collect::<Vec<_>>()
            .try_into()
        else {
            return Err(KupidError::ViewArguments {
                call: call.to_string(),
                found: tokens.len(),
                expected: Self::FIELD_COUNT,
            });
        };
        Ok(Self {
            kind,
            index,
            message_id,
            reply_top,
            reply_pos,
            reply_to,
            row_reply,
            depth,
        })
    }
}

fn parse_view_calls(
    html: &str,
    pattern: &Regex,
    skip: usize,
) -> Result<Vec<RowViewParameters>, KupidError> {
    extract_all(
        html,
        &FieldSpec::Capture {
            field: "view call",
            pattern,
            group: 0,
        },
    )?
    .iter()
    .map(|call| RowViewParameters::from_call(call, skip))
    .collect()
}

/// 일반공지, 장학공지 목록의 `javascript:view(...)` 호출을 읽습니다.
pub fn parse_notice_params(html: &str) -> Result<Vec<RowViewParameters>, KupidError> {
    parse_view_calls(html, &VIEW_CALL_RE, 0)
}

/// 학사일정 목록의 `javascript:view1(...)` 호출을 읽습니다. 첫 숫자 토큰은 버립니다.
pub fn parse_schedule_params(html: &str) -> Result<Vec<RowViewParameters>, KupidError> {
    parse_view_calls(html, &VIEW1_CALL_RE, 1)
}

#[derive(Debug, Clone)]
pub struct ListPage {
    pub groupware_session_id: String,
    pub html: String,
}

pub(crate) async fn fetch_list_page(
    client: &KupidClient,
    credentials: &SessionCredentials,
    code: &str,
) -> Result<ListPage, KupidError> {
    let url = client.endpoints.notice_list_url(code, &credentials.token);
    tracing::info!(code, "Fetching notice list");
    let res = client
        .http
        .get(url)
        .header(REFERER, client.endpoints.portal_root())
        .header(
            COOKIE,
            format!(
                "{SSO_TOKEN_COOKIE}={}; {PORTAL_SESSION_COOKIE}={};",
                credentials.token, credentials.session_id
            ),
        )
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(KupidError::UnexpectedStatus {
            step: "notice list",
            status: res.status(),
        });
    }
    let groupware_session_id =
        first_cookie_value(&res).ok_or(KupidError::MissingCookie(GROUPWARE_SESSION_COOKIE))?;
    let html = decode_euc_kr(&res.bytes().await?);
    Ok(ListPage {
        groupware_session_id,
        html,
    })
}
