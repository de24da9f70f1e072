use std::sync::LazyLock;

use regex::{Captures, Regex};
use reqwest::header::{COOKIE, REFERER};

use crate::{
    KupidClient,
    error::KupidError,
    list::{GROUPWARE_SESSION_COOKIE, RowViewParameters},
    sso::{PORTAL_SESSION_COOKIE, SSO_TOKEN_COOKIE, SessionCredentials},
    utils::decode_euc_kr,
};

static DOWNLOAD_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"javascript:Download\((.+)\);").expect("Failed to compile download regex")
});

/// 목록의 `view(...)` 인자로 상세 페이지 URL을 만듭니다.
pub fn notice_view_url(groupware: &str, token: &str, params: &RowViewParameters) -> String {
    let RowViewParameters {
        kind,
        index,
        message_id,
        reply_top,
        reply_pos,
        reply_to,
        row_reply,
        depth,
    } = params;
    format!(
        "{groupware}/GroupWare/user/NoticeView.jsp?language=ko&WhereSelect=all&KeyWord=&tab=&temp=&JOB_MODE=Q&JOBMODE=I&hdCurrPage=1&hdListCount=100&hdPageCount=5&hdPageList=&userid=&index={index}&message_id={message_id}&replyTop={reply_top}&replyPos={reply_pos}&replyTo={reply_to}&rowReply={row_reply}&depth={depth}&kind={kind}&type=0&mode=0&flag=&access_type=Y&calIndex=&token={token}"
    )
}

/// `javascript:Download('path', 'name');` 링크를 로그인 없이 받을 수 있는 포털 주소로 바꿉니다.
pub fn make_file_path_public(html: &str, portal: &str) -> String {
    DOWNLOAD_CALL_RE
        .replace_all(html, |caps: &Captures| {
            let args = caps[1]
                .split(',')
                .map(|arg| arg.trim().replace('\'', ""))
                .collect::<Vec<_>>();
            match args.as_slice() {
                [path, name, ..] => {
                    format!("{portal}/common/Download.kpd?filePath={path}&fileName={name}")
                }
                _ => {
                    tracing::warn!(call = &caps[0], "Download call has too few arguments");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// 본문은 UTF-8로 디코딩되었으므로 문서의 문자셋 표기도 바꿉니다.
fn relabel_charset(html: &str) -> String {
    html.replace("euc-kr", "utf-8")
}

fn hide_buttons(html: &str) -> String {
    html.replace(
        r#"<input type="button""#,
        r#"<input type="button" style="display:none""#,
    )
}

pub(crate) async fn fetch_detail(
    client: &KupidClient,
    credentials: &SessionCredentials,
    groupware_session_id: &str,
    params: &RowViewParameters,
) -> Result<String, KupidError> {
    let url = notice_view_url(client.endpoints.groupware(), &credentials.token, params);
    let res = client
        .http
        .get(url)
        .header(REFERER, client.endpoints.notice_list_referer(&params.kind))
        .header(
            COOKIE,
            format!(
                "{SSO_TOKEN_COOKIE}={}; {PORTAL_SESSION_COOKIE}={}; {GROUPWARE_SESSION_COOKIE}={groupware_session_id};",
                credentials.token, credentials.session_id
            ),
        )
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(KupidError::UnexpectedStatus {
            step: "notice view",
            status: res.status(),
        });
    }
    let html = decode_euc_kr(&res.bytes().await?);
    tracing::debug!(index = %params.index, "Fetched notice view");
    Ok(hide_buttons(&relabel_charset(&html)))
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    const GROUPWARE: &str = "https://grw.korea.ac.kr";

    fn params() -> RowViewParameters {
        RowViewParameters {
            kind: "11".to_string(),
            index: "5001".to_string(),
            message_id: "90001".to_string(),
            reply_top: "5001".to_string(),
            reply_pos: "0".to_string(),
            reply_to: "0".to_string(),
            row_reply: "0".to_string(),
            depth: "0".to_string(),
        }
    }

    fn query(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn view_url_carries_every_parameter() {
        let url = notice_view_url(GROUPWARE, "abc123", &params());
        assert!(url.starts_with("https://grw.korea.ac.kr/GroupWare/user/NoticeView.jsp?"));
        let pairs = query(&url);
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("index"), Some("5001"));
        assert_eq!(get("message_id"), Some("90001"));
        assert_eq!(get("replyTop"), Some("5001"));
        assert_eq!(get("kind"), Some("11"));
        assert_eq!(get("token"), Some("abc123"));
    }

    #[test]
    fn view_url_changes_only_the_changed_parameter() {
        let base = params();
        let base_query = query(&notice_view_url(GROUPWARE, "abc123", &base));
        for key in [
            "kind",
            "index",
            "message_id",
            "replyTop",
            "replyPos",
            "replyTo",
            "rowReply",
            "depth",
        ] {
            let mut changed = base.clone();
            let field = match key {
                "kind" => &mut changed.kind,
                "index" => &mut changed.index,
                "message_id" => &mut changed.message_id,
                "replyTop" => &mut changed.reply_top,
                "replyPos" => &mut changed.reply_pos,
                "replyTo" => &mut changed.reply_to,
                "rowReply" => &mut changed.row_reply,
                _ => &mut changed.depth,
            };
            *field = "424242".to_string();
            let changed_query = query(&notice_view_url(GROUPWARE, "abc123", &changed));
            assert_eq!(changed_query.len(), base_query.len());
            let diff = base_query
                .iter()
                .zip(&changed_query)
                .filter(|(a, b)| a != b)
                .collect::<Vec<_>>();
            assert_eq!(diff.len(), 1, "{key} changed more than one parameter");
            assert_eq!(diff[0].1, &(key.to_string(), "424242".to_string()));
        }
    }

    #[test]
    fn download_calls_become_public_links() {
        let html = r#"<a href="javascript:Download('/upload/notice/5001.pdf', '수강신청.pdf');">첨부</a>"#;
        assert_eq!(
            make_file_path_public(html, "https://portal.korea.ac.kr"),
            r#"<a href="https://portal.korea.ac.kr/common/Download.kpd?filePath=/upload/notice/5001.pdf&fileName=수강신청.pdf">첨부</a>"#
        );
    }

    #[test]
    fn download_call_with_single_argument_is_kept() {
        let html = r#"<a href="javascript:Download('/upload/a.pdf');">첨부</a>"#;
        assert_eq!(make_file_path_public(html, "https://portal.korea.ac.kr"), html);
    }

    #[test]
    fn charset_and_buttons_are_rewritten() {
        let html = r#"<meta charset=euc-kr><input type="button" value="목록">"#;
        assert_eq!(
            relabel_charset(html),
            r#"<meta charset=utf-8><input type="button" value="목록">"#
        );
        assert_eq!(
            hide_buttons(html),
            r#"<meta charset=euc-kr><input type="button" style="display:none" value="목록">"#
        );
    }
}
