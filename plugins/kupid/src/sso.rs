use std::sync::LazyLock;

use kunotice::extract::{FieldSpec, extract_field};
use reqwest::{
    StatusCode,
    header::{COOKIE, REFERER},
};
use scraper::Selector;

use crate::{KupidClient, error::KupidError, utils::cookie_value};

const FIELDS_START: &str = r#"<input type="password" name="pw" id="_pw" value="" />"#;
const FIELDS_END: &str = r#"<input type="hidden" name="direct_div"/>"#;

pub(crate) const PORTAL_SESSION_COOKIE: &str = "PORTAL_SESSIONID";
pub(crate) const SSO_TOKEN_COOKIE: &str = "ssotoken";

static INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input").expect("Failed to parse input selector"));

/// 로그인 한 번으로 얻는 세션 정보입니다. 만료를 추적하지 않으므로 호출마다 새로 로그인합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    pub token: String,
    pub session_id: String,
}

/// 로그인 페이지에 매번 새로 생성되는 폼 필드입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub id_key: String,
    pub password_key: String,
    pub csrf: String,
    /// 가짜 필드의 값. 전송할 때 키와 값 모두로 사용합니다.
    pub fake: String,
}

/// 비밀번호 입력 태그와 `direct_div` 태그 사이의 네 줄에서 폼 필드를 읽습니다.
///
/// 줄 순서는 아이디 필드, 비밀번호 필드, CSRF 값, 가짜 필드입니다.
pub fn parse_login_form(html: &str) -> Result<LoginForm, KupidError> {
    let region = extract_field(
        html,
        &FieldSpec::Between {
            field: "login form",
            start: FIELDS_START,
            end: FIELDS_END,
        },
    )?;
    let lines = region
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();
    let [id_line, password_line, csrf_line, fake_line] = lines[..] else {
        return Err(KupidError::LoginFormShape(lines.len()));
    };

    let attribute = |line: &str, field: &str, attr: &str| {
        extract_field(
            line,
            &FieldSpec::Attribute {
                field,
                selector: &INPUT_SELECTOR,
                attr,
            },
        )
    };

    Ok(LoginForm {
        id_key: attribute(id_line, "id field name", "name")?,
        password_key: attribute(password_line, "password field name", "name")?,
        csrf: attribute(csrf_line, "csrf value", "value")?,
        fake: attribute(fake_line, "fake field value", "value")?,
    })
}

/// 로그인 페이지를 읽고 자격 증명을 세션 토큰으로 교환합니다.
pub(crate) async fn obtain_session(
    client: &KupidClient,
    id: &str,
    password: &str,
) -> Result<SessionCredentials, KupidError> {
    let intro_url = client.endpoints.intro_url();
    tracing::debug!("Loading login form from {intro_url}");
    let res = client
        .http
        .get(&intro_url)
        .header(REFERER, &intro_url)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(KupidError::UnexpectedStatus {
            step: "login page",
            status: res.status(),
        });
    }
    let session_id = cookie_value(&res, PORTAL_SESSION_COOKIE)
        .ok_or(KupidError::MissingCookie(PORTAL_SESSION_COOKIE))?;
    let form = parse_login_form(&res.text().await?)?;

    let params = [
        (form.id_key.as_str(), id),
        (form.password_key.as_str(), password),
        ("_csrf", form.csrf.as_str()),
        (form.fake.as_str(), form.fake.as_str()),
        ("direct_div", ""),
        ("pw_pass", ""),
        ("browser", "chrome"),
    ];
    let res = client
        .http
        .post(client.endpoints.login_url())
        .header(REFERER, &intro_url)
        .header(COOKIE, format!("{PORTAL_SESSION_COOKIE}={session_id}"))
        .form(&params)
        .send()
        .await?;
    // 로그인 성공 시에만 리다이렉트됨
    if res.status() != StatusCode::FOUND {
        return Err(KupidError::UnexpectedStatus {
            step: "login",
            status: res.status(),
        });
    }
    let token =
        cookie_value(&res, SSO_TOKEN_COOKIE).ok_or(KupidError::MissingCookie(SSO_TOKEN_COOKIE))?;
    tracing::info!("Logged in to KUPID");

    Ok(SessionCredentials { token, session_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{name}")).unwrap()
    }

    #[test]
    fn login_form_fields_are_extracted() {
        let form = parse_login_form(&load_fixture("intro.html")).unwrap();
        assert_eq!(
            form,
            LoginForm {
                id_key: "k8f2id".to_string(),
                password_key: "p9x1pw".to_string(),
                csrf: "3f2a9c1e-csrf".to_string(),
                fake: "f4k3".to_string(),
            }
        );
        for value in [
            &form.id_key,
            &form.password_key,
            &form.csrf,
            &form.fake,
        ] {
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn fake_field_without_name_uses_value() {
        let html = format!(
            "{FIELDS_START}\n<input name=\"a\" />\n<input name=\"b\" />\n<input type=\"hidden\" name=\"_csrf\" value=\"c\" />\n<input type=\"hidden\" value=\"zz9\" />\n{FIELDS_END}"
        );
        let form = parse_login_form(&html).unwrap();
        assert_eq!(form.fake, "zz9");
    }

    #[test]
    fn fake_field_name_is_ignored() {
        let html = format!(
            "{FIELDS_START}\n<input name=\"a\" />\n<input name=\"b\" />\n<input type=\"hidden\" name=\"_csrf\" value=\"c\" />\n<input type=\"hidden\" name=\"honeypot\" value=\"f4k3\" />\n{FIELDS_END}"
        );
        let form = parse_login_form(&html).unwrap();
        assert_eq!(form.fake, "f4k3");
    }

    #[test]
    fn missing_second_marker_fails() {
        let html = load_fixture("intro.html").replace(FIELDS_END, "");
        assert!(matches!(
            parse_login_form(&html),
            Err(KupidError::Extract(_))
        ));
    }

    #[test]
    fn unexpected_line_count_fails() {
        let html = format!("{FIELDS_START}\n<input name=\"a\" />\n<input name=\"b\" />\n{FIELDS_END}");
        assert!(matches!(
            parse_login_form(&html),
            Err(KupidError::LoginFormShape(2))
        ));
    }

    #[test]
    fn missing_attribute_fails() {
        let html = format!(
            "{FIELDS_START}\n<input name=\"a\" />\n<input id=\"_id\" />\n<input value=\"c\" />\n<input value=\"d\" />\n{FIELDS_END}"
        );
        assert!(matches!(
            parse_login_form(&html),
            Err(KupidError::Extract(_))
        ));
    }
}
