use encoding_rs::EUC_KR;
use reqwest::{
    Response,
    header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, HeaderMap, HeaderValue},
};

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

pub(crate) fn default_header() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("ko,en;q=0.9,en-US;q=0.8"),
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers
}

/// `Set-Cookie`에서 이름이 `name`인 비어 있지 않은 쿠키 값을 찾습니다.
pub(crate) fn cookie_value(res: &Response, name: &str) -> Option<String> {
    res.cookies()
        .find(|cookie| cookie.name() == name && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

/// 첫 번째 `Set-Cookie`의 값을 이름에 관계없이 반환합니다.
pub(crate) fn first_cookie_value(res: &Response) -> Option<String> {
    res.cookies()
        .next()
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn decode_euc_kr(bytes: &[u8]) -> String {
    EUC_KR.decode(bytes).0.into_owned()
}
