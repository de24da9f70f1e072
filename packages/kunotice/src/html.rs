//! 여러 포털에서 공유하는 HTML 문자열 처리 함수입니다.
use std::sync::LazyLock;

use regex::{Captures, Regex};
use url::Url;

static GREEDY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.+)>").expect("Failed to compile greedy tag regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Failed to compile tag regex"));
static NBSP_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(&nbsp;)+").expect("Failed to compile nbsp regex"));
static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\s+[^>]*src="([^"]+)"[^>]*>"#).expect("Failed to compile img regex")
});
static FT_BOARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/ft_board/(.+?)""#).expect("Failed to compile ft_board regex")
});

/// 셀 하나의 원문을 평문으로 바꿉니다.
///
/// 한 줄 안에서 첫 `<`부터 마지막 `>`까지를 통째로 지우고 `&nbsp;` 묶음을 공백 하나로
/// 줄입니다. 태그 사이의 텍스트가 아니라 태그 바깥의 텍스트만 남는다는 점에 주의하세요.
pub fn to_plain_text(raw: &str) -> String {
    let stripped = GREEDY_TAG_RE.replace_all(raw, "");
    collapse_nbsp(&stripped)
}

/// 태그를 하나씩 지웁니다. 태그 사이의 텍스트는 남습니다.
pub fn remove_tags(raw: &str) -> String {
    TAG_RE.replace_all(raw, "").into_owned()
}

pub fn collapse_nbsp(raw: &str) -> String {
    NBSP_RUN_RE.replace_all(raw, " ").into_owned()
}

pub fn decode_amp(raw: &str) -> String {
    raw.replace("&amp;", "&")
}

/// `scheme://host[:port]` 형태의 origin을 반환합니다.
pub fn origin_of(url: &str) -> Option<String> {
    let origin = Url::parse(url).ok()?.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// `http`로 시작하지 않는 `<img src>`를 `base` 기준 절대 경로로 바꿉니다.
pub fn absolutize_img_src(html: &str, base: &Url) -> String {
    IMG_SRC_RE
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[0];
            let src = &caps[1];
            if src.starts_with("http") {
                return tag.to_string();
            }
            match base.join(src) {
                Ok(absolute) => tag.replacen(src, absolute.as_str(), 1),
                Err(e) => {
                    tracing::warn!(src, error = %e, "Cannot resolve image path");
                    tag.to_string()
                }
            }
        })
        .into_owned()
}

/// `/ft_board/...` 첨부 경로 앞에 `origin`을 붙입니다.
pub fn prefix_ft_board_paths(html: &str, origin: &str) -> String {
    FT_BOARD_RE
        .replace_all(html, |caps: &Captures| format!("{origin}{}", &caps[0]))
        .into_owned()
}
