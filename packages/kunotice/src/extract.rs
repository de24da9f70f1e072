//! 마크업에서 단일 필드를 뽑아내는 추출 인터페이스입니다.
//!
//! 현재 포털 파서는 대부분 정규식과 고정 구분자에 의존합니다.
//! 호출하는 쪽은 [`FieldSpec`]만 알고 있으므로 구조적 파서(`scraper`)로
//! 교체할 때 호출부를 고칠 필요가 없습니다.
use regex::Regex;
use scraper::{Html, Selector};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// 영역을 자르는 리터럴 구분자가 없음
    #[error("Marker not found in markup: {0}")]
    MarkerNotFound(String),
    /// 필드 패턴이 일치하지 않음
    #[error("Field `{0}` not found in markup")]
    FieldNotFound(String),
}

/// 필드 하나를 어떻게 찾을지 기술합니다.
#[derive(Debug, Clone, Copy)]
pub enum FieldSpec<'a> {
    /// 정규식의 `group`번째 캡처 그룹
    Capture {
        field: &'a str,
        pattern: &'a Regex,
        group: usize,
    },
    /// CSS 선택자로 찾은 첫 요소의 속성 값 (빈 값은 실패)
    Attribute {
        field: &'a str,
        selector: &'a Selector,
        attr: &'a str,
    },
    /// `start` 이후부터 다음 `end` 직전까지의 원문
    Between {
        field: &'a str,
        start: &'a str,
        end: &'a str,
    },
}

impl FieldSpec<'_> {
    pub fn field(&self) -> &str {
        match self {
            FieldSpec::Capture { field, .. }
            | FieldSpec::Attribute { field, .. }
            | FieldSpec::Between { field, .. } => field,
        }
    }

    fn not_found(&self) -> ExtractError {
        ExtractError::FieldNotFound(self.field().to_string())
    }
}

pub fn extract_field(html: &str, spec: &FieldSpec<'_>) -> Result<String, ExtractError> {
    match *spec {
        FieldSpec::Capture { pattern, group, .. } => pattern
            .captures(html)
            .and_then(|captures| captures.get(group))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| spec.not_found()),
        FieldSpec::Attribute { selector, attr, .. } => Html::parse_fragment(html)
            .select(selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| spec.not_found()),
        FieldSpec::Between { start, end, .. } => {
            let (_, rest) = html
                .split_once(start)
                .ok_or_else(|| ExtractError::MarkerNotFound(start.to_string()))?;
            let (region, _) = rest
                .split_once(end)
                .ok_or_else(|| ExtractError::MarkerNotFound(end.to_string()))?;
            Ok(region.to_string())
        }
    }
}

/// 모든 일치 항목을 문서 순서대로 반환합니다. 하나도 없으면 실패합니다.
pub fn extract_all(html: &str, spec: &FieldSpec<'_>) -> Result<Vec<String>, ExtractError> {
    let values = match *spec {
        FieldSpec::Capture { pattern, group, .. } => pattern
            .captures_iter(html)
            .filter_map(|captures| captures.get(group))
            .map(|m| m.as_str().to_string())
            .collect::<Vec<_>>(),
        FieldSpec::Attribute { selector, attr, .. } => Html::parse_fragment(html)
            .select(selector)
            .filter_map(|element| element.value().attr(attr))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect(),
        FieldSpec::Between { .. } => vec![extract_field(html, spec)?],
    };
    if values.is_empty() {
        return Err(spec.not_found());
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    static INDEX_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"name="index" value="(\d+)""#).unwrap());
    static INPUT_SELECTOR: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("input").unwrap());

    #[test]
    fn capture_returns_requested_group() {
        let spec = FieldSpec::Capture {
            field: "index",
            pattern: &INDEX_RE,
            group: 1,
        };
        let html = r#"<input type="hidden" name="index" value="1234"/>"#;
        assert_eq!(extract_field(html, &spec).unwrap(), "1234");
        assert_eq!(
            extract_field("<p></p>", &spec),
            Err(ExtractError::FieldNotFound("index".to_string()))
        );
    }

    #[test]
    fn attribute_rejects_empty_values() {
        let spec = FieldSpec::Attribute {
            field: "csrf",
            selector: &INPUT_SELECTOR,
            attr: "value",
        };
        assert_eq!(
            extract_field(r#"<input type="hidden" value="abc-123" />"#, &spec).unwrap(),
            "abc-123"
        );
        assert!(extract_field(r#"<input type="hidden" value="" />"#, &spec).is_err());
    }

    #[test]
    fn between_reports_the_missing_marker() {
        let spec = FieldSpec::Between {
            field: "form",
            start: "<form>",
            end: "</form>",
        };
        assert_eq!(extract_field("a<form>b</form>c", &spec).unwrap(), "b");
        assert_eq!(
            extract_field("a<form>b", &spec),
            Err(ExtractError::MarkerNotFound("</form>".to_string()))
        );
        assert_eq!(
            extract_field("ab</form>", &spec),
            Err(ExtractError::MarkerNotFound("<form>".to_string()))
        );
    }

    #[test]
    fn extract_all_keeps_document_order() {
        let spec = FieldSpec::Capture {
            field: "index",
            pattern: &INDEX_RE,
            group: 1,
        };
        let html = r#"name="index" value="3" name="index" value="1" name="index" value="2""#;
        assert_eq!(extract_all(html, &spec).unwrap(), vec!["3", "1", "2"]);
        assert!(extract_all("", &spec).is_err());
    }
}
