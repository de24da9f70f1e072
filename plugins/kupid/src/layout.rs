//! 상세 페이지 표에서 필드를 읽는 행 레이아웃입니다.
//!
//! 상세 페이지는 `<tr>` 단위로 잘라 고정된 행 번호에서 값을 읽습니다.
use std::sync::LazyLock;

use kunotice::{
    core::NoticeInfo,
    extract::{FieldSpec, extract_field},
    html::to_plain_text,
};
use regex::Regex;

use crate::{dispatch::NoticeType, error::KupidError};

static PLAIN_TD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<td>(.+)</td>").expect("Failed to compile td regex"));
static COLSPAN_TD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<td colspan="\d">(.+)</td>"#).expect("Failed to compile colspan td regex")
});
static INDEX_INPUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<input type="hidden" name="index" value="(.+)"/>"#)
        .expect("Failed to compile index input regex")
});

const ROW_OPEN: &str = "<tr>";
const ROW_CLOSE: &str = "</tr>";

/// 날짜 셀의 위치와 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCell {
    /// `<td colspan="n">` 셀
    Colspan { row: usize },
    /// 첫 `<td>` 셀. 기간 표기라 공백, 개행, 탭을 모두 지웁니다.
    Period { row: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub notice_type: NoticeType,
    pub writer_row: usize,
    pub date: DateCell,
    pub title_row: usize,
    pub content_from: usize,
}

pub const NOTICE_LAYOUT: RowLayout = RowLayout {
    notice_type: NoticeType::Notice,
    writer_row: 0,
    date: DateCell::Colspan { row: 2 },
    title_row: 4,
    content_from: 5,
};

pub const SCHOLAR_LAYOUT: RowLayout = RowLayout {
    notice_type: NoticeType::Scholar,
    ..NOTICE_LAYOUT
};

pub const SCHEDULE_LAYOUT: RowLayout = RowLayout {
    notice_type: NoticeType::Schedule,
    date: DateCell::Period { row: 1 },
    ..NOTICE_LAYOUT
};

/// `<tr>`로 나눈 행 목록을 반환합니다. 첫 `<tr>` 앞부분은 버리고 마지막 행은 `</tr>`에서 자릅니다.
pub fn table_rows(html: &str) -> Vec<&str> {
    let mut rows = html.split(ROW_OPEN).skip(1).collect::<Vec<_>>();
    if let Some(last) = rows.last_mut() {
        *last = last.split_once(ROW_CLOSE).map_or(*last, |(row, _)| row);
    }
    rows
}

/// 행 목록을 `<tbody>`로 감쌉니다. [`table_rows`]로 다시 나누면 같은 행 목록이 나옵니다.
pub fn wrap_body(rows: &[&str]) -> String {
    let mut body = String::from("<tbody>");
    for row in rows {
        body.push_str(ROW_OPEN);
        body.push_str(row);
    }
    if !rows.is_empty() {
        body.push_str(ROW_CLOSE);
    }
    body.push_str("</tbody>");
    body
}

fn row<'a>(rows: &[&'a str], index: usize) -> Result<&'a str, KupidError> {
    rows.get(index).copied().ok_or(KupidError::RowMissing(index))
}

fn capture(row: &str, field: &str, pattern: &Regex) -> Result<String, KupidError> {
    Ok(extract_field(
        row,
        &FieldSpec::Capture {
            field,
            pattern,
            group: 1,
        },
    )?)
}

impl RowLayout {
    pub fn parse(&self, html: &str, portal: &str) -> Result<NoticeInfo, KupidError> {
        let rows = table_rows(html);

        let writer = to_plain_text(&capture(row(&rows, self.writer_row)?, "writer", &PLAIN_TD_RE)?);
        let date = match self.date {
            DateCell::Colspan { row: index } => {
                to_plain_text(&capture(row(&rows, index)?, "date", &COLSPAN_TD_RE)?)
            }
            DateCell::Period { row: index } => {
                let raw = extract_field(
                    row(&rows, index)?,
                    &FieldSpec::Between {
                        field: "date",
                        start: "<td>",
                        end: "</td>",
                    },
                )?;
                to_plain_text(&raw)
                    .chars()
                    .filter(|c| !matches!(c, '\n' | '\t' | ' '))
                    .collect()
            }
        };
        let title = to_plain_text(&capture(row(&rows, self.title_row)?, "title", &COLSPAN_TD_RE)?);
        let content = wrap_body(rows.get(self.content_from..).unwrap_or_default());
        let id = capture(html, "index", &INDEX_INPUT_RE)?.trim().to_string();
        let url = format!("{portal}/front/IntroNotice/NMainNoticeContent.kpd?idx={id}&seq=");

        Ok(NoticeInfo {
            id,
            title,
            date,
            writer,
            content,
            url,
            category: Some(self.notice_type.label().to_string()),
        })
    }
}

pub fn parse_notice_info(html: &str, portal: &str) -> Result<NoticeInfo, KupidError> {
    NOTICE_LAYOUT.parse(html, portal)
}

pub fn parse_scholar_info(html: &str, portal: &str) -> Result<NoticeInfo, KupidError> {
    SCHOLAR_LAYOUT.parse(html, portal)
}

pub fn parse_schedule_info(html: &str, portal: &str) -> Result<NoticeInfo, KupidError> {
    SCHEDULE_LAYOUT.parse(html, portal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTAL: &str = "https://portal.korea.ac.kr";

    fn load_fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{name}")).unwrap()
    }

    #[test]
    fn notice_layout_reads_fixed_rows() {
        let notice = parse_notice_info(&load_fixture("notice_view_5001.html"), PORTAL).unwrap();
        assert_eq!(notice.id, "5001");
        assert_eq!(notice.writer, "학생지원팀");
        assert_eq!(notice.date, "2024.03.01");
        assert_eq!(notice.title, "2024학년도 1학기 수강신청 안내");
        assert_eq!(
            notice.url,
            "https://portal.korea.ac.kr/front/IntroNotice/NMainNoticeContent.kpd?idx=5001&seq="
        );
        assert_eq!(notice.category.as_deref(), Some("일반공지"));
        assert!(notice.content.starts_with("<tbody><tr>"));
        assert!(notice.content.ends_with("</tr></tbody>"));
        assert!(notice.content.contains("수강신청 기간"));
        assert!(notice.id_matches_url());
    }

    #[test]
    fn schedule_layout_reads_period_cell() {
        let html = load_fixture("notice_view_5001.html");
        let schedule = parse_schedule_info(&html, PORTAL).unwrap();
        assert_eq!(schedule.date, "2024.03.01~2024.03.05");
        assert_eq!(schedule.category.as_deref(), Some("학사일정"));

        let scholar = parse_scholar_info(&html, PORTAL).unwrap();
        assert_eq!(scholar.date, "2024.03.01");
        assert_eq!(scholar.category.as_deref(), Some("장학공지"));
    }

    #[test]
    fn rewrapped_body_keeps_row_count() {
        let html = load_fixture("notice_view_5001.html");
        let rows = table_rows(&html);
        let content = wrap_body(&rows[NOTICE_LAYOUT.content_from..]);
        let reparsed = table_rows(&content);
        assert_eq!(reparsed.len(), rows.len() - NOTICE_LAYOUT.content_from);
        assert_eq!(wrap_body(&reparsed), content);

        assert_eq!(wrap_body(&[]), "<tbody></tbody>");
        assert!(table_rows("<tbody></tbody>").is_empty());
    }

    #[test]
    fn missing_row_fails_record() {
        let html = "<table><tr>\n<th>작성자</th><td>학생지원팀</td>\n</tr></table>";
        assert!(matches!(
            parse_notice_info(html, PORTAL),
            Err(KupidError::RowMissing(2))
        ));
    }

    #[test]
    fn missing_index_fails_record() {
        let html = load_fixture("notice_view_5001.html").replace("name=\"index\"", "name=\"idx\"");
        assert!(matches!(
            parse_notice_info(&html, PORTAL),
            Err(KupidError::Extract(_))
        ));
    }
}
