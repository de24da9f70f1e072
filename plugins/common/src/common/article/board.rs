use std::{collections::HashSet, sync::LazyLock};

use kunotice::{
    extract::{ExtractError, FieldSpec, extract_field},
    html::prefix_ft_board_paths,
};
use regex::Regex;

use crate::common::article::ArticleBoardError;

const SCHOLARSHIP_KEYWORD: &str = "장학";

/// 게시판 목록을 넘기는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// `&page=n`으로 한 페이지씩 요청
    Page,
    /// `&listnum=n` 한 번으로 필요한 만큼 요청
    ListNum,
}

/// 본문 페이지에서 제목, 날짜, 작성자를 감싸는 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleLayout {
    pub title_tag: &'static str,
    pub date_tag: &'static str,
    pub writer_class: &'static str,
}

pub const EE_LAYOUT: ArticleLayout = ArticleLayout {
    title_tag: "p",
    date_tag: "span",
    writer_class: "name",
};

pub const BIZ_LAYOUT: ArticleLayout = ArticleLayout {
    writer_class: "parts",
    ..EE_LAYOUT
};

pub const ME_LAYOUT: ArticleLayout = ArticleLayout {
    title_tag: "div",
    date_tag: "p",
    writer_class: "name",
};

/// 게시판 하나의 위치와 분류 정보입니다.
#[derive(Debug, Clone, Copy)]
pub struct ArticleBoard {
    pub origin: &'static str,
    /// 목록 경로. 페이지 파라미터는 `&`로 이어 붙입니다.
    pub list_path: &'static str,
    /// 본문 링크의 파일 이름 (`{form}.html?no=`)
    pub form: &'static str,
    /// 본문 링크 앞에 붙는 경로
    pub view_dir: &'static str,
    pub pagination: Pagination,
    pub layout: ArticleLayout,
    pub subcategory: &'static str,
    /// 제목에 따라 ` 장학`, ` 공지`를 붙일지 여부
    pub suffixed: bool,
}

impl ArticleBoard {
    pub fn list_url(&self, origin: &str, value: u32) -> String {
        let param = match self.pagination {
            Pagination::Page => "page",
            Pagination::ListNum => "listnum",
        };
        format!("{origin}{}&{param}={value}", self.list_path)
    }

    pub fn category(&self, title: &str) -> String {
        if !self.suffixed {
            return self.subcategory.to_string();
        }
        let suffix = if title.contains(SCHOLARSHIP_KEYWORD) {
            "장학"
        } else {
            "공지"
        };
        format!("{} {suffix}", self.subcategory)
    }

    pub(crate) fn patterns(&self) -> Result<ArticlePatterns, ArticleBoardError> {
        ArticlePatterns::new(self.form, &self.layout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub date: String,
    pub writer: String,
    pub content: String,
}

/// 게시판별 태그 이름을 넣어 만든 정규식 묶음입니다. 크롤링 한 번에 한 번만 만듭니다.
pub(crate) struct ArticlePatterns {
    link: Regex,
    title: Regex,
    title_markup: Regex,
    date: Regex,
    writer: Regex,
    contents: Regex,
    files: Regex,
}

impl ArticlePatterns {
    pub(crate) fn new(form: &str, layout: &ArticleLayout) -> Result<Self, ArticleBoardError> {
        let ArticleLayout {
            title_tag,
            date_tag,
            writer_class,
        } = layout;
        Ok(Self {
            link: Regex::new(&format!(r"{}\.html\?no=([0-9]+)", regex::escape(form)))?,
            title: Regex::new(&format!(
                r#"<{title_tag} class="tit">(\r\n)?(.+)(\r\n)?(.*)</{title_tag}>"#
            ))?,
            title_markup: Regex::new(r#"(<(/?[a-z"\s=]+)>(\r\n)?\s*)+"#)?,
            date: Regex::new(&format!(r#"<{date_tag} class="date">(.+)</{date_tag}>"#))?,
            writer: Regex::new(&format!(r#"<span class="{writer_class}">(.+)</span>"#))?,
            contents: Regex::new(r#"(?s)<div class="contents_info">(.+)<div class="file_info">"#)?,
            files: Regex::new(r#"(?s)<div class="file_info">(.+)<div class="list_info">"#)?,
        })
    }

    /// 목록 페이지의 본문 링크를 순서대로, 중복 없이 반환합니다.
    pub(crate) fn article_links(&self, html: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.link
            .find_iter(html)
            .map(|m| m.as_str())
            .filter(|link| seen.insert(*link))
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn parse_article(
        &self,
        html: &str,
        origin: &str,
    ) -> Result<ArticleFields, ArticleBoardError> {
        let article = prefix_ft_board_paths(html, origin);

        let raw_title = self.capture(&article, "title", &self.title, 0)?;
        let title = self
            .title_markup
            .replace_all(&raw_title, "")
            .trim()
            .to_string();
        let date = self.capture(&article, "date", &self.date, 1)?;
        let writer = self.capture(&article, "writer", &self.writer, 1)?;

        let contents = self.capture(&article, "contents", &self.contents, 0)?;
        let files = self.capture(&article, "files", &self.files, 0)?;
        let content = format!(
            "{}{}",
            contents.replacen(r#"<div class="file_info">"#, "", 1),
            files.replacen(r#"<div class="list_info">"#, "", 1)
        );

        Ok(ArticleFields {
            title,
            date,
            writer,
            content,
        })
    }

    fn capture(
        &self,
        html: &str,
        field: &str,
        pattern: &Regex,
        group: usize,
    ) -> Result<String, ExtractError> {
        extract_field(
            html,
            &FieldSpec::Capture {
                field,
                pattern,
                group,
            },
        )
    }
}

/// 본문 URL의 `no` 파라미터
pub(crate) fn article_id(url: &str) -> Result<String, ExtractError> {
    static NO_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[?&]no=([0-9]+)").expect("Failed to compile no regex"));
    extract_field(
        url,
        &FieldSpec::Capture {
            field: "no",
            pattern: &NO_RE,
            group: 1,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EE_UNDER: ArticleBoard = ArticleBoard {
        origin: "https://ee.korea.ac.kr",
        list_path: "/community/undernotice.html?",
        form: "undernotice_view",
        view_dir: "/community/",
        pagination: Pagination::Page,
        layout: EE_LAYOUT,
        subcategory: "학부",
        suffixed: true,
    };

    fn load_fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{name}")).unwrap()
    }

    #[test]
    fn list_url_uses_pagination_param() {
        assert_eq!(
            EE_UNDER.list_url("https://ee.korea.ac.kr", 2),
            "https://ee.korea.ac.kr/community/undernotice.html?&page=2"
        );
        let me = ArticleBoard {
            list_path: "/community/undernotice.html?cate%5B%5D=1",
            pagination: Pagination::ListNum,
            ..EE_UNDER
        };
        assert_eq!(
            me.list_url("https://me.korea.ac.kr", 10),
            "https://me.korea.ac.kr/community/undernotice.html?cate%5B%5D=1&listnum=10"
        );
    }

    #[test]
    fn category_suffix_depends_on_title() {
        assert_eq!(EE_UNDER.category("2024 교내 장학금 안내"), "학부 장학");
        assert_eq!(EE_UNDER.category("수강신청 안내"), "학부 공지");
        let job = ArticleBoard {
            subcategory: "취업정보",
            suffixed: false,
            ..EE_UNDER
        };
        assert_eq!(job.category("장학 채용"), "취업정보");
    }

    #[test]
    fn links_are_deduplicated_in_page_order() {
        let patterns = EE_UNDER.patterns().unwrap();
        let links = patterns.article_links(&load_fixture("article_list.html"));
        assert_eq!(
            links,
            [
                "undernotice_view.html?no=812",
                "undernotice_view.html?no=811",
                "undernotice_view.html?no=805",
            ]
        );
        assert!(patterns.article_links("<p>게시글이 없습니다.</p>").is_empty());
    }

    #[test]
    fn article_fields_are_extracted() {
        let patterns = EE_UNDER.patterns().unwrap();
        let fields = patterns
            .parse_article(&load_fixture("article_view.html"), "https://ee.korea.ac.kr")
            .unwrap();
        assert_eq!(fields.title, "2024학년도 1학기 교내 장학금 신청 안내");
        assert_eq!(fields.date, "2024-03-04");
        assert_eq!(fields.writer, "학부사무실");
        assert!(fields.content.starts_with(r#"<div class="contents_info">"#));
        assert!(fields.content.contains(r#"href="https://ee.korea.ac.kr/ft_board/undernotice/apply.hwp""#));
        assert!(!fields.content.contains("list_info"));
        assert!(!fields.content.contains(r#"<div class="file_info"><div class="file_info">"#));
    }

    #[test]
    fn missing_contents_fails() {
        let patterns = EE_UNDER.patterns().unwrap();
        let html = load_fixture("article_view.html").replace("list_info", "list");
        assert!(matches!(
            patterns.parse_article(&html, "https://ee.korea.ac.kr"),
            Err(ArticleBoardError::Extract(_))
        ));
    }

    #[test]
    fn id_is_no_param() {
        assert_eq!(
            article_id("https://ee.korea.ac.kr/community/undernotice_view.html?no=812").unwrap(),
            "812"
        );
        assert!(article_id("https://ee.korea.ac.kr/community/undernotice.html").is_err());
    }
}
