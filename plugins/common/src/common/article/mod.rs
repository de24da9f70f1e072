//! 전기전자공학부, 경영대학, 기계공학부처럼 `{게시판}_view.html?no=` 형태의
//! 본문 링크를 쓰는 게시판에서 사용되는 공통 모듈입니다.
pub(crate) mod board;

use std::collections::HashSet;

use futures::{TryStreamExt, stream::FuturesOrdered};
use kunotice::{
    PluginError,
    core::{NoticeInfo, NoticePlugin},
    extract::ExtractError,
};
use reqwest::StatusCode;
use thiserror::Error;

use crate::common::article::board::{ArticleBoard, ArticlePatterns, Pagination, article_id};

/// 페이지를 넘길 때 요청하는 최대 페이지 수
const MAX_PAGES: u32 = 50;

#[derive(Debug, Error)]
pub enum ArticleBoardError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },
    #[error("Failed to parse article: {0}")]
    Extract(#[from] ExtractError),
    #[error("Invalid board pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ArticleBoardError {
    pub fn into_plugin_error<T: NoticePlugin>(self) -> PluginError {
        let message = self.to_string();
        match self {
            ArticleBoardError::Request(_) => PluginError::request::<T>(message),
            ArticleBoardError::UnexpectedStatus { .. } => PluginError::status::<T>(message),
            ArticleBoardError::Extract(_) | ArticleBoardError::Pattern(_) => {
                PluginError::parse::<T>(message)
            }
        }
    }
}

pub(crate) struct ArticleBoardCrawler<T: NoticePlugin> {
    client: reqwest::Client,
    origin: String,
    board: &'static ArticleBoard,
    _marker: std::marker::PhantomData<T>,
}

impl<T> ArticleBoardCrawler<T>
where
    T: NoticePlugin,
{
    pub(crate) fn new(board: &'static ArticleBoard) -> Self {
        Self::with_origin(board, board.origin)
    }

    pub(crate) fn with_origin(board: &'static ArticleBoard, origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.into(),
            board,
            _marker: std::marker::PhantomData,
        }
    }

    pub(crate) async fn crawl(&self, posts_limit: u32) -> Result<Vec<NoticeInfo>, PluginError> {
        self.crawl_board(posts_limit)
            .await
            .map_err(ArticleBoardError::into_plugin_error::<T>)
    }

    async fn crawl_board(&self, posts_limit: u32) -> Result<Vec<NoticeInfo>, ArticleBoardError> {
        if posts_limit == 0 {
            return Ok(vec![]);
        }
        let patterns = self.board.patterns()?;
        let urls = self.fetch_article_urls(&patterns, posts_limit).await?;
        tracing::info!("fetch {} post contents", urls.len());
        urls.iter()
            .map(|url| self.fetch_post(&patterns, url))
            .collect::<FuturesOrdered<_>>()
            .try_collect::<Vec<_>>()
            .await
    }

    /// 최대 `posts_limit`개의 본문 URL을 목록 순서대로 반환합니다.
    async fn fetch_article_urls(
        &self,
        patterns: &ArticlePatterns,
        posts_limit: u32,
    ) -> Result<Vec<String>, ArticleBoardError> {
        let limit = posts_limit as usize;
        let links = match self.board.pagination {
            Pagination::ListNum => {
                let url = self.board.list_url(&self.origin, posts_limit);
                patterns.article_links(&self.fetch_text(&url).await?)
            }
            Pagination::Page => {
                let mut seen = HashSet::new();
                let mut links = vec![];
                for page in 1..=MAX_PAGES {
                    tracing::info!(page);
                    let url = self.board.list_url(&self.origin, page);
                    let fresh = patterns
                        .article_links(&self.fetch_text(&url).await?)
                        .into_iter()
                        .filter(|link| seen.insert(link.clone()))
                        .collect::<Vec<_>>();
                    if fresh.is_empty() {
                        break;
                    }
                    links.extend(fresh);
                    if links.len() >= limit {
                        break;
                    }
                }
                links
            }
        };
        // 첫 목록에 본문 링크가 하나도 없으면 게시판 구조가 바뀐 것으로 봄
        if links.is_empty() {
            return Err(ExtractError::FieldNotFound(format!("{} link", self.board.form)).into());
        }
        Ok(links
            .into_iter()
            .take(limit)
            .map(|link| format!("{}{}{link}", self.origin, self.board.view_dir))
            .collect())
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, skip(self, patterns))]
    async fn fetch_post(
        &self,
        patterns: &ArticlePatterns,
        url: &str,
    ) -> Result<NoticeInfo, ArticleBoardError> {
        let html = self.fetch_text(url).await?;
        let fields = patterns.parse_article(&html, &self.origin)?;
        let category = self.board.category(&fields.title);
        Ok(NoticeInfo {
            id: article_id(url)?,
            title: fields.title,
            date: fields.date,
            writer: fields.writer,
            content: fields.content,
            url: url.to_string(),
            category: Some(category),
        })
    }

    async fn fetch_text(&self, url: &str) -> Result<String, ArticleBoardError> {
        let res = self.client.get(url).send().await?;
        if !res.status().is_success() {
            return Err(ArticleBoardError::UnexpectedStatus {
                url: url.to_string(),
                status: res.status(),
            });
        }
        Ok(res.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use kunotice::PluginErrorKind;
    use tracing_test::traced_test;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;
    use crate::common::article::board::{EE_LAYOUT, ME_LAYOUT};

    fn load_fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{name}")).unwrap()
    }

    struct TestArticlePlugin;

    impl NoticePlugin for TestArticlePlugin {
        const IDENTIFIER: &'static str = "test.korea.ac.kr/article";
        const TITLE: &'static str = "테스트 게시판";
        const DESCRIPTION: &'static str = "테스트 게시판 공지사항";
        const BASE_URL: &'static str = "https://test.korea.ac.kr/community/undernotice.html";

        async fn crawl(&self, _posts_limit: u32) -> Result<Vec<NoticeInfo>, PluginError> {
            Ok(vec![])
        }
    }

    static PAGED_BOARD: ArticleBoard = ArticleBoard {
        origin: "https://test.korea.ac.kr",
        list_path: "/community/undernotice.html?",
        form: "undernotice_view",
        view_dir: "/community/",
        pagination: Pagination::Page,
        layout: EE_LAYOUT,
        subcategory: "학부",
        suffixed: true,
    };

    static LISTNUM_BOARD: ArticleBoard = ArticleBoard {
        origin: "https://test.korea.ac.kr",
        list_path: "/community/job.html?",
        form: "job_view",
        view_dir: "/community/",
        pagination: Pagination::ListNum,
        layout: ME_LAYOUT,
        subcategory: "취업정보",
        suffixed: false,
    };

    async fn mount_view(server: &MockServer, file: &str, body: String) {
        Mock::given(method("GET"))
            .and(path(format!("/community/{file}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pages_until_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/community/undernotice.html"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("article_list.html")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/community/undernotice.html"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<a href="undernotice_view.html?no=790">이전 글</a>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        mount_view(&server, "undernotice_view.html", load_fixture("article_view.html")).await;

        let crawler =
            ArticleBoardCrawler::<TestArticlePlugin>::with_origin(&PAGED_BOARD, server.uri());
        let notices = crawler.crawl(4).await.unwrap();
        assert_eq!(
            notices.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            ["812", "811", "805", "790"]
        );
        assert_eq!(
            notices[0].url,
            format!("{}/community/undernotice_view.html?no=812", server.uri())
        );
        assert_eq!(notices[0].category.as_deref(), Some("학부 장학"));
        assert!(notices.iter().all(NoticeInfo::id_matches_url));
    }

    #[tokio::test]
    async fn empty_page_stops_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/community/undernotice.html"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("article_list.html")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/community/undernotice.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<ul></ul>"))
            .mount(&server)
            .await;
        mount_view(&server, "undernotice_view.html", load_fixture("article_view.html")).await;

        let crawler =
            ArticleBoardCrawler::<TestArticlePlugin>::with_origin(&PAGED_BOARD, server.uri());
        let notices = crawler.crawl(10).await.unwrap();
        assert_eq!(notices.len(), 3);
    }

    #[tokio::test]
    async fn listnum_board_requests_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/community/job.html"))
            .and(query_param("listnum", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<a href="job_view.html?no=31">a</a><a href="job_view.html?no=30">b</a>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        mount_view(&server, "job_view.html", load_fixture("article_view_me.html")).await;

        let crawler =
            ArticleBoardCrawler::<TestArticlePlugin>::with_origin(&LISTNUM_BOARD, server.uri());
        let notices = crawler.crawl(2).await.unwrap();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].id, "31");
        assert_eq!(notices[0].title, "2024 상반기 연구원 채용 공고");
        assert_eq!(notices[0].date, "2024.03.05");
        assert_eq!(notices[0].category.as_deref(), Some("취업정보"));
    }

    #[tokio::test]
    async fn first_page_without_links_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/community/undernotice.html"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"<a href="view.php?idx=1">공지</a>"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let crawler =
            ArticleBoardCrawler::<TestArticlePlugin>::with_origin(&PAGED_BOARD, server.uri());
        let err = crawler.crawl(10).await.unwrap_err();
        assert_eq!(err.kind(), PluginErrorKind::Parse);
    }

    #[tokio::test]
    async fn listnum_without_links_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/community/job.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<ul></ul>"))
            .mount(&server)
            .await;

        let crawler =
            ArticleBoardCrawler::<TestArticlePlugin>::with_origin(&LISTNUM_BOARD, server.uri());
        let err = crawler.crawl(5).await.unwrap_err();
        assert_eq!(err.kind(), PluginErrorKind::Parse);
    }

    #[tokio::test]
    async fn failed_list_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let crawler =
            ArticleBoardCrawler::<TestArticlePlugin>::with_origin(&PAGED_BOARD, server.uri());
        let err = crawler.crawl(3).await.unwrap_err();
        assert_eq!(err.kind(), PluginErrorKind::Status);
    }
}
