//! 정보대학, 미디어학부처럼 목록과 본문이 모두 `<table>`로 된 게시판에서
//! 사용되는 공통 모듈입니다.
use std::sync::LazyLock;

use futures::{TryStreamExt, stream::FuturesOrdered};
use kunotice::{
    PluginError,
    core::{NoticeInfo, NoticePlugin},
    extract::{ExtractError, FieldSpec, extract_all, extract_field},
    html::{absolutize_img_src, collapse_nbsp, decode_amp, origin_of, remove_tags, to_plain_text},
};
use regex::{Captures, Regex};
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

static TBODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<tbody>([\s\S]+?)</tbody>").expect("Failed to compile tbody regex")
});
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<tr[^>]*>([\s\S]+?)</tr>").expect("Failed to compile tr regex"));
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<td[^>]*>([\s\S]+?)</td>").expect("Failed to compile td regex"));
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]+?)""#).expect("Failed to compile href regex"));
static ARTICLE_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"articleNo=(\d+)").expect("Failed to compile articleNo regex"));
static TAB_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+").expect("Failed to compile tab regex"));
static NEWLINE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("Failed to compile newline regex"));

/// 목록 행에서 읽는 셀 번호
#[derive(Debug, Clone, Copy)]
pub struct TableListCells {
    pub title: usize,
    pub writer: usize,
    pub date: usize,
}

/// 본문 페이지에서 읽는 셀 번호
#[derive(Debug, Clone, Copy)]
pub struct TableViewCells {
    pub title: usize,
    pub body: usize,
    pub files: usize,
}

pub const TABLE_LIST_CELLS: TableListCells = TableListCells {
    title: 1,
    writer: 2,
    date: 4,
};

pub const TABLE_VIEW_CELLS: TableViewCells = TableViewCells {
    title: 0,
    body: 1,
    files: 2,
};

#[derive(Debug, Error)]
pub enum TableBoardError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },
    #[error("Failed to parse board: {0}")]
    Extract(#[from] ExtractError),
    #[error("Cell {cell} is missing in {context}")]
    CellMissing { cell: usize, context: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl TableBoardError {
    pub fn into_plugin_error<T: NoticePlugin>(self) -> PluginError {
        let message = self.to_string();
        match self {
            TableBoardError::Request(_) => PluginError::request::<T>(message),
            TableBoardError::UnexpectedStatus { .. } => PluginError::status::<T>(message),
            TableBoardError::Extract(_)
            | TableBoardError::CellMissing { .. }
            | TableBoardError::InvalidUrl(_) => PluginError::parse::<T>(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub url: String,
    pub writer: String,
    pub date: String,
}

fn cells(html: &str) -> Result<Vec<String>, ExtractError> {
    extract_all(
        html,
        &FieldSpec::Capture {
            field: "td",
            pattern: &CELL_RE,
            group: 0,
        },
    )
}

fn cell<'a>(cells: &'a [String], index: usize, context: &str) -> Result<&'a str, TableBoardError> {
    cells
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| TableBoardError::CellMissing {
            cell: index,
            context: context.to_string(),
        })
}

fn capture(html: &str, field: &str, pattern: &Regex) -> Result<String, ExtractError> {
    extract_field(
        html,
        &FieldSpec::Capture {
            field,
            pattern,
            group: 1,
        },
    )
}

/// 목록 페이지의 첫 `<tbody>`에서 게시글 행을 읽습니다.
///
/// 게시글 URL은 `board_url` 뒤에 제목 셀의 `href`를 그대로 이어 붙여 만듭니다.
pub fn parse_table_rows(html: &str, board_url: &str) -> Result<Vec<TableRow>, TableBoardError> {
    let body = capture(html, "tbody", &TBODY_RE)?;
    extract_all(
        &body,
        &FieldSpec::Capture {
            field: "tr",
            pattern: &ROW_RE,
            group: 1,
        },
    )?
    .iter()
    .map(|row| -> Result<TableRow, TableBoardError> {
        let cells = cells(row)?;
        let title_cell = cell(&cells, TABLE_LIST_CELLS.title, "list row")?;

        let title = to_plain_text(&decode_amp(
            &collapse_nbsp(&remove_tags(title_cell)).replace(['\n', '\t'], ""),
        ))
        .trim()
        .to_string();
        let url = format!(
            "{board_url}{}",
            decode_amp(&capture(title_cell, "href", &HREF_RE)?)
        );
        let id = capture(&url, "articleNo", &ARTICLE_NO_RE)?;
        let writer = remove_tags(cell(&cells, TABLE_LIST_CELLS.writer, "list row")?)
            .trim()
            .to_string();
        let date = remove_tags(cell(&cells, TABLE_LIST_CELLS.date, "list row")?)
            .trim()
            .to_string();

        Ok(TableRow {
            id,
            title,
            url,
            writer,
            date,
        })
    })
    .collect()
}

/// 본문 페이지의 제목, 본문, 첨부 셀을 하나의 HTML 조각으로 합칩니다.
pub fn build_view_content(html: &str, page_url: &str) -> Result<String, TableBoardError> {
    let page = Url::parse(page_url).map_err(|_| TableBoardError::InvalidUrl(page_url.to_string()))?;
    let origin = origin_of(page_url)
        .and_then(|origin| Url::parse(&origin).ok())
        .ok_or_else(|| TableBoardError::InvalidUrl(page_url.to_string()))?;

    let cells = cells(html)?;
    let title = decode_amp(&remove_tags(cell(&cells, TABLE_VIEW_CELLS.title, page_url)?));

    let body = cell(&cells, TABLE_VIEW_CELLS.body, page_url)?.replace("&nbsp;", " ");
    let body = TAB_RUN_RE.replace_all(&body, " ");
    let body = NEWLINE_RUN_RE.replace_all(&body, "\n");
    let body = absolutize_img_src(&body, &origin);

    let files = decode_amp(cell(&cells, TABLE_VIEW_CELLS.files, page_url)?);
    let files = HREF_RE.replace_all(&files, |caps: &Captures| match page.join(&caps[1]) {
        Ok(absolute) => format!(r#"href="{absolute}""#),
        Err(_) => caps[0].to_string(),
    });

    Ok(format!("<h3>{title}</h3>{body}{files}"))
}

pub(crate) struct TableBoardCrawler<T: NoticePlugin> {
    client: reqwest::Client,
    board_url: String,
    category: &'static str,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TableBoardCrawler<T>
where
    T: NoticePlugin,
{
    pub(crate) fn new(category: &'static str) -> Self {
        Self::with_board_url(T::BASE_URL, category)
    }

    pub(crate) fn with_board_url(board_url: impl Into<String>, category: &'static str) -> Self {
        Self {
            client: reqwest::Client::new(),
            board_url: board_url.into(),
            category,
            _marker: std::marker::PhantomData,
        }
    }

    pub(crate) async fn crawl(&self, posts_limit: u32) -> Result<Vec<NoticeInfo>, PluginError> {
        self.crawl_board(posts_limit)
            .await
            .map_err(TableBoardError::into_plugin_error::<T>)
    }

    async fn crawl_board(&self, posts_limit: u32) -> Result<Vec<NoticeInfo>, TableBoardError> {
        let html = self.fetch_text(&self.board_url).await?;
        let rows = parse_table_rows(&html, &self.board_url)?
            .into_iter()
            .take(posts_limit as usize)
            .collect::<Vec<_>>();
        tracing::info!("fetch {} post contents", rows.len());
        rows.into_iter()
            .map(|row| self.fetch_post(row))
            .collect::<FuturesOrdered<_>>()
            .try_collect::<Vec<_>>()
            .await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, skip(self, row), fields(id = %row.id))]
    async fn fetch_post(&self, row: TableRow) -> Result<NoticeInfo, TableBoardError> {
        let html = self.fetch_text(&row.url).await?;
        let content = build_view_content(&html, &row.url)?;
        Ok(NoticeInfo {
            id: row.id,
            title: row.title,
            date: row.date,
            writer: row.writer,
            content,
            url: row.url,
            category: Some(self.category.to_string()),
        })
    }

    async fn fetch_text(&self, url: &str) -> Result<String, TableBoardError> {
        let res = self.client.get(url).send().await?;
        if !res.status().is_success() {
            return Err(TableBoardError::UnexpectedStatus {
                url: url.to_string(),
                status: res.status(),
            });
        }
        Ok(res.text().await?)
    }
}
