use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, PluginError};

/// 포털, 단과대학에 관계없이 공통으로 사용하는 공지사항 레코드입니다.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    /// 포털 내부 식별자 (포털 간 유일하지 않음)
    pub id: String,
    pub title: String,
    pub date: String,
    pub writer: String,
    /// 정제되지 않은 HTML 조각
    pub content: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NoticeInfo {
    /// `id`가 `url`의 쿼리 파라미터 값 중 하나로 존재하는지 확인합니다.
    pub fn id_matches_url(&self) -> bool {
        Url::parse(&self.url)
            .map(|url| url.query_pairs().any(|(_, value)| value == self.id))
            .unwrap_or(false)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct NoticeSiteData {
    pub title: String,
    pub source: String,
    pub description: String,
    pub items: Vec<NoticeInfo>,
}

pub trait NoticePlugin {
    const IDENTIFIER: &'static str;
    const TITLE: &'static str;
    const DESCRIPTION: &'static str;
    const BASE_URL: &'static str;

    fn crawl(
        &self,
        posts_limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<NoticeInfo>, PluginError>> + Send;
}

pub struct NoticeCore {
    posts_limit: u32,
}

impl Default for NoticeCore {
    fn default() -> Self {
        Self::new(Self::POST_COUNT_LIMIT)
    }
}

impl NoticeCore {
    pub const POST_COUNT_LIMIT: u32 = 10;

    pub fn new(posts_limit: u32) -> Self {
        Self { posts_limit }
    }

    pub fn posts_limit(&self) -> u32 {
        self.posts_limit
    }

    #[tracing::instrument(name = "run_plugin", skip(self, plugin), fields(plugin = T::IDENTIFIER))]
    pub async fn run<T: NoticePlugin>(&self, plugin: &T) -> Result<NoticeSiteData, Error> {
        tracing::info!("Crawling up to {} notices", self.posts_limit);
        let items = plugin.crawl(self.posts_limit).await?;

        if let Some(item) = items.iter().find(|item| !item.id_matches_url()) {
            return Err(Error::InconsistentId {
                plugin: T::IDENTIFIER.to_string(),
                id: item.id.clone(),
                url: item.url.clone(),
            });
        }

        tracing::info!("Crawled {} notices", items.len());
        Ok(NoticeSiteData {
            title: T::TITLE.to_string(),
            source: T::BASE_URL.to_string(),
            description: T::DESCRIPTION.to_string(),
            items,
        })
    }
}
