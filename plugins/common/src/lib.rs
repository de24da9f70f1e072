mod common;
pub mod sites;

pub use common::{article::ArticleBoardError, table::TableBoardError};

macro_rules! table_board_plugin {
    ($name:ident, $identifier:expr, $title:expr, $description:expr, $base_url:expr, $category:expr) => {
        pub struct $name {
            crawler: $crate::common::table::TableBoardCrawler<Self>,
        }

        impl kunotice::core::NoticePlugin for $name {
            const IDENTIFIER: &'static str = $identifier;
            const TITLE: &'static str = $title;
            const DESCRIPTION: &'static str = $description;
            const BASE_URL: &'static str = $base_url;

            async fn crawl(
                &self,
                posts_limit: u32,
            ) -> Result<Vec<kunotice::core::NoticeInfo>, kunotice::PluginError> {
                self.crawler.crawl(posts_limit).await
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub const CATEGORY: &'static str = $category;

            pub fn new() -> Self {
                Self {
                    crawler: $crate::common::table::TableBoardCrawler::new(Self::CATEGORY),
                }
            }
        }
    };
}

macro_rules! article_board_plugin {
    ($name:ident, $identifier:expr, $title:expr, $description:expr, $base_url:expr, $board:expr) => {
        pub struct $name {
            crawler: $crate::common::article::ArticleBoardCrawler<Self>,
        }

        impl kunotice::core::NoticePlugin for $name {
            const IDENTIFIER: &'static str = $identifier;
            const TITLE: &'static str = $title;
            const DESCRIPTION: &'static str = $description;
            const BASE_URL: &'static str = $base_url;

            async fn crawl(
                &self,
                posts_limit: u32,
            ) -> Result<Vec<kunotice::core::NoticeInfo>, kunotice::PluginError> {
                self.crawler.crawl(posts_limit).await
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn new() -> Self {
                static BOARD: $crate::common::article::board::ArticleBoard = $board;
                Self {
                    crawler: $crate::common::article::ArticleBoardCrawler::new(&BOARD),
                }
            }
        }
    };
}

pub(crate) use article_board_plugin;
pub(crate) use table_board_plugin;

#[cfg(test)]
macro_rules! test_sites {
    ($($test:ident($plugin:ty)),* $(,)?) => {
    };
}

#[cfg(test)]
pub(crate) use test_sites;
