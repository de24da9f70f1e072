use std::{fmt, str::FromStr};

use kunotice::core::NoticeInfo;

use crate::{
    detail::make_file_path_public,
    error::KupidError,
    layout::{parse_notice_info, parse_schedule_info, parse_scholar_info},
    list::{RowViewParameters, parse_notice_params, parse_schedule_params},
};

/// 게시판 코드에 해당하는 분류 이름
pub fn category_label(code: &str) -> Option<&'static str> {
    NoticeType::ALL
        .into_iter()
        .find(|notice_type| notice_type.code() == code)
        .map(NoticeType::label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeType {
    Notice,
    Scholar,
    Schedule,
}

/// 게시판 하나를 읽는 데 필요한 함수 묶음입니다.
pub struct NoticeHandlers {
    pub list: fn(&str) -> Result<Vec<RowViewParameters>, KupidError>,
    pub finish: fn(&str, &str) -> String,
    pub parse: fn(&str, &str) -> Result<NoticeInfo, KupidError>,
}

static NOTICE_HANDLERS: NoticeHandlers = NoticeHandlers {
    list: parse_notice_params,
    finish: make_file_path_public,
    parse: parse_notice_info,
};

static SCHOLAR_HANDLERS: NoticeHandlers = NoticeHandlers {
    list: parse_notice_params,
    finish: make_file_path_public,
    parse: parse_scholar_info,
};

static SCHEDULE_HANDLERS: NoticeHandlers = NoticeHandlers {
    list: parse_schedule_params,
    finish: make_file_path_public,
    parse: parse_schedule_info,
};

impl NoticeType {
    pub const ALL: [NoticeType; 3] = [NoticeType::Notice, NoticeType::Scholar, NoticeType::Schedule];

    pub fn handlers(self) -> &'static NoticeHandlers {
        match self {
            NoticeType::Notice => &NOTICE_HANDLERS,
            NoticeType::Scholar => &SCHOLAR_HANDLERS,
            NoticeType::Schedule => &SCHEDULE_HANDLERS,
        }
    }

    /// 그룹웨어 게시판 코드 (`kind`)
    pub fn code(self) -> &'static str {
        match self {
            NoticeType::Notice => "11",
            NoticeType::Scholar => "88",
            NoticeType::Schedule => "89",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoticeType::Notice => "일반공지",
            NoticeType::Scholar => "장학공지",
            NoticeType::Schedule => "학사일정",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoticeType::Notice => "Notice",
            NoticeType::Scholar => "Scholar",
            NoticeType::Schedule => "Schedule",
        }
    }
}

impl fmt::Display for NoticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeType {
    type Err = KupidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoticeType::ALL
            .into_iter()
            .find(|notice_type| notice_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| KupidError::InvalidNoticeType(s.to_string()))
    }
}
