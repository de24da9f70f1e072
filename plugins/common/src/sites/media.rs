crate::table_board_plugin!(
    MediaNoticePlugin,
    "mediacom.korea.ac.kr/faculty/notice",
    "고려대학교 미디어학부 공지사항",
    "고려대학교 미디어학부 홈페이지의 공지사항을 제공합니다.",
    "https://mediacom.korea.ac.kr/mediacom/faculty/notice.do",
    "미디어학부 공지사항"
);

crate::table_board_plugin!(
    MediaJobPlugin,
    "mediacom.korea.ac.kr/faculty/worknotice",
    "고려대학교 미디어학부 채용정보",
    "고려대학교 미디어학부 홈페이지의 채용정보를 제공합니다.",
    "https://mediacom.korea.ac.kr/mediacom/faculty/worknotice.do",
    "미디어학부 채용정보"
);

crate::table_board_plugin!(
    MediaContestPlugin,
    "mediacom.korea.ac.kr/faculty/contestnotice",
    "고려대학교 미디어학부 공모전·행사",
    "고려대학교 미디어학부 홈페이지의 공모전·행사를 제공합니다.",
    "https://mediacom.korea.ac.kr/mediacom/faculty/contestnotice.do",
    "미디어학부 공모전·행사"
);

crate::table_board_plugin!(
    MediaNewsPlugin,
    "mediacom.korea.ac.kr/faculty/notice2",
    "고려대학교 미디어학부 소식",
    "고려대학교 미디어학부 홈페이지의 소식을 제공합니다.",
    "https://mediacom.korea.ac.kr/mediacom/faculty/notice2.do",
    "미디어학부 소식"
);

crate::table_board_plugin!(
    MediaGradNoticePlugin,
    "mediacom.korea.ac.kr/grad/notice",
    "고려대학교 미디어학부 일반대학원 공지사항",
    "고려대학교 미디어학부 홈페이지의 일반대학원 공지사항을 제공합니다.",
    "https://mediacom.korea.ac.kr/mediacom/grad/notice.do",
    "미디어학부 일반대학원 공지사항"
);

crate::table_board_plugin!(
    MediaGradSchoolNoticePlugin,
    "mediacom.korea.ac.kr/media_grad/notice",
    "고려대학교 미디어학부 미디어대학원 공지사항",
    "고려대학교 미디어학부 홈페이지의 미디어대학원 공지사항을 제공합니다.",
    "https://mediacom.korea.ac.kr/mediacom/media_grad/notice.do",
    "미디어학부 미디어대학원 공지사항"
);
