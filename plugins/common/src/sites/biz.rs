use crate::common::article::board::{ArticleBoard, BIZ_LAYOUT, Pagination};

crate::article_board_plugin!(
    BizUndergradPlugin,
    "biz.korea.ac.kr/undergraduate",
    "고려대학교 경영대학 학부 공지사항",
    "고려대학교 경영대학 홈페이지의 학부 공지사항을 제공합니다.",
    "https://biz.korea.ac.kr/news/notice.html?kind=1",
    ArticleBoard {
        origin: "https://biz.korea.ac.kr",
        list_path: "/news/notice.html?kind=1",
        form: "notice_view",
        view_dir: "/news/",
        pagination: Pagination::Page,
        layout: BIZ_LAYOUT,
        subcategory: "학부",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    BizGradPlugin,
    "biz.korea.ac.kr/graduate",
    "고려대학교 경영대학 MS/PhD 공지사항",
    "고려대학교 경영대학 홈페이지의 MS/PhD 공지사항을 제공합니다.",
    "https://biz.korea.ac.kr/news/notice.html?kind=2",
    ArticleBoard {
        origin: "https://biz.korea.ac.kr",
        list_path: "/news/notice.html?kind=2",
        form: "notice_view",
        view_dir: "/news/",
        pagination: Pagination::Page,
        layout: BIZ_LAYOUT,
        subcategory: "대학원",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    BizMbaPlugin,
    "biz.korea.ac.kr/mba",
    "고려대학교 경영대학 MBA 공지사항",
    "고려대학교 경영대학 홈페이지의 MBA 공지사항을 제공합니다.",
    "https://biz.korea.ac.kr/news/notice.html?kind=3",
    ArticleBoard {
        origin: "https://biz.korea.ac.kr",
        list_path: "/news/notice.html?kind=3",
        form: "notice_view",
        view_dir: "/news/",
        pagination: Pagination::Page,
        layout: BIZ_LAYOUT,
        subcategory: "대학원",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    BizCareerPlugin,
    "biz.korea.ac.kr/career",
    "고려대학교 경영대학 진로 공지사항",
    "고려대학교 경영대학 홈페이지의 진로 공지사항을 제공합니다.",
    "https://biz.korea.ac.kr/news/notice.html?kind=6",
    ArticleBoard {
        origin: "https://biz.korea.ac.kr",
        list_path: "/news/notice.html?kind=6",
        form: "notice_view",
        view_dir: "/news/",
        pagination: Pagination::Page,
        layout: BIZ_LAYOUT,
        subcategory: "진로정보",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    BizExchangePlugin,
    "biz.korea.ac.kr/exchange",
    "고려대학교 경영대학 교환학생 공지사항",
    "고려대학교 경영대학 홈페이지의 교환학생 공지사항을 제공합니다.",
    "https://biz.korea.ac.kr/news/notice.html?kind=7",
    ArticleBoard {
        origin: "https://biz.korea.ac.kr",
        list_path: "/news/notice.html?kind=7",
        form: "notice_view",
        view_dir: "/news/",
        pagination: Pagination::Page,
        layout: BIZ_LAYOUT,
        subcategory: "교환학생",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    BizAllPlugin,
    "biz.korea.ac.kr/all",
    "고려대학교 경영대학 전체 공지사항",
    "고려대학교 경영대학 홈페이지의 전체 공지사항을 제공합니다.",
    "https://biz.korea.ac.kr/news/notice.html?kind=10",
    ArticleBoard {
        origin: "https://biz.korea.ac.kr",
        list_path: "/news/notice.html?kind=10",
        form: "notice_view",
        view_dir: "/news/",
        pagination: Pagination::Page,
        layout: BIZ_LAYOUT,
        subcategory: "일반",
        suffixed: true,
    }
);
