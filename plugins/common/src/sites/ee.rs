use crate::common::article::board::{ArticleBoard, EE_LAYOUT, Pagination};

crate::article_board_plugin!(
    EeUndergradNoticePlugin,
    "ee.korea.ac.kr/undernotice",
    "고려대학교 전기전자공학부 학부 공지사항",
    "고려대학교 전기전자공학부 홈페이지의 학부 공지사항을 제공합니다.",
    "https://ee.korea.ac.kr/community/undernotice.html",
    ArticleBoard {
        origin: "https://ee.korea.ac.kr",
        list_path: "/community/undernotice.html?",
        form: "undernotice_view",
        view_dir: "/community/",
        pagination: Pagination::Page,
        layout: EE_LAYOUT,
        subcategory: "학부",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    EeGradNoticePlugin,
    "ee.korea.ac.kr/gradnotice",
    "고려대학교 전기전자공학부 대학원 공지사항",
    "고려대학교 전기전자공학부 홈페이지의 대학원 공지사항을 제공합니다.",
    "https://ee.korea.ac.kr/community/gradnotice.html",
    ArticleBoard {
        origin: "https://ee.korea.ac.kr",
        list_path: "/community/gradnotice.html?",
        form: "gradnotice_view",
        view_dir: "/community/",
        pagination: Pagination::Page,
        layout: EE_LAYOUT,
        subcategory: "대학원",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    EeJobPlugin,
    "ee.korea.ac.kr/job",
    "고려대학교 전기전자공학부 취업정보",
    "고려대학교 전기전자공학부 홈페이지의 취업정보를 제공합니다.",
    "https://ee.korea.ac.kr/community/job.html",
    ArticleBoard {
        origin: "https://ee.korea.ac.kr",
        list_path: "/community/job.html?",
        form: "job_view",
        view_dir: "/community/",
        pagination: Pagination::Page,
        layout: EE_LAYOUT,
        subcategory: "취업정보",
        suffixed: false,
    }
);
