use crate::common::article::board::{ArticleBoard, ME_LAYOUT, Pagination};

crate::article_board_plugin!(
    MeGeneralNoticePlugin,
    "me.korea.ac.kr/general",
    "고려대학교 기계공학부 일반 공지사항",
    "고려대학교 기계공학부 홈페이지의 일반 공지사항을 제공합니다.",
    "https://me.korea.ac.kr/community/undernotice.html?cate%5B%5D=0",
    ArticleBoard {
        origin: "https://me.korea.ac.kr",
        list_path: "/community/undernotice.html?cate%5B%5D=0",
        form: "undernotice_view",
        view_dir: "/community/",
        pagination: Pagination::ListNum,
        layout: ME_LAYOUT,
        subcategory: "일반",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    MeUndergradNoticePlugin,
    "me.korea.ac.kr/undergraduate",
    "고려대학교 기계공학부 학부 공지사항",
    "고려대학교 기계공학부 홈페이지의 학부 공지사항을 제공합니다.",
    "https://me.korea.ac.kr/community/undernotice.html?cate%5B%5D=1",
    ArticleBoard {
        origin: "https://me.korea.ac.kr",
        list_path: "/community/undernotice.html?cate%5B%5D=1",
        form: "undernotice_view",
        view_dir: "/community/",
        pagination: Pagination::ListNum,
        layout: ME_LAYOUT,
        subcategory: "학부",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    MeGradNoticePlugin,
    "me.korea.ac.kr/graduate",
    "고려대학교 기계공학부 대학원 공지사항",
    "고려대학교 기계공학부 홈페이지의 대학원 공지사항을 제공합니다.",
    "https://me.korea.ac.kr/community/undernotice.html?cate%5B%5D=2",
    ArticleBoard {
        origin: "https://me.korea.ac.kr",
        list_path: "/community/undernotice.html?cate%5B%5D=2",
        form: "undernotice_view",
        view_dir: "/community/",
        pagination: Pagination::ListNum,
        layout: ME_LAYOUT,
        subcategory: "대학원",
        suffixed: true,
    }
);

crate::article_board_plugin!(
    MeJobPlugin,
    "me.korea.ac.kr/job",
    "고려대학교 기계공학부 취업정보",
    "고려대학교 기계공학부 홈페이지의 취업정보를 제공합니다.",
    "https://me.korea.ac.kr/community/job.html",
    ArticleBoard {
        origin: "https://me.korea.ac.kr",
        list_path: "/community/job.html?",
        form: "job_view",
        view_dir: "/community/",
        pagination: Pagination::ListNum,
        layout: ME_LAYOUT,
        subcategory: "취업정보",
        suffixed: false,
    }
);
