crate::table_board_plugin!(
    InfoUndergradNoticePlugin,
    "info.korea.ac.kr/notice_under",
    "고려대학교 정보대학 학부 공지사항",
    "고려대학교 정보대학 홈페이지의 학부 공지사항을 제공합니다.",
    "https://info.korea.ac.kr/info/board/notice_under.do",
    "정보대학 학부 공지사항"
);

crate::table_board_plugin!(
    InfoGradNoticePlugin,
    "info.korea.ac.kr/notice_grad",
    "고려대학교 정보대학 대학원 공지사항",
    "고려대학교 정보대학 홈페이지의 대학원 공지사항을 제공합니다.",
    "https://info.korea.ac.kr/info/board/notice_grad.do",
    "정보대학 대학원 공지사항"
);

crate::table_board_plugin!(
    InfoUndergradScholarshipPlugin,
    "info.korea.ac.kr/scholarship_under",
    "고려대학교 정보대학 학부 장학공지",
    "고려대학교 정보대학 홈페이지의 학부 장학공지를 제공합니다.",
    "https://info.korea.ac.kr/info/board/scholarship_under.do",
    "정보대학 학부 장학공지"
);

crate::table_board_plugin!(
    InfoGradScholarshipPlugin,
    "info.korea.ac.kr/scholarship_grad",
    "고려대학교 정보대학 대학원 장학공지",
    "고려대학교 정보대학 홈페이지의 대학원 장학공지를 제공합니다.",
    "https://info.korea.ac.kr/info/board/scholarship_grad.do",
    "정보대학 대학원 장학공지"
);

crate::table_board_plugin!(
    InfoNewsPlugin,
    "info.korea.ac.kr/news",
    "고려대학교 정보대학 행사 및 소식",
    "고려대학교 정보대학 홈페이지의 행사 및 소식을 제공합니다.",
    "https://info.korea.ac.kr/info/board/news.do",
    "정보대학 행사 및 소식"
);

crate::table_board_plugin!(
    InfoCareerJobPlugin,
    "info.korea.ac.kr/course_job",
    "고려대학교 정보대학 진로정보 - 채용",
    "고려대학교 정보대학 홈페이지의 진로정보 - 채용을 제공합니다.",
    "https://info.korea.ac.kr/info/board/course_job.do",
    "정보대학 진로정보 - 채용"
);

crate::table_board_plugin!(
    InfoCareerProgramPlugin,
    "info.korea.ac.kr/course_program",
    "고려대학교 정보대학 진로정보 - 교육",
    "고려대학교 정보대학 홈페이지의 진로정보 - 교육을 제공합니다.",
    "https://info.korea.ac.kr/info/board/course_program.do",
    "정보대학 진로정보 - 교육"
);

crate::table_board_plugin!(
    InfoCareerInternPlugin,
    "info.korea.ac.kr/course_intern",
    "고려대학교 정보대학 진로정보 - 인턴",
    "고려대학교 정보대학 홈페이지의 진로정보 - 인턴을 제공합니다.",
    "https://info.korea.ac.kr/info/board/course_intern.do",
    "정보대학 진로정보 - 인턴"
);

crate::table_board_plugin!(
    InfoCareerCompetitionPlugin,
    "info.korea.ac.kr/course_competition",
    "고려대학교 정보대학 진로정보 - 공모전",
    "고려대학교 정보대학 홈페이지의 진로정보 - 공모전을 제공합니다.",
    "https://info.korea.ac.kr/info/board/course_competition.do",
    "정보대학 진로정보 - 공모전"
);
