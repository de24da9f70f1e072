pub mod biz;
pub mod ee;
pub mod info;
pub mod me;
pub mod media;

pub use biz::{
    BizAllPlugin, BizCareerPlugin, BizExchangePlugin, BizGradPlugin, BizMbaPlugin,
    BizUndergradPlugin,
};
pub use ee::{EeGradNoticePlugin, EeJobPlugin, EeUndergradNoticePlugin};
pub use info::{
    InfoCareerCompetitionPlugin, InfoCareerInternPlugin, InfoCareerJobPlugin,
    InfoCareerProgramPlugin, InfoGradNoticePlugin, InfoGradScholarshipPlugin, InfoNewsPlugin,
    InfoUndergradNoticePlugin, InfoUndergradScholarshipPlugin,
};
pub use me::{MeGeneralNoticePlugin, MeGradNoticePlugin, MeJobPlugin, MeUndergradNoticePlugin};
pub use media::{
    MediaContestPlugin, MediaGradNoticePlugin, MediaGradSchoolNoticePlugin, MediaJobPlugin,
    MediaNewsPlugin, MediaNoticePlugin,
};
