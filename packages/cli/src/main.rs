use std::{
    collections::HashSet,
    fs::File,
    ops::Not,
    path::Path,
    sync::{Arc, LazyLock},
};

use clap::Parser;
use futures::future::join_all;
use kunotice::core::{NoticeCore, NoticePlugin};
use kunotice_common::sites::*;
use kunotice_kupid::{
    KupidCredential, KupidNoticePlugin, KupidSchedulePlugin, KupidScholarPlugin,
};
use tokio::io::AsyncWriteExt;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt as _, util::SubscriberInitExt};

use crate::macros::register_plugins;

mod macros;

#[derive(Parser, Debug)]
#[command(
    name = "kunotice",
    about = "A tool to fetch and save notices from Korea University sites.",
    version
)]
struct KunoticeOptions {
    /// The output directory for the fetched data.
    #[arg(short = 'o', long = "out", default_value = "./out")]
    out_dir: String,

    /// The maximum number of posts to fetch.
    #[arg(short = 'l', long = "limit", default_value_t = NoticeCore::POST_COUNT_LIMIT)]
    posts_limit: u32,

    /// The sites to include in the fetch. By default, all sites are included.
    /// This will override the default sites.
    #[arg(short = 'i', long, value_delimiter = ',')]
    include: Vec<String>,
    #[arg(short = 'e', long, value_delimiter = ',')]
    /// The sites to exclude from the fetch.
    exclude: Vec<String>,
}

impl KunoticeOptions {
    fn validate(&self) -> eyre::Result<()> {
        if !self.include.is_empty() && !self.exclude.is_empty() {
            eyre::bail!("You cannot use both --include and --exclude options at the same time.");
        }
        Ok(())
    }
}

/// `KUPID_ID`, `KUPID_PASSWORD`가 없으면 KUPID 플러그인은 건너뜁니다.
static KUPID_CREDENTIAL: LazyLock<Option<KupidCredential>> =
    LazyLock::new(|| match KupidCredential::from_env() {
        Ok(credential) => Some(credential),
        Err(e) => {
            tracing::warn!("Skipping KUPID plugins: {e}");
            None
        }
    });

#[tokio::main]
async fn main() -> eyre::Result<()> {
    setup_tracing()?;

    color_eyre::install()?;
    let options = KunoticeOptions::parse();
    options.validate()?;

    let out_dir = Path::new(&options.out_dir).to_owned();

    let core = Arc::new(NoticeCore::new(options.posts_limit));

    let tasks = construct_tasks(core, &out_dir, options);
    let tasks_len = tasks.len();

    // Run all tasks and collect errors
    let errors: Vec<eyre::Report> = join_all(tasks)
        .await
        .into_iter()
        .filter_map(|r| r.err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        for err in &errors {
            tracing::error!("{err:?}");
        }
        Err(eyre::eyre!("{} of {} Run failed", errors.len(), tasks_len))
    }
}

register_plugins! {
    KupidNotice(KupidNoticePlugin) => KUPID_CREDENTIAL.clone().map(KupidNoticePlugin::new),
    KupidScholar(KupidScholarPlugin) => KUPID_CREDENTIAL.clone().map(KupidScholarPlugin::new),
    KupidSchedule(KupidSchedulePlugin) => KUPID_CREDENTIAL.clone().map(KupidSchedulePlugin::new),
    InfoUndergradNotice(InfoUndergradNoticePlugin) => Some(InfoUndergradNoticePlugin::new()),
    InfoGradNotice(InfoGradNoticePlugin) => Some(InfoGradNoticePlugin::new()),
    InfoUndergradScholarship(InfoUndergradScholarshipPlugin) => Some(InfoUndergradScholarshipPlugin::new()),
    InfoGradScholarship(InfoGradScholarshipPlugin) => Some(InfoGradScholarshipPlugin::new()),
    InfoNews(InfoNewsPlugin) => Some(InfoNewsPlugin::new()),
    InfoCareerJob(InfoCareerJobPlugin) => Some(InfoCareerJobPlugin::new()),
    InfoCareerProgram(InfoCareerProgramPlugin) => Some(InfoCareerProgramPlugin::new()),
    InfoCareerIntern(InfoCareerInternPlugin) => Some(InfoCareerInternPlugin::new()),
    InfoCareerCompetition(InfoCareerCompetitionPlugin) => Some(InfoCareerCompetitionPlugin::new()),
    MediaNotice(MediaNoticePlugin) => Some(MediaNoticePlugin::new()),
    MediaJob(MediaJobPlugin) => Some(MediaJobPlugin::new()),
    MediaContest(MediaContestPlugin) => Some(MediaContestPlugin::new()),
    MediaNews(MediaNewsPlugin) => Some(MediaNewsPlugin::new()),
    MediaGradNotice(MediaGradNoticePlugin) => Some(MediaGradNoticePlugin::new()),
    MediaGradSchoolNotice(MediaGradSchoolNoticePlugin) => Some(MediaGradSchoolNoticePlugin::new()),
    EeUndergradNotice(EeUndergradNoticePlugin) => Some(EeUndergradNoticePlugin::new()),
    EeGradNotice(EeGradNoticePlugin) => Some(EeGradNoticePlugin::new()),
    EeJob(EeJobPlugin) => Some(EeJobPlugin::new()),
    BizUndergrad(BizUndergradPlugin) => Some(BizUndergradPlugin::new()),
    BizGrad(BizGradPlugin) => Some(BizGradPlugin::new()),
    BizMba(BizMbaPlugin) => Some(BizMbaPlugin::new()),
    BizCareer(BizCareerPlugin) => Some(BizCareerPlugin::new()),
    BizExchange(BizExchangePlugin) => Some(BizExchangePlugin::new()),
    BizAll(BizAllPlugin) => Some(BizAllPlugin::new()),
    MeGeneralNotice(MeGeneralNoticePlugin) => Some(MeGeneralNoticePlugin::new()),
    MeUndergradNotice(MeUndergradNoticePlugin) => Some(MeUndergradNoticePlugin::new()),
    MeGradNotice(MeGradNoticePlugin) => Some(MeGradNoticePlugin::new()),
    MeJob(MeJobPlugin) => Some(MeJobPlugin::new()),
}

pub(crate) async fn save_run<T: NoticePlugin>(
    core: Arc<NoticeCore>,
    base_out_dir: &Path,
    plugin: T,
) -> eyre::Result<()> {
    let site = core.run(&plugin).await?;
    let json = serde_json::to_string_pretty(&site)?;

    let out_dir = base_out_dir.join(T::IDENTIFIER);
    tokio::fs::create_dir_all(&out_dir).await?;

    let mut json_file = tokio::fs::File::create(out_dir.join("data.json")).await?;
    json_file.write_all(json.as_bytes()).await?;
    tracing::info!(plugin = T::IDENTIFIER, "Saved {} notices", site.items.len());
    Ok(())
}

fn setup_tracing() -> eyre::Result<()> {
    std::fs::create_dir_all("reports")?;
    let stdout_log = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_level(true)
        .with_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    let error_report_file = File::create("reports/error_report.json")
        .map_err(|e| eyre::eyre!("Failed to create error log file: {e}"))?;
    let error_report_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(Arc::new(error_report_file))
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(error_report_layer)
        .init();
    Ok(())
}
