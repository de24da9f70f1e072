macro_rules! register_plugins {
    ($($id:ident($plugin:ty) => $initializer:expr),+ $(,)?) => {
        enum NoticePluginRegistry {
            $($id($plugin),)+
        }

        impl NoticePluginRegistry {
            async fn save_run(
                self,
                core: Arc<NoticeCore>,
                out_dir: &Path,
            ) -> eyre::Result<()> {
                match self {
                    $(Self::$id(plugin) => crate::save_run(core, out_dir, plugin).await),+
                }
            }
        }

        fn construct_tasks(
            core: Arc<NoticeCore>,
            out_dir: &Path,
            options: KunoticeOptions,
        ) -> Vec<impl std::future::Future<Output = eyre::Result<()>>> {
            let include: Option<HashSet<String>> = options
                .include
                .is_empty()
                .not()
                .then_some(HashSet::from_iter(options.include));
            let exclude: Option<HashSet<String>> = options
                .exclude
                .is_empty()
                .not()
                .then_some(HashSet::from_iter(options.exclude));
            let selected = |id: &str| match (&include, &exclude) {
                (Some(include), _) => include.contains(id),
                (None, Some(exclude)) => exclude.contains(id).not(),
                (None, None) => true,
            };

            // 초기화 값이 `None`이면 (인증 정보 없음 등) 등록하지 않음
            let tasks = [
                $((
                    <$plugin>::IDENTIFIER,
                    selected(<$plugin>::IDENTIFIER)
                        .then(|| $initializer)
                        .flatten()
                        .map(NoticePluginRegistry::$id),
                ),)+
            ];

            tasks
                .into_iter()
                .filter_map(|(id, task)| {
                    tracing::debug!(plugin = id, registered = task.is_some());
                    task.map(|task| task.save_run(core.clone(), out_dir))
                })
                .collect()
        }
    };
}

pub(crate) use register_plugins;
