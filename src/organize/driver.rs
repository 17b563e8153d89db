//! The organizer run loop.

use std::path::{Path, PathBuf};

use crate::api::CatalogSource;
use crate::catalog::IdentifierDirectory;
use crate::config::{Config, NamingConvention, SourceConfig};
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, game_folder, relocate};
use crate::naming::{extract_capture_name, resolve_platform_name, NameMapping};
use crate::organize::report::{RunReport, SkipReason};
use crate::organize::scan::scan_source;
use crate::output::create_item_bar;

/// Sorts every configured source into per-game folders.
pub struct Organizer<S> {
    config: Config,
    destination: PathBuf,
    directory: IdentifierDirectory<S>,
    mapping: NameMapping,
}

impl<S: CatalogSource> Organizer<S> {
    /// Create an organizer. The configuration must name a destination.
    ///
    /// In dry-run mode the app id cache is not written either.
    pub fn new(
        config: Config,
        mut directory: IdentifierDirectory<S>,
        mapping: NameMapping,
    ) -> Result<Self> {
        let destination = config.destination()?.to_path_buf();
        if config.options.dry_run {
            directory.set_persist(false);
        }
        Ok(Self {
            config,
            destination,
            directory,
            mapping,
        })
    }

    /// Process every source in configuration order.
    ///
    /// Per-file problems are recorded in the report. Only catalog and cache
    /// failures abort the run.
    pub async fn run(&mut self) -> Result<RunReport> {
        let mut report = RunReport::default();

        if self.config.options.refresh_catalog && self.config.has_platform_sources() {
            self.directory.refresh().await?;
        }

        let sources = self.config.sources.clone();
        for source in &sources {
            self.process_source(source, &mut report).await?;
        }

        report.catalog_refreshes = self.directory.refresh_count();
        Ok(report)
    }

    async fn process_source(&mut self, source: &SourceConfig, report: &mut RunReport) -> Result<()> {
        let files = match scan_source(&source.path, &self.config.options.extensions) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Skipping source {}: {}", source.path.display(), e);
                report.record_skipped_source(source.path.clone(), e.to_string());
                return Ok(());
            }
        };

        tracing::info!(
            "Organizing {} {} screenshot(s) from {}",
            files.len(),
            source.convention,
            source.path.display()
        );

        let bar = self
            .config
            .options
            .show_progress
            .then(|| create_item_bar(files.len() as u64, &source.convention.to_string()));

        for file in files {
            self.process_file(&file, source.convention, report).await?;
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        Ok(())
    }

    async fn process_file(
        &mut self,
        file: &Path,
        convention: NamingConvention,
        report: &mut RunReport,
    ) -> Result<()> {
        let raw = match self.raw_name(file, convention).await {
            Ok(raw) => raw,
            Err(e) if e.is_skippable() => {
                tracing::warn!("Skipping {}: {}", file.display(), e);
                report.record_skip(file.to_path_buf(), SkipReason::from_error(&e));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let game = self.mapping.resolve(&raw);
        if game.is_empty() {
            tracing::warn!("Skipping {}: '{}' maps to an empty name", file.display(), raw);
            report.record_skip(file.to_path_buf(), SkipReason::NoMatch);
            return Ok(());
        }
        if game != raw {
            tracing::debug!("'{}' -> '{}'", raw, game);
        }

        let folder = game_folder(&self.destination, &game);
        let mode = self.config.options.mode;

        if self.config.options.dry_run {
            tracing::info!("Would {} {} -> {}", mode, file.display(), folder.display());
            report.record_planned(file.to_path_buf(), folder);
            return Ok(());
        }

        match ensure_dir(&folder).and_then(|()| relocate(file, &folder, mode)) {
            Ok(target) => {
                tracing::info!("{} {} -> {}", mode, file.display(), target.display());
                report.record_relocated(mode);
            }
            Err(e) => {
                tracing::warn!("Leaving {} in place: {}", file.display(), e);
                report.record_skip(
                    file.to_path_buf(),
                    SkipReason::RelocationFailed(relocation_message(&e)),
                );
            }
        }

        Ok(())
    }

    async fn raw_name(&mut self, file: &Path, convention: NamingConvention) -> Result<String> {
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::NoMatch(file.display().to_string()))?;

        match convention {
            NamingConvention::Capture => {
                let name = extract_capture_name(file_name)?;
                if let Some(date) = name.captured_on {
                    tracing::debug!("{} captured on {}", name.game, date);
                }
                Ok(name.game)
            }
            NamingConvention::Platform => {
                resolve_platform_name(&mut self.directory, file_name).await
            }
        }
    }
}

fn relocation_message(err: &Error) -> String {
    match err {
        Error::Relocation { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeCatalog;
    use crate::api::CatalogApp;
    use crate::catalog::{write_cache, IdTable};
    use crate::config::RelocationMode;
    use std::fs;

    struct Fixture {
        root: tempfile::TempDir,
        source: FakeCatalog,
    }

    impl Fixture {
        fn new(remote: Vec<CatalogApp>) -> Self {
            let root = tempfile::tempdir().unwrap();
            fs::create_dir_all(root.path().join("Captures")).unwrap();
            fs::create_dir_all(root.path().join("Steam")).unwrap();
            Self {
                root,
                source: FakeCatalog::new(remote),
            }
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.root.path().join(rel)
        }

        fn touch(&self, rel: &str) -> PathBuf {
            let path = self.path(rel);
            fs::write(&path, b"image").unwrap();
            path
        }

        fn cache(&self, entries: &[(&str, &str)]) {
            let table: IdTable = entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            write_cache(&self.path("app_ids.json"), &table).unwrap();
        }

        fn config(&self) -> Config {
            let mut config = Config::default();
            config.options.destination = Some(self.path("Games"));
            config.options.show_progress = false;
            config.sources = vec![
                SourceConfig {
                    path: self.path("Captures"),
                    convention: NamingConvention::Capture,
                },
                SourceConfig {
                    path: self.path("Steam"),
                    convention: NamingConvention::Platform,
                },
            ];
            config
        }

        fn organizer(&self, config: Config, mapping: NameMapping) -> Organizer<&FakeCatalog> {
            let directory = IdentifierDirectory::new(&self.source, self.path("app_ids.json"));
            Organizer::new(config, directory, mapping).unwrap()
        }
    }

    #[tokio::test]
    async fn test_capture_file_lands_in_game_folder() {
        let fx = Fixture::new(vec![]);
        let file = fx.touch("Captures/Hollow Knight 7_4_2024_10-15-00.png");

        let report = fx
            .organizer(fx.config(), NameMapping::empty())
            .run()
            .await
            .unwrap();

        assert_eq!(report.moved, 1);
        assert!(!file.exists());
        assert!(fx
            .path("Games/Hollow Knight/Hollow Knight 7_4_2024_10-15-00.png")
            .exists());
        // No platform files, so the catalog is never touched
        assert_eq!(fx.source.calls(), 0);
        assert!(!fx.path("app_ids.json").exists());
    }

    #[tokio::test]
    async fn test_platform_file_resolves_from_cache() {
        let fx = Fixture::new(vec![]);
        fx.cache(&[("440", "Team Fortress 2")]);
        fx.touch("Steam/440_20240704123456.jpg");

        let report = fx
            .organizer(fx.config(), NameMapping::empty())
            .run()
            .await
            .unwrap();

        assert_eq!(report.moved, 1);
        assert_eq!(report.catalog_refreshes, 0);
        assert!(fx
            .path("Games/Team Fortress 2/440_20240704123456.jpg")
            .exists());
    }

    #[tokio::test]
    async fn test_unknown_id_refreshes_once() {
        let fx = Fixture::new(vec![
            CatalogApp::new(440, "Team Fortress 2"),
            CatalogApp::new(123, "New Game"),
        ]);
        fx.cache(&[("440", "Team Fortress 2")]);
        fx.touch("Steam/123_x.png");

        let report = fx
            .organizer(fx.config(), NameMapping::empty())
            .run()
            .await
            .unwrap();

        assert_eq!(fx.source.calls(), 1);
        assert_eq!(report.catalog_refreshes, 1);
        assert!(fx.path("Games/New Game").is_dir());
        assert!(fx.path("Games/New Game/123_x.png").exists());
    }

    #[tokio::test]
    async fn test_mapping_renames_folder() {
        let fx = Fixture::new(vec![]);
        fx.cache(&[("870780", "Control 0.0.344.1879 (FINAL_release)")]);
        fx.touch("Steam/870780_20200801093000_1.png");

        let mapping: NameMapping = [(
            "Control 0.0.344.1879 (FINAL_release)".to_string(),
            "Control".to_string(),
        )]
        .into_iter()
        .collect();

        fx.organizer(fx.config(), mapping).run().await.unwrap();

        assert!(fx.path("Games/Control/870780_20200801093000_1.png").exists());
        assert!(!fx.path("Games/Control 0.0.344.1879 (FINAL_release)").exists());
    }

    #[tokio::test]
    async fn test_unresolved_and_unmatched_files_are_skipped() {
        let fx = Fixture::new(vec![CatalogApp::new(440, "Team Fortress 2")]);
        fx.cache(&[("440", "Team Fortress 2")]);
        let unknown = fx.touch("Steam/999_1.png");
        let odd = fx.touch("Captures/screenshot.png");
        let ignored = fx.touch("Captures/Celeste 1_1_2020.txt");
        fx.touch("Steam/440_1.png");

        let report = fx
            .organizer(fx.config(), NameMapping::empty())
            .run()
            .await
            .unwrap();

        assert_eq!(report.moved, 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].path, odd);
        assert_eq!(report.skipped[0].reason, SkipReason::NoMatch);
        assert_eq!(report.skipped[1].path, unknown);
        assert_eq!(
            report.skipped[1].reason,
            SkipReason::UnknownAppId("999".to_string())
        );
        assert!(unknown.exists() && odd.exists() && ignored.exists());
    }

    #[tokio::test]
    async fn test_relocation_failure_continues() {
        let fx = Fixture::new(vec![]);
        fs::create_dir_all(fx.path("Games")).unwrap();
        // A plain file where the game folder should go
        fs::write(fx.path("Games/Blocked"), b"").unwrap();
        let blocked = fx.touch("Captures/Blocked 1_1_2020.png");
        fx.touch("Captures/Celeste 1_1_2020.png");

        let report = fx
            .organizer(fx.config(), NameMapping::empty())
            .run()
            .await
            .unwrap();

        assert_eq!(report.moved, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, blocked);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::RelocationFailed(_)
        ));
        assert!(blocked.exists());
        assert!(fx.path("Games/Celeste/Celeste 1_1_2020.png").exists());
    }

    #[tokio::test]
    async fn test_copy_mode_keeps_sources() {
        let fx = Fixture::new(vec![]);
        let file = fx.touch("Captures/Celeste 1_1_2020.png");

        let mut config = fx.config();
        config.options.mode = RelocationMode::Copy;
        let report = fx.organizer(config, NameMapping::empty()).run().await.unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(report.moved, 0);
        assert!(file.exists());
        assert!(fx.path("Games/Celeste/Celeste 1_1_2020.png").exists());
    }

    #[tokio::test]
    async fn test_dry_run_touches_nothing() {
        let fx = Fixture::new(vec![]);
        let file = fx.touch("Captures/Celeste 1_1_2020.png");

        let mut config = fx.config();
        config.options.dry_run = true;
        let report = fx.organizer(config, NameMapping::empty()).run().await.unwrap();

        assert_eq!(report.planned.len(), 1);
        assert_eq!(report.planned[0].to, fx.path("Games/Celeste"));
        assert_eq!(report.total_relocated(), 0);
        assert!(file.exists());
        assert!(!fx.path("Games").exists());
    }

    #[tokio::test]
    async fn test_dry_run_leaves_cache_alone() {
        let fx = Fixture::new(vec![CatalogApp::new(123, "New Game")]);
        fx.cache(&[("440", "Team Fortress 2")]);
        let before = fs::read_to_string(fx.path("app_ids.json")).unwrap();
        let file = fx.touch("Steam/123_x.png");

        let mut config = fx.config();
        config.options.dry_run = true;
        let report = fx.organizer(config, NameMapping::empty()).run().await.unwrap();

        assert_eq!(fx.source.calls(), 1);
        assert_eq!(report.planned.len(), 1);
        assert_eq!(report.planned[0].to, fx.path("Games/New Game"));
        assert_eq!(fs::read_to_string(fx.path("app_ids.json")).unwrap(), before);
        assert!(file.exists());
    }

    #[tokio::test]
    async fn test_missing_source_is_reported() {
        let fx = Fixture::new(vec![]);
        fx.touch("Captures/Celeste 1_1_2020.png");

        let mut config = fx.config();
        config.sources.insert(
            0,
            SourceConfig {
                path: fx.path("Gone"),
                convention: NamingConvention::Capture,
            },
        );
        let report = fx.organizer(config, NameMapping::empty()).run().await.unwrap();

        assert_eq!(report.skipped_sources.len(), 1);
        assert_eq!(report.skipped_sources[0].path, fx.path("Gone"));
        assert_eq!(report.moved, 1);
    }

    #[tokio::test]
    async fn test_forced_refresh() {
        let fx = Fixture::new(vec![CatalogApp::new(440, "Team Fortress 2")]);
        fx.cache(&[("440", "Old Name")]);
        fx.touch("Steam/440_1.png");

        let mut config = fx.config();
        config.options.refresh_catalog = true;
        fx.organizer(config, NameMapping::empty()).run().await.unwrap();

        assert_eq!(fx.source.calls(), 1);
        assert!(fx.path("Games/Team Fortress 2/440_1.png").exists());
    }

    #[tokio::test]
    async fn test_catalog_failure_aborts() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("Steam")).unwrap();
        fs::write(root.path().join("Steam/440_1.png"), b"").unwrap();

        let mut config = Config::default();
        config.options.destination = Some(root.path().join("Games"));
        config.options.show_progress = false;
        config.sources = vec![SourceConfig {
            path: root.path().join("Steam"),
            convention: NamingConvention::Platform,
        }];

        let source = FakeCatalog::failing();
        let directory = IdentifierDirectory::new(&source, root.path().join("app_ids.json"));
        let mut organizer = Organizer::new(config, directory, NameMapping::empty()).unwrap();

        assert!(matches!(organizer.run().await, Err(Error::Catalog(_))));
        assert!(root.path().join("Steam/440_1.png").exists());
    }
}
