use crate::config::SOURCE_PATTERN;
use crate::core::aggregator::aggregate;
use crate::core::generator::generate_artifacts;
use crate::core::scanner::{scan_source, RegexScanner};
use crate::core::{
    ArtifactKind, ArtifactSink, ConfigProvider, DeclarationExtractor, GenerationReport,
    GroupRegistry, Pipeline, ScannedFile, SourceFile, SourceStore,
};
use crate::utils::error::Result;

/// Scan, aggregate, generate: the whole run over one store, one sink and
/// one config. The default extractor is [`RegexScanner`].
pub struct RunnerPipeline<S, K, C, E = RegexScanner>
where
    S: SourceStore,
    K: ArtifactSink,
    C: ConfigProvider,
    E: DeclarationExtractor,
{
    store: S,
    sink: K,
    config: C,
    extractor: E,
}

impl<S, K, C> RunnerPipeline<S, K, C>
where
    S: SourceStore,
    K: ArtifactSink,
    C: ConfigProvider,
{
    pub fn new(store: S, sink: K, config: C) -> Self {
        Self::with_extractor(store, sink, config, RegexScanner::new())
    }
}

impl<S, K, C, E> RunnerPipeline<S, K, C, E>
where
    S: SourceStore,
    K: ArtifactSink,
    C: ConfigProvider,
    E: DeclarationExtractor,
{
    pub fn with_extractor(store: S, sink: K, config: C, extractor: E) -> Self {
        Self {
            store,
            sink,
            config,
            extractor,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S, K, C, E> Pipeline for RunnerPipeline<S, K, C, E>
where
    S: SourceStore,
    K: ArtifactSink,
    C: ConfigProvider,
    E: DeclarationExtractor,
{
    fn extract(&self) -> Result<Vec<ScannedFile>> {
        let test_dir = self.config.test_dir();
        tracing::debug!("Listing {} in {}", SOURCE_PATTERN, test_dir.display());

        let paths = self.store.list_files(test_dir, SOURCE_PATTERN)?;
        let mut scanned = Vec::with_capacity(paths.len());
        for path in paths {
            let text = self.store.read_text(&path)?;
            let source = SourceFile::new(path, text);
            scanned.push(scan_source(&self.extractor, &source));
        }

        Ok(scanned)
    }

    fn transform(&self, scanned: &[ScannedFile]) -> Result<GroupRegistry> {
        let registry = aggregate(scanned.iter().map(|file| &file.declarations));
        tracing::debug!("Aggregated {} group(s)", registry.len());
        Ok(registry)
    }

    fn load(&self, registry: &GroupRegistry) -> Result<GenerationReport> {
        let runners_dir = self.config.runners_dir();
        let dry_run = self.config.dry_run();
        let artifacts = generate_artifacts(registry, runners_dir);

        if !dry_run {
            self.sink.create_dir_all(runners_dir)?;
        }

        let mut report = GenerationReport {
            dry_run,
            ..GenerationReport::default()
        };
        for artifact in artifacts {
            if dry_run {
                tracing::debug!("Dry run, skipping {}", artifact.path.display());
            } else {
                tracing::debug!(
                    "Writing {} ({} bytes)",
                    artifact.path.display(),
                    artifact.contents.len()
                );
                self.sink.write_text(&artifact.path, &artifact.contents)?;
            }

            match artifact.kind {
                ArtifactKind::Runner { .. } => report.runners.push(artifact.path),
                ArtifactKind::Aggregator => report.aggregator = artifact.path,
            }
        }

        Ok(report)
    }
}
