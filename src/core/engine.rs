use crate::core::{GenerationReport, Pipeline, ScannedFile};
use crate::utils::error::Result;

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub groups: usize,
    pub report: GenerationReport,
}

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        // 掃描
        println!("Scanning test files...");
        let scanned = self.pipeline.extract()?;
        for file in &scanned {
            println!("  Found in {}: {}", file.name, found_groups(file));
        }

        // 彙整
        let registry = self.pipeline.transform(&scanned)?;
        tracing::info!(
            "{} group(s) from {} file(s)",
            registry.len(),
            scanned.len()
        );

        // 產生
        let report = self.pipeline.load(&registry)?;
        let verb = if report.dry_run { "Would write" } else { "Wrote" };

        println!("\nGenerating runners...");
        for path in &report.runners {
            println!("  {} {}", verb, path.display());
        }

        println!("\nGenerating main...");
        println!("  {} {}", verb, report.aggregator.display());

        println!("\nDone!");

        Ok(RunSummary {
            files_scanned: scanned.len(),
            groups: registry.len(),
            report,
        })
    }
}

fn found_groups(file: &ScannedFile) -> String {
    if file.declarations.is_empty() {
        "(none)".to_string()
    } else {
        file.declarations.group_names().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregator::aggregate;
    use crate::core::{Declaration, GroupRegistry};
    use crate::utils::error::GenError;
    use std::path::PathBuf;

    struct FixedPipeline {
        files: Vec<ScannedFile>,
        fail_load: bool,
    }

    impl Pipeline for FixedPipeline {
        fn extract(&self) -> Result<Vec<ScannedFile>> {
            Ok(self.files.clone())
        }

        fn transform(&self, scanned: &[ScannedFile]) -> Result<GroupRegistry> {
            Ok(aggregate(scanned.iter().map(|f| &f.declarations)))
        }

        fn load(&self, registry: &GroupRegistry) -> Result<GenerationReport> {
            if self.fail_load {
                return Err(GenError::WriteError {
                    path: PathBuf::from("test/runners/all_tests.c"),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            Ok(GenerationReport {
                runners: registry
                    .group_names()
                    .map(|g| PathBuf::from(format!("{}.c", g)))
                    .collect(),
                aggregator: PathBuf::from("all_tests.c"),
                dry_run: false,
            })
        }
    }

    fn scanned(name: &str, declarations: Vec<Declaration>) -> ScannedFile {
        ScannedFile {
            name: name.to_string(),
            declarations: declarations.into_iter().collect(),
        }
    }

    #[test]
    fn test_run_summary() {
        let pipeline = FixedPipeline {
            files: vec![
                scanned("test_a.c", vec![Declaration::Group("Alpha".to_string())]),
                scanned("test_empty.c", vec![]),
            ],
            fail_load: false,
        };

        let summary = GeneratorEngine::new(pipeline).run().unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.groups, 1);
        assert_eq!(summary.report.runners, vec![PathBuf::from("Alpha.c")]);
    }

    #[test]
    fn test_load_failure_aborts_run() {
        let pipeline = FixedPipeline {
            files: vec![],
            fail_load: true,
        };

        let result = GeneratorEngine::new(pipeline).run();
        assert!(matches!(result, Err(GenError::WriteError { .. })));
    }

    #[test]
    fn test_found_groups_formatting() {
        let file = scanned(
            "test_cpu.c",
            vec![
                Declaration::Group("Cpu".to_string()),
                Declaration::Group("Alu".to_string()),
            ],
        );
        assert_eq!(found_groups(&file), "Cpu, Alu");
        assert_eq!(found_groups(&scanned("test_x.c", vec![])), "(none)");
    }
}
