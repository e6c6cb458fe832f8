use clap::Parser;
use unity_runners::utils::logger;
use unity_runners::{CliConfig, GeneratorEngine, LocalStorage, RunnerPipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.resolve()?;
    tracing::info!(
        "Scanning {} into {}",
        config.test_dir.display(),
        config.runners_dir.display()
    );

    let storage = LocalStorage::new();
    let pipeline = RunnerPipeline::new(storage.clone(), storage, config);
    let summary = GeneratorEngine::new(pipeline).run()?;

    tracing::info!(
        "Generated {} runner(s) from {} file(s)",
        summary.report.runners.len(),
        summary.files_scanned
    );

    Ok(())
}
