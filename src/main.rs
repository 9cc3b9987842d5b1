use anyhow::{Context, Result};
use patent_report_lib::infrastructure::{init_logging_with_config, log_system_info};
use patent_report_lib::{ConfigManager, GenerateReportUseCase};

fn main() -> Result<()> {
    let config = ConfigManager::new()
        .load_config()
        .context("Failed to load configuration")?;

    init_logging_with_config(&config.logging).context("Failed to initialize logging")?;
    log_system_info();

    let use_case = GenerateReportUseCase::new(config).context("Invalid report configuration")?;
    let summary = use_case
        .execute()
        .context("Failed to generate patent report")?;

    println!(
        "Arquivo {} gerado com sucesso!",
        summary.output_file.display()
    );
    Ok(())
}
