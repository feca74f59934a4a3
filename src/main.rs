use amalgamate::core::AmalgamReport;
use amalgamate::utils::{logger, validation::Validate};
use amalgamate::{AmalgamEngine, AmalgamError, AmalgamManifest, AmalgamPipeline, CliConfig, LocalStorage};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting amalgamate");
    tracing::debug!("CLI config: {:?}", config);

    let manifest = match AmalgamManifest::builtin().and_then(|m| m.validate().map(|_| m)) {
        Ok(manifest) => manifest,
        Err(e) => fail(&e),
    };
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let storage = LocalStorage::new(config.directory.clone());
    let pipeline = AmalgamPipeline::new(storage, manifest);
    let engine = AmalgamEngine::new(pipeline);

    if config.dry_run {
        tracing::info!("DRY RUN MODE - the destination will not be written");
        let output = engine.plan().unwrap_or_else(|e| fail(&e));
        if config.json {
            println!("{}", serde_json::to_string_pretty(&output.report)?);
        } else {
            print_report(&output.report);
        }
        return Ok(());
    }

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Amalgamation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &AmalgamError) -> ! {
    tracing::error!(
        "❌ Amalgamation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

fn print_report(report: &AmalgamReport) {
    println!("Preamble: {} lines", report.preamble_lines);
    for fragment in &report.fragments {
        println!(
            "  {:<20} {:>6} read {:>6} kept",
            fragment.name, fragment.lines_read, fragment.lines_kept
        );
    }
    println!("Output: {} lines", report.output_lines);
}
