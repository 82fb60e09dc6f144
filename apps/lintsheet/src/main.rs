//! lintsheet CLI binary entry point.
//! Resolves settings, runs the pipeline, and prints the completion summary.

use clap::Parser;
use lintsheet::cli::{Cli, Commands};
use lintsheet::config::{self, Overrides};
use lintsheet::diagram::DiagramCommand;
use lintsheet::output::{self, OUTPUT_MODES};
use lintsheet::runner::LinterCommand;
use lintsheet::{driver, progress, utils};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Run {
            root,
            lint_output_dir,
            diagram_output_dir,
            report_filename,
            linter,
            diagram_tool,
            output,
        } => {
            let settings = config::resolve_effective(&Overrides {
                root,
                lint_output_dir,
                diagram_output_dir,
                report_filename,
                linter,
                diagram_tool,
                output,
            });
            if !OUTPUT_MODES.contains(&settings.output.as_str()) {
                eprintln!(
                    "{} unknown output mode '{}' (expected human|json)",
                    utils::error_prefix(),
                    settings.output
                );
                std::process::exit(2);
            }
            if settings.output != "json" && config::config_path(&settings.root).is_none() {
                eprintln!(
                    "{} No lintsheet.toml found; using defaults.",
                    utils::note_prefix()
                );
            }

            let show_progress = progress::should_show(&settings.output);
            let linter = LinterCommand::new(settings.linter.clone());
            let diagrams = DiagramCommand::new(settings.diagram_tool.clone(), show_progress);
            match driver::run(&settings, &linter, &diagrams, show_progress) {
                Ok(summary) => output::print_run(&summary, &settings.output),
                Err(e) => {
                    tracing::error!("run aborted: {e}");
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}
