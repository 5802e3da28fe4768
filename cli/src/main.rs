//! flashpost CLI - OrcaSlicer to Orca-FlashForge G-code restructuring tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use flashpost::{
    restore_from_backup, restructure_file, restructure_str, BackupStatus, JsonFormat,
    RenderOptions, RestructureOptions, RestructureReport, RestructureStats,
};

#[derive(Parser)]
#[command(name = "flashpost")]
#[command(version)]
#[command(about = "Restructure OrcaSlicer G-code for FlashForge printers", long_about = None)]
struct Cli {
    /// Input G-code file (restructured in place with defaults)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Restructure a G-code file (explicit form of the bare invocation)
    Convert {
        /// Input G-code file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Skip spaghetti detector command injection
        #[arg(long)]
        no_detector: bool,

        /// Skip the .backup copy
        #[arg(long)]
        no_backup: bool,

        /// Write to a different path instead of rewriting in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show marker and section information for a G-code file
    Info {
        /// Input G-code file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Emit the section statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the partitioned document as JSON
    Json {
        /// Input G-code file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Restore a file from its .backup copy
    Restore {
        /// File to restore (reads <FILE>.backup)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            no_detector,
            no_backup,
            output,
        }) => cmd_convert(&input, no_detector, no_backup, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Json {
            input,
            compact,
            output,
        }) => cmd_json(&input, compact, output.as_deref()),
        Some(Commands::Restore { input }) => cmd_restore(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match cli.input {
            // Default behavior: in-place restructure with defaults, as
            // slicers invoke post-processing scripts
            Some(input) => cmd_restructure_in_place(&input, &RestructureOptions::new()),
            None => {
                println!("{}", "Usage: flashpost <FILE>".yellow());
                println!("       flashpost --help for more information");
                std::process::exit(1);
            }
        },
    };

    // Slicer post-processing hooks capture stdout only, so errors go there
    if let Err(e) = result {
        println!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_restructure_in_place(
    input: &Path,
    options: &RestructureOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} Converting G-code: {}",
        "[flashpost]".cyan(),
        input.display()
    );

    let report = restructure_file(input, options)?;
    print_report(input, &report);

    Ok(())
}

fn print_report(input: &Path, report: &RestructureReport) {
    match &report.backup {
        BackupStatus::Created(path) => {
            println!("{} Backup created: {}", "[flashpost]".cyan(), path.display());
        }
        BackupStatus::Failed(reason) => {
            println!(
                "{} {} Could not create backup: {}",
                "[flashpost]".cyan(),
                "Warning:".yellow(),
                reason
            );
        }
        BackupStatus::Disabled => {}
    }

    println!(
        "{} {} Restructured {} ({} lines, {} bytes)",
        "[flashpost]".cyan(),
        "Done!".green().bold(),
        input.display(),
        report.stats.total_lines,
        report.bytes_written
    );

    if report.stats.injected_commands > 0 {
        println!(
            "{} Spaghetti detector commands added: {}",
            "[flashpost]".cyan(),
            report.stats.injected_commands
        );
    }
}

fn cmd_convert(
    input: &Path,
    no_detector: bool,
    no_backup: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let render_options = RenderOptions::new().with_spaghetti_detector(!no_detector);

    // Writing elsewhere leaves the input untouched, so no backup is needed
    if let Some(out_path) = output {
        let pb = progress_bar(3);

        pb.set_message("Reading G-code...");
        let content = fs::read_to_string(input)?;
        pb.inc(1);

        pb.set_message("Restructuring sections...");
        let restructured = restructure_str(&content, &render_options)?;
        pb.inc(1);

        pb.set_message("Writing output...");
        fs::write(out_path, &restructured)?;
        pb.inc(1);

        pb.finish_with_message("Done!");
        println!("{} {}", "Saved to".green(), out_path.display());
        return Ok(());
    }

    let options = RestructureOptions::new()
        .with_render_options(render_options)
        .with_backup(!no_backup);
    cmd_restructure_in_place(input, &options)
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let format = flashpost::scan_str(&content);
    let doc = flashpost::parse_str(&content);
    let stats = RestructureStats::from_document(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "G-code Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!(
        "{}: {}",
        "Header block".bold(),
        yes_no(format.has_header_block)
    );
    println!(
        "{}: {}",
        "Config block".bold(),
        yes_no(format.has_config_block)
    );
    println!(
        "{}: {}",
        "Thumbnail block".bold(),
        yes_no(format.has_thumbnail_block)
    );

    println!();
    println!("{}", "Section Line Counts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Header".bold(), stats.header_lines);
    println!("{}: {}", "Metadata".bold(), stats.metadata_lines);
    println!("{}: {}", "Config".bold(), stats.config_lines);
    println!("{}: {}", "Thumbnail".bold(), stats.thumbnail_lines);
    println!("{}: {}", "Executable".bold(), stats.executable_lines);
    println!("{}: {}", "Total".bold(), stats.total_lines);

    Ok(())
}

fn cmd_json(
    input: &Path,
    compact: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let doc = flashpost::parse_str(&content);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = flashpost::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_restore(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = restore_from_backup(input)?;
    println!(
        "{} Restored {} from backup ({} bytes)",
        "[flashpost]".cyan(),
        input.display(),
        bytes
    );
    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "flashpost".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("OrcaSlicer to Orca-FlashForge G-code restructuring tool");
    println!();
    println!("License: MIT");
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn progress_bar(steps: u64) -> ProgressBar {
    let pb = ProgressBar::new(steps);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}
