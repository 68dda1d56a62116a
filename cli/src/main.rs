//! cvkit CLI - resume PDF import/export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use cvkit::{export_pdf, import_file, LayoutEngine, PageGeometry, Resume};

#[derive(Parser)]
#[command(name = "cvkit")]
#[command(version)]
#[command(about = "Import resume PDFs to structured JSON and export them back", long_about = None)]
struct Cli {
    /// Input resume PDF
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume PDF into structured JSON
    Import {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render a resume JSON file to PDF
    Export {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the paginated layout of a resume JSON file as draw operations
    Layout {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show a summary of a resume PDF or JSON file
    Info {
        /// Input file (.pdf or .json)
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
        Some(Commands::Import {
            input,
            output,
            compact,
        }) => cmd_import(&input, output.as_deref(), compact),
        Some(Commands::Export { input, output }) => cmd_export(&input, output.as_deref()),
        Some(Commands::Layout { input, output }) => cmd_layout(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: import if input is provided
            if let Some(input) = cli.input {
                cmd_import(&input, cli.output.as_deref(), false)
            } else {
                println!("{}", "Usage: cvkit <FILE> [OUTPUT]".yellow());
                println!("       cvkit --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_resume(input: &Path) -> Result<Resume, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    Ok(Resume::from_json(&json)?)
}

fn cmd_import(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resume = import_file(input)?;

    let json = if compact {
        serde_json::to_string(&resume)?
    } else {
        resume.to_json()?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_export(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let resume = load_resume(input)?;
    let bytes = export_pdf(&resume)?;

    let path = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}.pdf", stem))
    });
    fs::write(&path, &bytes)?;

    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

fn cmd_layout(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let resume = load_resume(input)?;
    let doc = LayoutEngine::new(PageGeometry::default()).render(&resume);
    let json = serde_json::to_string_pretty(&doc)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let is_json = input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let resume = if is_json {
        load_resume(input)?
    } else {
        import_file(input)?
    };

    println!("{}", "Resume".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), resume.title);
    if !resume.personal_info.full_name.is_empty() {
        println!("{}: {}", "Name".bold(), resume.personal_info.full_name);
    }
    if !resume.personal_info.email.is_empty() {
        println!("{}: {}", "Email".bold(), resume.personal_info.email);
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Experience".bold(), resume.experience.len());
    println!("{}: {}", "Education".bold(), resume.education.len());
    println!("{}: {}", "Skills".bold(), resume.skills.len());
    println!("{}: {}", "Projects".bold(), resume.projects.len());
    println!(
        "{}: {}",
        "Certifications".bold(),
        resume.certifications.len()
    );
    println!("{}: {}", "Languages".bold(), resume.languages.len());
    println!("{}: {}", "Custom".bold(), resume.custom_sections.len());

    let doc = LayoutEngine::new(PageGeometry::default()).render(&resume);
    println!();
    println!("{}: {}", "Pages when exported".bold(), doc.page_count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "cvkit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume PDF import/export tool");
    println!();
    println!("License: MIT");
}
