mod defaults;
mod output;
mod parser;
mod profile;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use defaults::ProfileDefaults;
use profile::ProfileRecord;

#[derive(Parser)]
#[command(name = "resume_extract", about = "Markdown site content to JSON Resume converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Inputs {
    /// Directory holding about.md, projects.md, contact.md and other.md
    #[arg(short, long, default_value = "content")]
    content: PathBuf,
    /// Site configuration file (hugo.toml)
    #[arg(short, long, default_value = "hugo.toml")]
    site_config: PathBuf,
    /// TOML file overriding the built-in profile defaults
    #[arg(short, long)]
    defaults: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the content directory and write the resume JSON
    Build {
        #[command(flatten)]
        inputs: Inputs,
        /// Output JSON path
        #[arg(short, long, default_value = "build/resume.json")]
        output: PathBuf,
    },
    /// Parse the content directory and print the resume JSON
    Show {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Summarize a previously written resume JSON
    Stats {
        /// Resume JSON to read
        #[arg(short, long, default_value = "build/resume.json")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { inputs, output } => {
            println!("Converting Markdown to JSON Resume format...");
            let record = parse(&inputs)?;
            output::write_json(&record, &output)?;
            println!("Resume JSON saved to: {}", output.display());
            Summary::of(&record).print();
            Ok(())
        }
        Commands::Show { inputs } => {
            let record = parse(&inputs)?;
            println!("{}", output::to_json(&record)?);
            Ok(())
        }
        Commands::Stats { input } => {
            let record = output::read_json(&input)?;
            Summary::of(&record).print();
            Ok(())
        }
    }
}

fn parse(inputs: &Inputs) -> Result<ProfileRecord> {
    let defaults = ProfileDefaults::load(inputs.defaults.as_deref())?;
    Ok(parser::parse_content(&inputs.content, &inputs.site_config, &defaults))
}

struct Summary<'a> {
    name: &'a str,
    skills: usize,
    work: usize,
    education: usize,
    projects: usize,
}

impl<'a> Summary<'a> {
    fn of(record: &'a ProfileRecord) -> Self {
        Summary {
            name: &record.basics.name,
            skills: record.skills.len(),
            work: record.work.len(),
            education: record.education.len(),
            projects: record.projects.len(),
        }
    }

    fn print(&self) {
        println!("  - Basics: {}", self.name);
        println!("  - Skills: {} categories", self.skills);
        println!("  - Work Experience: {} positions", self.work);
        println!("  - Education: {} degrees", self.education);
        println!("  - Projects: {} projects", self.projects);
    }
}
