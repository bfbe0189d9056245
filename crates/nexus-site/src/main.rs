//! nexus-site CLI - build and preview the nexus-router marketing site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nexus_site_schema::SiteFormat;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod project;

use project::Project;

#[derive(Parser)]
#[command(name = "nexus-site")]
#[command(about = "Build, validate and preview the nexus-router marketing site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to nexus-site.toml project file
    #[arg(short, long, default_value = "nexus-site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter site file and project file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,

        /// Site file format (yaml, json or toml)
        #[arg(short, long, default_value = "yaml")]
        format: SiteFormat,
    },

    /// Check a site file against the schema
    Validate {
        /// Site file (defaults to the one named in the project file)
        file: Option<PathBuf>,
    },

    /// Build the static site
    Build {
        /// Output directory (defaults to project file or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Preview the built site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to the build output)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Print the normalized site file
    Export {
        /// Output format (yaml, json or toml)
        #[arg(short, long, default_value = "json")]
        format: SiteFormat,

        /// Site file (defaults to the one named in the project file)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let project = Project::load(&cli.config)?;

    match cli.command {
        Commands::Init { yes, format } => {
            commands::init::run(&project.root, yes, format)?;
        }
        Commands::Validate { file } => {
            commands::validate::run(&file.unwrap_or_else(|| project.site_file()))?;
        }
        Commands::Build { output, no_minify } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(&project, output, minify).await?;
        }
        Commands::Serve { port, dir, no_open } => {
            commands::serve::run(commands::serve::Preview {
                dir: dir.unwrap_or_else(|| project.output_dir()),
                port,
                base_url: project.settings.build.base_url.clone(),
                open: !no_open,
            })
            .await?;
        }
        Commands::Export { format, file } => {
            commands::export::run(&file.unwrap_or_else(|| project.site_file()), format)?;
        }
    }

    Ok(())
}
