//! CLI command definitions

use clap::Parser;
use fixcore_domain::{LaunchArgs, PangenomeTool};
use std::path::PathBuf;

/// CLI arguments for fixcore
#[derive(Parser, Debug)]
#[command(name = "fixcore")]
#[command(author, version, about = "Run the FixCore snakemake workflow")]
#[command(long_about = r#"
FixCore checks its inputs and environment, then launches the snakemake
workflow that fixes pangenome based alignments.

Provide exactly one input:
  --genes_dir       gene alignments, used as-is
  --assemblies_dir  genome assemblies, run through --pangenome-tool first

Configuration files are loaded from (in priority order):
1. FIXCORE_* environment variables
2. --config <path>     Explicit config file
3. ./fixcore.toml      Project-level config
4. ~/.config/fixcore/config.toml   Global config

Example:
  fixcore -g alignments/ -o results -p run1
  fixcore -a assemblies/ -t panaroo --threshold 0.95 --use-apptainer
"#)]
pub struct Cli {
    /// Number of cores to use for the workflow
    #[arg(short, long, default_value_t = 4)]
    pub cores: u32,

    /// Directory containing the gene alignments to process
    #[arg(short = 'g', long = "genes_dir", value_name = "DIR")]
    pub genes_dir: Option<PathBuf>,

    /// Directory containing the assemblies to process. Only if no genes_dir is provided
    #[arg(short = 'a', long = "assemblies_dir", value_name = "DIR")]
    pub assemblies_dir: Option<PathBuf>,

    /// Prefix for the output files
    #[arg(short, long, default_value = "fixcore_job")]
    pub prefix: String,

    /// Output directory for the results
    #[arg(short, long, default_value = "bdpp_output")]
    pub outdir: PathBuf,

    /// Pangenome analysis tool to use (none, roary, panaroo, panacota). Required with assemblies_dir
    #[arg(short = 't', long = "pangenome-tool", value_name = "TOOL", default_value = "none")]
    pub pangenome_tool: PangenomeTool,

    /// Threshold for core gene definition, also accepted as --th (not -th).
    /// Only if pangenome-tool is not 'none'
    #[arg(long, visible_alias = "th", default_value_t = 0.9, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Use Apptainer containers for the workflow
    #[arg(short = 'd', long = "use-apptainer")]
    pub use_apptainer: bool,

    /// Directory holding the workflow definitions (defaults to the executable's directory)
    #[arg(long, value_name = "DIR")]
    pub workflow_dir: Option<PathBuf>,

    /// Check everything and print the command without launching it
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Raw launch arguments for validation
    pub fn launch_args(&self) -> LaunchArgs {
        LaunchArgs {
            cores: self.cores,
            genes_dir: self.genes_dir.clone(),
            assemblies_dir: self.assemblies_dir.clone(),
            prefix: self.prefix.clone(),
            outdir: self.outdir.clone(),
            pangenome_tool: self.pangenome_tool,
            threshold: self.threshold,
            use_container: self.use_apptainer,
        }
    }
}
