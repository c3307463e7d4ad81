use clap::Parser;
use std::path::PathBuf;

/// Create, merge, and diff CycloneDX and SPDX SBOMs over a JSON-RPC stdio interface
#[derive(Parser, Debug)]
#[command(name = "sbom-kit")]
#[command(version)]
#[command(about = "Create, merge, and diff CycloneDX and SPDX SBOMs over JSON-RPC on stdio", long_about = None)]
pub struct Args {
    /// Path to a YAML config file (defaults to ./sbom-kit.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "sbom_kit=trace" (logs go to stderr)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Parses process arguments; `--help`/`--version` also come back as `Err`
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
