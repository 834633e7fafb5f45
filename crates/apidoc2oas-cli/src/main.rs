use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use apidoc2oas_core::Converter;
use apidoc2oas_core::config::{self, CONFIG_FILE_NAME, ConverterConfig};
use apidoc2oas_core::document::OpenApiDocument;

#[derive(Parser)]
#[command(
    name = "apidoc2oas",
    about = "Convert apiDoc endpoint data into an OpenAPI document",
    version
)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert apiDoc data (api_data.json or api_data.js) to OpenAPI
    Convert {
        /// Input file, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        #[command(flatten)]
        overrides: MetadataOverrides,
    },

    /// Check that apiDoc data loads and converts
    Validate {
        /// Input file, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new apidoc2oas configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Document metadata that takes precedence over the config file.
#[derive(clap::Args)]
struct MetadataOverrides {
    /// API title
    #[arg(long, env = "APIDOC2OAS_TITLE")]
    title: Option<String>,

    /// Server URL
    #[arg(long, env = "APIDOC2OAS_SERVER_URL")]
    server_url: Option<String>,

    /// API version
    #[arg(long, env = "APIDOC2OAS_API_VERSION")]
    api_version: Option<String>,
}

impl MetadataOverrides {
    fn apply(self, cfg: &mut ConverterConfig) {
        if let Some(title) = self.title {
            cfg.info.title = title;
        }
        if let Some(url) = self.server_url {
            cfg.server.url = url;
        }
        if let Some(version) = self.api_version {
            cfg.info.version = version;
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            overrides,
        } => cmd_convert(&cli.config, input, output, format, overrides),

        Commands::Validate { input } => cmd_validate(&cli.config, input),

        Commands::Init { force } => cmd_init(&cli.config, force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apidoc2oas", &mut io::stdout());
            Ok(())
        }
    }
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_config(path: &Path) -> Result<ConverterConfig> {
    let cfg = config::load_config(path).map_err(|e| anyhow::anyhow!(e))?;
    if cfg.is_none() {
        log::debug!("no config at {}, using defaults", path.display());
    }
    Ok(cfg.unwrap_or_default())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_converter(input: &Path, cfg: ConverterConfig) -> Result<Converter> {
    let content = read_input(input)?;
    let mut converter = Converter::new(cfg);
    converter
        .load_str(&content)
        .with_context(|| format!("failed to load {}", input.display()))?;
    Ok(converter)
}

fn render(doc: &OpenApiDocument, format: &OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(doc)?),
        OutputFormat::Yaml => serde_yaml_ng::to_string(doc)?,
    })
}

fn cmd_convert(
    config_path: &Path,
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    overrides: MetadataOverrides,
) -> Result<()> {
    let mut cfg = load_config(config_path)?;
    overrides.apply(&mut cfg);

    let mut converter = load_converter(&input, cfg)?;
    let doc = converter.convert()?;
    let rendered = render(&doc, &format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "Converted {} records into {} paths → {}",
                converter.record_count(),
                doc.paths.len(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn cmd_validate(config_path: &Path, input: PathBuf) -> Result<()> {
    let cfg = load_config(config_path)?;
    let mut converter = load_converter(&input, cfg)?;
    let doc = converter.convert()?;

    eprintln!("Valid apiDoc data: {}", input.display());
    eprintln!("  Records: {}", converter.record_count());
    eprintln!("  Paths: {}", doc.paths.len());
    eprintln!("  Operations: {}", doc.operations().count());
    eprintln!("  Tags: {}", doc.tags.len());
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
