mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use swv_core::config::{self, CONFIG_FILE_NAME, ConverterKind, SwvConfig};
use swv_core::parse::{self, SwaggerDocument};
use swv_core::view::ViewModel;
use swv_core::{PrepareOptions, prepare};
use swv_typescript::TypeScriptConverter;

use crate::render::{BUILTIN_TEMPLATE, render_view};

#[derive(Parser)]
#[command(
    name = "swv",
    about = "Swagger 1.x/2.0 view-model builder and template renderer",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the view model built from a Swagger document
    Prepare {
        /// Path to the Swagger document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Attach TypeScript type descriptors
        #[arg(long)]
        typescript: bool,
    },

    /// Render a template with the view model as context
    Render {
        /// Path to the Swagger document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// minijinja template; the built-in TypeScript class when omitted
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate that a Swagger document parses and transforms
    Validate {
        /// Path to the Swagger document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new swv configuration
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

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare {
            input,
            format,
            typescript,
        } => cmd_prepare(input, format, typescript),

        Commands::Render {
            input,
            template,
            output,
        } => cmd_render(input, template, output),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swv", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SwvConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_document(path: &Path) -> Result<SwaggerDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let document = match ext {
        "json" => parse::from_json(&content),
        _ => parse::from_yaml(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(document)
}

/// Build the view model, attaching TypeScript types when asked to.
fn build_view(
    document: &SwaggerDocument,
    cfg: &SwvConfig,
    typescript: bool,
) -> Result<ViewModel> {
    let converter = TypeScriptConverter::new();
    let mut options: PrepareOptions<'_> = cfg.prepare_options(document);
    if typescript || cfg.converter == ConverterKind::Typescript {
        options = options.with_type_converter(&converter);
    }
    let view = prepare(&options)?;
    log::debug!("view model has {} methods", view.methods.len());
    Ok(view)
}

fn cmd_prepare(input: Option<PathBuf>, format: OutputFormat, typescript: bool) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let document = load_document(&input)?;
    let view = build_view(&document, &cfg, typescript)?;

    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&view)?;
            print!("{}", yaml);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_render(
    input: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let document = load_document(&input)?;
    let view = build_view(&document, &cfg, false)?;

    let template = template.or_else(|| cfg.template.as_ref().map(PathBuf::from));
    let rendered = match template {
        Some(path) => {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            let name = path.display().to_string();
            render_view(&name, &source, &view, &cfg.type_property_name)
                .with_context(|| format!("failed to render {}", path.display()))?
        }
        None => render_view(
            "class.ts.j2",
            BUILTIN_TEMPLATE,
            &view,
            &cfg.type_property_name,
        )
        .context("failed to render the built-in template")?,
    };

    match output.or_else(|| cfg.output.as_ref().map(PathBuf::from)) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory {}", parent.display())
                })?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("  wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let document = load_document(&input)?;

    match document {
        SwaggerDocument::V2(ref spec) => {
            eprintln!(
                "Valid Swagger {} document: {}",
                spec.swagger,
                spec.info.title.as_deref().unwrap_or("(untitled)")
            );
            eprintln!("  Paths: {}", spec.paths.len());
            eprintln!("  Definitions: {}", spec.definitions.len());
        }
        SwaggerDocument::V1(ref spec) => {
            eprintln!(
                "Valid Swagger {} document",
                spec.swagger_version.as_deref().unwrap_or("1.x")
            );
            eprintln!("  APIs: {}", spec.apis.len());
        }
    }

    // Also validate that it transforms successfully
    let view = prepare(&PrepareOptions::new(&document))?;
    eprintln!("  Methods: {}", view.methods.len());
    if let Some(ref swagger2) = view.swagger2 {
        eprintln!("  Tag groups: {}", swagger2.by_tags.len());
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE_V1: &str = include_str!("../../swv-core/tests/fixtures/petstore-1.2.json");

    #[test]
    fn test_load_document_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("legacy.json");
        fs::write(&json_path, PETSTORE_V1).unwrap();
        assert!(matches!(
            load_document(&json_path).unwrap(),
            SwaggerDocument::V1(_)
        ));

        let yaml_path = dir.path().join("tiny.yml");
        fs::write(
            &yaml_path,
            "swagger: \"2.0\"\ninfo:\n  title: Tiny\npaths: {}\n",
        )
        .unwrap();
        assert!(matches!(
            load_document(&yaml_path).unwrap(),
            SwaggerDocument::V2(_)
        ));
    }

    #[test]
    fn test_load_document_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_build_view_honors_config_converter() {
        let document = parse::from_json(
            r#"{ "swagger": "2.0", "info": {}, "paths": { "/a": { "get": {
                "parameters": [{ "name": "q", "in": "query", "type": "string" }],
                "responses": {} } } } }"#,
        )
        .unwrap();

        let plain = build_view(&document, &SwvConfig::default(), false).unwrap();
        assert!(plain.methods[0].parameters[0].computed.value().is_none());

        let cfg = SwvConfig {
            converter: ConverterKind::Typescript,
            ..SwvConfig::default()
        };
        let typed = build_view(&document, &cfg, false).unwrap();
        let ts = typed.methods[0].parameters[0].computed.value().unwrap();
        assert_eq!(ts["tsType"], serde_json::json!("string"));
    }
}
