use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cfgen_core::config::{self, CONFIG_FILE_NAME, CfgenConfig, LanguageId, LanguageOptions};
use cfgen_core::model::GenerationOutput;
use cfgen_core::naming::NameSanitizer;
use cfgen_core::parse::{self, schema::SchemaOrRef, spec::OpenApiSpec};
use cfgen_core::resolve::TypeResolver;
use cfgen_core::schema::SchemaDocument;
use cfgen_core::schema::lower::lower_schema;
use cfgen_core::{LanguageConfig, generate};
use cfgen_go::GoLanguage;
use cfgen_javascript::JavascriptLanguage;
use cfgen_python_flask::PythonFlaskLanguage;
use cfgen_swift::SwiftLanguage;

#[derive(Parser)]
#[command(name = "cfgen", about = "Per-language OpenAPI codegen configs", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a generation pass and print the decorated models and operations
    Resolve {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target language
        #[arg(short, long)]
        language: Option<LanguageId>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Resolve the declared type of one inline schema
    Type {
        /// Target language
        #[arg(short, long)]
        language: Option<LanguageId>,

        /// Schema as inline YAML, e.g. `{type: array, items: {type: integer}}`
        #[arg(long)]
        schema: String,

        /// Spec providing the schemas `$ref`s point at
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Apply one naming operation to a raw name
    Name {
        /// Target language
        #[arg(short, long)]
        language: Option<LanguageId>,

        kind: NameKind,

        raw: String,
    },

    /// List the available target languages
    Languages,

    /// Initialize a new cfgen configuration
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
    Yaml,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NameKind {
    Identifier,
    Param,
    Model,
    Operation,
    EnumVar,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            input,
            language,
            format,
        } => cmd_resolve(input, language, format),

        Commands::Type {
            language,
            schema,
            input,
        } => cmd_type(language, &schema, input),

        Commands::Name {
            language,
            kind,
            raw,
        } => cmd_name(language, kind, &raw),

        Commands::Languages => {
            for id in LanguageId::ALL {
                println!("{id}");
            }
            Ok(())
        }

        Commands::Init { force } => cmd_init(Path::new(CONFIG_FILE_NAME), force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "cfgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<CfgenConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let loaded = config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
    Ok(loaded.unwrap_or_default())
}

/// Look up the target for a language id.
fn config_for(id: LanguageId) -> Box<dyn LanguageConfig> {
    match id {
        LanguageId::Go => Box::new(GoLanguage),
        LanguageId::Javascript => Box::new(JavascriptLanguage),
        LanguageId::PythonFlask => Box::new(PythonFlaskLanguage),
        LanguageId::Swift4 => Box::new(SwiftLanguage::swift4()),
        LanguageId::Swift5 => Box::new(SwiftLanguage::swift5()),
    }
}

fn load_spec(path: &Path) -> Result<OpenApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };
    Ok(parsed)
}

fn run_pass(
    spec: &OpenApiSpec,
    language: LanguageId,
    options: &LanguageOptions,
) -> Result<GenerationOutput> {
    let target = config_for(language);
    let output = generate(spec, target.as_ref(), options)?;
    log::info!(
        "{language}: {} models, {} operations",
        output.models.len(),
        output.operations.len()
    );
    Ok(output)
}

fn cmd_resolve(
    input: Option<PathBuf>,
    language: Option<LanguageId>,
    format: OutputFormat,
) -> Result<()> {
    let cfg = try_load_config()?;
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let language = language.unwrap_or(cfg.language);
    let spec = load_spec(&input)?;
    let output = run_pass(&spec, language, &cfg.options)?;

    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&output)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}

/// Declared type and base type of an inline schema, one per line.
fn resolve_inline_type(
    language: LanguageId,
    options: &LanguageOptions,
    schema_yaml: &str,
    spec: Option<&OpenApiSpec>,
) -> Result<String> {
    let profile = config_for(language).profile().with_options(options)?;
    let document = match spec {
        Some(spec) => SchemaDocument::from_spec(spec)?,
        None => SchemaDocument::default(),
    };
    let schema: SchemaOrRef =
        serde_yaml_ng::from_str(schema_yaml).context("failed to parse --schema")?;
    let node = lower_schema(&schema)?;

    let resolver = TypeResolver::new(&profile, &document);
    let declared = resolver.type_declaration(&node)?;
    let base = resolver.base_type(&node)?;
    Ok(format!("{declared}\n{base}"))
}

fn cmd_type(language: Option<LanguageId>, schema: &str, input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?;
    let language = language.unwrap_or(cfg.language);
    let spec = input.as_deref().map(load_spec).transpose()?;
    println!(
        "{}",
        resolve_inline_type(language, &cfg.options, schema, spec.as_ref())?
    );
    Ok(())
}

fn apply_name(
    language: LanguageId,
    options: &LanguageOptions,
    kind: NameKind,
    raw: &str,
) -> Result<String> {
    let profile = config_for(language).profile().with_options(options)?;
    let names = NameSanitizer::new(&profile);
    let name = match kind {
        NameKind::Identifier => names.to_identifier(raw),
        NameKind::Param => names.to_param_name(raw),
        NameKind::Model => names.to_model_name(raw),
        NameKind::Operation => names.to_operation_id(raw),
        // Enum cases are named as if their values were strings
        NameKind::EnumVar => {
            let data_type = profile
                .type_table
                .get("string")
                .unwrap_or("string")
                .to_string();
            names.to_enum_var_name(raw, &data_type)
        }
    };
    Ok(name)
}

fn cmd_name(language: Option<LanguageId>, kind: NameKind, raw: &str) -> Result<()> {
    let cfg = try_load_config()?;
    let language = language.unwrap_or(cfg.language);
    println!("{}", apply_name(language, &cfg.options, kind, raw)?);
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
