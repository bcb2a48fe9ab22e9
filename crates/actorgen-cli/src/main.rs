use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use actorgen_core::config::{self, ActorgenConfig, CONFIG_FILE_NAME, Propagation};
use actorgen_core::ir::GenerationModel;
use actorgen_core::parse::{self, DocumentFormat, document::OpenApiSpec};
use actorgen_core::transform::{self, TransformOptions};
use actorgen_core::{CodeGenerator, GeneratedFile};
use actorgen_go::{GoGenerator, GoGeneratorConfig};

#[derive(Parser)]
#[command(
    name = "actorgen",
    about = "Generate typed actor interfaces from OpenAPI 3.x",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate actor packages from an OpenAPI spec
    Generate {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit implementation stubs
        #[arg(long)]
        generate_impl: bool,

        /// Emit an example application (main.go and go.mod)
        #[arg(long)]
        generate_example: bool,

        /// Go module path for the example application
        #[arg(long)]
        module_name: Option<String>,

        /// Attribute types reachable through any number of field references
        #[arg(long)]
        transitive: bool,
    },

    /// Validate an OpenAPI spec against the actor path convention
    Validate {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the actor model built from an OpenAPI spec
    Inspect {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new actorgen configuration
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
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            generate_impl,
            generate_example,
            module_name,
            transitive,
        } => {
            let mut cfg = try_load_config()?.unwrap_or_default();
            if let Some(input) = input {
                cfg.input = input.display().to_string();
            }
            if let Some(output) = output {
                cfg.output = output.display().to_string();
            }
            cfg.generation.generate_impl |= generate_impl;
            cfg.generation.generate_example |= generate_example;
            if let Some(module_name) = module_name {
                cfg.generation.module_name = module_name;
            }
            if transitive {
                cfg.types.propagation = Propagation::Transitive;
            }
            cmd_generate(cfg)
        }

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "actorgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ActorgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read and parse a document, choosing JSON or YAML by file extension.
fn load_document(path: &Path) -> Result<OpenApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let parsed = parse::parse_document(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(parsed)
}

fn load_model(path: &Path, cfg: &ActorgenConfig) -> Result<GenerationModel> {
    let parsed = load_document(path)?;
    let options = TransformOptions {
        propagation: cfg.types.propagation,
        promote_inline_enums: cfg.types.promote_inline_enums,
    };
    let model = transform::transform_with_options(&parsed, &options)
        .with_context(|| format!("failed to build actor model from {}", path.display()))?;
    Ok(model)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Try to run gofmt on the output directory.
fn try_run_gofmt(output_dir: &Path) {
    match Command::new("gofmt").args(["-w", "."]).current_dir(output_dir).output() {
        Ok(result) if result.status.success() => {
            eprintln!("  formatted with gofmt");
        }
        Ok(_) => {
            eprintln!("  warning: gofmt had issues (non-zero exit), output may need manual formatting");
        }
        Err(_) => {
            eprintln!(
                "  note: gofmt not found, run `gofmt -w .` in {} to format",
                output_dir.display()
            );
        }
    }
}

fn cmd_generate(cfg: ActorgenConfig) -> Result<()> {
    let input = PathBuf::from(&cfg.input);
    let model = load_model(&input, &cfg)?;

    let output_dir = PathBuf::from(&cfg.output);
    log::debug!("generation options: {:?}", cfg.generation);
    eprintln!("Generating {} → {}", input.display(), output_dir.display());

    let go_config = GoGeneratorConfig::from(cfg.generation.clone());
    let files = GoGenerator
        .generate(&model, &go_config)
        .map_err(|e| anyhow::anyhow!(e))?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;
    try_run_gofmt(&output_dir);

    eprintln!(
        "Generated {} files for {} actor(s) in {}",
        files.len(),
        model.actors.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let parsed = load_document(&input)?;

    eprintln!(
        "Valid OpenAPI {} spec: {}",
        parsed.openapi, parsed.info.title
    );
    eprintln!("  Version: {}", parsed.info.version);
    eprintln!("  Paths: {}", parsed.paths.len());

    if let Some(ref components) = parsed.components {
        eprintln!("  Schemas: {}", components.schemas.len());
    }

    // Also validate that the actor model builds
    let model = transform::transform(&parsed)?;
    eprintln!("  Actors: {}", model.actors.len());
    for actor in &model.actors {
        eprintln!(
            "    {}: {} method(s), {} type(s)",
            actor.actor_type,
            actor.methods.len(),
            actor.types.len()
        );
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let model = load_model(&input, &cfg)?;

    let summary = build_inspect_summary(&model);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(model: &GenerationModel) -> serde_json::Value {
    let actors: Vec<serde_json::Value> = model
        .actors
        .iter()
        .map(|actor| {
            let methods: Vec<serde_json::Value> = actor
                .methods
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "name": m.name,
                        "comment": m.comment,
                        "has_request": m.has_request,
                        "request_type": m.request_type,
                        "return_type": m.return_type.to_string(),
                    })
                })
                .collect();

            serde_json::json!({
                "actor_type": actor.actor_type,
                "interface": actor.interface_name,
                "package": actor.package_name(),
                "methods": methods,
                "types": {
                    "structs": actor.types.structs.iter().map(|s| &s.name).collect::<Vec<_>>(),
                    "aliases": actor
                        .types
                        .aliases
                        .iter()
                        .map(|a| serde_json::json!({ "name": a.name, "target": a.target.to_string() }))
                        .collect::<Vec<_>>(),
                    "enums": actor
                        .types
                        .enums
                        .iter()
                        .map(|e| serde_json::json!({ "name": e.name, "values": e.values }))
                        .collect::<Vec<_>>(),
                },
            })
        })
        .collect();

    serde_json::json!({ "actors": actors })
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
