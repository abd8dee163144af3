use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use stratus_core::config::SynthConfig;
use stratus_core::manifest::Manifest;
use stratus_core::resource::Inspection;
use stratus_core::schema::ResourceSchema;
use stratus_core::stack::Stack;
use stratus_provider_aws::registry;

#[derive(Parser)]
#[command(name = "stratus")]
#[command(about = "Typed CloudFormation resource definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the stack manifest
    Validate {
        /// Path to stack manifest
        #[arg(default_value = "stack.json")]
        file: PathBuf,
    },
    /// Synthesize the CloudFormation template
    Synth {
        /// Path to stack manifest
        #[arg(default_value = "stack.json")]
        file: PathBuf,

        /// Write the template to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit compact single-line JSON
        #[arg(long)]
        compact: bool,

        /// Number of spaces for indentation
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Omit AWSTemplateFormatVersion
        #[arg(long)]
        no_format_version: bool,
    },
    /// Show each resource's type and props as declared
    Inspect {
        /// Path to stack manifest
        #[arg(default_value = "stack.json")]
        file: PathBuf,
    },
    /// List resource types, or describe one
    Schema {
        /// Resource type (e.g., waf.ip_set or AWS::WAF::IPSet)
        resource_type: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => run_validate(&file),
        Commands::Synth {
            file,
            output,
            compact,
            indent,
            no_format_version,
        } => {
            let config = synth_config(compact, indent, no_format_version);
            run_synth(&file, output.as_deref(), &config)
        }
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Schema { resource_type } => run_schema(resource_type.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn synth_config(compact: bool, indent: usize, no_format_version: bool) -> SynthConfig {
    let mut config = SynthConfig {
        pretty: !compact,
        indent_size: indent,
        ..SynthConfig::default()
    };
    if no_format_version {
        config.format_version = None;
    }
    config
}

fn load_stack(file: &Path) -> Result<Stack, String> {
    log::debug!("Loading manifest {}", file.display());
    let manifest = Manifest::from_file(file).map_err(|e| e.to_string())?;
    manifest.into_stack(&registry()).map_err(|e| e.to_string())
}

fn run_validate(file: &Path) -> Result<(), String> {
    println!("{}", "Validating...".cyan());

    let stack = load_stack(file)?;
    let ordered = stack.dependency_order().map_err(|e| e.to_string())?;

    println!(
        "{}",
        format!("✓ {} resources validated successfully.", ordered.len())
            .green()
            .bold()
    );

    for resource in ordered {
        println!("  • {} ({})", resource.logical_id(), resource.cfn_type());
    }

    Ok(())
}

fn run_synth(file: &Path, output: Option<&Path>, config: &SynthConfig) -> Result<(), String> {
    let stack = load_stack(file)?;
    let template = stack
        .to_template_string(config)
        .map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", template))
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!(
                "{}",
                format!(
                    "✓ Wrote {} resources to {}",
                    stack.resources().len(),
                    path.display()
                )
                .green()
                .bold()
            );
        }
        None => println!("{}", template),
    }

    Ok(())
}

fn inspect_stack(stack: &Stack) -> Result<BTreeMap<String, Inspection>, String> {
    let mut tree = BTreeMap::new();
    for resource in stack.dependency_order().map_err(|e| e.to_string())? {
        tree.insert(resource.logical_id().to_string(), resource.inspect());
    }
    Ok(tree)
}

fn run_inspect(file: &Path) -> Result<(), String> {
    let stack = load_stack(file)?;
    let tree = inspect_stack(&stack)?;
    let json = serde_json::to_string_pretty(&tree).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn run_schema(resource_type: Option<&str>) -> Result<(), String> {
    let registry = registry();

    let Some(name) = resource_type else {
        println!("{}", "Resource types:".cyan().bold());
        for schema in registry.iter() {
            println!("  • {:<40} {}", schema.resource_type, schema.cfn_type);
        }
        return Ok(());
    };

    let schema = registry
        .get(name)
        .ok_or_else(|| format!("Unknown resource type '{}'", name))?;
    print!("{}", describe_schema(&schema));
    Ok(())
}

/// Plain-text description of a resource type
fn describe_schema(schema: &ResourceSchema) -> String {
    let mut out = format!("{} ({})\n", schema.resource_type, schema.cfn_type);
    if let Some(description) = &schema.description {
        out.push_str(&format!("  {}\n", description));
    }

    out.push_str("\nProperties:\n");
    for attr in schema.sorted_attributes() {
        let marker = if attr.required { " (required)" } else { "" };
        out.push_str(&format!(
            "  {} -> {}: {}{}\n",
            attr.name,
            attr.provider_key(),
            attr.attr_type,
            marker
        ));
    }

    if !schema.return_attributes.is_empty() {
        out.push_str("\nAttributes:\n");
        for attr in &schema.return_attributes {
            out.push_str(&format!("  {}\n", attr));
        }
    }
    out
}
