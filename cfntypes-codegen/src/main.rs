//! cfntypes-codegen - Generate resource modules from CloudFormation registry schemas
//!
//! Usage:
//!   aws cloudformation describe-type --type RESOURCE --type-name AWS::SQS::Queue \
//!     --query Schema --output text | cfntypes-codegen --output sqs_queue.rs
//!
//!   cfntypes-codegen --schema-dir schemas/ --out-dir cfntypes-resources/src/generated

mod cfn;
mod config;
mod docs;
mod emit;
mod model;
mod naming;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::cfn::CfnSchema;
use crate::config::GeneratorConfig;
use crate::emit::{generate_mod_rs, generate_module};
use crate::model::build_module;
use crate::naming::TypeName;

#[derive(Parser, Debug)]
#[command(name = "cfntypes-codegen")]
#[command(about = "Generate typed resource modules from CloudFormation schemas")]
struct Args {
    /// CloudFormation type name (defaults to the schema's typeName)
    #[arg(long)]
    type_name: Option<String>,

    /// Input file (reads from stdin if not specified)
    #[arg(long, conflicts_with = "schema_dir")]
    file: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short, conflicts_with = "schema_dir")]
    output: Option<PathBuf>,

    /// Generate every *.json schema in this directory
    #[arg(long, requires = "out_dir")]
    schema_dir: Option<PathBuf>,

    /// Directory receiving the generated modules and mod.rs
    #[arg(long, requires = "schema_dir")]
    out_dir: Option<PathBuf>,

    /// Max characters of descriptions kept in the DOC catalog
    #[arg(long, default_value_t = GeneratorConfig::default().catalog_description_length)]
    description_length: usize,

    /// Emit the generated code without pretty-printing
    #[arg(long)]
    no_format: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One generated module
#[derive(Debug)]
struct Generated {
    type_name: String,
    module_name: String,
    properties_struct: String,
    code: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = GeneratorConfig {
        catalog_description_length: args.description_length,
        format_output: !args.no_format,
    };

    if let (Some(schema_dir), Some(out_dir)) = (&args.schema_dir, &args.out_dir) {
        if args.type_name.is_some() {
            bail!("--type-name cannot be combined with --schema-dir");
        }
        let count = generate_dir(schema_dir, out_dir, &config)?;
        eprintln!("Generated {} modules into {}", count, out_dir.display());
        return Ok(());
    }

    // Read schema JSON
    let schema_json = if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let generated = generate(&schema_json, args.type_name.as_deref(), &config)?;

    // Output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &generated.code)
            .with_context(|| format!("Failed to write to: {}", output_path.display()))?;
        eprintln!("Generated: {}", output_path.display());
    } else {
        print!("{}", generated.code);
    }

    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Generate the module for one schema document
fn generate(schema_json: &str, type_name: Option<&str>, config: &GeneratorConfig) -> Result<Generated> {
    let mut schema: CfnSchema =
        serde_json::from_str(schema_json).context("Failed to parse CloudFormation schema")?;

    if let Some(type_name) = type_name
        && type_name != schema.type_name
    {
        log::warn!(
            "Overriding schema typeName {} with {}",
            schema.type_name,
            type_name
        );
        schema.type_name = type_name.to_string();
    }

    let names = TypeName::parse(&schema.type_name)?;
    let module_name = names.module_name();
    let module = build_module(&schema, names)?;
    log::info!(
        "{}: {} properties, {} property types",
        schema.type_name,
        module.properties.fields.len(),
        module.property_types.len()
    );

    Ok(Generated {
        type_name: schema.type_name.clone(),
        module_name,
        properties_struct: module.properties.rust_name.clone(),
        code: generate_module(&module, config),
    })
}

/// Generate every schema of a directory; returns the number of modules written
fn generate_dir(schema_dir: &Path, out_dir: &Path, config: &GeneratorConfig) -> Result<usize> {
    let mut paths: Vec<PathBuf> = fs::read_dir(schema_dir)
        .with_context(|| format!("Failed to read directory: {}", schema_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let mut modules: Vec<(String, String)> = Vec::new();
    for path in &paths {
        let result = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
            .and_then(|json| generate(&json, None, config));
        let generated = match result {
            Ok(generated) => generated,
            Err(e) => {
                log::error!("Skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        if modules.iter().any(|(name, _)| *name == generated.module_name) {
            log::error!(
                "Skipping {}: module {} already generated",
                generated.type_name,
                generated.module_name
            );
            continue;
        }

        let module_path = out_dir.join(format!("{}.rs", generated.module_name));
        fs::write(&module_path, &generated.code)
            .with_context(|| format!("Failed to write to: {}", module_path.display()))?;
        log::info!("Generated {}", module_path.display());
        modules.push((generated.module_name, generated.properties_struct));
    }

    modules.sort();
    let mod_rs = emit::format_code(generate_mod_rs(&modules));
    let mod_path = out_dir.join("mod.rs");
    fs::write(&mod_path, mod_rs)
        .with_context(|| format!("Failed to write to: {}", mod_path.display()))?;

    Ok(modules.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const QUEUE: &str = r#"{
        "typeName": "AWS::SQS::Queue",
        "description": "An SQS queue.",
        "properties": {
            "QueueName": { "type": "string" },
            "Arn": { "type": "string" }
        },
        "readOnlyProperties": ["/properties/Arn"]
    }"#;

    const VPC: &str = r#"{
        "typeName": "AWS::EC2::VPC",
        "properties": { "CidrBlock": { "type": "string" } },
        "required": ["CidrBlock"]
    }"#;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_generate_uses_schema_type_name() {
        let generated = generate(QUEUE, None, &GeneratorConfig::default()).unwrap();
        assert_eq!(generated.type_name, "AWS::SQS::Queue");
        assert_eq!(generated.module_name, "sqs_queue");
        assert_eq!(generated.properties_struct, "QueueProperties");
        assert!(generated.code.contains("pub struct QueueProperties"));
    }

    #[test]
    fn test_generate_type_name_override() {
        let generated =
            generate(QUEUE, Some("AWS::SQS::Other"), &GeneratorConfig::default()).unwrap();
        assert_eq!(generated.module_name, "sqs_other");
        assert!(generated.code.contains("\"AWS::SQS::Other\""));

        assert!(generate(QUEUE, Some("AWS::SQS"), &GeneratorConfig::default()).is_err());
    }

    #[test]
    fn test_generate_rejects_invalid_json() {
        let err = generate("{ not json", None, &GeneratorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse CloudFormation schema"));
    }

    #[test]
    fn test_generate_dir() {
        let schemas = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(schemas.path().join("queue.json"), QUEUE).unwrap();
        fs::write(schemas.path().join("vpc.json"), VPC).unwrap();
        fs::write(schemas.path().join("broken.json"), "{}").unwrap();
        fs::write(schemas.path().join("notes.txt"), "ignored").unwrap();

        let count = generate_dir(schemas.path(), out.path(), &GeneratorConfig::default()).unwrap();
        assert_eq!(count, 2);

        assert!(out.path().join("sqs_queue.rs").exists());
        assert!(out.path().join("ec2_vpc.rs").exists());

        let mod_rs = fs::read_to_string(out.path().join("mod.rs")).unwrap();
        assert!(mod_rs.contains("pub mod ec2_vpc;"));
        assert!(mod_rs.contains("pub mod sqs_queue;"));
        assert!(mod_rs.contains("RegisteredResource::of::<sqs_queue::QueueProperties>"));
        assert!(mod_rs.find("ec2_vpc").unwrap() < mod_rs.find("sqs_queue").unwrap());
    }

    #[test]
    fn test_generate_dir_missing_directory() {
        let out = tempfile::tempdir().unwrap();
        let missing = out.path().join("missing");
        assert!(generate_dir(&missing, out.path(), &GeneratorConfig::default()).is_err());
    }
}
