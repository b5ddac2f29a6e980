//! cfntypes - inspect the shipped CloudFormation resource types and check
//! templates against them

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;

use cfntypes_core::Error;
use cfntypes_core::schema::{PropertyDoc, PropertyTypeDoc, ResourceDoc};
use cfntypes_resources::{Outcome, RegisteredResource, TemplateReport, registry, template};

#[derive(Parser)]
#[command(name = "cfntypes")]
#[command(about = "Typed CloudFormation resource declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the shipped resource types
    List {
        /// Only show types of this service (e.g., EC2, sqs)
        #[arg(long)]
        service: Option<String>,
    },
    /// Show the documentation catalog of a resource type
    Describe {
        /// CloudFormation type name (e.g., AWS::SQS::Queue)
        type_name: String,

        /// Show one nested property type instead (e.g., Tag)
        #[arg(long)]
        property_type: Option<String>,
    },
    /// Check the resources of a JSON template against their declarations
    Validate {
        /// Path to the template
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::List { service } => run_list(service.as_deref()),
        Commands::Describe {
            type_name,
            property_type,
        } => run_describe(&type_name, property_type.as_deref()),
        Commands::Validate { file } => run_validate(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
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

fn run_list(service: Option<&str>) -> Result<()> {
    let types = filter_by_service(registry::resource_types(), service);
    if types.is_empty() {
        bail!(
            "No resource types for service {}. Known services: {}",
            service.unwrap_or_default(),
            registry::services().join(", ")
        );
    }
    print!("{}", render_list(&types));
    Ok(())
}

fn filter_by_service<'a>(
    types: &'a [RegisteredResource],
    service: Option<&str>,
) -> Vec<&'a RegisteredResource> {
    types
        .iter()
        .filter(|r| service.is_none_or(|s| r.doc.service().eq_ignore_ascii_case(s)))
        .collect()
}

fn render_list(types: &[&RegisteredResource]) -> String {
    let width = types
        .iter()
        .map(|r| r.type_name().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for registered in types {
        let doc = registered.doc;
        out.push_str(&format!(
            "{:<width$}  {}\n",
            doc.type_name.cyan(),
            format!("{} properties", doc.properties.len()).dimmed(),
            width = width
        ));
    }
    out
}

fn find_doc(type_name: &str) -> Result<&'static ResourceDoc> {
    if let Some(registered) = registry::lookup(type_name) {
        return Ok(registered.doc);
    }
    // Accept the type name in any case
    registry::resource_types()
        .iter()
        .find(|r| r.type_name().eq_ignore_ascii_case(type_name))
        .map(|r| r.doc)
        .ok_or_else(|| Error::UnknownResourceType(type_name.to_string()).into())
}

fn run_describe(type_name: &str, property_type: Option<&str>) -> Result<()> {
    let doc = find_doc(type_name)?;
    match property_type {
        Some(name) => {
            let property_type = doc.property_type(name).with_context(|| {
                format!("{} has no property type named {}", doc.type_name, name)
            })?;
            print!("{}", render_property_type(doc, property_type));
        }
        None => print!("{}", render_resource(doc)),
    }
    Ok(())
}

fn render_resource(doc: &ResourceDoc) -> String {
    let mut out = format!("{}\n", doc.type_name.bold());
    if !doc.description.is_empty() {
        out.push_str(&format!("{}\n", doc.description));
    }
    out.push_str(&format!("{}\n", doc.documentation_url.dimmed()));

    out.push_str(&format!("\n{}\n", "Properties:".bold()));
    for property in doc.properties {
        render_property(&mut out, property);
    }

    if !doc.attributes.is_empty() {
        out.push_str(&format!("\n{}\n", "Attributes (Fn::GetAtt):".bold()));
        for attribute in doc.attributes {
            out.push_str(&format!("  {}\n", attribute));
        }
    }

    if !doc.property_types.is_empty() {
        out.push_str(&format!("\n{}\n", "Property types:".bold()));
        for property_type in doc.property_types {
            out.push_str(&format!(
                "  {} {}\n",
                property_type.name.cyan(),
                format!("({} properties)", property_type.properties.len()).dimmed()
            ));
        }
    }
    out
}

fn render_property_type(doc: &ResourceDoc, property_type: &PropertyTypeDoc) -> String {
    let mut out = format!("{} {}\n", doc.type_name.bold(), property_type.name.bold());
    if !property_type.description.is_empty() {
        out.push_str(&format!("{}\n", property_type.description));
    }
    out.push_str(&format!("{}\n", property_type.documentation_url.dimmed()));
    out.push_str(&format!("\n{}\n", "Properties:".bold()));
    for property in property_type.properties {
        render_property(&mut out, property);
    }
    out
}

fn render_property(out: &mut String, property: &PropertyDoc) {
    let required = if property.required {
        format!(" {}", "(required)".yellow())
    } else {
        String::new()
    };
    out.push_str(&format!(
        "  {}: {}{}\n",
        property.name.cyan(),
        property.kind,
        required
    ));
    if !property.description.is_empty() {
        out.push_str(&format!("      {}\n", property.description));
    }
    if let Some(update_requires) = property.update_requires {
        out.push_str(&format!("      Update requires: {}\n", update_requires));
    }
    if !property.allowed_values.is_empty() {
        out.push_str(&format!(
            "      Allowed values: {}\n",
            property.allowed_values.join(", ")
        ));
    }
    if !property.constraints.is_empty() {
        let constraints: Vec<String> = property.constraints.iter().map(|c| c.to_string()).collect();
        out.push_str(&format!("      Constraints: {}\n", constraints.join(", ")));
    }
}

fn run_validate(file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let document: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))?;

    println!("{}", "Validating...".cyan());
    let report = template::check_template(&document)?;
    print!("{}", render_report(&report));

    if !report.is_conforming() {
        bail!(
            "{} of {} resources do not match their declarations",
            report.failed(),
            report.resources.len()
        );
    }
    Ok(())
}

fn render_report(report: &TemplateReport) -> String {
    let mut out = String::new();
    for entry in &report.resources {
        let type_name = entry.type_name.as_deref().unwrap_or("?");
        let line = match &entry.outcome {
            Outcome::Conforms => format!(
                "  {} {} ({})",
                "✓".green(),
                entry.logical_id,
                type_name
            ),
            Outcome::Skipped => format!(
                "  {} {} ({}) {}",
                "-".yellow(),
                entry.logical_id,
                type_name,
                "not a shipped type, skipped".dimmed()
            ),
            Outcome::Failed(e) => format!(
                "  {} {} ({}): {}",
                "✗".red(),
                entry.logical_id,
                type_name,
                e
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }

    let summary = format!(
        "{} conforming, {} skipped, {} failed",
        report.conforming(),
        report.skipped(),
        report.failed()
    );
    if report.is_conforming() {
        out.push_str(&format!("{}\n", summary.green().bold()));
    } else {
        out.push_str(&format!("{}\n", summary.red().bold()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_describe_with_property_type() {
        let cli = Cli::try_parse_from([
            "cfntypes",
            "-v",
            "describe",
            "AWS::SQS::Queue",
            "--property-type",
            "Tag",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Describe {
                type_name,
                property_type,
            } => {
                assert_eq!(type_name, "AWS::SQS::Queue");
                assert_eq!(property_type.as_deref(), Some("Tag"));
            }
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn test_filter_by_service_is_case_insensitive() {
        let types = filter_by_service(registry::resource_types(), Some("ec2"));
        let names: Vec<&str> = types.iter().map(|r| r.type_name()).collect();
        assert_eq!(names, vec!["AWS::EC2::SecurityGroup", "AWS::EC2::VPC"]);

        let all = filter_by_service(registry::resource_types(), None);
        assert_eq!(all.len(), registry::resource_types().len());
    }

    #[test]
    fn test_render_list() {
        no_color();
        let types = filter_by_service(registry::resource_types(), Some("SQS"));
        let out = render_list(&types);
        assert!(out.starts_with("AWS::SQS::Queue"));
        assert!(out.contains("16 properties"));
    }

    #[test]
    fn test_find_doc_ignores_case() {
        assert_eq!(find_doc("aws::sqs::queue").unwrap().type_name, "AWS::SQS::Queue");
        let err = find_doc("AWS::SQS::Nope").unwrap_err();
        assert_eq!(err.to_string(), "Unknown resource type: AWS::SQS::Nope");
    }

    #[test]
    fn test_render_resource() {
        no_color();
        let doc = find_doc("AWS::BillingConductor::CustomLineItem").unwrap();
        let out = render_resource(doc);
        assert!(out.starts_with("AWS::BillingConductor::CustomLineItem\n"));
        assert!(out.contains("  BillingGroupArn: String (required)\n"));
        assert!(out.contains("      Update requires: Replacement\n"));
        assert!(out.contains("  Tags: List<Tag>\n"));
        assert!(out.contains("Attributes (Fn::GetAtt):\n  Arn\n"));
        assert!(out.contains("  LineItemFilter (3 properties)\n"));
    }

    #[test]
    fn test_render_property_type() {
        no_color();
        let doc = find_doc("AWS::BillingConductor::CustomLineItem").unwrap();
        let filter = doc.property_type("LineItemFilter").unwrap();
        let out = render_property_type(doc, filter);
        assert!(out.starts_with("AWS::BillingConductor::CustomLineItem LineItemFilter\n"));
        assert!(out.contains("  MatchOption: String (required)\n"));
        assert!(out.contains("      Allowed values: NOT_EQUAL\n"));
        assert!(!out.contains("Update requires"));
    }

    #[test]
    fn test_render_report() {
        no_color();
        let report = template::check_template(&json!({
            "Resources": {
                "Queue": { "Type": "AWS::SQS::Queue" },
                "Thing": { "Type": "Custom::Thing" }
            }
        }))
        .unwrap();
        let out = render_report(&report);
        assert!(out.contains("  ✓ Queue (AWS::SQS::Queue)\n"));
        assert!(out.contains("  - Thing (Custom::Thing) not a shipped type, skipped\n"));
        assert!(out.ends_with("1 conforming, 1 skipped, 0 failed\n"));
    }

    #[test]
    fn test_run_validate() {
        no_color();
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.json");
        fs::write(
            &good,
            r#"{"Resources": {"Topic": {"Type": "AWS::SNS::Topic", "Properties": {"TopicName": "alerts"}}}}"#,
        )
        .unwrap();
        assert!(run_validate(&good).is_ok());

        let bad = dir.path().join("bad.json");
        fs::write(
            &bad,
            r#"{"Resources": {"Role": {"Type": "AWS::IAM::Role", "Properties": {}}}}"#,
        )
        .unwrap();
        let err = run_validate(&bad).unwrap_err();
        assert!(err.to_string().contains("1 of 1 resources"));

        let not_json = dir.path().join("template.yaml");
        fs::write(&not_json, "Resources: {}\n").unwrap();
        let err = run_validate(&not_json).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));

        let missing = dir.path().join("missing.json");
        assert!(run_validate(&missing).is_err());
    }
}
