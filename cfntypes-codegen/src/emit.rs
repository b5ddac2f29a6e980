//! Rust source emission for a module model

use crate::config::GeneratorConfig;
use crate::docs::{doc_lines, summary};
use crate::model::{Field, ModuleDef, StructDef};

/// Render the Rust module for a resource type
pub fn generate_module(module: &ModuleDef, config: &GeneratorConfig) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        r#"//! {type_name} resource type
//!
//! Generated from CloudFormation resource schema `{type_name}`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
}};
use cfntypes_core::{{Json, Resource, ResourceProperties, Value}};
use serde::{{Deserialize, Serialize}};

"#,
        type_name = module.type_name
    ));

    for def in &module.property_types {
        code.push_str(&struct_code(def));
        code.push('\n');
    }
    code.push_str(&struct_code(&module.properties));
    code.push('\n');

    code.push_str(&format!(
        "impl ResourceProperties for {} {{\n    const TYPE_NAME: &'static str = {:?};\n}}\n\n",
        module.properties.rust_name, module.type_name
    ));
    code.push_str(&format!(
        "/// The `{}` resource\npub type {} = Resource<{}>;\n\n",
        module.type_name,
        module.names.struct_name(),
        module.properties.rust_name
    ));

    code.push_str(&catalog_code(module, config));

    if config.format_output {
        format_code(code)
    } else {
        code
    }
}

fn push_doc(code: &mut String, indent: &str, lines: &[String]) {
    for line in lines {
        if line.is_empty() {
            code.push_str(&format!("{}///\n", indent));
        } else {
            code.push_str(&format!("{}/// {}\n", indent, line));
        }
    }
}

fn struct_code(def: &StructDef) -> String {
    let mut code = String::new();

    let mut lines = def
        .description
        .as_deref()
        .map(doc_lines)
        .unwrap_or_default();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("<{}>", def.documentation_url));
    push_doc(&mut code, "", &lines);

    // Default only makes sense when nothing is required
    if def.has_required_fields() {
        code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    } else {
        code.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
    }
    code.push_str("#[serde(deny_unknown_fields)]\n");
    code.push_str(&format!("pub struct {} {{\n", def.rust_name));
    for field in &def.fields {
        code.push_str(&field_code(field));
    }
    code.push_str("}\n");
    code
}

fn field_code(field: &Field) -> String {
    let mut code = String::new();

    let mut lines = field
        .description
        .as_deref()
        .map(doc_lines)
        .unwrap_or_default();
    let mut notes = Vec::new();
    if !field.allowed_values.is_empty() {
        let values: Vec<String> = field
            .allowed_values
            .iter()
            .map(|v| format!("`{}`", v))
            .collect();
        notes.push(format!("Allowed values: {}", values.join(", ")));
    }
    if !field.constraints.is_empty() {
        let constraints: Vec<String> = field.constraints.iter().map(|c| c.describe()).collect();
        notes.push(format!("Constraints: {}", constraints.join(", ")));
    }
    if let Some(update) = field.update_requires {
        notes.push(format!("Update requires: {}", update.describe()));
    }
    if !notes.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(notes);
    }
    push_doc(&mut code, "    ", &lines);

    let rust_type = field.ty.rust_type();
    if field.required {
        code.push_str(&format!("    #[serde(rename = {:?})]\n", field.cfn_name));
        code.push_str(&format!("    pub {}: {},\n", field.rust_name, rust_type));
    } else {
        code.push_str(&format!(
            "    #[serde(rename = {:?}, skip_serializing_if = \"Option::is_none\")]\n",
            field.cfn_name
        ));
        code.push_str(&format!("    pub {}: Option<{}>,\n", field.rust_name, rust_type));
    }
    code
}

fn property_doc_code(field: &Field, indent: &str, config: &GeneratorConfig) -> String {
    let mut code = format!(
        "{}PropertyDoc::new({:?}, {})",
        indent,
        field.cfn_name,
        field.ty.kind_expr()
    );
    let chain_indent = format!("{}    ", indent);
    if field.required {
        code.push_str(&format!("\n{}.required()", chain_indent));
    }
    if let Some(description) = &field.description {
        let text = summary(description, config.catalog_description_length);
        if !text.is_empty() {
            code.push_str(&format!("\n{}.with_description({:?})", chain_indent, text));
        }
    }
    if let Some(update) = field.update_requires {
        code.push_str(&format!(
            "\n{}.with_update_requires({})",
            chain_indent,
            update.expr()
        ));
    }
    if !field.allowed_values.is_empty() {
        let values: Vec<String> = field
            .allowed_values
            .iter()
            .map(|v| format!("{:?}", v))
            .collect();
        code.push_str(&format!(
            "\n{}.with_allowed_values(&[{}])",
            chain_indent,
            values.join(", ")
        ));
    }
    if !field.constraints.is_empty() {
        let constraints: Vec<String> = field.constraints.iter().map(|c| c.expr()).collect();
        code.push_str(&format!(
            "\n{}.with_constraints(&[{}])",
            chain_indent,
            constraints.join(", ")
        ));
    }
    code.push_str(",\n");
    code
}

fn catalog_code(module: &ModuleDef, config: &GeneratorConfig) -> String {
    let describe = |text: &Option<String>| {
        text.as_deref()
            .map(|d| summary(d, config.catalog_description_length))
            .unwrap_or_default()
    };

    let mut code = format!(
        "/// Documentation catalog of `{}`\npub static DOC: ResourceDoc = ResourceDoc {{\n",
        module.type_name
    );
    code.push_str(&format!("    type_name: {:?},\n", module.type_name));
    code.push_str(&format!(
        "    description: {:?},\n",
        describe(&module.description)
    ));
    code.push_str(&format!(
        "    documentation_url: {:?},\n",
        module.documentation_url
    ));
    code.push_str(&format!("    taggable: {},\n", module.taggable));

    code.push_str("    properties: &[\n");
    for field in &module.properties.fields {
        code.push_str(&property_doc_code(field, "        ", config));
    }
    code.push_str("    ],\n");

    code.push_str("    property_types: &[\n");
    for def in &module.property_types {
        code.push_str("        PropertyTypeDoc {\n");
        code.push_str(&format!("            name: {:?},\n", def.cfn_name));
        code.push_str(&format!(
            "            description: {:?},\n",
            describe(&def.description)
        ));
        code.push_str(&format!(
            "            documentation_url: {:?},\n",
            def.documentation_url
        ));
        code.push_str("            properties: &[\n");
        for field in &def.fields {
            code.push_str(&property_doc_code(field, "                ", config));
        }
        code.push_str("            ],\n");
        code.push_str("        },\n");
    }
    code.push_str("    ],\n");

    let attributes: Vec<String> = module
        .attributes
        .iter()
        .map(|a| format!("{:?}", a))
        .collect();
    code.push_str(&format!("    attributes: &[{}],\n", attributes.join(", ")));
    code.push_str("};\n");
    code
}

/// Render the `mod.rs` of a generated directory from (module, properties struct) pairs
pub fn generate_mod_rs(modules: &[(String, String)]) -> String {
    let mut code = String::from(
        "//! Generated resource types\n//!\n//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen\n\n",
    );
    for (module_name, _) in modules {
        code.push_str(&format!("pub mod {};\n", module_name));
    }
    code.push_str("\nuse crate::registry::RegisteredResource;\n\n");
    code.push_str("/// Every generated resource type\n");
    // prettyplease does not format macro bodies
    code.push_str("pub fn registered() -> Vec<RegisteredResource> {\n    Vec::from([\n");
    for (module_name, properties) in modules {
        code.push_str(&format!(
            "        RegisteredResource::of::<{0}::{1}>(&{0}::DOC),\n",
            module_name, properties
        ));
    }
    code.push_str("    ])\n}\n");
    code
}

/// Pretty-print generated code; unparsable code is returned as-is
pub fn format_code(code: String) -> String {
    match syn::parse_file(&code) {
        Ok(syntax_tree) => prettyplease::unparse(&syntax_tree),
        Err(e) => {
            log::warn!("Generated code does not parse, leaving it unformatted: {}", e);
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfn::CfnSchema;
    use crate::model::build_module;
    use crate::naming::TypeName;

    const SCHEMA: &str = r##"{
        "typeName": "AWS::Test::Widget",
        "description": "A test widget.",
        "properties": {
            "Name": { "type": "string", "description": "Widget name.", "maxLength": 64 },
            "Size": { "type": "integer" },
            "Type": { "type": "string", "enum": ["small", "large"] },
            "Tags": { "type": "array", "items": { "$ref": "#/definitions/Tag" } },
            "Arn": { "type": "string" }
        },
        "definitions": {
            "Tag": {
                "type": "object",
                "properties": {
                    "Key": { "type": "string" },
                    "Value": { "type": "string" }
                },
                "required": ["Key", "Value"]
            }
        },
        "required": ["Name"],
        "readOnlyProperties": ["/properties/Arn"],
        "createOnlyProperties": ["/properties/Name"]
    }"##;

    fn module() -> ModuleDef {
        let schema: CfnSchema = serde_json::from_str(SCHEMA).unwrap();
        let names = TypeName::parse(&schema.type_name).unwrap();
        build_module(&schema, names).unwrap()
    }

    #[test]
    fn test_generated_module_parses() {
        let config = GeneratorConfig {
            format_output: false,
            ..Default::default()
        };
        let code = generate_module(&module(), &config);
        assert!(syn::parse_file(&code).is_ok(), "unparsable:\n{}", code);
    }

    #[test]
    fn test_generated_module_contents() {
        let code = generate_module(
            &module(),
            &GeneratorConfig {
                format_output: false,
                ..Default::default()
            },
        );

        assert!(code.starts_with("//! AWS::Test::Widget resource type"));
        assert!(code.contains("pub struct WidgetProperties {"));
        assert!(code.contains("    pub name: Value<String>,\n"));
        assert!(code.contains("    pub size: Option<Value<i64>>,\n"));
        assert!(code.contains("    pub r#type: Option<Value<String>>,\n"));
        assert!(code.contains("    pub tags: Option<Value<Vec<Tag>>>,\n"));
        assert!(!code.contains("pub arn"));
        assert!(code.contains("const TYPE_NAME: &'static str = \"AWS::Test::Widget\";"));
        assert!(code.contains("pub type Widget = Resource<WidgetProperties>;"));
        assert!(code.contains("/// Update requires: Replacement"));
        assert!(code.contains(".with_allowed_values(&[\"small\", \"large\"])"));
        assert!(code.contains(".with_constraints(&[Constraint::MaxLength(64)])"));
        assert!(code.contains("attributes: &[\"Arn\"],"));
    }

    #[test]
    fn test_default_derive_depends_on_required_fields() {
        let code = generate_module(
            &module(),
            &GeneratorConfig {
                format_output: false,
                ..Default::default()
            },
        );
        // Both structs here have required fields
        assert!(!code.contains("Default,"));

        let schema: CfnSchema = serde_json::from_str(
            r#"{ "typeName": "AWS::Test::Empty", "properties": { "Note": { "type": "string" } } }"#,
        )
        .unwrap();
        let names = TypeName::parse(&schema.type_name).unwrap();
        let empty = build_module(&schema, names).unwrap();
        let code = generate_module(&empty, &GeneratorConfig::default());
        assert!(code.contains("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]"));
    }

    #[test]
    fn test_formatted_output_parses() {
        let code = generate_module(&module(), &GeneratorConfig::default());
        assert!(syn::parse_file(&code).is_ok());
    }

    #[test]
    fn test_format_code_fallback() {
        let broken = "pub struct {".to_string();
        assert_eq!(format_code(broken.clone()), broken);
    }

    #[test]
    fn test_mod_rs() {
        let code = generate_mod_rs(&[
            ("sqs_queue".to_string(), "QueueProperties".to_string()),
            ("ec2_vpc".to_string(), "VpcProperties".to_string()),
        ]);
        assert!(code.contains("pub mod sqs_queue;\npub mod ec2_vpc;\n"));
        assert!(code.contains(
            "        RegisteredResource::of::<ec2_vpc::VpcProperties>(&ec2_vpc::DOC),\n"
        ));
        assert!(syn::parse_file(&code).is_ok());

        let formatted = format_code(code);
        assert!(formatted.contains("Vec::from(["));
        assert!(formatted.contains(
            "RegisteredResource::of::<sqs_queue::QueueProperties>(&sqs_queue::DOC),"
        ));
    }
}
