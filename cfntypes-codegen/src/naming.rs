//! Naming rules for generated modules, structs and fields

use anyhow::{Result, bail};
use heck::{ToPascalCase, ToSnakeCase};

/// Names imported into every generated module
const IMPORTED_NAMES: &[&str] = &[
    "BTreeMap",
    "Constraint",
    "Deserialize",
    "Json",
    "Option",
    "PropertyDoc",
    "PropertyKind",
    "PropertyTypeDoc",
    "Resource",
    "ResourceDoc",
    "ResourceProperties",
    "Serialize",
    "String",
    "UpdateRequires",
    "Value",
    "Vec",
];

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// The three segments of a type name (e.g., "AWS::SQS::Queue")
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    pub provider: String,
    pub service: String,
    pub resource: String,
}

impl TypeName {
    pub fn parse(type_name: &str) -> Result<Self> {
        let parts: Vec<&str> = type_name.split("::").collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            bail!("Invalid type name format: {}", type_name);
        }
        Ok(Self {
            provider: parts[0].to_string(),
            service: parts[1].to_string(),
            resource: parts[2].to_string(),
        })
    }

    /// Module name: AWS::EC2::SecurityGroup -> ec2_security_group
    pub fn module_name(&self) -> String {
        format!(
            "{}_{}",
            self.service.to_lowercase(),
            self.resource.to_snake_case()
        )
    }

    /// Rust name of the resource: AWS::EC2::VPC -> Vpc
    pub fn struct_name(&self) -> String {
        struct_name(&self.resource)
    }

    pub fn properties_struct_name(&self) -> String {
        format!("{}Properties", self.struct_name())
    }

    /// Rust struct name for a definition of this resource, kept clear of the
    /// resource alias and the properties struct
    pub fn definition_struct_name(&self, definition: &str) -> String {
        let name = struct_name(definition);
        if name == self.struct_name() || name == self.properties_struct_name() {
            format!("{}Property", name)
        } else {
            name
        }
    }

    /// AWS documentation page of the resource
    pub fn documentation_url(&self) -> String {
        format!(
            "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-{}-{}.html",
            self.service.to_lowercase(),
            self.resource.to_lowercase()
        )
    }

    /// AWS documentation page of a property type of this resource
    pub fn property_type_url(&self, definition: &str) -> String {
        format!(
            "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-{}-{}-{}.html",
            self.service.to_lowercase(),
            self.resource.to_lowercase(),
            definition.to_lowercase()
        )
    }
}

/// Rust struct name for a definition, avoiding names the module imports
pub fn struct_name(name: &str) -> String {
    let pascal = name.to_pascal_case();
    if IMPORTED_NAMES.contains(&pascal.as_str()) {
        format!("{}Property", pascal)
    } else {
        pascal
    }
}

/// Rust field name for a CloudFormation property name
pub fn field_name(name: &str) -> String {
    let snake = name.to_snake_case();
    match snake.as_str() {
        "self" | "super" | "crate" | "Self" => format!("{}_", snake),
        s if KEYWORDS.contains(&s) => format!("r#{}", snake),
        s if s.starts_with(|c: char| c.is_ascii_digit()) => format!("_{}", snake),
        _ => snake,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_parts() {
        let name = TypeName::parse("AWS::EC2::SecurityGroup").unwrap();
        assert_eq!(name.service, "EC2");
        assert_eq!(name.module_name(), "ec2_security_group");
        assert_eq!(name.struct_name(), "SecurityGroup");
        assert_eq!(name.properties_struct_name(), "SecurityGroupProperties");
    }

    #[test]
    fn test_acronym_resources() {
        let vpc = TypeName::parse("AWS::EC2::VPC").unwrap();
        assert_eq!(vpc.module_name(), "ec2_vpc");
        assert_eq!(vpc.struct_name(), "Vpc");
        assert_eq!(
            vpc.documentation_url(),
            "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html"
        );
    }

    #[test]
    fn test_invalid_type_name() {
        assert!(TypeName::parse("AWS::SQS").is_err());
        assert!(TypeName::parse("AWS::::Queue").is_err());
        assert!(TypeName::parse("AWS::SQS::Queue::Extra").is_err());
    }

    #[test]
    fn test_struct_name_avoids_imports() {
        assert_eq!(struct_name("SSESpecification"), "SseSpecification");
        assert_eq!(struct_name("Value"), "ValueProperty");
        assert_eq!(struct_name("Resource"), "ResourceProperty");
        assert_eq!(struct_name("Tag"), "Tag");
    }

    #[test]
    fn test_definition_names_avoid_resource_names() {
        let widget = TypeName::parse("AWS::Test::Widget").unwrap();
        assert_eq!(widget.definition_struct_name("Widget"), "WidgetProperty");
        assert_eq!(
            widget.definition_struct_name("WidgetProperties"),
            "WidgetPropertiesProperty"
        );
        assert_eq!(widget.definition_struct_name("Value"), "ValueProperty");
        assert_eq!(widget.definition_struct_name("Gear"), "Gear");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("KmsMasterKeyId"), "kms_master_key_id");
        assert_eq!(field_name("SSESpecification"), "sse_specification");
        assert_eq!(field_name("Type"), "r#type");
        assert_eq!(field_name("Match"), "r#match");
        assert_eq!(field_name("Self"), "self_");
    }
}
