//! Schema - Static documentation metadata for resource types
//!
//! Every generated resource module carries a `ResourceDoc` describing its
//! properties the way the AWS documentation does: allowed values, length
//! and range constraints, and what an update of the property requires.
//! None of it is enforced; it exists for listing, describing and tooling.

use std::fmt;

/// Declared kind of a property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    String,
    Integer,
    Number,
    Boolean,
    /// Free-form JSON
    Json,
    List(&'static PropertyKind),
    Map(&'static PropertyKind),
    /// A property type declared in the same module
    Struct(&'static str),
}

impl PropertyKind {
    fn type_name(&self) -> String {
        match self {
            PropertyKind::String => "String".to_string(),
            PropertyKind::Integer => "Integer".to_string(),
            PropertyKind::Number => "Number".to_string(),
            PropertyKind::Boolean => "Boolean".to_string(),
            PropertyKind::Json => "Json".to_string(),
            PropertyKind::List(inner) => format!("List<{}>", inner.type_name()),
            PropertyKind::Map(inner) => format!("Map<{}>", inner.type_name()),
            PropertyKind::Struct(name) => name.to_string(),
        }
    }

    /// Name of the property type this kind refers to, looking through lists and maps
    pub fn struct_name(&self) -> Option<&'static str> {
        match self {
            PropertyKind::Struct(name) => Some(*name),
            PropertyKind::List(inner) | PropertyKind::Map(inner) => inner.struct_name(),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// What CloudFormation does to the running resource when a property changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRequires {
    Replacement,
    NoInterruption,
    SomeInterruptions,
    /// Depends on the values involved
    Conditional,
}

impl fmt::Display for UpdateRequires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UpdateRequires::Replacement => "Replacement",
            UpdateRequires::NoInterruption => "No interruption",
            UpdateRequires::SomeInterruptions => "Some interruptions",
            UpdateRequires::Conditional => "Conditional",
        };
        f.write_str(text)
    }
}

/// Documented value constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    MinLength(u64),
    MaxLength(u64),
    Minimum(f64),
    Maximum(f64),
    Pattern(&'static str),
    MinItems(u64),
    MaxItems(u64),
    UniqueItems,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::MinLength(n) => write!(f, "min length {}", n),
            Constraint::MaxLength(n) => write!(f, "max length {}", n),
            Constraint::Minimum(n) => write!(f, "minimum {}", n),
            Constraint::Maximum(n) => write!(f, "maximum {}", n),
            Constraint::Pattern(p) => write!(f, "pattern {}", p),
            Constraint::MinItems(n) => write!(f, "min items {}", n),
            Constraint::MaxItems(n) => write!(f, "max items {}", n),
            Constraint::UniqueItems => f.write_str("unique items"),
        }
    }
}

/// Documentation of one property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDoc {
    /// CloudFormation property name (e.g., "VisibilityTimeout")
    pub name: &'static str,
    pub kind: PropertyKind,
    pub required: bool,
    pub description: &'static str,
    /// Only documented for top-level resource properties
    pub update_requires: Option<UpdateRequires>,
    pub allowed_values: &'static [&'static str],
    pub constraints: &'static [Constraint],
}

impl PropertyDoc {
    pub const fn new(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            description: "",
            update_requires: None,
            allowed_values: &[],
            constraints: &[],
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub const fn with_update_requires(mut self, update_requires: UpdateRequires) -> Self {
        self.update_requires = Some(update_requires);
        self
    }

    pub const fn with_allowed_values(mut self, values: &'static [&'static str]) -> Self {
        self.allowed_values = values;
        self
    }

    pub const fn with_constraints(mut self, constraints: &'static [Constraint]) -> Self {
        self.constraints = constraints;
        self
    }
}

/// Documentation of a nested property type (e.g., `Tag`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTypeDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub documentation_url: &'static str,
    pub properties: &'static [PropertyDoc],
}

impl PropertyTypeDoc {
    pub fn property(&self, name: &str) -> Option<&PropertyDoc> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Documentation of a resource type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceDoc {
    /// CloudFormation type name (e.g., "AWS::SQS::Queue")
    pub type_name: &'static str,
    pub description: &'static str,
    pub documentation_url: &'static str,
    /// Whether the resource accepts `Tags`
    pub taggable: bool,
    pub properties: &'static [PropertyDoc],
    pub property_types: &'static [PropertyTypeDoc],
    /// Read-only attributes available through `Fn::GetAtt`
    pub attributes: &'static [&'static str],
}

impl ResourceDoc {
    pub fn property(&self, name: &str) -> Option<&PropertyDoc> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn property_type(&self, name: &str) -> Option<&PropertyTypeDoc> {
        self.property_types.iter().find(|t| t.name == name)
    }

    pub fn required_properties(&self) -> impl Iterator<Item = &PropertyDoc> {
        self.properties.iter().filter(|p| p.required)
    }

    /// Service segment of the type name (e.g., "SQS")
    pub fn service(&self) -> &'static str {
        self.type_name.split("::").nth(1).unwrap_or("")
    }

    /// Resource segment of the type name (e.g., "Queue")
    pub fn resource_name(&self) -> &'static str {
        self.type_name.split("::").nth(2).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WIDGET: ResourceDoc = ResourceDoc {
        type_name: "AWS::Test::Widget",
        description: "A widget.",
        documentation_url: "https://example.com/widget",
        taggable: true,
        properties: &[
            PropertyDoc::new("Name", PropertyKind::String)
                .required()
                .with_update_requires(UpdateRequires::Replacement)
                .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(80)]),
            PropertyDoc::new("Mode", PropertyKind::String)
                .with_allowed_values(&["FAST", "SLOW"])
                .with_update_requires(UpdateRequires::NoInterruption),
            PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag"))),
        ],
        property_types: &[PropertyTypeDoc {
            name: "Tag",
            description: "A key-value pair.",
            documentation_url: "https://example.com/tag",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String).required(),
                PropertyDoc::new("Value", PropertyKind::String).required(),
            ],
        }],
        attributes: &["Arn"],
    };

    #[test]
    fn test_kind_display() {
        assert_eq!(PropertyKind::String.to_string(), "String");
        assert_eq!(
            PropertyKind::List(&PropertyKind::Struct("Tag")).to_string(),
            "List<Tag>"
        );
        assert_eq!(
            PropertyKind::Map(&PropertyKind::List(&PropertyKind::Integer)).to_string(),
            "Map<List<Integer>>"
        );
    }

    #[test]
    fn test_struct_name_looks_through_containers() {
        assert_eq!(
            PropertyKind::List(&PropertyKind::Struct("Tag")).struct_name(),
            Some("Tag")
        );
        assert_eq!(PropertyKind::Map(&PropertyKind::String).struct_name(), None);
    }

    #[test]
    fn test_builders() {
        let name = WIDGET.property("Name").unwrap();
        assert!(name.required);
        assert_eq!(name.update_requires, Some(UpdateRequires::Replacement));
        assert_eq!(name.constraints.len(), 2);

        let mode = WIDGET.property("Mode").unwrap();
        assert!(!mode.required);
        assert_eq!(mode.allowed_values, &["FAST", "SLOW"]);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(WIDGET.service(), "Test");
        assert_eq!(WIDGET.resource_name(), "Widget");
        assert_eq!(
            WIDGET
                .required_properties()
                .map(|p| p.name)
                .collect::<Vec<_>>(),
            vec!["Name"]
        );
        let tag = WIDGET.property_type("Tag").unwrap();
        assert!(tag.property("Key").unwrap().required);
        assert!(WIDGET.property("Missing").is_none());
    }

    #[test]
    fn test_update_requires_display() {
        assert_eq!(UpdateRequires::NoInterruption.to_string(), "No interruption");
        assert_eq!(
            UpdateRequires::SomeInterruptions.to_string(),
            "Some interruptions"
        );
        assert_eq!(Constraint::Maximum(900.0).to_string(), "maximum 900");
        assert_eq!(Constraint::UniqueItems.to_string(), "unique items");
    }
}
