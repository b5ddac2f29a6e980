//! Intermediate model of a generated module, built from a registry schema

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;

use crate::cfn::{AdditionalProperties, CfnProperty, CfnSchema};
use crate::docs::extract_enum_from_description;
use crate::naming::{TypeName, field_name};

/// Declared type of a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Json,
    List(Box<FieldType>),
    Map(Box<FieldType>),
    /// A generated struct; `boxed` breaks a direct reference cycle
    Struct {
        rust_name: String,
        cfn_name: String,
        boxed: bool,
    },
}

impl FieldType {
    fn primitive(&self) -> Option<&'static str> {
        match self {
            FieldType::String => Some("String"),
            FieldType::Integer => Some("i64"),
            FieldType::Number => Some("f64"),
            FieldType::Boolean => Some("bool"),
            _ => None,
        }
    }

    /// Rust type of a field holding this type (without `Option`)
    pub fn rust_type(&self) -> String {
        if let Some(prim) = self.primitive() {
            return format!("Value<{}>", prim);
        }
        match self {
            FieldType::Json => "Json".to_string(),
            FieldType::List(inner) => format!("Value<Vec<{}>>", inner.element_type()),
            FieldType::Map(inner) => format!("Value<BTreeMap<String, {}>>", inner.element_type()),
            FieldType::Struct {
                rust_name, boxed, ..
            } => {
                if *boxed {
                    format!("Value<Box<{}>>", rust_name)
                } else {
                    format!("Value<{}>", rust_name)
                }
            }
            _ => unreachable!("primitives handled above"),
        }
    }

    /// Rust type of a list element or map value
    fn element_type(&self) -> String {
        if let Some(prim) = self.primitive() {
            return format!("Value<{}>", prim);
        }
        match self {
            FieldType::Json => "Json".to_string(),
            FieldType::List(inner) => format!("Vec<{}>", inner.element_type()),
            FieldType::Map(inner) => format!("BTreeMap<String, {}>", inner.element_type()),
            FieldType::Struct { rust_name, .. } => rust_name.clone(),
            _ => unreachable!("primitives handled above"),
        }
    }

    /// `PropertyKind` expression for the documentation catalog
    pub fn kind_expr(&self) -> String {
        match self {
            FieldType::String => "PropertyKind::String".to_string(),
            FieldType::Integer => "PropertyKind::Integer".to_string(),
            FieldType::Number => "PropertyKind::Number".to_string(),
            FieldType::Boolean => "PropertyKind::Boolean".to_string(),
            FieldType::Json => "PropertyKind::Json".to_string(),
            FieldType::List(inner) => format!("PropertyKind::List(&{})", inner.kind_expr()),
            FieldType::Map(inner) => format!("PropertyKind::Map(&{})", inner.kind_expr()),
            FieldType::Struct { cfn_name, .. } => format!("PropertyKind::Struct({:?})", cfn_name),
        }
    }
}

/// Documented constraint, mirrored as `cfntypes_core::schema::Constraint`
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    MinLength(u64),
    MaxLength(u64),
    Minimum(f64),
    Maximum(f64),
    Pattern(String),
    MinItems(u64),
    MaxItems(u64),
    UniqueItems,
}

impl Constraint {
    pub fn expr(&self) -> String {
        match self {
            Constraint::MinLength(n) => format!("Constraint::MinLength({})", n),
            Constraint::MaxLength(n) => format!("Constraint::MaxLength({})", n),
            Constraint::Minimum(n) => format!("Constraint::Minimum({:?})", n),
            Constraint::Maximum(n) => format!("Constraint::Maximum({:?})", n),
            Constraint::Pattern(p) => format!("Constraint::Pattern({:?})", p),
            Constraint::MinItems(n) => format!("Constraint::MinItems({})", n),
            Constraint::MaxItems(n) => format!("Constraint::MaxItems({})", n),
            Constraint::UniqueItems => "Constraint::UniqueItems".to_string(),
        }
    }

    /// Human-readable form for doc comments
    pub fn describe(&self) -> String {
        match self {
            Constraint::MinLength(n) => format!("min length {}", n),
            Constraint::MaxLength(n) => format!("max length {}", n),
            Constraint::Minimum(n) => format!("minimum {}", n),
            Constraint::Maximum(n) => format!("maximum {}", n),
            Constraint::Pattern(p) => format!("pattern `{}`", p),
            Constraint::MinItems(n) => format!("min items {}", n),
            Constraint::MaxItems(n) => format!("max items {}", n),
            Constraint::UniqueItems => "unique items".to_string(),
        }
    }
}

/// Update behavior of a top-level property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRequires {
    Replacement,
    NoInterruption,
}

impl UpdateRequires {
    pub fn expr(&self) -> &'static str {
        match self {
            UpdateRequires::Replacement => "UpdateRequires::Replacement",
            UpdateRequires::NoInterruption => "UpdateRequires::NoInterruption",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            UpdateRequires::Replacement => "Replacement",
            UpdateRequires::NoInterruption => "No interruption",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub cfn_name: String,
    pub rust_name: String,
    pub ty: FieldType,
    pub required: bool,
    pub description: Option<String>,
    pub allowed_values: Vec<String>,
    pub constraints: Vec<Constraint>,
    pub update_requires: Option<UpdateRequires>,
}

#[derive(Debug, Clone)]
pub struct StructDef {
    pub cfn_name: String,
    pub rust_name: String,
    pub description: Option<String>,
    pub documentation_url: String,
    pub fields: Vec<Field>,
}

impl StructDef {
    pub fn has_required_fields(&self) -> bool {
        self.fields.iter().any(|f| f.required)
    }
}

#[derive(Debug, Clone)]
pub struct ModuleDef {
    pub type_name: String,
    pub names: TypeName,
    pub description: Option<String>,
    pub documentation_url: String,
    pub taggable: bool,
    pub properties: StructDef,
    /// Property types in name order
    pub property_types: Vec<StructDef>,
    /// Read-only attributes (GetAtt names)
    pub attributes: Vec<String>,
}

/// Build the module model of a schema
pub fn build_module(schema: &CfnSchema, names: TypeName) -> Result<ModuleDef> {
    let read_only = schema.read_only();
    let create_only: HashSet<String> = schema.create_only().into_iter().collect();
    let deprecated: HashSet<String> = schema.deprecated().into_iter().collect();
    let required: HashSet<&str> = schema.required.iter().map(String::as_str).collect();

    let mut builder = Builder {
        schema,
        names: &names,
        structs: BTreeMap::new(),
        in_progress: Vec::new(),
        inlining: Vec::new(),
    };

    let mut fields = Vec::new();
    for (prop_name, prop) in &schema.properties {
        if read_only.contains(prop_name) || deprecated.contains(prop_name) {
            continue;
        }
        let owner = names.struct_name();
        let mut field = builder.field(&owner, prop_name, prop, required.contains(prop_name.as_str()));
        field.update_requires = Some(if create_only.contains(prop_name) {
            UpdateRequires::Replacement
        } else {
            UpdateRequires::NoInterruption
        });
        fields.push(field);
    }

    let properties = StructDef {
        cfn_name: names.resource.clone(),
        rust_name: names.properties_struct_name(),
        description: Some(format!("Properties of `{}`.", schema.type_name)),
        documentation_url: names.documentation_url(),
        fields,
    };

    let property_types = builder.structs.into_values().collect();

    Ok(ModuleDef {
        type_name: schema.type_name.clone(),
        description: schema.description.clone(),
        documentation_url: schema
            .documentation_url
            .clone()
            .unwrap_or_else(|| names.documentation_url()),
        taggable: schema.taggable(),
        properties,
        property_types,
        attributes: read_only,
        names,
    })
}

struct Builder<'a> {
    schema: &'a CfnSchema,
    names: &'a TypeName,
    /// Generated property types keyed by CloudFormation name
    structs: BTreeMap<String, StructDef>,
    /// Definitions currently being built (for cycle detection)
    in_progress: Vec<String>,
    /// Non-object definitions currently being inlined
    inlining: Vec<String>,
}

impl Builder<'_> {
    fn field(&mut self, owner: &str, prop_name: &str, prop: &CfnProperty, required: bool) -> Field {
        let ty = self.resolve(owner, prop_name, prop);

        // Constraints and allowed values of an inlined primitive definition apply here too
        let effective = match prop.ref_name().and_then(|n| self.schema.definitions.get(n)) {
            Some(def) if !is_object_definition(def) => def,
            _ => prop,
        };
        let description = prop
            .description
            .clone()
            .or_else(|| effective.description.clone());

        let allowed_values = match effective.enum_strings() {
            Some(values) => values,
            None if ty == FieldType::String => description
                .as_deref()
                .and_then(extract_enum_from_description)
                .unwrap_or_default(),
            None => Vec::new(),
        };

        Field {
            cfn_name: prop_name.to_string(),
            rust_name: field_name(prop_name),
            ty,
            required,
            description,
            allowed_values,
            constraints: constraints(effective),
            update_requires: None,
        }
    }

    fn resolve(&mut self, owner: &str, prop_name: &str, prop: &CfnProperty) -> FieldType {
        if let Some(def_name) = prop.ref_name() {
            return match self.schema.definitions.get(def_name) {
                Some(def) if is_object_definition(def) => self.struct_type(def_name, def),
                Some(_) if self.inlining.iter().any(|n| n == def_name) => {
                    log::warn!(
                        "{}: definition {} refers back to itself on {}, typed as Json",
                        self.schema.type_name,
                        def_name,
                        prop_name
                    );
                    FieldType::Json
                }
                Some(def) => {
                    self.inlining.push(def_name.to_string());
                    let ty = self.resolve(owner, prop_name, def);
                    self.inlining.pop();
                    ty
                }
                None => {
                    log::warn!(
                        "{}: unresolved $ref {:?} on {}",
                        self.schema.type_name,
                        prop.ref_path,
                        prop_name
                    );
                    FieldType::Json
                }
            };
        }

        if prop.enum_values.is_some() {
            return match prop.type_str() {
                Some("integer") => FieldType::Integer,
                Some("number") => FieldType::Number,
                _ => FieldType::String,
            };
        }

        match prop.type_str() {
            Some("string") => FieldType::String,
            Some("integer") => FieldType::Integer,
            Some("number") => FieldType::Number,
            Some("boolean") => FieldType::Boolean,
            Some("array") => {
                let item = match &prop.items {
                    Some(items) => self.resolve(owner, prop_name, items),
                    None => FieldType::Json,
                };
                FieldType::List(Box::new(item))
            }
            Some("object") | None => self.object_type(owner, prop_name, prop),
            Some(other) => {
                log::debug!("{}: unhandled type {} on {}", self.schema.type_name, other, prop_name);
                FieldType::Json
            }
        }
    }

    fn object_type(&mut self, owner: &str, prop_name: &str, prop: &CfnProperty) -> FieldType {
        if prop.properties.as_ref().is_some_and(|p| !p.is_empty()) {
            // Inline object: synthesize a property type named after its owner
            let synthesized = format!("{}{}", owner, prop_name);
            return self.struct_type(&synthesized, prop);
        }
        if let Some(patterns) = &prop.pattern_properties
            && let Some(value_schema) = patterns.values().next()
        {
            let value = self.resolve(owner, prop_name, value_schema);
            return FieldType::Map(Box::new(value));
        }
        if let Some(AdditionalProperties::Schema(value_schema)) = &prop.additional_properties {
            let value = self.resolve(owner, prop_name, value_schema);
            return FieldType::Map(Box::new(value));
        }
        FieldType::Json
    }

    fn struct_type(&mut self, cfn_name: &str, def: &CfnProperty) -> FieldType {
        let rust_name = self.names.definition_struct_name(cfn_name);
        if self.in_progress.iter().any(|n| n == cfn_name) {
            return FieldType::Struct {
                rust_name,
                cfn_name: cfn_name.to_string(),
                boxed: true,
            };
        }
        if !self.structs.contains_key(cfn_name) {
            self.in_progress.push(cfn_name.to_string());
            let required: HashSet<&str> = def.required.iter().map(String::as_str).collect();
            let mut fields = Vec::new();
            if let Some(props) = &def.properties {
                for (name, prop) in props {
                    fields.push(self.field(&rust_name, name, prop, required.contains(name.as_str())));
                }
            }
            self.in_progress.pop();
            self.structs.insert(
                cfn_name.to_string(),
                StructDef {
                    cfn_name: cfn_name.to_string(),
                    rust_name: rust_name.clone(),
                    description: def.description.clone(),
                    documentation_url: self.names.property_type_url(cfn_name),
                    fields,
                },
            );
        }
        FieldType::Struct {
            rust_name,
            cfn_name: cfn_name.to_string(),
            boxed: false,
        }
    }
}

/// Definitions with declared properties become structs; the rest are inlined
fn is_object_definition(def: &CfnProperty) -> bool {
    def.properties.as_ref().is_some_and(|p| !p.is_empty())
}

fn constraints(prop: &CfnProperty) -> Vec<Constraint> {
    let mut out = Vec::new();
    if let Some(n) = prop.min_length {
        out.push(Constraint::MinLength(n));
    }
    if let Some(n) = prop.max_length {
        out.push(Constraint::MaxLength(n));
    }
    if let Some(n) = prop.minimum {
        out.push(Constraint::Minimum(n));
    }
    if let Some(n) = prop.maximum {
        out.push(Constraint::Maximum(n));
    }
    if let Some(p) = &prop.pattern {
        out.push(Constraint::Pattern(p.clone()));
    }
    if let Some(n) = prop.min_items {
        out.push(Constraint::MinItems(n));
    }
    if let Some(n) = prop.max_items {
        out.push(Constraint::MaxItems(n));
    }
    if prop.unique_items == Some(true) {
        out.push(Constraint::UniqueItems);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(json: &str) -> CfnSchema {
        serde_json::from_str(json).unwrap()
    }

    fn build(json: &str) -> ModuleDef {
        let schema = schema(json);
        let names = TypeName::parse(&schema.type_name).unwrap();
        build_module(&schema, names).unwrap()
    }

    fn field<'a>(def: &'a StructDef, name: &str) -> &'a Field {
        def.fields.iter().find(|f| f.cfn_name == name).unwrap()
    }

    const QUEUE: &str = r##"{
        "typeName": "AWS::SQS::Queue",
        "description": "The AWS::SQS::Queue resource creates an Amazon SQS standard or FIFO queue.",
        "properties": {
            "QueueName": { "type": "string", "description": "A name for the queue." },
            "FifoQueue": { "type": "boolean" },
            "DelaySeconds": { "type": "integer", "minimum": 0, "maximum": 900 },
            "Arn": { "type": "string" },
            "RedrivePolicy": { "type": ["object", "string"] },
            "DeduplicationScope": {
                "type": "string",
                "description": "Valid values are ``messageGroup`` and ``queue``."
            },
            "Tags": {
                "type": "array",
                "uniqueItems": false,
                "items": { "$ref": "#/definitions/Tag" }
            }
        },
        "definitions": {
            "Tag": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "Key": { "type": "string", "minLength": 1, "maxLength": 128 },
                    "Value": { "type": "string" }
                },
                "required": ["Key", "Value"]
            }
        },
        "required": [],
        "readOnlyProperties": ["/properties/Arn"],
        "createOnlyProperties": ["/properties/FifoQueue", "/properties/QueueName"],
        "tagging": { "taggable": true }
    }"##;

    #[test]
    fn test_top_level_fields() {
        let module = build(QUEUE);
        assert_eq!(module.properties.rust_name, "QueueProperties");
        assert_eq!(module.attributes, vec!["Arn"]);
        assert!(module.taggable);

        // Read-only properties are attributes, not properties
        assert!(module.properties.fields.iter().all(|f| f.cfn_name != "Arn"));

        let fifo = field(&module.properties, "FifoQueue");
        assert_eq!(fifo.ty, FieldType::Boolean);
        assert_eq!(fifo.update_requires, Some(UpdateRequires::Replacement));

        let delay = field(&module.properties, "DelaySeconds");
        assert_eq!(delay.update_requires, Some(UpdateRequires::NoInterruption));
        assert_eq!(
            delay.constraints,
            vec![Constraint::Minimum(0.0), Constraint::Maximum(900.0)]
        );

        // Multi-typed properties take the first type
        let redrive = field(&module.properties, "RedrivePolicy");
        assert_eq!(redrive.ty, FieldType::Json);

        let scope = field(&module.properties, "DeduplicationScope");
        assert_eq!(scope.allowed_values, vec!["messageGroup", "queue"]);
    }

    #[test]
    fn test_definitions_become_structs() {
        let module = build(QUEUE);
        let tags = field(&module.properties, "Tags");
        assert_eq!(tags.ty.rust_type(), "Value<Vec<Tag>>");
        assert_eq!(
            tags.ty.kind_expr(),
            "PropertyKind::List(&PropertyKind::Struct(\"Tag\"))"
        );

        assert_eq!(module.property_types.len(), 1);
        let tag = &module.property_types[0];
        assert!(tag.has_required_fields());
        assert!(field(tag, "Key").required);
        assert_eq!(field(tag, "Key").update_requires, None);
        assert_eq!(
            tag.documentation_url,
            "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sqs-queue-tag.html"
        );
    }

    #[test]
    fn test_primitive_definitions_are_inlined() {
        let module = build(
            r##"{
                "typeName": "AWS::Test::Widget",
                "properties": {
                    "Mode": { "$ref": "#/definitions/Mode" },
                    "Ids": { "type": "array", "items": { "$ref": "#/definitions/Id" } }
                },
                "definitions": {
                    "Mode": { "type": "string", "enum": ["FAST", "SLOW"], "description": "Speed." },
                    "Id": { "type": "string", "maxLength": 10 }
                },
                "required": ["Mode"]
            }"##,
        );
        assert!(module.property_types.is_empty());

        let mode = field(&module.properties, "Mode");
        assert_eq!(mode.ty, FieldType::String);
        assert!(mode.required);
        assert_eq!(mode.allowed_values, vec!["FAST", "SLOW"]);
        assert_eq!(mode.description.as_deref(), Some("Speed."));

        let ids = field(&module.properties, "Ids");
        assert_eq!(ids.ty.rust_type(), "Value<Vec<Value<String>>>");
    }

    #[test]
    fn test_maps_and_inline_objects() {
        let module = build(
            r#"{
                "typeName": "AWS::Test::Widget",
                "properties": {
                    "Labels": {
                        "type": "object",
                        "patternProperties": { "^.+$": { "type": "string" } }
                    },
                    "Limits": {
                        "type": "object",
                        "additionalProperties": { "type": "integer" }
                    },
                    "Settings": {
                        "type": "object",
                        "properties": { "Enabled": { "type": "boolean" } }
                    },
                    "Document": { "type": "object" }
                }
            }"#,
        );
        let labels = field(&module.properties, "Labels");
        assert_eq!(labels.ty.rust_type(), "Value<BTreeMap<String, Value<String>>>");

        let limits = field(&module.properties, "Limits");
        assert_eq!(limits.ty.kind_expr(), "PropertyKind::Map(&PropertyKind::Integer)");

        let settings = field(&module.properties, "Settings");
        assert_eq!(settings.ty.rust_type(), "Value<WidgetSettings>");
        assert_eq!(module.property_types[0].cfn_name, "WidgetSettings");

        let document = field(&module.properties, "Document");
        assert_eq!(document.ty.rust_type(), "Json");
    }

    #[test]
    fn test_recursive_definitions_are_boxed() {
        let module = build(
            r##"{
                "typeName": "AWS::Test::Rule",
                "properties": { "Statement": { "$ref": "#/definitions/Statement" } },
                "definitions": {
                    "Statement": {
                        "type": "object",
                        "properties": {
                            "Not": { "$ref": "#/definitions/Statement" },
                            "And": { "type": "array", "items": { "$ref": "#/definitions/Statement" } }
                        }
                    }
                }
            }"##,
        );
        let statement = &module.property_types[0];
        assert_eq!(field(statement, "Not").ty.rust_type(), "Value<Box<Statement>>");
        // Vec already provides indirection
        assert_eq!(field(statement, "And").ty.rust_type(), "Value<Vec<Statement>>");
    }

    #[test]
    fn test_recursive_inlined_definitions_become_json() {
        let module = build(
            r##"{
                "typeName": "AWS::Test::Forest",
                "properties": {
                    "Tree": { "$ref": "#/definitions/Tree" },
                    "Ring": { "$ref": "#/definitions/Ping" }
                },
                "definitions": {
                    "Tree": { "type": "array", "items": { "$ref": "#/definitions/Tree" } },
                    "Ping": { "$ref": "#/definitions/Pong" },
                    "Pong": { "type": "array", "items": { "$ref": "#/definitions/Ping" } }
                }
            }"##,
        );
        assert_eq!(
            field(&module.properties, "Tree").ty,
            FieldType::List(Box::new(FieldType::Json))
        );
        assert_eq!(
            field(&module.properties, "Ring").ty,
            FieldType::List(Box::new(FieldType::Json))
        );
        assert!(module.property_types.is_empty());
    }

    #[test]
    fn test_definition_named_after_resource() {
        let module = build(
            r##"{
                "typeName": "AWS::Test::Widget",
                "properties": { "Layout": { "$ref": "#/definitions/Widget" } },
                "definitions": {
                    "Widget": {
                        "type": "object",
                        "properties": { "Size": { "type": "integer" } }
                    }
                }
            }"##,
        );
        assert_eq!(module.property_types[0].rust_name, "WidgetProperty");
        assert_eq!(module.property_types[0].cfn_name, "Widget");
        assert_eq!(
            field(&module.properties, "Layout").ty.rust_type(),
            "Value<WidgetProperty>"
        );
    }

    #[test]
    fn test_unresolved_ref_falls_back_to_json() {
        let module = build(
            r##"{
                "typeName": "AWS::Test::Widget",
                "properties": { "Thing": { "$ref": "#/definitions/Missing" } }
            }"##,
        );
        assert_eq!(field(&module.properties, "Thing").ty, FieldType::Json);
    }

    #[test]
    fn test_deprecated_properties_skipped() {
        let module = build(
            r#"{
                "typeName": "AWS::Test::Widget",
                "properties": { "Old": { "type": "string" }, "New": { "type": "string" } },
                "deprecatedProperties": ["/properties/Old"]
            }"#,
        );
        assert_eq!(module.properties.fields.len(), 1);
        assert_eq!(module.properties.fields[0].cfn_name, "New");
    }
}
