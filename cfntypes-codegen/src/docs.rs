//! Description text handling: doc comment lines, catalog summaries, and
//! allowed values hidden in descriptions

use std::collections::HashSet;

use regex::Regex;

/// Normalize a schema description into doc comment lines.
/// Indentation and code fences are dropped so rustdoc never sees a doctest.
pub fn doc_lines(description: &str) -> Vec<String> {
    let mut lines: Vec<String> = description
        .lines()
        .map(|line| line.trim().replace("```", "``"))
        .collect();
    while lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Single-line summary of a description, cut at `max_len` characters
pub fn summary(description: &str, max_len: usize) -> String {
    let flattened = description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flattened.chars().count() > max_len {
        let cut: String = flattened.chars().take(max_len).collect();
        format!("{}...", cut.trim_end())
    } else {
        flattened
    }
}

/// Check if a string looks like a property name (CamelCase or PascalCase)
/// rather than an enum value (lowercase, kebab-case, or UPPER_CASE)
fn looks_like_property_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        // Property names start with uppercase and contain mixed case
        // e.g., "InstanceTenancy", "VpcId"
        Some(first) if first.is_uppercase() => s.chars().any(|c| c.is_lowercase()),
        _ => false,
    }
}

/// Extract enum values from description text.
/// Looks for patterns like ``value`` (double backticks) which CloudFormation uses
/// to indicate allowed values in descriptions.
pub fn extract_enum_from_description(description: &str) -> Option<Vec<String>> {
    let re = Regex::new(r"``([^`]+)``").ok()?;
    let mut seen = HashSet::new();
    let values: Vec<String> = re
        .captures_iter(description)
        .map(|cap| cap[1].to_string())
        // Filter out property names (CamelCase) as they're not enum values
        .filter(|v| !looks_like_property_name(v))
        // Values with spaces are prose, values with '/' are paths or CIDR examples
        .filter(|v| !v.contains(char::is_whitespace) && !v.contains('/'))
        .filter(|v| seen.insert(v.clone()))
        .collect();

    // At least 2 distinct values indicate an enum
    if values.len() >= 2 { Some(values) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_property_name() {
        // CamelCase property names should be detected
        assert!(looks_like_property_name("InstanceTenancy"));
        assert!(looks_like_property_name("VpcId"));
        assert!(looks_like_property_name("CidrBlock"));

        // Enum values should not be detected as property names
        assert!(!looks_like_property_name("default"));
        assert!(!looks_like_property_name("dedicated"));
        assert!(!looks_like_property_name("host"));

        // Edge cases
        assert!(!looks_like_property_name(""));
        assert!(!looks_like_property_name("UPPERCASE")); // All uppercase, no lowercase
    }

    #[test]
    fn test_extract_enum_from_description_instance_tenancy() {
        let description = r#"The allowed tenancy of instances launched into the VPC.
  +  ``default``: An instance launched into the VPC runs on shared hardware by default.
  +  ``dedicated``: An instance launched into the VPC runs on dedicated hardware by default.
  +  ``host``: Some description.
 Updating ``InstanceTenancy`` requires no replacement."#;

        let values = extract_enum_from_description(description).unwrap();
        assert_eq!(values, vec!["default", "dedicated", "host"]);
    }

    #[test]
    fn test_extract_enum_from_description_single_value() {
        // Only one value should not be treated as enum
        let description = "Set to ``true`` to enable.";
        assert!(extract_enum_from_description(description).is_none());
    }

    #[test]
    fn test_extract_enum_from_description_no_backticks() {
        let description = "A regular description without any special formatting.";
        assert!(extract_enum_from_description(description).is_none());
    }

    #[test]
    fn test_extract_enum_from_description_deduplication() {
        // Same value mentioned multiple times should be deduplicated
        let description =
            r#"Use ``enabled`` or ``disabled``. When ``enabled`` is set, the feature activates."#;
        let values = extract_enum_from_description(description).unwrap();
        assert_eq!(values, vec!["enabled", "disabled"]);
    }

    #[test]
    fn test_extract_enum_ignores_prose() {
        let description = "For example ``my queue name`` or ``another one``.";
        assert!(extract_enum_from_description(description).is_none());
    }

    #[test]
    fn test_extract_enum_ignores_cidr_examples() {
        let description = "For example, ``10.0.0.0/16``. We modify ``100.68.0.18/18`` to ``100.68.0.0/18``.";
        assert!(extract_enum_from_description(description).is_none());
    }

    #[test]
    fn test_doc_lines_trims_blank_edges() {
        let lines = doc_lines("\nFirst line.  \n\nSecond paragraph.\n\n");
        assert_eq!(lines, vec!["First line.", "", "Second paragraph."]);
    }

    #[test]
    fn test_doc_lines_drops_code_blocks() {
        let lines = doc_lines("Example:\n    aws sqs list-queues\n```json\n{}\n```");
        assert_eq!(
            lines,
            vec!["Example:", "aws sqs list-queues", "``json", "{}", "``"]
        );
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary("Short\n  text.", 50), "Short text.");
        assert_eq!(summary("abcdefghij", 4), "abcd...");
    }
}
