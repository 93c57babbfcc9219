//! Verification of tool identities.
//!
//! The registry relies on four invariants over the discovered tool set:
//!
//! 1. at most one tool has no URL name (the top-level tool),
//! 2. no two tools share a URL name,
//! 3. no two tools share a name,
//! 4. no tool has an empty URL name.
//!
//! [`validate`] reports every violation. It is not run on server startup;
//! the `verify-tools` binary and the test suite run it so that an
//! inconsistent tool set never ships.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::contract::Tool;

/// Which invariant a defect violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Two tools share a name.
    DuplicateName,
    /// Two tools share a URL name.
    DuplicateUrlName,
    /// More than one tool has no URL name.
    MultipleTopLevel,
    /// A tool has an empty URL name.
    EmptyUrlName,
}

/// A single invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    pub criterion: Criterion,
    /// Type that first claimed the value (or the offending type for
    /// [`Criterion::EmptyUrlName`]).
    pub original: &'static str,
    /// Type that claimed it again.
    pub duplicate: Option<&'static str>,
    /// The contested value, when there is one.
    pub value: Option<&'static str>,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duplicate = self.duplicate.unwrap_or("?");
        let value = self.value.unwrap_or("");
        match self.criterion {
            Criterion::DuplicateName => write!(
                f,
                "The tool name \"{value}\" is used more than once: first by {}, again by {duplicate}.",
                self.original
            ),
            Criterion::DuplicateUrlName => write!(
                f,
                "The tool URL \"{value}\" is used more than once: first by {}, again by {duplicate}.",
                self.original
            ),
            Criterion::MultipleTopLevel => write!(
                f,
                "Two tools, {} and {duplicate}, have no URL name. Only one tool can be the top-level tool.",
                self.original
            ),
            Criterion::EmptyUrlName => write!(
                f,
                "The tool {} has an empty URL name. To make it the top-level tool, return None instead.",
                self.original
            ),
        }
    }
}

/// A tool set that failed verification.
#[derive(Debug, Error)]
#[error("{} tool invariant violation(s):\n{}", .defects.len(), render(.defects))]
pub struct InvalidToolSet {
    pub defects: Vec<Defect>,
}

fn render(defects: &[Defect]) -> String {
    defects
        .iter()
        .map(|defect| format!("  - {defect}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check every invariant and return all violations found.
pub fn validate(tools: &[Arc<dyn Tool>]) -> Vec<Defect> {
    let mut defects = duplicates(tools, |t| t.name(), Criterion::DuplicateName);
    defects.extend(duplicates(tools, |t| t.url_name(), Criterion::DuplicateUrlName));

    let mut top_level: Option<&'static str> = None;
    for tool in tools {
        match tool.url_name() {
            None => match top_level {
                Some(first) => defects.push(Defect {
                    criterion: Criterion::MultipleTopLevel,
                    original: first,
                    duplicate: Some(tool.type_name()),
                    value: None,
                }),
                None => top_level = Some(tool.type_name()),
            },
            Some("") => defects.push(Defect {
                criterion: Criterion::EmptyUrlName,
                original: tool.type_name(),
                duplicate: None,
                value: Some(""),
            }),
            Some(_) => {}
        }
    }

    defects
}

/// Validate and fail with a report if any invariant is violated.
pub fn verify(tools: &[Arc<dyn Tool>]) -> Result<(), InvalidToolSet> {
    let defects = validate(tools);
    if defects.is_empty() {
        Ok(())
    } else {
        Err(InvalidToolSet { defects })
    }
}

/// Scan for tools that repeat a non-null criterion value.
fn duplicates(
    tools: &[Arc<dyn Tool>],
    criterion: impl Fn(&dyn Tool) -> Option<&'static str>,
    kind: Criterion,
) -> Vec<Defect> {
    let mut seen: HashMap<&'static str, &'static str> = HashMap::new();
    let mut defects = Vec::new();

    for tool in tools {
        let Some(value) = criterion(&**tool) else {
            continue;
        };
        match seen.get(value) {
            Some(first) => defects.push(Defect {
                criterion: kind,
                original: *first,
                duplicate: Some(tool.type_name()),
                value: Some(value),
            }),
            None => {
                seen.insert(value, tool.type_name());
            }
        }
    }

    defects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{FixtureTool, tool_set};

    fn criteria(defects: &[Defect]) -> Vec<Criterion> {
        defects.iter().map(|d| d.criterion).collect()
    }

    #[test]
    fn test_clean_set_has_no_defects() {
        let tools = tool_set(vec![
            FixtureTool::new("Home", None, None),
            FixtureTool::new("Css", None, Some("css")),
            FixtureTool::new("Base64", Some("Base64"), Some("base64")),
        ]);
        assert!(validate(&tools).is_empty());
        assert!(verify(&tools).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let tools = tool_set(vec![
            FixtureTool::new("First", Some("Same"), Some("first")),
            FixtureTool::new("Second", Some("Same"), Some("second")),
        ]);
        let defects = validate(&tools);
        assert_eq!(
            defects,
            vec![Defect {
                criterion: Criterion::DuplicateName,
                original: "First",
                duplicate: Some("Second"),
                value: Some("Same"),
            }]
        );
    }

    #[test]
    fn test_duplicate_url_name() {
        let tools = tool_set(vec![
            FixtureTool::new("First", Some("First"), Some("same")),
            FixtureTool::new("Second", Some("Second"), Some("same")),
        ]);
        let defects = validate(&tools);
        assert_eq!(criteria(&defects), vec![Criterion::DuplicateUrlName]);
        assert_eq!(defects[0].original, "First");
        assert_eq!(defects[0].duplicate, Some("Second"));
    }

    #[test]
    fn test_two_top_level_tools() {
        let tools = tool_set(vec![
            FixtureTool::new("Home", Some("Home"), None),
            FixtureTool::new("Other", Some("Other"), None),
        ]);
        let defects = validate(&tools);
        assert_eq!(criteria(&defects), vec![Criterion::MultipleTopLevel]);
        assert_eq!(defects[0].original, "Home");
        assert_eq!(defects[0].duplicate, Some("Other"));
    }

    #[test]
    fn test_every_extra_top_level_tool_is_reported() {
        let tools = tool_set(vec![
            FixtureTool::new("A", Some("A"), None),
            FixtureTool::new("B", Some("B"), None),
            FixtureTool::new("C", Some("C"), None),
        ]);
        let defects = validate(&tools);
        assert_eq!(defects.len(), 2);
        assert!(defects.iter().all(|d| d.original == "A"));
    }

    #[test]
    fn test_empty_url_name_alone_is_a_defect() {
        let tools = tool_set(vec![FixtureTool::new("Blank", Some("Blank"), Some(""))]);
        let defects = validate(&tools);
        assert_eq!(criteria(&defects), vec![Criterion::EmptyUrlName]);
        assert_eq!(defects[0].original, "Blank");
    }

    #[test]
    fn test_null_names_never_collide() {
        let tools = tool_set(vec![
            FixtureTool::new("Home", None, None),
            FixtureTool::new("Css", None, Some("css")),
            FixtureTool::new("Js", None, Some("js")),
        ]);
        assert!(validate(&tools).is_empty());
    }

    #[test]
    fn test_verify_report_names_types_and_criterion() {
        let tools = tool_set(vec![
            FixtureTool::new("Home", None, None),
            FixtureTool::new("Blank", Some("Blank"), Some("")),
        ]);
        let err = verify(&tools).unwrap_err();
        let report = err.to_string();
        assert!(report.starts_with("1 tool invariant violation(s)"));
        assert!(report.contains("Blank"));
        assert!(report.contains("empty URL name"));
    }
}
