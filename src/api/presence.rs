//! Thin structural predicates used by non-chart project checks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dom::{DomElement, select_all};
use crate::error::AlignResult;

/// One rule of a captured stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CssRule {
    Style {
        selector: String,
        #[serde(default)]
        declarations: IndexMap<String, String>,
    },
    Media {
        condition: String,
        #[serde(default)]
        rules: Vec<CssRule>,
    },
}

impl CssRule {
    #[must_use]
    pub fn style<'a>(
        selector: impl Into<String>,
        declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self::Style {
            selector: selector.into(),
            declarations: declarations
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        }
    }

    #[must_use]
    pub fn media(condition: impl Into<String>, rules: Vec<CssRule>) -> Self {
        Self::Media {
            condition: condition.into(),
            rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleSheetSnapshot {
    #[serde(default)]
    pub rules: Vec<CssRule>,
}

impl StyleSheetSnapshot {
    #[must_use]
    pub fn new(rules: Vec<CssRule>) -> Self {
        Self { rules }
    }

    fn media_conditions(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_media_conditions(&self.rules, &mut out);
        out
    }
}

fn collect_media_conditions<'a>(rules: &'a [CssRule], out: &mut Vec<&'a str>) {
    for rule in rules {
        if let CssRule::Media { condition, rules } = rule {
            out.push(condition.as_str());
            collect_media_conditions(rules, out);
        }
    }
}

pub fn element_exists<E: DomElement>(root: &E, selector: &str) -> AlignResult<bool> {
    Ok(count_matching(root, selector)? > 0)
}

pub fn count_matching<E: DomElement>(root: &E, selector: &str) -> AlignResult<usize> {
    Ok(select_all(root, selector)?.len())
}

#[must_use]
pub fn has_tag<E: DomElement>(element: &E, tag: &str) -> bool {
    element.is_tag(tag)
}

#[must_use]
pub fn has_class<E: DomElement>(element: &E, class: &str) -> bool {
    element.has_class(class)
}

#[must_use]
pub fn attribute_present<E: DomElement>(element: &E, name: &str) -> bool {
    element.attribute(name).is_some()
}

#[must_use]
pub fn attribute_equals<E: DomElement>(element: &E, name: &str, expected: &str) -> bool {
    element.attribute(name) == Some(expected)
}

/// Compares trimmed text content, collapsing inner whitespace runs.
#[must_use]
pub fn text_matches<E: DomElement>(element: &E, expected: &str) -> bool {
    collapse_whitespace(&element.text_content()) == collapse_whitespace(expected)
}

/// True when any sheet declares at least one `@media` rule.
#[must_use]
pub fn has_media_query(sheets: &[StyleSheetSnapshot]) -> bool {
    sheets
        .iter()
        .any(|sheet| !sheet.media_conditions().is_empty())
}

/// True when a `@media` condition contains `query`, ignoring case and spacing.
#[must_use]
pub fn media_query_matches(sheets: &[StyleSheetSnapshot], query: &str) -> bool {
    let needle = normalize_media(query);
    sheets.iter().any(|sheet| {
        sheet
            .media_conditions()
            .into_iter()
            .any(|condition| normalize_media(condition).contains(&needle))
    })
}

/// Value of `property` on the last top-level rule for `selector`.
#[must_use]
pub fn style_property<'a>(
    sheets: &'a [StyleSheetSnapshot],
    selector: &str,
    property: &str,
) -> Option<&'a str> {
    let selector = collapse_whitespace(selector);
    sheets
        .iter()
        .flat_map(|sheet| sheet.rules.iter())
        .filter_map(|rule| match rule {
            CssRule::Style {
                selector: rule_selector,
                declarations,
            } if rule_selector
                .split(',')
                .any(|candidate| collapse_whitespace(candidate) == selector) =>
            {
                declarations.get(property).map(String::as_str)
            }
            _ => None,
        })
        .last()
}

#[must_use]
pub fn style_rule_has_property(
    sheets: &[StyleSheetSnapshot],
    selector: &str,
    property: &str,
) -> bool {
    style_property(sheets, selector, property).is_some()
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_media(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
