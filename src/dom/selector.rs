//! Minimal CSS selector matching for snapshot lookups.
//!
//! Supports type (`rect`), id (`#x-axis`), class (`.bar`) and universal
//! (`*`) selectors, compounds of those (`g.tick`), descendant combinators
//! (`#x-axis .tick`) and comma-separated groups (`circle, rect`).

use crate::dom::DomElement;
use crate::error::{AlignError, AlignResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(raw: &str) -> AlignResult<Self> {
        let mut compound = Self::default();
        let mut current_kind: Option<char> = None;
        let mut current = String::new();

        for ch in raw.chars() {
            match ch {
                '#' | '.' => {
                    compound.push_part(current_kind, std::mem::take(&mut current), raw)?;
                    current_kind = Some(ch);
                }
                '*' if current.is_empty() && current_kind.is_none() => {
                    current_kind = Some('*');
                }
                ch if ch.is_alphanumeric() || ch == '-' || ch == '_' => current.push(ch),
                _ => {
                    return Err(AlignError::InvalidData(format!(
                        "unsupported character `{ch}` in selector `{raw}`"
                    )));
                }
            }
        }
        compound.push_part(current_kind, current, raw)?;
        Ok(compound)
    }

    fn push_part(&mut self, kind: Option<char>, value: String, raw: &str) -> AlignResult<()> {
        match kind {
            Some('*') => {}
            None if value.is_empty() => {}
            None => self.tag = Some(value),
            Some(_) if value.is_empty() => {
                return Err(AlignError::InvalidData(format!(
                    "empty id or class in selector `{raw}`"
                )));
            }
            Some('#') => self.id = Some(value),
            Some(_) => self.classes.push(value),
        }
        Ok(())
    }

    fn matches<E: DomElement>(&self, element: &E) -> bool {
        self.tag.as_deref().is_none_or(|tag| element.is_tag(tag))
            && self.id.as_deref().is_none_or(|id| element.id() == Some(id))
            && self.classes.iter().all(|class| element.has_class(class))
    }
}

/// A parsed selector group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Vec<Compound>>,
}

impl Selector {
    pub fn parse(raw: &str) -> AlignResult<Self> {
        let mut alternatives = Vec::new();
        for alternative in raw.split(',') {
            let chain = alternative
                .split_whitespace()
                .map(Compound::parse)
                .collect::<AlignResult<Vec<_>>>()?;
            if chain.is_empty() {
                return Err(AlignError::InvalidData(format!("empty selector in `{raw}`")));
            }
            alternatives.push(chain);
        }
        Ok(Self { alternatives })
    }

    /// Matches `element` given its ancestors, nearest last.
    fn matches_with_ancestors<E: DomElement>(&self, element: &E, ancestors: &[&E]) -> bool {
        self.alternatives
            .iter()
            .any(|chain| chain_matches(chain, element, ancestors))
    }
}

fn chain_matches<E: DomElement>(chain: &[Compound], element: &E, ancestors: &[&E]) -> bool {
    let Some((last, preceding)) = chain.split_last() else {
        return false;
    };
    if !last.matches(element) {
        return false;
    }

    let mut remaining = preceding.iter().rev().peekable();
    for ancestor in ancestors.iter().rev() {
        if remaining.peek().is_none() {
            break;
        }
        if remaining
            .peek()
            .is_some_and(|compound| compound.matches(*ancestor))
        {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}

/// All descendants of `root` matching `selector`, in document order.
pub fn select_all<'a, E: DomElement>(root: &'a E, selector: &str) -> AlignResult<Vec<&'a E>> {
    let selector = Selector::parse(selector)?;
    let mut ancestors = vec![root];
    let mut out = Vec::new();
    collect(root, &mut ancestors, &selector, &mut out);
    Ok(out)
}

/// First descendant of `root` matching `selector`.
pub fn select_first<'a, E: DomElement>(root: &'a E, selector: &str) -> AlignResult<Option<&'a E>> {
    Ok(select_all(root, selector)?.into_iter().next())
}

fn collect<'a, E: DomElement>(
    node: &'a E,
    ancestors: &mut Vec<&'a E>,
    selector: &Selector,
    out: &mut Vec<&'a E>,
) {
    for child in node.child_elements() {
        if selector.matches_with_ancestors(child, ancestors) {
            out.push(child);
        }
        ancestors.push(child);
        collect(child, ancestors, selector, out);
        ancestors.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::{Selector, select_all};
    use crate::dom::{DomElement, ElementSnapshot};

    fn page() -> ElementSnapshot {
        ElementSnapshot::new("body").with_child(
            ElementSnapshot::new("svg")
                .with_child(
                    ElementSnapshot::new("g")
                        .with_id("x-axis")
                        .with_child(ElementSnapshot::tick("translate(0,0)", "1"))
                        .with_child(ElementSnapshot::tick("translate(10,0)", "2")),
                )
                .with_child(
                    ElementSnapshot::new("g")
                        .with_id("y-axis")
                        .with_child(ElementSnapshot::tick("translate(0,5)", "9")),
                )
                .with_child(ElementSnapshot::rect(1.0, 2.0, 3.0, 4.0).with_class("bar"))
                .with_child(ElementSnapshot::circle(1.0, 2.0, 3.0).with_class("dot")),
        )
    }

    #[test]
    fn descendant_combinator_scopes_to_ancestor() {
        let page = page();
        let ticks = select_all(&page, "#x-axis .tick").expect("selector");
        assert_eq!(ticks.len(), 2);
        let all_ticks = select_all(&page, "g.tick").expect("selector");
        assert_eq!(all_ticks.len(), 3);
    }

    #[test]
    fn selector_groups_preserve_document_order() {
        let page = page();
        let marks = select_all(&page, ".dot, rect").expect("selector");
        let tags: Vec<&str> = marks.iter().map(|node| node.tag_name()).collect();
        assert_eq!(tags, vec!["rect", "circle"]);
    }

    #[test]
    fn unsupported_syntax_is_rejected() {
        assert!(Selector::parse("rect[x]").is_err());
        assert!(Selector::parse("g.").is_err());
        assert!(Selector::parse(" , rect").is_err());
    }
}
