//! Selector matching for log targets.
//!
//! # Responsibilities
//! - Parse a small selector subset: `tag`, `*`, `#id`, `.class`
//! - Compound selectors combine simple ones with AND semantics
//! - Whitespace is the descendant combinator, `,` separates alternatives
//!
//! # Design Decisions
//! - Tag matching is case-insensitive, id and class matching are not
//! - Anything outside the subset is a parse error rather than a silent
//!   non-match, so bad config is caught at load time

use std::fmt;
use thiserror::Error;

use crate::dom::{Document, NodeId};

/// Error raised for selector text outside the supported subset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported character {found:?} in selector {selector:?}")]
    Unsupported { selector: String, found: char },

    #[error("expected a name after {prefix:?} in selector {selector:?}")]
    MissingName { selector: String, prefix: char },
}

/// Trait for matching a single element against a condition.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns true if the element matches this condition.
    fn matches(&self, doc: &Document, node: NodeId) -> bool;
}

/// Matches the tag name.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    name: String,
}

impl TagMatcher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
        }
    }
}

impl Matcher for TagMatcher {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        doc.element(node).is_some_and(|e| e.name() == self.name)
    }
}

/// Matches the `id` attribute.
#[derive(Debug, Clone)]
pub struct IdMatcher {
    id: String,
}

impl IdMatcher {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Matcher for IdMatcher {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        doc.element(node).and_then(|e| e.id()) == Some(self.id.as_str())
    }
}

/// Matches one entry of the `class` attribute.
#[derive(Debug, Clone)]
pub struct ClassMatcher {
    class: String,
}

impl ClassMatcher {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl Matcher for ClassMatcher {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        doc.element(node).is_some_and(|e| e.has_class(&self.class))
    }
}

/// Combines matchers with AND semantics. Empty matches any element.
#[derive(Debug, Default)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        doc.element(node).is_some() && self.matchers.iter().all(|m| m.matches(doc, node))
    }
}

/// Compound selectors joined by descendant combinators, outermost first.
#[derive(Debug)]
struct DescendantChain {
    compounds: Vec<AndMatcher>,
}

impl DescendantChain {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(doc, node) {
            return false;
        }
        // Greedy is exact for descendant-only chains.
        let mut remaining = ancestors.iter().rev().peekable();
        for ancestor in node.ancestors(doc.arena()).skip(1) {
            match remaining.peek() {
                Some(compound) if compound.matches(doc, ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }
}

/// A parsed selector list.
#[derive(Debug)]
pub struct Selector {
    source: String,
    alternatives: Vec<DescendantChain>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for part in source.split(',') {
            let compounds = part
                .split_ascii_whitespace()
                .map(|compound| parse_compound(source, compound))
                .collect::<Result<Vec<_>, _>>()?;
            if compounds.is_empty() {
                return Err(SelectorError::Empty);
            }
            alternatives.push(DescendantChain { compounds });
        }
        Ok(Self {
            source: source.trim().to_string(),
            alternatives,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.alternatives.iter().any(|chain| chain.matches(doc, node))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(selector: &str, compound: &str) -> Result<AndMatcher, SelectorError> {
    let mut matchers: Vec<Box<dyn Matcher>> = Vec::new();
    let mut rest = compound;

    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else {
        let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        if end > 0 {
            matchers.push(Box::new(TagMatcher::new(&rest[..end])));
            rest = &rest[end..];
        }
    }

    while let Some(prefix) = rest.chars().next() {
        if prefix != '#' && prefix != '.' {
            return Err(SelectorError::Unsupported {
                selector: selector.to_string(),
                found: prefix,
            });
        }
        let body = &rest[1..];
        let end = body.find(|c: char| !is_name_char(c)).unwrap_or(body.len());
        if end == 0 {
            return Err(SelectorError::MissingName {
                selector: selector.to_string(),
                prefix,
            });
        }
        let name = &body[..end];
        if prefix == '#' {
            matchers.push(Box::new(IdMatcher::new(name)));
        } else {
            matchers.push(Box::new(ClassMatcher::new(name)));
        }
        rest = &body[end..];
    }

    Ok(AndMatcher::new(matchers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn doc() -> Document {
        parse_html(
            r#"<div id="outer" class="panel"><p class="note">a</p><section><p id="deep" class="note wide">b</p></section></div><p class="note">c</p>"#,
        )
        .unwrap()
    }

    fn ids(doc: &Document, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector)
            .into_iter()
            .map(|n| doc.attr(n, "id").unwrap_or("-").to_string())
            .collect()
    }

    #[test]
    fn test_simple_selectors() {
        let doc = doc();
        assert_eq!(ids(&doc, "#outer"), vec!["outer"]);
        assert_eq!(ids(&doc, "p.wide"), vec!["deep"]);
        assert_eq!(ids(&doc, ".note").len(), 3);
        assert_eq!(ids(&doc, "SECTION").len(), 1);
    }

    #[test]
    fn test_descendant_and_list() {
        let doc = doc();
        assert_eq!(ids(&doc, "#outer .note").len(), 2);
        assert_eq!(ids(&doc, ".panel section p"), vec!["deep"]);
        assert_eq!(ids(&doc, "section #outer").len(), 0);
        assert_eq!(ids(&doc, "#deep, #outer"), vec!["outer", "deep"]);
    }

    #[test]
    fn test_rejects_unsupported_syntax() {
        assert_eq!(Selector::parse("  ").unwrap_err(), SelectorError::Empty);
        assert!(matches!(
            Selector::parse("div > p"),
            Err(SelectorError::Unsupported { found: '>', .. })
        ));
        assert!(matches!(
            Selector::parse("a[href]"),
            Err(SelectorError::Unsupported { found: '[', .. })
        ));
        assert!(matches!(
            Selector::parse("div."),
            Err(SelectorError::MissingName { prefix: '.', .. })
        ));
    }
}
