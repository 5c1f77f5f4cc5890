// SPDX-License-Identifier: MPL-2.0
//! Named component registration.
//!
//! Components install themselves under a tag (`my-header`, `my-footer`) and
//! the page template refers to them by that tag only. The shell decides what
//! gets mounted; a tag nobody registered renders nothing.

/// Reusable page elements that can be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Header,
    Footer,
}

/// One position of the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A registered component, looked up by tag.
    Element(&'static str),
    /// The page's own content.
    Body,
}

/// Page layout: header above the content, footer below.
pub const PAGE_TEMPLATE: [Slot; 3] = [
    Slot::Element("my-header"),
    Slot::Body,
    Slot::Element("my-footer"),
];

#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<(&'static str, ComponentKind)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `kind` under `tag`, replacing any earlier registration.
    pub fn component(&mut self, tag: &'static str, kind: ComponentKind) {
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 = kind,
            None => self.entries.push((tag, kind)),
        }
    }

    pub fn resolve(&self, tag: &str) -> Option<ComponentKind> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, kind)| *kind)
    }

    /// Template tags with no registered component.
    pub fn unresolved(&self, template: &[Slot]) -> Vec<&'static str> {
        template
            .iter()
            .filter_map(|slot| match slot {
                Slot::Element(tag) if self.resolve(tag).is_none() => Some(*tag),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_finds_registered_component() {
        let mut registry = Registry::new();
        registry.component("my-header", ComponentKind::Header);
        assert_eq!(registry.resolve("my-header"), Some(ComponentKind::Header));
        assert_eq!(registry.resolve("my-footer"), None);
    }

    #[test]
    fn registering_same_tag_replaces() {
        let mut registry = Registry::new();
        registry.component("my-footer", ComponentKind::Header);
        registry.component("my-footer", ComponentKind::Footer);
        assert_eq!(registry.resolve("my-footer"), Some(ComponentKind::Footer));
    }

    #[test]
    fn unresolved_lists_missing_template_tags() {
        let mut registry = Registry::new();
        registry.component("my-header", ComponentKind::Header);
        assert_eq!(registry.unresolved(&PAGE_TEMPLATE), vec!["my-footer"]);
    }
}
