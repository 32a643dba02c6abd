//! Style description: declarations plus nested selector rules.
//!
//! A [`Style`] is what every layout generator returns. It mirrors the nested
//! object shape CSS-in-JS engines consume: properties of the element itself,
//! followed by nested rules keyed by selectors relative to the element
//! (`&:last-child`, `&:nth-child(3n)`, `& > *`).

use indexmap::IndexMap;

/// A single CSS property declaration, e.g. `margin-right: 30px`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name, e.g. `"margin-right"`.
    pub property: String,
    /// The property value, e.g. `"30px"`.
    pub value: String,
    /// Whether `!important` is appended.
    pub important: bool,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>, important: bool) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important,
        }
    }

    /// The value as written in CSS, including the `!important` flag.
    pub fn css_value(&self) -> String {
        if self.important {
            format!("{} !important", self.value)
        } else {
            self.value.clone()
        }
    }
}

/// A nested style description.
///
/// Declarations and nested rules both keep insertion order. Declaring a
/// property twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<Declaration>,
    rules: IndexMap<String, Style>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::push`].
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Declaration::new(property, value, false));
        self
    }

    /// Declare a property with `!important`.
    pub fn declare_important(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.push(Declaration::new(property, value, true));
        self
    }

    /// Add a declaration, replacing any earlier one for the same property.
    pub fn push(&mut self, declaration: Declaration) {
        match self
            .declarations
            .iter_mut()
            .find(|d| d.property == declaration.property)
        {
            Some(existing) => *existing = declaration,
            None => self.declarations.push(declaration),
        }
    }

    /// Attach a nested rule. Empty rules are dropped; a selector used twice
    /// has its declarations merged into the first occurrence.
    pub fn nest(mut self, selector: impl Into<String>, style: Style) -> Self {
        if style.is_empty() {
            return self;
        }
        let selector = selector.into();
        match self.rules.get_mut(&selector) {
            Some(existing) => existing.extend(style),
            None => {
                self.rules.insert(selector, style);
            }
        }
        self
    }

    /// Merge another style into this one: its declarations override, its
    /// nested rules are appended or merged.
    pub fn extend(&mut self, other: Style) {
        for declaration in other.declarations {
            self.push(declaration);
        }
        for (selector, style) in other.rules {
            let merged = std::mem::take(self).nest(selector, style);
            *self = merged;
        }
    }

    /// Look up a property's value (without `!important`).
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Look up a nested rule by its selector.
    pub fn rule(&self, selector: &str) -> Option<&Style> {
        self.rules.get(selector)
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Nested rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if there are neither declarations nor nested rules.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.rules.is_empty()
    }

    /// Returns `true` if this style or any nested rule declares `property`.
    pub fn mentions(&self, property: &str) -> bool {
        self.get(property).is_some() || self.rules.values().any(|r| r.mentions(property))
    }
}
