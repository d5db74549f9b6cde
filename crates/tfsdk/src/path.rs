//! Attribute paths used to point diagnostics at a specific attribute.

use std::fmt;

/// One step in an [`AttributePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// A named attribute of an object.
    Attribute(String),
    /// A position inside a list.
    Index(usize),
}

/// Location of an attribute inside a resource or provider payload.
///
/// Renders as `credits.refill.interval` or `ratelimits[0].name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// The empty path, pointing at the payload itself.
    #[must_use]
    pub const fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// Shorthand for a top-level attribute path.
    #[must_use]
    pub fn attribute_root(name: impl Into<String>) -> Self {
        Self::root().attribute(name)
    }

    /// Returns a new path extended with a named attribute.
    #[must_use]
    pub fn attribute(&self, name: impl Into<String>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(PathStep::Attribute(name.into()));
        Self { steps }
    }

    /// Returns a new path extended with a list index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(PathStep::Index(index));
        Self { steps }
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// The individual steps of the path.
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("<root>");
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => f.write_str(name)?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_path() {
        let path = AttributePath::attribute_root("ratelimits")
            .index(2)
            .attribute("name");
        assert_eq!(path.to_string(), "ratelimits[2].name");
    }

    #[test]
    fn test_display_root() {
        assert_eq!(AttributePath::root().to_string(), "<root>");
        assert!(AttributePath::root().is_root());
    }
}
