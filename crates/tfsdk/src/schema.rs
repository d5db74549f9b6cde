//! Declarative schemas for providers and resources.
//!
//! A schema lists every attribute with its type, whether it is required,
//! optional or computed, its validators and its plan modifiers. The host
//! uses it to build plans; [`Schema::validate`] evaluates the declared
//! validators against a configuration payload.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use parking_lot::Mutex;
use regex::Regex;

use crate::diag::{Diagnostic, Diagnostics};
use crate::path::AttributePath;
use crate::value::Value;

/// Schema for a provider configuration block or a resource.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Schema version, bumped when the state layout changes
    pub version: i64,
    /// Markdown description
    pub description: String,
    /// Attributes by name
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Creates a version 0 schema with a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            version: 0,
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute, builder style.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Looks up a top-level attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Checks a configuration payload against required flags and validators.
    #[must_use]
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validate_object(&self.attributes, config, &AttributePath::root(), &mut diags);
        diags
    }
}

fn validate_object(
    attributes: &BTreeMap<String, Attribute>,
    value: &Value,
    path: &AttributePath,
    diags: &mut Diagnostics,
) {
    if value.is_unknown() || value.is_null() {
        return;
    }
    for (name, attribute) in attributes {
        let attr_path = path.attribute(name);
        let attr_value = value.get(name).unwrap_or(&Value::Null);
        attribute.validate(attr_value, &attr_path, diags);
    }
}

/// Attribute type.
#[derive(Debug, Clone)]
pub enum AttributeKind {
    /// String
    String,
    /// 64-bit integer
    Int64,
    /// Boolean
    Bool,
    /// List of primitive elements
    List(Box<AttributeKind>),
    /// A single nested object
    SingleNested(BTreeMap<String, Attribute>),
    /// A list of nested objects
    ListNested(BTreeMap<String, Attribute>),
}

/// A schema attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Attribute type
    pub kind: AttributeKind,
    /// Markdown description
    pub description: String,
    /// Must be set in configuration
    pub required: bool,
    /// May be set in configuration
    pub optional: bool,
    /// Set by the provider
    pub computed: bool,
    /// Hidden from plan output and logs
    pub sensitive: bool,
    /// Validators run against configured values
    pub validators: Vec<Validator>,
    /// Plan modifiers
    pub plan_modifiers: Vec<PlanModifier>,
}

impl Attribute {
    fn of(kind: AttributeKind) -> Self {
        Self {
            kind,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
        }
    }

    /// A string attribute.
    #[must_use]
    pub fn string() -> Self {
        Self::of(AttributeKind::String)
    }

    /// An int64 attribute.
    #[must_use]
    pub fn int64() -> Self {
        Self::of(AttributeKind::Int64)
    }

    /// A bool attribute.
    #[must_use]
    pub fn bool() -> Self {
        Self::of(AttributeKind::Bool)
    }

    /// A list of strings.
    #[must_use]
    pub fn string_list() -> Self {
        Self::of(AttributeKind::List(Box::new(AttributeKind::String)))
    }

    /// A single nested object.
    #[must_use]
    pub fn single_nested(attributes: impl IntoIterator<Item = (&'static str, Self)>) -> Self {
        Self::of(AttributeKind::SingleNested(
            attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        ))
    }

    /// A list of nested objects.
    #[must_use]
    pub fn list_nested(attributes: impl IntoIterator<Item = (&'static str, Self)>) -> Self {
        Self::of(AttributeKind::ListNested(
            attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        ))
    }

    /// Marks the attribute required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the attribute optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the attribute computed.
    #[must_use]
    pub const fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Marks the attribute sensitive.
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Adds a plan modifier.
    #[must_use]
    pub fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }

    /// Whether a change to this attribute forces the resource to be replaced.
    #[must_use]
    pub fn requires_replace(&self) -> bool {
        self.plan_modifiers.contains(&PlanModifier::RequiresReplace)
    }

    /// Nested attributes for nested kinds.
    #[must_use]
    pub const fn nested_attributes(&self) -> Option<&BTreeMap<String, Self>> {
        match &self.kind {
            AttributeKind::SingleNested(attrs) | AttributeKind::ListNested(attrs) => Some(attrs),
            _ => None,
        }
    }

    fn validate(&self, value: &Value, path: &AttributePath, diags: &mut Diagnostics) {
        if value.is_unknown() {
            return;
        }
        if value.is_null() {
            if self.required {
                diags.add_attribute_error(
                    path.clone(),
                    "Missing Configuration for Required Attribute",
                    format!("Must set a configuration value for the {path} attribute."),
                );
            }
            return;
        }

        for validator in &self.validators {
            if let Some(diag) = validator.validate(value, path) {
                diags.push(diag);
            }
        }

        match (&self.kind, value) {
            (AttributeKind::SingleNested(attrs), _) => validate_object(attrs, value, path, diags),
            (AttributeKind::ListNested(attrs), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    validate_object(attrs, item, &path.index(i), diags);
                }
            }
            _ => {}
        }
    }
}

/// Plan modifiers understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanModifier {
    /// Copy the prior state value into the plan instead of marking it unknown
    UseStateForUnknown,
    /// A change to the value destroys and recreates the resource
    RequiresReplace,
}

/// Attribute value validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// String length (in characters) within an inclusive range
    StringLengthBetween(usize, usize),
    /// String length at most the given number of characters
    StringLengthAtMost(usize),
    /// String matches a regular expression
    StringRegex {
        /// Regular expression
        pattern: &'static str,
        /// Message shown when the value does not match
        message: &'static str,
    },
    /// String is one of the given values
    StringOneOf(&'static [&'static str]),
    /// Integer within an inclusive range
    Int64Between(i64, i64),
    /// Integer at least the given value
    Int64AtLeast(i64),
    /// List holds at most the given number of elements
    ListSizeAtMost(usize),
    /// Every string element has a length within an inclusive range
    ListValueStringsLengthBetween(usize, usize),
}

impl Validator {
    /// Human-readable description of the constraint.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::StringLengthBetween(min, max) => {
                format!("string length must be between {min} and {max}")
            }
            Self::StringLengthAtMost(max) => format!("string length must be at most {max}"),
            Self::StringRegex { message, .. } => (*message).to_string(),
            Self::StringOneOf(values) => format!("value must be one of: {values:?}"),
            Self::Int64Between(min, max) => format!("value must be between {min} and {max}"),
            Self::Int64AtLeast(min) => format!("value must be at least {min}"),
            Self::ListSizeAtMost(max) => format!("list must contain at most {max} elements"),
            Self::ListValueStringsLengthBetween(min, max) => {
                format!("element length must be between {min} and {max}")
            }
        }
    }

    /// Runs the validator, returning a diagnostic on failure.
    ///
    /// Values of the wrong type are left to the type checker and pass.
    #[must_use]
    pub fn validate(&self, value: &Value, path: &AttributePath) -> Option<Diagnostic> {
        let ok = match (self, value) {
            (Self::StringLengthBetween(min, max), Value::String(s)) => {
                (*min..=*max).contains(&s.chars().count())
            }
            (Self::StringLengthAtMost(max), Value::String(s)) => s.chars().count() <= *max,
            (Self::StringRegex { pattern, .. }, Value::String(s)) => match compiled(pattern) {
                Ok(re) => re.is_match(s),
                Err(err) => {
                    return Some(
                        Diagnostic::error(
                            "Invalid Validator Pattern",
                            format!("Pattern {pattern:?} does not compile: {err}"),
                        )
                        .with_attribute(path.clone()),
                    );
                }
            },
            (Self::StringOneOf(values), Value::String(s)) => values.contains(&s.as_str()),
            (Self::Int64Between(min, max), Value::Int64(n)) => (*min..=*max).contains(n),
            (Self::Int64AtLeast(min), Value::Int64(n)) => n >= min,
            (Self::ListSizeAtMost(max), Value::List(items)) => items.len() <= *max,
            (Self::ListValueStringsLengthBetween(min, max), Value::List(items)) => {
                items.iter().all(|item| match item {
                    Value::String(s) => (*min..=*max).contains(&s.chars().count()),
                    _ => true,
                })
            }
            _ => true,
        };

        (!ok).then(|| {
            Diagnostic::error(
                "Invalid Attribute Value",
                format!("Attribute {path} {}", self.description()),
            )
            .with_attribute(path.clone())
        })
    }
}

/// Patterns already compiled by [`Validator::validate`].
static COMPILED_PATTERNS: LazyLock<Mutex<HashMap<&'static str, Regex>>> =
    LazyLock::new(Mutex::default);

fn compiled(pattern: &'static str) -> Result<Regex, regex::Error> {
    let mut cache = COMPILED_PATTERNS.lock();
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern)?;
    cache.insert(pattern, re.clone());
    Ok(re)
}
