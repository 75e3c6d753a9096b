//! Text operations and the registry resolving them by name.
//!
//! Operations come in two flavours :
//! - chainable operations map text to text and may appear anywhere in a chain
//! - scalar operations produce a non-text result (e.g. a count) and may only
//!   appear first
//!
//! Every operation declares a [`Signature`] listing its parameters, which is used
//! to bind the raw arguments of a command before invoking it.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::constants::word_mode;
use crate::error::{Error, Result};
use crate::value::Value;

pub mod codec;
pub mod count;
mod registry;
pub mod text;

pub use registry::{Entry, TransformRegistry};

/// Trait for operations applied to the text of a command chain
pub trait Transform: Send + Sync {
    /// Transforms the input text using the bound arguments
    ///
    /// # Arguments
    /// * `text` - The text to transform
    /// * `args` - The arguments bound to the operation parameters
    ///
    /// # Returns
    /// The resulting value or an error if the operation fails
    fn transform(&self, text: &str, args: &Arguments) -> Result<Value>;
}

/// Adapts a text to text function into a [`Transform`]
pub struct Chainable<F>(pub F);

impl<F> Transform for Chainable<F>
where
    F: Fn(&str, &Arguments) -> Result<String> + Send + Sync,
{
    fn transform(&self, text: &str, args: &Arguments) -> Result<Value> {
        (self.0)(text, args).map(Value::Str)
    }
}

/// Adapts a text to value function into a [`Transform`]
pub struct Scalar<F>(pub F);

impl<F> Transform for Scalar<F>
where
    F: Fn(&str, &Arguments) -> Result<Value> + Send + Sync,
{
    fn transform(&self, text: &str, args: &Arguments) -> Result<Value> {
        (self.0)(text, args)
    }
}

/// A declared operation parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub default: Option<Value>,
    pub required: bool,
}

/// Name and parameters of an operation, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: &'static str,
    params: Vec<Param>,
    word_mode: bool,
}

impl Signature {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
            word_mode: false,
        }
    }

    /// Declares a parameter that must be bound
    pub fn required(mut self, name: &'static str) -> Self {
        self.params.push(Param {
            name,
            default: None,
            required: true,
        });
        self
    }

    /// Declares a parameter falling back to the given default
    pub fn optional<V: Into<Value>>(mut self, name: &'static str, default: V) -> Self {
        self.params.push(Param {
            name,
            default: Some(default.into()),
            required: false,
        });
        self
    }

    /// Declares a parameter left unset when not bound
    pub fn optional_unset(mut self, name: &'static str) -> Self {
        self.params.push(Param {
            name,
            default: None,
            required: false,
        });
        self
    }

    /// Declares the `operate_on_word` parameter, enabling the word mode shortcut
    pub fn word_mode(mut self) -> Self {
        self.word_mode = true;
        self.optional(word_mode::PARAM, false)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.param(name).is_some()
    }

    pub fn supports_word_mode(&self) -> bool {
        self.word_mode
    }
}

/// Arguments bound to the parameters of an operation, defaults included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<&'static str, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: Value) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Retrieves a required argument as text. Non-text values are rendered.
    pub fn text(&self, name: &str) -> Result<Cow<'_, str>> {
        self.get(name)
            .map(Value::as_text)
            .ok_or_else(|| Error::Msg(format!("missing required argument \"{}\"", name)))
    }

    /// Retrieves an optional argument as text
    pub fn opt_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Value::as_text)
    }

    /// Retrieves the truthiness of an argument, `false` when unset
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(Value::is_truthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_builder() {
        let signature = Signature::new("sort").word_mode();
        assert_eq!(signature.name(), "sort");
        assert!(signature.supports_word_mode());
        assert!(signature.declares("operate_on_word"));
        assert_eq!(
            signature.param("operate_on_word").unwrap().default,
            Some(Value::Bool(false))
        );

        let signature = Signature::new("replace")
            .required("string_to_replace")
            .required("replacement");
        assert!(!signature.supports_word_mode());
        assert_eq!(
            signature.params().iter().map(|p| p.name).collect::<Vec<_>>(),
            vec!["string_to_replace", "replacement"]
        );
        assert!(signature.params().iter().all(|p| p.required));
    }

    #[test]
    fn test_arguments_accessors() {
        let mut args = Arguments::new();
        args.insert("string_to_add", Value::Int(5));
        args.insert("operate_on_word", Value::Bool(true));

        assert_eq!(args.text("string_to_add").unwrap(), "5");
        assert!(args.flag("operate_on_word"));
        assert!(!args.flag("space_as_plus"));
        assert!(args.opt_text("string_to_remove").is_none());
        assert!(args.text("replacement").is_err());
    }

    #[test]
    fn test_adapters() {
        let chainable = Chainable(|text: &str, _: &Arguments| -> Result<String> {
            Ok(text.to_uppercase())
        });
        assert_eq!(
            chainable.transform("abc", &Arguments::new()).unwrap(),
            Value::Str("ABC".to_string())
        );

        let scalar = Scalar(|text: &str, _: &Arguments| -> Result<Value> {
            Ok(Value::from(text.len()))
        });
        assert_eq!(
            scalar.transform("abc", &Arguments::new()).unwrap(),
            Value::Int(3)
        );
    }
}
