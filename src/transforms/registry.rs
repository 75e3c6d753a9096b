use super::{codec, count, text, Arguments, Chainable, Scalar, Signature, Transform};
use crate::constants::word_mode;
use crate::error::{OperationKind, Result};
use crate::value::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// A registered operation : its declared signature and its implementation
#[derive(Clone)]
pub struct Entry {
    signature: Signature,
    transform: Arc<Box<dyn Transform>>,
}

impl Entry {
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn name(&self) -> &'static str {
        self.signature.name()
    }

    /// Invokes the operation with already bound arguments
    pub fn apply(&self, text: &str, args: &Arguments) -> Result<Value> {
        self.transform.transform(text, args)
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A name indexed collection of entries remembering the registration order
#[derive(Default)]
struct Table {
    entries: HashMap<&'static str, Entry>,
    order: Vec<&'static str>,
}

impl Table {
    /// Registers the entry, replacing any previous entry with the same name
    /// while keeping its listing position
    fn insert(&mut self, entry: Entry) {
        let name = entry.name();
        if self.entries.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    fn names(&self) -> &[&'static str] {
        &self.order
    }
}

/// Holds the chainable and scalar operations available to commands
#[derive(Default)]
pub struct TransformRegistry {
    chainables: Table,
    scalars: Table,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a reference to the global registry, initialized on first use
    /// with the default operations
    pub fn global() -> &'static TransformRegistry {
        static INSTANCE: Lazy<TransformRegistry> = Lazy::new(|| {
            let mut registry = TransformRegistry::new();
            registry.init();
            registry
        });
        &INSTANCE
    }

    /// Initializes the registry with the default operations
    /// - Scalars : count_words, count_lines, count_characters
    /// - Chainables : rot13, url and base64 codecs, reverse, replace, add_before,
    ///   add_after, trim, case conversions, sort, slugify and remove
    pub fn init(&mut self) {
        self.register_scalar(
            Signature::new("count_words").optional("word_pattern", r"\w"),
            |text, _| Ok(count::count_words(text).into()),
        );
        self.register_scalar(Signature::new("count_lines"), |text, _| {
            Ok(count::count_lines(text).into())
        });
        self.register_scalar(
            Signature::new("count_characters")
                .optional("exclude_spaces", false)
                .optional("exclude_non_printable", true),
            |text, args| {
                Ok(count::count_characters(
                    text,
                    args.flag("exclude_spaces"),
                    args.flag("exclude_non_printable"),
                )
                .into())
            },
        );

        self.register_chainable(Signature::new("rot13"), |t, _| Ok(text::rot13(t)));
        self.register_chainable(
            Signature::new("url_encode").optional("space_as_plus", true),
            |t, args| Ok(codec::url_encode(t, args.flag("space_as_plus"))),
        );
        self.register_chainable(
            Signature::new("url_decode").optional("space_as_plus", true),
            |t, args| Ok(codec::url_decode(t, args.flag("space_as_plus"))),
        );
        self.register_chainable(
            Signature::new("base64_encode").optional("trim_whitespace", true),
            |t, args| Ok(codec::base64_encode(t, args.flag("trim_whitespace"))),
        );
        self.register_chainable(
            Signature::new("base64_decode").optional("trim_whitespace", true),
            |t, args| codec::base64_decode(t, args.flag("trim_whitespace")),
        );
        self.register_chainable(Signature::new("reverse").word_mode(), |t, args| {
            Ok(text::reverse(t, args.flag(word_mode::PARAM)))
        });
        self.register_chainable(
            Signature::new("replace")
                .required("string_to_replace")
                .required("replacement"),
            |t, args| {
                text::replace(
                    t,
                    &args.text("string_to_replace")?,
                    &args.text("replacement")?,
                )
            },
        );
        self.register_chainable(
            Signature::new("add_before").required("string_to_add"),
            |t, args| Ok(text::add_before(t, &args.text("string_to_add")?)),
        );
        self.register_chainable(
            Signature::new("add_after").required("string_to_add"),
            |t, args| Ok(text::add_after(t, &args.text("string_to_add")?)),
        );
        self.register_chainable(
            Signature::new("trim").optional_unset("string_to_remove"),
            |t, args| Ok(text::trim(t, args.opt_text("string_to_remove").as_deref())),
        );
        self.register_chainable(Signature::new("title_case"), |t, _| {
            Ok(text::title_case(t))
        });
        self.register_chainable(Signature::new("lower_case"), |t, _| {
            Ok(text::lower_case(t))
        });
        self.register_chainable(Signature::new("upper_case"), |t, _| {
            Ok(text::upper_case(t))
        });
        self.register_chainable(Signature::new("sort").word_mode(), |t, args| {
            Ok(text::sort(t, args.flag(word_mode::PARAM)))
        });
        self.register_chainable(Signature::new("slugify"), |t, _| Ok(text::slugify(t)));
        self.register_chainable(
            Signature::new("remove").required("string_to_remove"),
            |t, args| text::remove(t, &args.text("string_to_remove")?),
        );
    }

    /// Registers a text to text operation usable at any position of a chain
    pub fn register_chainable<F>(&mut self, signature: Signature, f: F)
    where
        F: Fn(&str, &Arguments) -> Result<String> + Send + Sync + 'static,
    {
        self.chainables.insert(Entry {
            signature,
            transform: Arc::new(Box::new(Chainable(f)) as Box<dyn Transform>),
        });
    }

    /// Registers an operation producing a non-text result, only usable first in a chain
    pub fn register_scalar<F>(&mut self, signature: Signature, f: F)
    where
        F: Fn(&str, &Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        self.scalars.insert(Entry {
            signature,
            transform: Arc::new(Box::new(Scalar(f)) as Box<dyn Transform>),
        });
    }

    pub fn get_chainable(&self, name: &str) -> Option<&Entry> {
        self.chainables.get(name)
    }

    pub fn get_scalar(&self, name: &str) -> Option<&Entry> {
        self.scalars.get(name)
    }

    /// Looks up the operation in both registries, chainables first
    pub fn get(&self, name: &str) -> Option<(OperationKind, &Entry)> {
        self.get_chainable(name)
            .map(|entry| (OperationKind::Chainable, entry))
            .or_else(|| {
                self.get_scalar(name)
                    .map(|entry| (OperationKind::Scalar, entry))
            })
    }

    /// Names of the chainable operations in registration order
    pub fn chainable_names(&self) -> &[&'static str] {
        self.chainables.names()
    }

    /// Names of the scalar operations in registration order
    pub fn scalar_names(&self) -> &[&'static str] {
        self.scalars.names()
    }
}
