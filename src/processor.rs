//! Execution of a validated chain of operations over a text.

use crate::binder::bind;
use crate::command;
use crate::error::{Error, Result};
use crate::transforms::{Arguments, TransformRegistry};
use crate::validator::{validate, Step};
use crate::value::Value;

/// Execution options of a single command invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Apply every operation to each line independently
    pub multiline: bool,
    /// Make word aware operations work on words instead of characters
    pub word_mode: bool,
}

/// Applies resolved steps to a text, one after the other
pub struct TextProcessor {
    options: Options,
}

impl TextProcessor {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Binds the arguments of every step and threads the text through them in order.
    /// Every step is bound before the first one runs.
    ///
    /// # Arguments
    /// * `text` - The input text
    /// * `steps` - The steps to apply, as returned by [`validate`]
    ///
    /// # Returns
    /// The text produced by the last step or the first error encountered
    pub fn process(&self, text: &str, steps: &[Step]) -> Result<String> {
        let bound = steps
            .iter()
            .map(|step| bind(step, &self.options).map(|args| (step, args)))
            .collect::<Result<Vec<(&Step, Arguments)>>>()?;

        bound
            .iter()
            .try_fold(text.to_string(), |acc, (step, args)| {
                self.apply(step, args, &acc)
            })
    }

    /// Applies a single step to the whole text or to each line in multiline mode
    fn apply(&self, step: &Step, args: &Arguments, text: &str) -> Result<String> {
        if self.options.multiline {
            Ok(text
                .split('\n')
                .map(|line| Self::invoke(step, args, line))
                .collect::<Result<Vec<String>>>()?
                .join("\n"))
        } else {
            Self::invoke(step, args, text)
        }
    }

    /// Invokes the step implementation, rendering non-text results as text
    fn invoke(step: &Step, args: &Arguments, text: &str) -> Result<String> {
        match step.entry.apply(text, args) {
            Ok(Value::Str(s)) => Ok(s),
            Ok(value) => Ok(value.to_string()),
            Err(Error::Msg(cause)) => Err(Error::execution(step.name(), cause)),
            Err(e) => Err(e),
        }
    }
}

/// Parses, validates and runs a command over the given text using the global registry
///
/// # Examples
/// ```
/// use texttools::processor::{run_command, Options};
///
/// let result = run_command("  hello world!  ", "trim->remove('!')->title_case", &Options::default());
/// assert_eq!(result.unwrap(), "Hello world");
/// ```
pub fn run_command(text: &str, command: &str, options: &Options) -> Result<String> {
    let operations = command::parse(command)?;
    let steps = validate(&operations, TransformRegistry::global())?;
    TextProcessor::new(*options).process(text, &steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::Signature;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const MULTILINE: Options = Options {
        multiline: true,
        word_mode: false,
    };

    fn run(text: &str, command: &str) -> Result<String> {
        run_command(text, command, &Options::default())
    }

    #[test]
    fn test_chain_example() {
        assert_eq!(
            run("  hello world!  ", "trim->remove('!')->title_case").unwrap(),
            "Hello world"
        );
    }

    #[test]
    fn test_multiline_applies_per_line() {
        assert_eq!(run_command("b a\nd c", "sort", &MULTILINE).unwrap(), " ab\n cd");
        assert_eq!(run("b\na", "sort").unwrap(), "\nab");
        assert_eq!(run_command("b\na", "sort", &MULTILINE).unwrap(), "b\na");
        assert_eq!(
            run_command("  one \n two  ", "trim->upper_case", &MULTILINE).unwrap(),
            "ONE\nTWO"
        );
    }

    #[test]
    fn test_multiline_matches_per_line_application_for_every_chainable() {
        let registry = TransformRegistry::global();
        let text = "Hello World \n  foo bar\nbaz";
        for name in registry.chainable_names() {
            let signature = registry.get_chainable(name).unwrap().signature();
            if signature.params().iter().any(|p| p.required) {
                continue;
            }
            let per_line: Result<Vec<String>> =
                text.split('\n').map(|line| run(line, name)).collect();
            if let Ok(lines) = per_line {
                assert_eq!(
                    run_command(text, name, &MULTILINE).unwrap(),
                    lines.join("\n"),
                    "operation {}",
                    name
                );
            }
        }
    }

    #[test]
    fn test_word_mode() {
        assert_eq!(run("cb a", "sort(w)").unwrap(), "a cb");
        assert_eq!(run("cb a", "sort(operate_on_word=True)").unwrap(), "a cb");
        let options = Options {
            multiline: false,
            word_mode: true,
        };
        assert_eq!(
            run_command("one two\nthree four", "reverse", &options).unwrap(),
            "two one\nfour three"
        );
    }

    #[test]
    fn test_scalar_results_are_rendered() {
        assert_eq!(run("one two three", "count_words").unwrap(), "3");
        assert_eq!(run("a\nb\nc", "count_lines").unwrap(), "3");
        assert_eq!(run_command("a b\nc", "count_words", &MULTILINE).unwrap(), "2\n1");
        assert_eq!(
            run(" a b ", "count_characters(exclude_spaces=True)").unwrap(),
            "2"
        );
    }

    #[test]
    fn test_codec_chains() {
        assert_eq!(run("hello", "base64_encode->base64_decode").unwrap(), "hello");
        assert_eq!(run("a b&c", "url_encode").unwrap(), "a+b%26c");
        assert_eq!(run("a b&c", "url_encode->url_decode").unwrap(), "a b&c");
        assert_eq!(run("a b", "url_encode(space_as_plus=False)").unwrap(), "a%20b");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(run("text", ""), Err(Error::EmptyCommand)));
        assert!(matches!(run("text", "trim->->sort"), Err(Error::Parse(_))));
        assert!(matches!(
            run("text", "trim->nope"),
            Err(Error::UnknownOperation(name)) if name == "nope"
        ));
        assert!(matches!(
            run("text", "trim->count_lines"),
            Err(Error::NotChainable(name)) if name == "count_lines"
        ));
        assert!(matches!(
            run("text", "upper_case->sort(nope=1)"),
            Err(Error::InvalidArgument { operation, argument })
                if operation == "sort" && argument == "nope"
        ));
    }

    #[test]
    fn test_transform_failures_name_the_operation() {
        assert!(matches!(
            run("not base64!", "trim->base64_decode"),
            Err(Error::TransformExecution { operation, .. }) if operation == "base64_decode"
        ));
        assert!(matches!(
            run("text", "replace('(','x')"),
            Err(Error::TransformExecution { operation, .. }) if operation == "replace"
        ));
    }

    #[test]
    fn test_text_processor_with_explicit_steps() {
        let operations = command::parse("add_before('> ')").unwrap();
        let steps = validate(&operations, TransformRegistry::global()).unwrap();
        let processor = TextProcessor::new(MULTILINE);
        assert!(processor.options().multiline);
        assert_eq!(processor.process("a\nb", &steps).unwrap(), "> a\n> b");
        assert_eq!(processor.process("a\nb", &[]).unwrap(), "a\nb");
    }

    fn counting_registry(calls: &Arc<AtomicUsize>) -> TransformRegistry {
        let mut registry = TransformRegistry::new();
        let counter = Arc::clone(calls);
        registry.register_chainable(Signature::new("tally"), move |t, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(t.to_string())
        });
        registry.register_chainable(
            Signature::new("suffix").optional("marker", "!"),
            |t, args| Ok(format!("{}{}", t, args.text("marker")?)),
        );
        registry
    }

    #[test]
    fn test_invalid_argument_stops_before_any_step_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(&calls);
        let processor = TextProcessor::new(Options::default());

        let steps = validate(
            &command::parse("tally->suffix(nope='?')").unwrap(),
            &registry,
        )
        .unwrap();
        assert!(matches!(
            processor.process("text", &steps),
            Err(Error::InvalidArgument { operation, argument })
                if operation == "suffix" && argument == "nope"
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let steps = validate(
            &command::parse("tally->suffix(marker='?')").unwrap(),
            &registry,
        )
        .unwrap();
        assert_eq!(processor.process("text", &steps).unwrap(), "text?");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
