//! Binding of raw argument tokens to the declared parameters of an operation.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::constants::command::NAMED_ARGUMENT_SEPARATOR;
use crate::constants::word_mode;
use crate::error::{Error, Result};
use crate::processor::Options;
use crate::transforms::{Arguments, Signature};
use crate::validator::Step;
use crate::value::Value;

/// Applies the word mode shortcut to the raw tokens of a word aware operation :
/// the first `w` token becomes `operate_on_word=True`, and when word mode is enabled
/// globally the binding is added unless `operate_on_word` was explicitly given.
fn expand_word_mode<'a>(
    signature: &Signature,
    tokens: &'a [String],
    options: &Options,
) -> Vec<Cow<'a, str>> {
    let mut tokens: Vec<Cow<'a, str>> = tokens.iter().map(|t| Cow::Borrowed(t.as_str())).collect();
    if !signature.supports_word_mode() {
        return tokens;
    }

    let binding = Cow::Owned(format!("{}{}True", word_mode::PARAM, NAMED_ARGUMENT_SEPARATOR));
    if let Some(pos) = tokens.iter().position(|t| t == word_mode::TOKEN) {
        tokens[pos] = binding;
    } else if options.word_mode
        && !tokens.iter().any(|t| {
            t.split_once(NAMED_ARGUMENT_SEPARATOR)
                .is_some_and(|(name, _)| name == word_mode::PARAM)
        })
    {
        tokens.push(binding);
    }
    tokens
}

/// Binds the raw arguments of a resolved step to its operation parameters
///
/// Tokens containing `=` are named arguments, the others are positional and
/// bound in declaration order. Values are coerced with [`Value::from_token`] and
/// unbound parameters fall back to their declared defaults.
///
/// # Errors
/// - `Error::InvalidArgument` when a named argument is not declared by the operation
/// - `Error::TransformExecution` when the arguments do not fit the parameters
///   (too many, bound twice or missing)
pub fn bind(step: &Step, options: &Options) -> Result<Arguments> {
    let signature = step.entry.signature();
    let tokens = expand_word_mode(signature, step.operation.arguments(), options);

    let mut positional = Vec::new();
    let mut named: HashMap<&'static str, Value> = HashMap::new();

    for token in &tokens {
        match token.split_once(NAMED_ARGUMENT_SEPARATOR) {
            Some((name, value)) => {
                let param = signature.param(name).ok_or_else(|| Error::InvalidArgument {
                    operation: step.name().to_string(),
                    argument: name.to_string(),
                })?;
                named.insert(param.name, Value::from_token(value));
            }
            None => positional.push(Value::from_token(token)),
        }
    }

    let params = signature.params();
    if positional.len() > params.len() {
        return Err(Error::execution(
            step.name(),
            format!(
                "takes {} argument(s) but {} were given",
                params.len(),
                positional.len()
            ),
        ));
    }

    let mut arguments = Arguments::new();
    for (param, value) in params.iter().zip(positional) {
        if named.contains_key(param.name) {
            return Err(Error::execution(
                step.name(),
                format!("got multiple values for argument \"{}\"", param.name),
            ));
        }
        arguments.insert(param.name, value);
    }
    for (name, value) in named {
        arguments.insert(name, value);
    }

    for param in params {
        if arguments.contains(param.name) {
            continue;
        }
        match &param.default {
            Some(default) => arguments.insert(param.name, default.clone()),
            None if param.required => {
                return Err(Error::execution(
                    step.name(),
                    format!("missing required argument \"{}\"", param.name),
                ))
            }
            None => {}
        }
    }

    Ok(arguments)
}
