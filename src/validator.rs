//! Validation of parsed operations against the registry.
//!
//! The first operation may be chainable or scalar, every following one must be chainable.

use crate::command::Operation;
use crate::error::{Error, OperationKind, Result};
use crate::transforms::{Entry, TransformRegistry};

/// An operation resolved to its implementation
#[derive(Debug, Clone)]
pub struct Step {
    pub operation: Operation,
    pub kind: OperationKind,
    pub entry: Entry,
}

impl Step {
    pub fn name(&self) -> &str {
        self.operation.name()
    }
}

/// Resolves the operations of a command into steps, keeping their order
///
/// # Errors
/// - `Error::EmptyCommand` if there are no operations
/// - `Error::UnknownOperation` if an operation is not registered at all, at any position.
///   An unregistered name after the first position is reported as unknown rather
///   than as not chainable.
/// - `Error::NotChainable` if a registered scalar operation appears after the first position
pub fn validate(operations: &[Operation], registry: &TransformRegistry) -> Result<Vec<Step>> {
    let (first, rest) = operations.split_first().ok_or(Error::EmptyCommand)?;

    let (kind, entry) = registry
        .get(first.name())
        .ok_or_else(|| Error::UnknownOperation(first.name().to_string()))?;

    let mut steps = Vec::with_capacity(operations.len());
    steps.push(Step {
        operation: first.clone(),
        kind,
        entry: entry.clone(),
    });

    for operation in rest {
        let entry = match registry.get(operation.name()) {
            Some((OperationKind::Chainable, entry)) => entry,
            Some((OperationKind::Scalar, _)) => {
                return Err(Error::NotChainable(operation.name().to_string()))
            }
            None => return Err(Error::UnknownOperation(operation.name().to_string())),
        };
        steps.push(Step {
            operation: operation.clone(),
            kind: OperationKind::Chainable,
            entry: entry.clone(),
        });
    }

    Ok(steps)
}
