//! Owned document tree and the checked-composition primitive.
//!
//! Documents are [`serde_json::Value`] trees. Objects keep insertion order, so
//! a built configuration serialises with its keys in the order the builder
//! attached them. Every node exclusively owns its children and trees are
//! only ever assembled bottom-up, so dropping a root releases each descendant
//! exactly once.
//!
//! [`Composer`] is the only way builders attach children. A child arrives as
//! a `Result`: an error propagates untouched, a refused attach drops the
//! child before returning, and a successful attach moves the child into its
//! parent. No partially attached subtree can outlive a failed build.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::BuildError;

/// Ordered JSON object.
pub type Object = Map<String, Value>;

/// Outcome of building one document node.
pub type BuildResult = Result<Value, BuildError>;

/// Position a child is about to occupy in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// Object member key.
    Key(&'a str),
    /// Array index.
    Index(usize),
}

impl fmt::Display for Slot<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => formatter.write_str(key),
            Self::Index(index) => write!(formatter, "[{index}]"),
        }
    }
}

/// Decides whether a child may be attached at a slot.
///
/// Production code uses [`Unbounded`]. Test suites install a policy that
/// refuses a chosen attach to exercise every failure path of a builder.
pub trait AttachPolicy {
    /// Admits or refuses the attach at `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Rejected`] when the attach must not happen.
    fn admit(&self, slot: Slot<'_>) -> Result<(), BuildError>;
}

impl<P: AttachPolicy + ?Sized> AttachPolicy for &P {
    fn admit(&self, slot: Slot<'_>) -> Result<(), BuildError> {
        (**self).admit(slot)
    }
}

/// Policy that admits every attach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl AttachPolicy for Unbounded {
    fn admit(&self, _slot: Slot<'_>) -> Result<(), BuildError> {
        Ok(())
    }
}

/// Failure-safe build-and-attach primitive.
#[derive(Debug, Clone, Default)]
pub struct Composer<P = Unbounded> {
    policy: P,
}

impl Composer {
    /// Creates a composer that admits every attach.
    #[must_use]
    pub const fn new() -> Self {
        Self { policy: Unbounded }
    }
}

impl<P> Composer<P> {
    /// Creates a composer governed by `policy`.
    #[must_use]
    pub const fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Returns the attach policy.
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: AttachPolicy> Composer<P> {
    /// Attaches the result of a child build under `key`.
    ///
    /// # Errors
    ///
    /// Propagates the child's own error, returns
    /// [`BuildError::DuplicateKey`] when `parent` already holds `key`, and
    /// returns the policy's error when the attach is refused. In the last two
    /// cases the child has been dropped by the time the error is returned.
    pub fn try_add(
        &self,
        parent: &mut Object,
        key: &str,
        child: BuildResult,
    ) -> Result<(), BuildError> {
        let node = child?;
        if parent.contains_key(key) {
            return Err(BuildError::DuplicateKey {
                key: key.to_owned(),
            });
        }
        self.policy.admit(Slot::Key(key))?;
        parent.insert(key.to_owned(), node);
        Ok(())
    }

    /// Attaches an optional child, skipping it when absent.
    ///
    /// # Errors
    ///
    /// Same as [`Composer::try_add`] when the child is present.
    pub fn try_add_some(
        &self,
        parent: &mut Object,
        key: &str,
        child: Option<BuildResult>,
    ) -> Result<(), BuildError> {
        child.map_or(Ok(()), |built| self.try_add(parent, key, built))
    }

    /// Appends the result of a child build to an array.
    ///
    /// # Errors
    ///
    /// Propagates the child's own error or the policy's refusal; a refused
    /// child is dropped before the error is returned.
    pub fn try_push(&self, parent: &mut Vec<Value>, child: BuildResult) -> Result<(), BuildError> {
        let node = child?;
        self.policy.admit(Slot::Index(parent.len()))?;
        parent.push(node);
        Ok(())
    }

    /// Builds an array by composing one child per item.
    ///
    /// An empty input yields an empty array.
    ///
    /// # Errors
    ///
    /// Stops at the first failing item; elements already pushed are dropped
    /// with the partial array.
    pub fn array<I, F>(&self, items: I, mut build: F) -> BuildResult
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> BuildResult,
    {
        let mut elements = Vec::new();
        for item in items {
            self.try_push(&mut elements, build(item))?;
        }
        Ok(Value::Array(elements))
    }
}

/// Wraps a finished object as a node.
#[must_use]
pub const fn object(members: Object) -> Value {
    Value::Object(members)
}

/// Builds a string leaf.
pub fn text(value: &str) -> BuildResult {
    Ok(Value::String(value.to_owned()))
}

/// Builds a string leaf for a field that must not be empty.
///
/// # Errors
///
/// Returns [`BuildError::MissingField`] when `value` is empty.
pub fn required_text(entity: &'static str, field: &'static str, value: &str) -> BuildResult {
    if value.is_empty() {
        return Err(BuildError::MissingField { entity, field });
    }
    text(value)
}

/// Builds a leaf from any value with a JSON form.
pub fn scalar(value: impl Into<Value>) -> BuildResult {
    Ok(value.into())
}

#[cfg(test)]
mod tests;
