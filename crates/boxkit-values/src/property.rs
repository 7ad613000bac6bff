//! A raw input paired with its parsed value.

use std::fmt;
use std::marker::PhantomData;

use boxkit_types::Result;

use crate::parser::{ParsedValue, ParserConfig, RawValue, parse_value};

/// Static description of a property: its name and accepted categories.
pub trait PropertyKind {
    const NAME: &'static str;
    const CONFIG: ParserConfig;
}

/// A property holding the last accepted raw input and its parsed form.
///
/// Assignment is atomic: a rejected input leaves both the raw and the
/// parsed value as they were.
pub struct Property<K: PropertyKind> {
    raw: RawValue,
    parsed: ParsedValue,
    kind: PhantomData<K>,
}

impl<K: PropertyKind> Property<K> {
    /// Create a property from an initial input.
    pub fn new(initial: impl Into<RawValue>) -> Result<Self> {
        let raw = initial.into();
        let parsed = parse_value(&K::CONFIG, &raw)?;
        Ok(Self {
            raw,
            parsed,
            kind: PhantomData,
        })
    }

    /// Replace the input, returning the newly parsed value.
    pub fn set(&mut self, input: impl Into<RawValue>) -> Result<&ParsedValue> {
        let raw = input.into();
        let parsed = parse_value(&K::CONFIG, &raw).inspect_err(|e| {
            log::debug!("{}: rejected {raw:?}: {e}", K::NAME);
        })?;
        self.raw = raw;
        self.parsed = parsed;
        Ok(&self.parsed)
    }

    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    pub fn parsed(&self) -> &ParsedValue {
        &self.parsed
    }

    pub fn config(&self) -> &'static ParserConfig {
        &K::CONFIG
    }
}

impl<K: PropertyKind> Clone for Property<K> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            parsed: self.parsed.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: PropertyKind> fmt::Debug for Property<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &K::NAME)
            .field("raw", &self.raw)
            .field("parsed", &self.parsed)
            .finish()
    }
}
