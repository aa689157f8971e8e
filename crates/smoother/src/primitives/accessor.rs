//! Coordinate accessors.
//!
//! ## Purpose
//!
//! An accessor turns an opaque record into one number. The smoother holds one
//! accessor for x and one for y, resolved at configuration time into a single
//! closure shape regardless of whether the caller named a field or supplied a
//! function.
//!
//! ## Invariants
//!
//! * Each accessor is called exactly once per record per extraction.
//! * Extraction preserves record order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, string::String, sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::SmootherError;
use crate::primitives::record::Fields;

/// Shared record reader.
type ReadFn<R, T> = Arc<dyn Fn(&R) -> Option<T> + Send + Sync>;

/// Resolved `record -> number` accessor.
pub struct Accessor<R, T> {
    /// Field name, or `None` for caller-supplied functions.
    field: Option<String>,

    /// Reader shared between clones.
    read: ReadFn<R, T>,
}

impl<R, T> Accessor<R, T>
where
    R: 'static,
    T: 'static,
{
    /// Read a named field through the record's [`Fields`] implementation.
    pub fn field(name: &str) -> Self
    where
        R: Fields<T>,
    {
        let owned = name.to_owned();
        Self {
            field: Some(name.to_owned()),
            read: Arc::new(move |record: &R| record.field(&owned)),
        }
    }

    /// Read through a caller-supplied function.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&R) -> T + Send + Sync + 'static,
    {
        Self {
            field: None,
            read: Arc::new(move |record: &R| Some(f(record))),
        }
    }
}

impl<R, T> Accessor<R, T> {
    /// Field name this accessor reads, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Read one value from every record, in order.
    pub fn extract(&self, records: &[R]) -> Result<Vec<T>, SmootherError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                (self.read)(record).ok_or_else(|| SmootherError::MissingField {
                    index,
                    field: self.field.clone().unwrap_or_default(),
                })
            })
            .collect()
    }
}

impl<R, T> Clone for Accessor<R, T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            read: Arc::clone(&self.read),
        }
    }
}

impl<R, T> Debug for Accessor<R, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.field {
            Some(name) => write!(f, "Accessor::Field({name:?})"),
            None => write!(f, "Accessor::Function"),
        }
    }
}
