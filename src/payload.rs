//! # Notification payload: an ordered, opaque sequence of values.
//!
//! A [`Payload`] carries zero or more arbitrarily-typed values attached to a
//! publish call. The registry never interprets or deep-copies it: observers
//! receive the exact sequence the publisher built, in order.
//!
//! ## Rules
//! - **Opaque**: entries are type-erased (`Arc<dyn Any + Send + Sync>`);
//!   type-checking is entirely the observer's responsibility.
//! - **Cheap to clone**: cloning a payload clones the `Arc`s, never the
//!   underlying values.
//! - **Ordered**: entries keep insertion order; [`Payload::get`] is positional.
//!
//! ## Example
//! ```rust
//! use notibus::Payload;
//!
//! let payload = Payload::empty()
//!     .with("release".to_string())
//!     .with(42u32);
//!
//! assert_eq!(payload.len(), 2);
//! assert_eq!(payload.get::<String>(0).map(String::as_str), Some("release"));
//! assert_eq!(payload.get::<u32>(1), Some(&42));
//! assert_eq!(payload.get::<u32>(0), None); // wrong type
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// One type-erased payload entry.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Ordered sequence of opaque values attached to a notification.
///
/// Passed by reference to every observer of a publish call; all observers see
/// the same shared values.
#[derive(Clone, Default)]
pub struct Payload {
    values: Vec<Value>,
}

impl Payload {
    /// Creates a payload with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates a payload with a single entry.
    #[must_use]
    pub fn single<T: Any + Send + Sync>(value: T) -> Self {
        Self::empty().with(value)
    }

    /// Appends an entry, builder-style.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends an entry in place.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push(Arc::new(value));
    }

    /// Typed access to the entry at `index`.
    ///
    /// Returns `None` if the index is out of bounds **or** the entry is not a
    /// `T` (downcast by exact type).
    #[must_use]
    pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Option<&T> {
        self.values.get(index).and_then(|v| v.downcast_ref::<T>())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the payload carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the raw type-erased entries, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload").field("len", &self.len()).finish()
    }
}

impl FromIterator<Value> for Payload {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
