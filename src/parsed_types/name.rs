//! Contains names via the [`Name`] type.

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::sync::{Arc, Mutex};

lazy_static::lazy_static! {
    /// Used in [`Name::new`] to deduplicate string occurrences.
    static ref STRING_INTERNING: Mutex<Vec<Arc<String>>> = Mutex::new(Vec::default());
}

/// An interned identifier. Symbols, schema parameters and argument values are
/// all [`Name`]s; equality is string equality. A planning run mentions the
/// same handful of identifiers in millions of atoms, so occurrences share one
/// allocation.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Name(Arc<String>);

impl Name {
    /// Constructs a new [`Name`], deduplicating the backing string against
    /// all previously constructed names.
    pub fn new<S: Into<String> + AsRef<str>>(name: S) -> Self {
        let mut guard = STRING_INTERNING.lock().expect("failed to obtain lock");
        let name_ref = name.as_ref();
        let pos = guard.binary_search_by(|interned| interned.as_str().cmp(name_ref));
        let pos = match pos {
            Ok(pos) => pos,
            Err(pos) => {
                guard.insert(pos, Arc::new(name.into()));
                pos
            }
        };

        Self(guard[pos].clone())
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the length of the name, in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> From<T> for Name
where
    T: Into<String> + AsRef<str>,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    /// Names order as their strings do; canonical state serialization
    /// depends on this.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}
