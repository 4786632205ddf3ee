//! Contains predicate names via the [`PredicateName`] type.

use crate::parsed_types::Name;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// The name of a predicate. Predicate names start with an uppercase letter,
/// which the parser enforces; the type itself is a thin wrapper around
/// [`Name`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
pub struct PredicateName(Name);

impl PredicateName {
    #[inline(always)]
    pub const fn new(name: Name) -> Self {
        Self(name)
    }

    #[inline(always)]
    pub fn name(&self) -> &Name {
        &self.0
    }
}

impl<T> From<T> for PredicateName
where
    T: Into<String> + AsRef<str>,
{
    fn from(value: T) -> Self {
        Self(Name::new(value))
    }
}

impl Deref for PredicateName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl Display for PredicateName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
