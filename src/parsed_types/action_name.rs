//! Contains action names via the [`ActionName`] type.

use crate::parsed_types::Name;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// The name of an action schema. Action heads share the capitalised-name
/// syntax of predicates.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
pub struct ActionName(Name);

impl ActionName {
    #[inline(always)]
    pub const fn new(name: Name) -> Self {
        Self(name)
    }

    #[inline(always)]
    pub fn name(&self) -> &Name {
        &self.0
    }
}

impl<T> From<T> for ActionName
where
    T: Into<String> + AsRef<str>,
{
    fn from(value: T) -> Self {
        Self(Name::new(value))
    }
}

impl Deref for ActionName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl Display for ActionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
