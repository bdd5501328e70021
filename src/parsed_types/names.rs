//! Interned identifiers: plain [`Name`]s and the role-specific wrappers
//! around them.

use internment::Intern;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

/// An interned name. Names are compared and hashed by their interned pointer,
/// so copies are cheap and equality checks are constant time. Case is kept
/// as written.
///
/// ## Example
/// ```
/// # use eagerground::parsed_types::Name;
/// let a = Name::new("trayA");
/// let b = Name::from("trayA");
/// assert_eq!(a, b);
/// assert_ne!(a, Name::new("traya"));
/// assert_eq!(a.to_string(), "trayA");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Name(Intern<String>);

impl Name {
    #[inline(always)]
    pub fn new(name: &str) -> Self {
        Self(Intern::from_ref(name))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Name {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Name {
    #[inline(always)]
    fn from(value: String) -> Self {
        Self(Intern::new(value))
    }
}

impl From<&String> for Name {
    #[inline(always)]
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Name {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Name {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
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

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// Declares a newtype over [`Name`] that marks the role a name plays in a
/// file. The wrappers deref to the inner [`Name`] and print with `prefix`
/// in front of it.
macro_rules! role_name {
    ($(#[$meta:meta])* $wrapper:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
        pub struct $wrapper(Name);

        impl $wrapper {
            #[inline(always)]
            pub const fn new(name: Name) -> Self {
                Self(name)
            }

            #[inline(always)]
            pub fn from_str(name: &str) -> Self {
                Self(Name::new(name))
            }

            #[inline(always)]
            pub const fn name(&self) -> &Name {
                &self.0
            }
        }

        impl<T: Into<Name>> From<T> for $wrapper {
            #[inline(always)]
            fn from(value: T) -> Self {
                Self::new(value.into())
            }
        }

        impl AsRef<Name> for $wrapper {
            #[inline(always)]
            fn as_ref(&self) -> &Name {
                &self.0
            }
        }

        impl AsRef<str> for $wrapper {
            #[inline(always)]
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Deref for $wrapper {
            type Target = Name;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $wrapper {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

role_name!(
    /// The name a predicate is declared under in `:predicates`.
    PredicateName,
    ""
);

role_name!(
    /// The name following `:action`, also used by plan steps.
    ActionName,
    ""
);

role_name!(
    /// A variable, stored without its leading `?`.
    Variable,
    "?"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interned_names_compare_equal() {
        let a = Name::new("locTable");
        let b = Name::from(String::from("locTable"));
        assert_eq!(a, b);
        assert_ne!(a, Name::new("locDoor"));
        assert_eq!(a, "locTable");
    }

    #[test]
    fn debug_shows_quoted_string() {
        assert_eq!(format!("{:?}", Name::new("objA")), "\"objA\"");
    }

    #[test]
    fn variables_print_with_question_mark() {
        let variable = Variable::from_str("tray");
        assert_eq!(variable.to_string(), "?tray");
        assert_eq!(variable.name(), &Name::new("tray"));
        assert_eq!(ActionName::from("grasp").to_string(), "grasp");
    }

    #[test]
    fn wrappers_share_the_interned_name() {
        let predicate = PredicateName::from_str("Topmost");
        let action = ActionName::new(Name::new("Topmost"));
        assert_eq!(*predicate, *action);
    }
}
