/// Wrapper around a type to indicate that it can be negated. Used for ground
/// [`Atom`](crate::search::Atom)s in preconditions, goals and effects, and
/// for [`AtomSchema`](crate::search::AtomSchema)s in quantified effect
/// templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Negatable<T> {
    Positive(T),
    Negative(T),
}

impl<T> Negatable<T> {
    pub fn new(negated: bool, value: T) -> Self {
        if negated {
            Self::Negative(value)
        } else {
            Self::Positive(value)
        }
    }

    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        matches!(self, Self::Negative(_))
    }

    #[inline(always)]
    pub fn underlying(&self) -> &T {
        match self {
            Self::Positive(value) | Self::Negative(value) => value,
        }
    }

    #[inline(always)]
    pub fn into_underlying(self) -> T {
        match self {
            Self::Positive(value) | Self::Negative(value) => value,
        }
    }

    /// The same value with the opposite sign.
    pub fn negated(self) -> Self {
        match self {
            Self::Positive(value) => Self::Negative(value),
            Self::Negative(value) => Self::Positive(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Negatable<U> {
        match self {
            Self::Positive(value) => Negatable::Positive(f(value)),
            Self::Negative(value) => Negatable::Negative(f(value)),
        }
    }
}

impl<T> From<T> for Negatable<T> {
    fn from(value: T) -> Self {
        Self::Positive(value)
    }
}
