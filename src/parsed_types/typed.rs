//! Type annotations: [`Type`], the [`Typed`] pairing of a value with its
//! type, and the [`TypedList`]s found in `:types`, `:objects`, predicate
//! signatures and parameter lists.

use crate::parsed_types::Name;
use std::ops::Deref;

/// The name of the root type every object belongs to.
pub const OBJECT_TYPE_NAME: &str = "object";

/// A single type name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PrimitiveType(Name);

impl PrimitiveType {
    pub const fn new(name: Name) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &Name {
        &self.0
    }

    /// Whether this is the implicit `object` type, which constrains nothing.
    pub fn is_object(&self) -> bool {
        self.0 == OBJECT_TYPE_NAME
    }
}

impl<T: Into<Name>> From<T> for PrimitiveType {
    fn from(value: T) -> Self {
        PrimitiveType::new(value.into())
    }
}

impl Deref for PrimitiveType {
    type Target = Name;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// `<primitive-type>` or `(either <primitive-type>+)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Type {
    Exactly(PrimitiveType),
    EitherOf(Vec<PrimitiveType>),
}

impl Type {
    pub fn object() -> Self {
        Self::Exactly(PrimitiveType::from(OBJECT_TYPE_NAME))
    }

    pub fn primitives(&self) -> &[PrimitiveType] {
        match self {
            Type::Exactly(p) => std::slice::from_ref(p),
            Type::EitherOf(v) => v,
        }
    }

    /// True for `object` and for any `either` that mentions `object`.
    pub fn is_unconstrained(&self) -> bool {
        self.primitives().iter().any(PrimitiveType::is_object)
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::object()
    }
}

impl From<&str> for Type {
    fn from(value: &str) -> Self {
        Self::Exactly(value.into())
    }
}

impl From<Vec<&str>> for Type {
    fn from(value: Vec<&str>) -> Self {
        Self::EitherOf(value.into_iter().map(PrimitiveType::from).collect())
    }
}

impl From<PrimitiveType> for Type {
    fn from(value: PrimitiveType) -> Self {
        Self::Exactly(value)
    }
}

/// A value with its declared type, e.g. `?t - IsTray` or `locTable - Location`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Typed<O> {
    value: O,
    type_: Type,
}

impl<O> Typed<O> {
    pub const fn new(value: O, type_: Type) -> Self {
        Self { value, type_ }
    }

    pub fn new_object(value: O) -> Self {
        Self::new(value, Type::object())
    }

    pub const fn value(&self) -> &O {
        &self.value
    }

    pub const fn type_(&self) -> &Type {
        &self.type_
    }
}

/// Adds `.to_typed(...)` to every value.
pub trait ToTyped: Sized {
    fn to_typed<I: Into<Type>>(self, type_: I) -> Typed<Self> {
        Typed::new(self, type_.into())
    }
}

impl<T> ToTyped for T {}

/// A list of typed values in declaration order.
///
/// ## Example
/// ```
/// # use eagerground::parsed_types::{Name, TypedList, Typed, Type};
/// let tl = TypedList::from_iter([
///     Typed::new(Name::from("locTable"), Type::from("Location")),
///     Typed::new(Name::from("trayA"), Type::default()),
/// ]);
///
/// assert_eq!(tl.len(), 2);
/// assert_eq!(tl[0].value(), &Name::from("locTable"));
/// assert!(tl[1].type_().is_unconstrained());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TypedList<T>(Vec<Typed<T>>);

impl<T> Default for TypedList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TypedList<T> {
    pub const fn new(list: Vec<Typed<T>>) -> Self {
        Self(list)
    }
}

impl<T> FromIterator<Typed<T>> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = Typed<T>>>(iter: I) -> Self {
        TypedList::new(iter.into_iter().collect())
    }
}

impl<T> Deref for TypedList<T> {
    type Target = [Typed<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> IntoIterator for TypedList<T> {
    type Item = Typed<T>;
    type IntoIter = std::vec::IntoIter<Typed<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_name, typed_list, Span};

    #[test]
    fn default_type_is_unconstrained() {
        assert!(Type::default().is_unconstrained());
        assert!(!Type::from("Location").is_unconstrained());
        assert!(Type::from(vec!["Location", "object"]).is_unconstrained());
    }

    #[test]
    fn primitives_of_either() {
        let t = Type::from(vec!["IsTray", "Object"]);
        assert_eq!(t.primitives().len(), 2);
        assert_eq!(t.primitives()[1].name(), &Name::new("Object"));
    }

    #[test]
    fn untyped_objects_default_to_object() {
        let (_, objects) =
            typed_list(parse_name)(Span::new("loc1 loc2 - Location trayA - IsTray robot")).unwrap();
        assert_eq!(objects.len(), 4);
        assert_eq!(objects[1].type_(), &Type::from("Location"));
        assert_eq!(objects[2].type_(), &Type::from("IsTray"));
        assert_eq!(objects[3], Typed::new_object(Name::from("robot")));
    }
}
