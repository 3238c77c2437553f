//! Runtime type registry.
//!
//! Statically typed code gets its type classes from traits. Dynamically
//! typed values (the prelude's `Value`) need the same information at run
//! time: which constructor a value was built with, which class methods that
//! constructor declares, and whether two values have the same shape.
//!
//! - [`TypeTag`] names a constructor and owns its method table.
//! - [`Methods`] is a set of method symbols.
//! - [`Capability`] is a type class, described by the methods it requires.
//! - [`TypeSig`] is a structural signature; `(1, 2)` and `(3, 4)` share one,
//!   `(1, 2)` and `('a', 2)` do not.

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Class method symbols a type may declare.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Methods: u16 {
        /// Structural equality.
        const IS_EQ = 1 << 0;
        /// Three-way comparison.
        const COMPARE = 1 << 1;
        /// Monoid identity.
        const MEMPTY = 1 << 2;
        /// Monoid append.
        const MAPPEND = 1 << 3;
        /// Right fold.
        const FOLDR = 1 << 4;
        /// Functor map.
        const FMAP = 1 << 5;
        /// Applicative injection.
        const PURE = 1 << 6;
        /// Applicative application.
        const AP = 1 << 7;
        /// Monadic bind.
        const FLAT_MAP = 1 << 8;
        /// Traversal.
        const TRAVERSE = 1 << 9;
    }
}

/// Runtime identity of a value's constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTag {
    /// The empty tuple.
    Unit,
    /// Booleans.
    Bool,
    /// Integers of any width.
    Int,
    /// Floating point numbers.
    Float,
    /// Characters.
    Char,
    /// Strings.
    Str,
    /// `LT`, `EQ` or `GT`.
    Ordering,
    /// Cons lists.
    List,
    /// Tuples of arity two or more.
    Tuple,
    /// `Just` or `Nothing`.
    Maybe,
    /// Closures and function pointers.
    Function,
}

impl TypeTag {
    /// The class methods this constructor declares.
    ///
    /// Primitive numbers, characters and booleans declare nothing; class
    /// dispatch on them falls back to the primitive operations.
    #[must_use]
    pub const fn methods(self) -> Methods {
        match self {
            TypeTag::Bool | TypeTag::Int | TypeTag::Float | TypeTag::Char | TypeTag::Function => {
                Methods::empty()
            }
            TypeTag::Str => Methods::MEMPTY.union(Methods::MAPPEND),
            TypeTag::Unit | TypeTag::Ordering => Methods::IS_EQ
                .union(Methods::COMPARE)
                .union(Methods::MEMPTY)
                .union(Methods::MAPPEND),
            TypeTag::Tuple => Methods::all().difference(Methods::FLAT_MAP),
            TypeTag::List | TypeTag::Maybe => Methods::all(),
        }
    }

    /// The constructor's name as it appears in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Unit => "Unit",
            TypeTag::Bool => "Bool",
            TypeTag::Int => "Int",
            TypeTag::Float => "Float",
            TypeTag::Char => "Char",
            TypeTag::Str => "String",
            TypeTag::Ordering => "Ordering",
            TypeTag::List => "List",
            TypeTag::Tuple => "Tuple",
            TypeTag::Maybe => "Maybe",
            TypeTag::Function => "Function",
        }
    }
}

/// A type class, seen as the set of methods a type must declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `is_eq`.
    Eq,
    /// `compare`, plus everything `Eq` needs.
    Ord,
    /// `mempty` and `mappend`.
    Monoid,
    /// `fmap`.
    Functor,
    /// `pure` and `ap`, plus everything `Functor` needs.
    Applicative,
    /// `flat_map`, plus everything `Applicative` needs.
    Monad,
    /// `foldr`.
    Foldable,
    /// `traverse`, plus everything `Functor` and `Foldable` need.
    Traversable,
}

impl Capability {
    /// Every method a type must declare to belong to this class.
    #[must_use]
    pub const fn required(self) -> Methods {
        match self {
            Capability::Eq => Methods::IS_EQ,
            Capability::Ord => Capability::Eq.required().union(Methods::COMPARE),
            Capability::Monoid => Methods::MEMPTY.union(Methods::MAPPEND),
            Capability::Functor => Methods::FMAP,
            Capability::Applicative => Capability::Functor
                .required()
                .union(Methods::PURE)
                .union(Methods::AP),
            Capability::Monad => Capability::Applicative.required().union(Methods::FLAT_MAP),
            Capability::Foldable => Methods::FOLDR,
            Capability::Traversable => Capability::Functor
                .required()
                .union(Capability::Foldable.required())
                .union(Methods::TRAVERSE),
        }
    }

    /// Whether `value`'s type belongs to this class.
    pub fn satisfied_by<T: Typed + ?Sized>(self, value: &T) -> bool {
        defines(self.required())(value)
    }
}

/// Structural type signature of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeSig {
    /// Matches any signature. Used for the element type of an empty list
    /// and the payload type of `Nothing`.
    Any,
    /// `()`.
    Unit,
    /// Booleans.
    Bool,
    /// Integers.
    Int,
    /// Floats.
    Float,
    /// Characters.
    Char,
    /// Strings.
    Str,
    /// Orderings.
    Ordering,
    /// Functions.
    Function,
    /// A list with the given element signature.
    List(Box<TypeSig>),
    /// A Maybe with the given payload signature.
    Maybe(Box<TypeSig>),
    /// A tuple with one signature per slot.
    Tuple(Vec<TypeSig>),
}

impl TypeSig {
    /// Whether two signatures describe the same type, treating [`TypeSig::Any`]
    /// as a wildcard.
    #[must_use]
    pub fn matches(&self, other: &TypeSig) -> bool {
        match (self, other) {
            (TypeSig::Any, _) | (_, TypeSig::Any) => true,
            (TypeSig::List(a), TypeSig::List(b)) | (TypeSig::Maybe(a), TypeSig::Maybe(b)) => {
                a.matches(b)
            }
            (TypeSig::Tuple(xs), TypeSig::Tuple(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x.matches(y))
            }
            (a, b) => a == b,
        }
    }
}

/// Values that can report their runtime type.
pub trait Typed {
    /// The constructor this value was built with.
    fn type_tag(&self) -> TypeTag;

    /// The value's structural signature.
    fn type_sig(&self) -> TypeSig;
}

impl<T: Typed + ?Sized> Typed for &T {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }

    fn type_sig(&self) -> TypeSig {
        (**self).type_sig()
    }
}

impl<T: Typed + ?Sized> Typed for Box<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }

    fn type_sig(&self) -> TypeSig {
        (**self).type_sig()
    }
}

macro_rules! typed_primitive {
    ($tag:ident => $($ty:ty),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::$tag
                }

                fn type_sig(&self) -> TypeSig {
                    TypeSig::$tag
                }
            }
        )*
    };
}

typed_primitive!(Int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
typed_primitive!(Float => f32, f64);
typed_primitive!(Bool => bool);
typed_primitive!(Char => char);
typed_primitive!(Str => str, String);
typed_primitive!(Unit => ());

/// The runtime type identity of `value`.
pub fn data_type<T: Typed + ?Sized>(value: &T) -> TypeTag {
    value.type_tag()
}

/// Builds a reusable predicate that holds for values whose type declares
/// every method in `methods`.
pub fn defines<T: Typed + ?Sized>(methods: Methods) -> impl Fn(&T) -> bool {
    move |value| data_type(value).methods().contains(methods)
}

/// Whether `value`'s type belongs to `capability`.
pub fn satisfies<T: Typed + ?Sized>(capability: Capability, value: &T) -> bool {
    capability.satisfied_by(value)
}

/// Whether `a` and `b` have the same runtime type.
pub fn type_check<A, B>(a: &A, b: &B) -> bool
where
    A: Typed + ?Sized,
    B: Typed + ?Sized,
{
    a.type_sig().matches(&b.type_sig())
}
