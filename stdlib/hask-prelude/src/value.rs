//! The dynamically typed value universe.
//!
//! Generic code gets its class dispatch from traits at compile time. A
//! [`Value`] carries its type with it instead, so every class operation on
//! it is resolved at run time through the registry in
//! [`hask_base::registry`]:
//!
//! 1. Binary operations first require both operands to share a type
//!    signature and fail with [`Error::TypeMismatch`] otherwise.
//! 2. If the type declares the class's methods, the structural instance
//!    is used (lists, tuples, Maybe, Ordering, unit).
//! 3. Otherwise the primitive operation applies (`==`, `<`) or, for
//!    classes without a primitive fallback, a type error is raised.
//!
//! ```
//! use hask_prelude::list;
//! use hask_prelude::value::Value;
//!
//! let xs = Value::List(list![Value::Int(1), Value::Int(2)]);
//! let ys = Value::List(list![Value::Int(1), Value::Int(3)]);
//! assert!(xs.compare(&ys).unwrap().is_lt());
//! assert!(xs.is_eq(&Value::Str("12".into())).is_err());
//! ```

use std::cmp::Ordering as StdOrdering;

use hask_base::classes::{compare, Monoid};
use hask_base::registry::{satisfies, type_check};
use hask_base::{Capability, Error, Ordering, Result, Show, TypeSig, TypeTag, Typed};

use crate::list::basic::append;
use crate::list::{self as lists, List};
use crate::maybe::{Maybe, Presence};
use crate::tuple::Tuple;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `()`.
    Unit,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A float. NaN is the "no value" sentinel for [`crate::maybe::just`].
    Float(f64),
    /// A character.
    Char(char),
    /// A string.
    Str(String),
    /// A comparison result.
    Ordering(Ordering),
    /// A list of values.
    List(List<Value>),
    /// A tuple of two or more values.
    Tuple(Tuple),
    /// An optional value.
    Maybe(Maybe<Box<Value>>),
}

impl Value {
    /// Equality through the registry.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the operands have different types.
    pub fn is_eq(&self, other: &Value) -> Result<bool> {
        if !type_check(self, other) {
            return Err(Error::type_mismatch(self, other, "is_eq"));
        }
        if satisfies(Capability::Eq, self) {
            self.structural_eq(other)
        } else {
            Ok(self == other)
        }
    }

    /// Negation of [`Value::is_eq`].
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the operands have different types.
    pub fn is_not_eq(&self, other: &Value) -> Result<bool> {
        self.is_eq(other).map(|eq| !eq)
    }

    fn structural_eq(&self, other: &Value) -> Result<bool> {
        match (self, other) {
            (Value::Unit, Value::Unit) => Ok(true),
            (Value::Ordering(a), Value::Ordering(b)) => Ok(a == b),
            (Value::List(xs), Value::List(ys)) => {
                let mut xs = xs.iter();
                let mut ys = ys.iter();
                loop {
                    match (xs.next(), ys.next()) {
                        (None, None) => return Ok(true),
                        (Some(x), Some(y)) => {
                            if !x.is_eq(y)? {
                                return Ok(false);
                            }
                        }
                        _ => return Ok(false),
                    }
                }
            }
            (Value::Tuple(a), Value::Tuple(b)) => a.is_eq(b),
            (Value::Maybe(a), Value::Maybe(b)) => match (a, b) {
                (Maybe::Just(x), Maybe::Just(y)) => x.is_eq(y),
                (Maybe::Nothing, Maybe::Nothing) => Ok(true),
                _ => Ok(false),
            },
            _ => Err(Error::type_mismatch(self, other, "is_eq")),
        }
    }

    /// Three-way comparison through the registry.
    ///
    /// Primitives compare with `<`. Infinities are ordered against every
    /// other float and equal only to themselves, so `compare` stays
    /// reflexive instead of treating infinity as always greater. An
    /// incomparable pair (NaN on either side) is neither equal nor less,
    /// so it compares `GT`.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the operands have different types.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        if !type_check(self, other) {
            return Err(Error::type_mismatch(self, other, "compare"));
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Ok(compare(a, b)),
            (Value::Int(a), Value::Int(b)) => Ok(compare(a, b)),
            (Value::Float(a), Value::Float(b)) => Ok(compare(a, b)),
            (Value::Char(a), Value::Char(b)) => Ok(compare(a, b)),
            (Value::Str(a), Value::Str(b)) => Ok(compare(a, b)),
            _ if satisfies(Capability::Ord, self) => self.structural_compare(other),
            _ => Err(Error::type_error(self, "compare")),
        }
    }

    fn structural_compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Unit, Value::Unit) => Ok(Ordering::EQ),
            (Value::Ordering(a), Value::Ordering(b)) => Ok(compare(a, b)),
            (Value::List(xs), Value::List(ys)) => {
                let mut xs = xs.iter();
                let mut ys = ys.iter();
                loop {
                    match (xs.next(), ys.next()) {
                        (None, None) => return Ok(Ordering::EQ),
                        (None, Some(_)) => return Ok(Ordering::LT),
                        (Some(_), None) => return Ok(Ordering::GT),
                        (Some(x), Some(y)) => {
                            let ord = x.compare(y)?;
                            if !ord.is_eq() {
                                return Ok(ord);
                            }
                        }
                    }
                }
            }
            (Value::Tuple(a), Value::Tuple(b)) => a.compare(b),
            (Value::Maybe(a), Value::Maybe(b)) => match (a, b) {
                (Maybe::Just(x), Maybe::Just(y)) => x.compare(y),
                (Maybe::Nothing, Maybe::Nothing) => Ok(Ordering::EQ),
                (Maybe::Nothing, Maybe::Just(_)) => Ok(Ordering::LT),
                (Maybe::Just(_), Maybe::Nothing) => Ok(Ordering::GT),
            },
            _ => Err(Error::type_mismatch(self, other, "compare")),
        }
    }

    /// Monoid append through the registry.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] for operands of different types and
    /// [`Error::Type`] for types that are not monoids.
    pub fn mappend(&self, other: &Value) -> Result<Value> {
        if !type_check(self, other) {
            return Err(Error::type_mismatch(self, other, "mappend"));
        }
        if !satisfies(Capability::Monoid, self) {
            return Err(Error::type_error(self, "mappend"));
        }
        match (self, other) {
            (Value::Unit, Value::Unit) => Ok(Value::Unit),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            (Value::Ordering(a), Value::Ordering(b)) => Ok(Value::Ordering(a.mappend(*b))),
            (Value::List(xs), Value::List(ys)) => Ok(Value::List(append(xs, ys))),
            (Value::Tuple(a), Value::Tuple(b)) => a.mappend(b).map(Value::Tuple),
            (Value::Maybe(a), Value::Maybe(b)) => match (a, b) {
                (Maybe::Just(x), Maybe::Just(y)) => {
                    let inner = x.mappend(y)?;
                    Ok(Value::Maybe(Maybe::Just(Box::new(inner))))
                }
                (Maybe::Nothing, _) => Ok(other.clone()),
                (_, Maybe::Nothing) => Ok(self.clone()),
            },
            _ => Err(Error::type_mismatch(self, other, "mappend")),
        }
    }

    /// The monoid identity of this value's type.
    ///
    /// # Errors
    ///
    /// [`Error::Type`] for types that are not monoids.
    pub fn mempty_like(&self) -> Result<Value> {
        match self {
            Value::Unit => Ok(Value::Unit),
            Value::Str(_) => Ok(Value::Str(String::new())),
            Value::Ordering(_) => Ok(Value::Ordering(Ordering::mempty())),
            Value::List(_) => Ok(Value::List(List::empty())),
            Value::Maybe(_) => Ok(Value::Maybe(Maybe::Nothing)),
            Value::Tuple(t) => t.mempty_like().map(Value::Tuple),
            _ => Err(Error::type_error(self, "mempty")),
        }
    }

    /// Functor map through the registry. Tuples map their second slot.
    ///
    /// # Errors
    ///
    /// [`Error::Type`] for types that are not functors.
    pub fn fmap<F>(&self, mut f: F) -> Result<Value>
    where
        F: FnMut(&Value) -> Value,
    {
        match self {
            Value::List(xs) => Ok(Value::List(lists::map(f, xs))),
            Value::Maybe(m) => Ok(Value::Maybe(m.as_ref().map(|x| Box::new(f(&**x))))),
            Value::Tuple(t) => Ok(Value::Tuple(t.fmap(f))),
            _ => Err(Error::type_error(self, "fmap")),
        }
    }

    /// Right fold through the registry.
    ///
    /// # Errors
    ///
    /// [`Error::Type`] for types that are not foldable.
    pub fn foldr<B, F>(&self, mut f: F, init: B) -> Result<B>
    where
        F: FnMut(&Value, B) -> B,
    {
        match self {
            Value::List(xs) => Ok(lists::foldr(f, init, xs)),
            Value::Maybe(Maybe::Just(x)) => Ok(f(&**x, init)),
            Value::Maybe(Maybe::Nothing) => Ok(init),
            Value::Tuple(t) => Ok(t.foldr(f, init)),
            _ => Err(Error::type_error(self, "foldr")),
        }
    }

    /// The list inside, for `function`.
    ///
    /// # Errors
    ///
    /// [`Error::NotAList`] when this is not a list.
    pub fn as_list(&self, function: &'static str) -> Result<&List<Value>> {
        match self {
            Value::List(xs) => Ok(xs),
            _ => Err(Error::list_error(self, function)),
        }
    }

    /// The tuple inside, for `function`.
    ///
    /// # Errors
    ///
    /// [`Error::NotATuple`] when this is not a tuple.
    pub fn as_tuple(&self, function: &'static str) -> Result<&Tuple> {
        match self {
            Value::Tuple(t) => Ok(t),
            _ => Err(Error::tuple_error(self, function)),
        }
    }

    /// The boolean returned by `callback` inside `caller`.
    ///
    /// # Errors
    ///
    /// [`Error::Return`] when the callback returned something else.
    pub fn as_bool(&self, callback: &str, caller: &'static str) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(Error::return_error(callback, caller)),
        }
    }
}

/// Keeps the elements of the list `xs` for which `p` returns `True`.
///
/// # Errors
///
/// [`Error::NotAList`] if `xs` is not a list, [`Error::Return`] if `p`
/// returns something other than a boolean.
pub fn filter<P>(mut p: P, xs: &Value) -> Result<Value>
where
    P: FnMut(&Value) -> Value,
{
    let xs = xs.as_list("filter")?;
    filter_ref(&mut p, xs).map(Value::List)
}

fn filter_ref<P>(p: &mut P, xs: &List<Value>) -> Result<List<Value>>
where
    P: FnMut(&Value) -> Value,
{
    match xs.uncons_ref() {
        Some((head, tail)) => {
            let keep = p(head).as_bool("predicate", "filter")?;
            let rest = filter_ref(p, tail)?;
            Ok(if keep {
                List::cons_unchecked(head.clone(), rest)
            } else {
                rest
            })
        }
        None => Ok(List::empty()),
    }
}

/// The first element of the list `xs` for which `p` returns `True`, as a
/// `Value::Maybe`.
///
/// # Errors
///
/// [`Error::NotAList`] if `xs` is not a list, [`Error::Return`] if `p`
/// returns something other than a boolean.
pub fn find<P>(mut p: P, xs: &Value) -> Result<Value>
where
    P: FnMut(&Value) -> Value,
{
    for x in xs.as_list("find")? {
        if p(x).as_bool("predicate", "find")? {
            return Ok(Value::Maybe(Maybe::Just(Box::new(x.clone()))));
        }
    }
    Ok(Value::Maybe(Maybe::Nothing))
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<StdOrdering> {
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            _ => self.compare(other).ok().map(StdOrdering::from),
        }
    }
}

impl Typed for Value {
    fn type_tag(&self) -> TypeTag {
        match self {
            Value::Unit => TypeTag::Unit,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Char(_) => TypeTag::Char,
            Value::Str(_) => TypeTag::Str,
            Value::Ordering(_) => TypeTag::Ordering,
            Value::List(_) => TypeTag::List,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::Maybe(_) => TypeTag::Maybe,
        }
    }

    fn type_sig(&self) -> TypeSig {
        match self {
            Value::Unit => TypeSig::Unit,
            Value::Bool(_) => TypeSig::Bool,
            Value::Int(_) => TypeSig::Int,
            Value::Float(_) => TypeSig::Float,
            Value::Char(_) => TypeSig::Char,
            Value::Str(_) => TypeSig::Str,
            Value::Ordering(_) => TypeSig::Ordering,
            Value::List(xs) => xs.type_sig(),
            Value::Tuple(t) => t.type_sig(),
            Value::Maybe(m) => m.type_sig(),
        }
    }
}

impl Show for Value {
    fn show(&self) -> String {
        match self {
            Value::Unit => ().show(),
            Value::Bool(b) => b.show(),
            Value::Int(n) => n.show(),
            Value::Float(x) => x.show(),
            Value::Char(c) => c.show(),
            Value::Str(s) => s.show(),
            Value::Ordering(o) => o.show(),
            Value::List(xs) => xs.show(),
            Value::Tuple(t) => t.show(),
            Value::Maybe(m) => m.show(),
        }
    }

    fn show_atom(&self) -> String {
        match self {
            Value::Int(n) => n.show_atom(),
            Value::Float(x) => x.show_atom(),
            Value::Maybe(m) => m.show_atom(),
            _ => self.show(),
        }
    }
}

impl Presence for Value {
    fn is_absent(&self) -> bool {
        matches!(self, Value::Float(x) if x.is_nan())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Ordering> for Value {
    fn from(o: Ordering) -> Self {
        Value::Ordering(o)
    }
}

impl From<List<Value>> for Value {
    fn from(xs: List<Value>) -> Self {
        Value::List(xs)
    }
}

impl From<Tuple> for Value {
    fn from(t: Tuple) -> Self {
        Value::Tuple(t)
    }
}

impl From<Maybe<Value>> for Value {
    fn from(m: Maybe<Value>) -> Self {
        Value::Maybe(m.map(Box::new))
    }
}
