//! Dynamically typed tuples.
//!
//! Statically typed code uses Rust tuples with the instances in
//! [`hask_base::tuple`]. This module is the tuple of the [`Value`]
//! universe: an immutable run of two or more values whose arity is only
//! known at run time. Slots are numbered from 1.
//!
//! [`tuple`] collapses arities the Haskell way: no values give
//! [`Value::Unit`], one value gives that value back unwrapped. Unit is not
//! a tuple as far as [`is_tuple`] is concerned.

use std::rc::Rc;

use hask_base::{Error, Ordering, Result, Show, TypeSig, TypeTag, Typed};

use crate::maybe::Presence;
use crate::value::Value;

/// A tuple of two or more dynamically typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuple {
    slots: Rc<[Value]>,
}

impl Tuple {
    /// The pair `(a, b)`.
    #[must_use]
    pub fn pair(a: Value, b: Value) -> Self {
        Tuple {
            slots: Rc::from(vec![a, b]),
        }
    }

    // Callers guarantee at least two slots.
    fn from_slots(slots: Vec<Value>) -> Self {
        Tuple {
            slots: Rc::from(slots),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// The slot at 1-based position `n`.
    ///
    /// # Errors
    ///
    /// [`Error::Range`] outside `1..=arity`.
    pub fn get(&self, n: usize) -> Result<&Value> {
        n.checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .ok_or_else(|| Error::range_error(n as i64, "Tuple::get"))
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Value] {
        &self.slots
    }

    /// Slot-wise equality.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when corresponding slots differ in type.
    pub fn is_eq(&self, other: &Tuple) -> Result<bool> {
        if self.arity() != other.arity() {
            return Err(Error::type_mismatch(self, other, "is_eq"));
        }
        for (a, b) in self.slots.iter().zip(other.slots.iter()) {
            if !a.is_eq(b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Lexicographic comparison, slot by slot from the first.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when corresponding slots differ in type.
    pub fn compare(&self, other: &Tuple) -> Result<Ordering> {
        if self.arity() != other.arity() {
            return Err(Error::type_mismatch(self, other, "compare"));
        }
        for (a, b) in self.slots.iter().zip(other.slots.iter()) {
            let ord = a.compare(b)?;
            if !ord.is_eq() {
                return Ok(ord);
            }
        }
        Ok(Ordering::EQ)
    }

    /// Component-wise `mappend`.
    ///
    /// # Errors
    ///
    /// Whatever `mappend` of a slot pair raises: a mismatch, or a type
    /// error for slots that are not monoids.
    pub fn mappend(&self, other: &Tuple) -> Result<Tuple> {
        if self.arity() != other.arity() {
            return Err(Error::type_mismatch(self, other, "mappend"));
        }
        let slots = self
            .slots
            .iter()
            .zip(other.slots.iter())
            .map(|(a, b)| a.mappend(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Tuple::from_slots(slots))
    }

    /// The identity for [`Tuple::mappend`] at this tuple's shape.
    ///
    /// # Errors
    ///
    /// A type error if some slot is not a monoid.
    pub fn mempty_like(&self) -> Result<Tuple> {
        let slots = self
            .slots
            .iter()
            .map(Value::mempty_like)
            .collect::<Result<Vec<_>>>()?;
        Ok(Tuple::from_slots(slots))
    }

    /// Applies `f` to the second slot, leaving the others alone.
    pub fn fmap<F>(&self, f: F) -> Tuple
    where
        F: FnOnce(&Value) -> Value,
    {
        let mut slots = self.slots.to_vec();
        slots[1] = f(&self.slots[1]);
        Tuple::from_slots(slots)
    }

    /// Folds the second slot into `init`.
    pub fn foldr<B, F>(&self, f: F, init: B) -> B
    where
        F: FnOnce(&Value, B) -> B,
    {
        f(&self.slots[1], init)
    }
}

impl Show for Tuple {
    fn show(&self) -> String {
        let slots: Vec<String> = self.slots.iter().map(Show::show).collect();
        format!("({})", slots.join(","))
    }
}

impl Typed for Tuple {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Tuple
    }

    fn type_sig(&self) -> TypeSig {
        TypeSig::Tuple(self.slots.iter().map(Typed::type_sig).collect())
    }
}

impl Presence for Tuple {}

/// Builds a tuple from `values`, collapsing arity 0 to unit and arity 1 to
/// the value itself.
pub fn tuple(values: Vec<Value>) -> Value {
    match values.len() {
        0 => Value::Unit,
        1 => values.into_iter().next().unwrap_or(Value::Unit),
        _ => Value::Tuple(Tuple::from_slots(values)),
    }
}

/// Whether `value` is a tuple. Unit is not.
pub fn is_tuple(value: &Value) -> bool {
    matches!(value, Value::Tuple(_))
}

/// Whether `value` is unit.
pub fn is_unit(value: &Value) -> bool {
    matches!(value, Value::Unit)
}

/// The first slot.
///
/// # Errors
///
/// [`Error::NotATuple`] when `p` is not a tuple.
pub fn fst(p: &Value) -> Result<Value> {
    p.as_tuple("fst").map(|t| t.slots[0].clone())
}

/// The second slot.
///
/// # Errors
///
/// [`Error::NotATuple`] when `p` is not a tuple.
pub fn snd(p: &Value) -> Result<Value> {
    p.as_tuple("snd").map(|t| t.slots[1].clone())
}

/// The pair with its slots exchanged.
///
/// # Errors
///
/// [`Error::NotATuple`] when `p` is not a pair.
pub fn swap(p: &Value) -> Result<Value> {
    let t = p.as_tuple("swap")?;
    match t.slots() {
        [a, b] => Ok(Value::Tuple(Tuple::pair(b.clone(), a.clone()))),
        _ => Err(Error::tuple_error(p, "swap")),
    }
}

/// [`tuple`] over a slice.
pub fn from_array_to_tuple(values: &[Value]) -> Value {
    tuple(values.to_vec())
}

/// The slots of a tuple as a vector.
///
/// # Errors
///
/// [`Error::NotATuple`] when `p` is not a tuple.
pub fn from_tuple_to_array(p: &Value) -> Result<Vec<Value>> {
    p.as_tuple("from_tuple_to_array").map(|t| t.slots.to_vec())
}

/// Turns a function on pairs into a function of two arguments.
pub fn curry<F>(f: F) -> impl Fn(Value, Value) -> Result<Value>
where
    F: Fn(&Value) -> Result<Value>,
{
    move |a, b| f(&Value::Tuple(Tuple::pair(a, b)))
}

/// Turns a function of two arguments into a function on pairs.
pub fn uncurry<F>(f: F) -> impl Fn(&Value) -> Result<Value>
where
    F: Fn(Value, Value) -> Result<Value>,
{
    move |p| f(fst(p)?, snd(p)?)
}
