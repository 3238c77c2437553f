//! Persistent singly-linked lists
//!
//! A `List<T>` is either empty or a cons cell holding a head and a tail.
//! Cells are reference counted and never mutated, so tails are shared
//! freely: `tail(&xs)` hands back the very list `xs` points to.
//!
//! Tails come in two forms. A ready tail is an ordinary list. A deferred
//! tail holds a generator that produces the rest of the list on first
//! access and caches it; this is how the infinite lists in [`lazy`] work.
//!
//! # Operations
//!
//! Operations are free functions grouped by concern and re-exported here:
//!
//! - [`basic`] - `cons`, `head`, `tail`, `last`, `init`, `uncons`, `length`
//! - [`transform`] - `map`, `reverse`, `intersperse`, `intercalate`, `transpose`
//! - [`fold`] - `foldr`, `foldl`, `scanl`, `scanr`, `concat`, `concat_map`, ...
//! - [`lazy`] - `list_inf`, `iterate`, `repeat`, `cycle`, ranges
//! - [`sublist`] - `take`, `drop`, `span`, `group`, `strip_prefix`, ...
//! - [`search`] - `filter`, `lookup`, `elem`, `index`, `find`, ...
//! - [`zip`] - `zip`, `zip3`, `zip_with`, `zip_with3`, `unzip`
//! - [`set`] - `nub`, `delete_l`, `delete_firsts`, `union`, `intersect`
//! - [`sort`] - `sort`, `merge_sort`, `insert` and their `_by` forms
//!
//! Definitions are recursive, following their Haskell counterparts, and
//! are not tuned for very long lists.

/// Builds a list from its elements.
///
/// ```
/// use hask_prelude::list;
/// use hask_prelude::list::length;
///
/// let xs = list![1, 2, 3];
/// assert_eq!(length(&xs), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::List::empty()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::list::List::from_vec(vec![$($x),+])
    };
}

pub mod basic;
pub mod curried;
pub mod fold;
mod instances;
pub mod lazy;
pub mod search;
pub mod set;
pub mod sort;
pub mod sublist;
pub mod transform;
pub mod zip;

pub use basic::{
    cons, from_array_to_list, from_list_to_array, from_list_to_string, from_string_to_list,
    head, init, is_empty, last, length, list_append, null, singleton, tail, uncons,
};
pub use fold::{
    all, and, any, concat, concat_map, foldl, foldl1, foldr, foldr1, maximum, minimum, or,
    product, scanl, scanl1, scanr, scanr1, sum,
};
pub use lazy::{
    cycle, iterate, list_inf, list_inf_by, list_range, list_range_by, list_range_lazy,
    list_range_lazy_by, repeat, replicate,
};
pub use search::{
    elem, elem_index, elem_indices, filter, find, find_index, find_indices, index, lookup,
    not_elem, partition,
};
pub use set::{
    delete_firsts, delete_firsts_by, delete_l, delete_l_by, intersect, intersect_by, nub, nub_by,
    union, union_by,
};
pub use sort::{
    insert, insert_by, maximum_by, merge_sort, merge_sort_by, minimum_by, sort, sort_by, sort_on,
};
pub use sublist::{
    drop, drop_while, group, group_by, is_infix_of, is_prefix_of, is_suffix_of, span, span_not,
    split_at, strip_prefix, take, take_while,
};
pub use transform::{intercalate, intersperse, map, reverse, transpose};
pub use zip::{unzip, unzip3, zip, zip3, zip_with, zip_with3};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use hask_base::{Show, TypeSig, TypeTag, Typed};

use self::lazy::Suspension;

/// A persistent cons list.
pub struct List<T> {
    node: Option<Rc<Cons<T>>>,
}

struct Cons<T> {
    head: T,
    tail: Tail<T>,
}

enum Tail<T> {
    Ready(List<T>),
    Deferred(Suspension<T>),
}

impl<T> Tail<T> {
    fn get(&self) -> &List<T> {
        match self {
            Tail::Ready(list) => list,
            Tail::Deferred(suspension) => suspension.force(),
        }
    }

    // Detaches the next cell without forcing anything.
    fn into_node(self) -> Option<Rc<Cons<T>>> {
        match self {
            Tail::Ready(mut list) => list.node.take(),
            Tail::Deferred(suspension) => suspension
                .into_forced()
                .and_then(|mut list| list.node.take()),
        }
    }
}

/// The empty list.
#[inline]
#[must_use]
pub const fn empty_list<T>() -> List<T> {
    List::empty()
}

impl<T> List<T> {
    /// The empty list.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        List { node: None }
    }

    /// Prepends `head` without checking that it matches the existing
    /// elements' type. See [`cons`] for the checked form.
    #[must_use]
    pub fn cons_unchecked(head: T, tail: List<T>) -> Self {
        List {
            node: Some(Rc::new(Cons {
                head,
                tail: Tail::Ready(tail),
            })),
        }
    }

    /// Prepends `head` to a tail that is produced by `generator` on first
    /// access.
    pub fn cons_lazy<G>(head: T, generator: G) -> Self
    where
        G: FnOnce() -> List<T> + 'static,
    {
        List {
            node: Some(Rc::new(Cons {
                head,
                tail: Tail::Deferred(Suspension::new(generator)),
            })),
        }
    }

    /// Builds a list holding the elements of `items` in order.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(List::empty(), |tail, head| List::cons_unchecked(head, tail))
    }

    /// Whether the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Borrows the first element.
    #[inline]
    #[must_use]
    pub fn head_ref(&self) -> Option<&T> {
        self.node.as_ref().map(|cell| &cell.head)
    }

    /// Borrows the rest of the list, generating it if it is deferred.
    #[inline]
    #[must_use]
    pub fn tail_ref(&self) -> Option<&List<T>> {
        self.node.as_ref().map(|cell| cell.tail.get())
    }

    /// Borrows the head and the tail at once.
    #[inline]
    #[must_use]
    pub fn uncons_ref(&self) -> Option<(&T, &List<T>)> {
        self.node.as_ref().map(|cell| (&cell.head, cell.tail.get()))
    }

    /// Whether two lists are the same cell (or both empty).
    #[must_use]
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Whether this cell's tail is still waiting to be generated.
    #[must_use]
    pub fn is_tail_deferred(&self) -> bool {
        match &self.node {
            Some(cell) => match &cell.tail {
                Tail::Ready(_) => false,
                Tail::Deferred(suspension) => !suspension.is_forced(),
            },
            None => false,
        }
    }

    /// Iterates over borrowed elements, forcing deferred tails on the way.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            node: self.node.clone(),
        }
    }
}

// Unlinks cells one at a time. Plain drop glue would recurse once per
// cell and overflow the stack on long lists.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.node.take();
        while let Some(cell) = next {
            next = match Rc::into_inner(cell) {
                Some(Cons { head, tail }) => {
                    core::mem::drop(head);
                    tail.into_node()
                }
                None => None,
            };
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

/// Borrowing iterator over a [`List`].
pub struct Iter<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (head, tail) = self.current.uncons_ref()?;
        self.current = tail;
        Some(head)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::from_vec(iter.into_iter().collect())
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self {
            item.hash(state);
        }
        state.write_u8(0xff);
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Show> Show for List<T> {
    fn show(&self) -> String {
        if self.is_empty() {
            return "[]".to_string();
        }
        let mut out = String::from("[");
        for item in self {
            out.push_str(&item.show());
            out.push(':');
        }
        out.push_str("[]]");
        out
    }
}

impl<T: Typed> Typed for List<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::List
    }

    fn type_sig(&self) -> TypeSig {
        let element = self.head_ref().map_or(TypeSig::Any, Typed::type_sig);
        TypeSig::List(Box::new(element))
    }
}

/// Stand-in rendered into errors raised on the empty list, so that raising
/// them does not require `T: Show`.
pub(crate) struct Nil;

impl Show for Nil {
    fn show(&self) -> String {
        "[]".to_string()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(List::from_vec)
    }
}
