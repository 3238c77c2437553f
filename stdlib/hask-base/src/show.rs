//! Canonical string rendering (`Show`) and printing.
//!
//! Rendering follows Haskell's `show` where it can: `True`, `'a'`,
//! `"abc"`, `()`. Containers render their elements with
//! [`Show::show_atom`], which parenthesises anything that would otherwise
//! be ambiguous as a constructor argument (`Just (-3)`, `Just (Just 1)`).

use std::io::{self, Write};

/// Types with a canonical string form.
pub trait Show {
    /// Renders the value.
    fn show(&self) -> String;

    /// Renders the value for use as a constructor argument.
    fn show_atom(&self) -> String {
        self.show()
    }
}

/// Renders a value to its canonical string.
pub fn show<T: Show + ?Sized>(value: &T) -> String {
    value.show()
}

/// Writes the canonical form of `value` and a newline to standard output.
pub fn print<T: Show + ?Sized>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_to(&mut handle, value)
}

/// Writes the canonical form of `value` and a newline to `out`.
pub fn print_to<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Show + ?Sized,
{
    writeln!(out, "{}", value.show())
}

impl<T: Show + ?Sized> Show for &T {
    fn show(&self) -> String {
        (**self).show()
    }

    fn show_atom(&self) -> String {
        (**self).show_atom()
    }
}

impl<T: Show + ?Sized> Show for Box<T> {
    fn show(&self) -> String {
        (**self).show()
    }

    fn show_atom(&self) -> String {
        (**self).show_atom()
    }
}

macro_rules! show_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Show for $ty {
                fn show(&self) -> String {
                    self.to_string()
                }

                #[allow(unused_comparisons)]
                fn show_atom(&self) -> String {
                    if *self < 0 {
                        format!("({self})")
                    } else {
                        self.to_string()
                    }
                }
            }
        )*
    };
}

show_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! show_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Show for $ty {
                fn show(&self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if self.is_infinite() {
                        let text = if self.is_sign_positive() { "Infinity" } else { "-Infinity" };
                        text.to_string()
                    } else {
                        format!("{self:?}")
                    }
                }

                fn show_atom(&self) -> String {
                    if self.is_sign_negative() && !self.is_nan() {
                        format!("({})", self.show())
                    } else {
                        self.show()
                    }
                }
            }
        )*
    };
}

show_float!(f32, f64);

impl Show for bool {
    fn show(&self) -> String {
        let text = if *self { "True" } else { "False" };
        text.to_string()
    }
}

impl Show for char {
    fn show(&self) -> String {
        format!("{self:?}")
    }
}

impl Show for str {
    fn show(&self) -> String {
        format!("{self:?}")
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.as_str().show()
    }
}

impl Show for () {
    fn show(&self) -> String {
        "()".to_string()
    }
}
