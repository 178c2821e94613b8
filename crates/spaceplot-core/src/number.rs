//! Boxed scalar storage

use crate::ops::Valuable;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A handle to one scalar slot.
///
/// Cloning a `Number` yields a second handle to the *same* slot, which is how
/// a transposed vector aliases its source. Use [`Number::new`] with
/// [`Number::value`] for an independent copy.
#[derive(Clone)]
pub struct Number(Rc<Cell<f64>>);

impl Number {
    /// Allocate a fresh slot holding `value`.
    pub fn new(value: f64) -> Self {
        Number(Rc::new(Cell::new(value)))
    }

    pub fn value(&self) -> f64 {
        self.0.get()
    }

    /// Overwrite the slot. Every handle sharing it observes the new value.
    pub fn set(&self, value: f64) {
        self.0.set(value);
    }

    /// True when both handles refer to the same slot.
    pub fn ptr_eq(&self, other: &Number) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The same value negated, in a fresh slot.
    pub fn negated(&self) -> Number {
        Number::new(-self.value())
    }
}

impl Valuable for Number {
    fn value(&self) -> f64 {
        self.0.get()
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::new(0.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::new(value)
    }
}

// Values compare, slots don't; see `ptr_eq` for identity.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({:?})", self.value())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_display() {
        let n = Number::new(2.5);
        assert_eq!(n.value(), 2.5);
        assert_eq!(n.to_string(), "2.500000");
    }

    #[test]
    fn test_clone_shares_slot() {
        let a = Number::new(1.0);
        let b = a.clone();
        b.set(7.0);
        assert_eq!(a.value(), 7.0);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_new_is_independent() {
        let a = Number::new(1.0);
        let b = Number::new(a.value());
        b.set(3.0);
        assert_eq!(a.value(), 1.0);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_negated() {
        assert_eq!(Number::new(200.0).negated().value(), -200.0);
    }
}
