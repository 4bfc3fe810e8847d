use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An opaque atomic scalar: the smallest unit a tuple can hold.
///
/// Atoms from different tuples need not share a variant. All three variants
/// share one equality/hash/order rule so set operations behave consistently:
/// `Num` compares by IEEE bit pattern after normalizing `-0.0` to `0.0` and
/// collapsing NaN payloads, ordering uses `f64::total_cmp`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Atom {
    Text(String),
    Int(i64),
    Num(f64),
}

impl Atom {
    /// Whether the atom reads as a floating-point numeral: `Int`/`Num`
    /// always do, `Text` iff it parses under Rust's float grammar
    /// (sign, decimal point, scientific notation).
    pub fn parses_as_number(&self) -> bool {
        match self {
            Atom::Int(_) | Atom::Num(_) => true,
            Atom::Text(s) => s.trim().parse::<f64>().is_ok(),
        }
    }

    /// Numeric reading of the atom, when one exists.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Atom::Int(i) => Some(*i as f64),
            Atom::Num(n) => Some(*n),
            Atom::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Text payload, for `Text` atoms only.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Atom::Text(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Atom::Int(_) => 0,
            Atom::Num(_) => 1,
            Atom::Text(_) => 2,
        }
    }
}

/// Canonical float: one zero, one NaN.
fn canonical(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x.is_nan() {
        f64::NAN
    } else {
        x
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Text(a), Atom::Text(b)) => a == b,
            (Atom::Int(a), Atom::Int(b)) => a == b,
            (Atom::Num(a), Atom::Num(b)) => canonical(*a).to_bits() == canonical(*b).to_bits(),
            _ => false,
        }
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Atom::Text(s) => s.hash(state),
            Atom::Int(i) => i.hash(state),
            Atom::Num(n) => canonical(*n).to_bits().hash(state),
        }
    }
}

impl Ord for Atom {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Atom::Text(a), Atom::Text(b)) => a.cmp(b),
            (Atom::Int(a), Atom::Int(b)) => a.cmp(b),
            (Atom::Num(a), Atom::Num(b)) => canonical(*a).total_cmp(&canonical(*b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Text(s) => write!(f, "{s:?}"),
            Atom::Int(i) => write!(f, "{i}"),
            Atom::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::Text(s.to_string())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::Text(s)
    }
}

impl From<i64> for Atom {
    fn from(i: i64) -> Self {
        Atom::Int(i)
    }
}

impl From<f64> for Atom {
    fn from(n: f64) -> Self {
        Atom::Num(n)
    }
}
