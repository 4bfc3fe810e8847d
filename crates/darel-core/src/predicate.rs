use crate::error::Result;

/// The single-method evaluate capability behind both predicate kinds:
/// `Predicate<Element>` is an attribute expression (aex),
/// `Predicate<Tuple>` is a tuple expression (tex).
///
/// Plain `Fn(&T) -> bool` closures are predicates as-is; caller-supplied
/// predicates with failure modes go through [`fallible`]. Combinators
/// return new capability instances, so predicate trees are ordinary values
/// passed to operators as arguments.
pub trait Predicate<T: ?Sized> {
    fn eval(&self, input: &T) -> Result<bool>;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn eval(&self, input: &T) -> Result<bool> {
        Ok(self(input))
    }
}

impl<'a, T: ?Sized> Predicate<T> for Box<dyn Predicate<T> + 'a> {
    fn eval(&self, input: &T) -> Result<bool> {
        (**self).eval(input)
    }
}

/// Accepts everything.
#[derive(Clone, Copy, Debug)]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    fn eval(&self, _input: &T) -> Result<bool> {
        Ok(true)
    }
}

/// Rejects everything.
#[derive(Clone, Copy, Debug)]
pub struct Never;

impl<T: ?Sized> Predicate<T> for Never {
    fn eval(&self, _input: &T) -> Result<bool> {
        Ok(false)
    }
}

pub fn always() -> Always {
    Always
}

pub fn never() -> Never {
    Never
}

#[derive(Clone, Copy, Debug)]
pub struct Conj<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Conj<A, B> {
    fn eval(&self, input: &T) -> Result<bool> {
        // a decides first; b is skipped when a rejects, so b may have
        // side conditions that only hold when a holds.
        if !self.0.eval(input)? {
            return Ok(false);
        }
        self.1.eval(input)
    }
}

/// Logical AND, short-circuiting left to right.
pub fn conj<A, B>(a: A, b: B) -> Conj<A, B> {
    Conj(a, b)
}

#[derive(Clone, Copy, Debug)]
pub struct Disj<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Disj<A, B> {
    fn eval(&self, input: &T) -> Result<bool> {
        if self.0.eval(input)? {
            return Ok(true);
        }
        self.1.eval(input)
    }
}

/// Logical OR, short-circuiting left to right.
pub fn disj<A, B>(a: A, b: B) -> Disj<A, B> {
    Disj(a, b)
}

#[derive(Clone, Copy, Debug)]
pub struct Implies<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Implies<A, B> {
    fn eval(&self, input: &T) -> Result<bool> {
        if !self.0.eval(input)? {
            return Ok(true);
        }
        self.1.eval(input)
    }
}

/// Material implication: `!a || b`.
pub fn implies<A, B>(a: A, b: B) -> Implies<A, B> {
    Implies(a, b)
}

#[derive(Clone, Copy, Debug)]
pub struct Iff<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Iff<A, B> {
    fn eval(&self, input: &T) -> Result<bool> {
        Ok(self.0.eval(input)? == self.1.eval(input)?)
    }
}

/// Biconditional: both sides agree.
pub fn iff<A, B>(a: A, b: B) -> Iff<A, B> {
    Iff(a, b)
}

#[derive(Clone, Copy, Debug)]
pub struct Not<A>(A);

impl<T: ?Sized, A: Predicate<T>> Predicate<T> for Not<A> {
    fn eval(&self, input: &T) -> Result<bool> {
        Ok(!self.0.eval(input)?)
    }
}

pub fn negate<A>(a: A) -> Not<A> {
    Not(a)
}

/// OR over a whole predicate set; an empty set rejects everything.
/// `project` uses this when the caller supplies several attribute
/// expressions at once.
#[derive(Clone, Debug)]
pub struct AnyOf<P>(Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    fn eval(&self, input: &T) -> Result<bool> {
        for pred in &self.0 {
            if pred.eval(input)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

pub fn any_of<P>(preds: Vec<P>) -> AnyOf<P> {
    AnyOf(preds)
}

#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(F);

impl<T: ?Sized, F> Predicate<T> for Fallible<F>
where
    F: Fn(&T) -> Result<bool>,
{
    fn eval(&self, input: &T) -> Result<bool> {
        (self.0)(input)
    }
}

/// Lifts a `Fn(&T) -> Result<bool>` closure into the capability, for
/// caller predicates that can fail on some inputs.
pub fn fallible<F>(f: F) -> Fallible<F> {
    Fallible(f)
}
