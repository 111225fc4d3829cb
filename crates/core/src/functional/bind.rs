//! Short-circuiting chains over `Option`, [`Either`] and sequences
//!
//! Each family comes in three shapes:
//!
//! - a binary combinator joining two stages (`bind_maybe`, `bind_either`,
//!   `bind_list`);
//! - a variadic macro over heterogeneous stages (`bind_maybes!`,
//!   `bind_eithers!`, `bind_lists!`), built by right-nesting the binary form;
//! - a homogeneous runtime version over a `Vec` of stages (`chain_maybes`,
//!   `chain_eithers`, `chain_lists`).
//!
//! Stages run first to last. Chaining two built chains gives the same
//! function as one chain built from both stage lists.

use crate::either::Either;

/// Kleisli composition over `Option`: run `f`, then `g` on its value.
/// `g` is skipped when `f` yields `None`.
pub fn bind_maybe<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Option<C>
where
    F: Fn(A) -> Option<B>,
    G: Fn(B) -> Option<C>,
{
    move |a| f(a).and_then(&g)
}

/// Lift a stage to accept an optional input; `None` passes straight through.
pub fn lift_maybe<A, B, F>(f: F) -> impl Fn(Option<A>) -> Option<B>
where
    F: Fn(A) -> Option<B>,
{
    move |x| x.and_then(&f)
}

/// Kleisli composition over [`Either`]; the first `Left` is returned as is.
pub fn bind_either<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Either<C>
where
    F: Fn(A) -> Either<B>,
    G: Fn(B) -> Either<C>,
{
    move |a| f(a).and_then(&g)
}

/// Kleisli composition over sequences: every output of `f` is expanded by `g`.
pub fn bind_list<A, B, C, I, J, F, G>(f: F, g: G) -> impl Fn(A) -> Vec<C>
where
    F: Fn(A) -> I,
    I: IntoIterator<Item = B>,
    G: Fn(B) -> J,
    J: IntoIterator<Item = C>,
{
    move |a| f(a).into_iter().flat_map(&g).collect()
}

/// Lift an element stage to a flat-map over a whole sequence.
pub fn lift_list<A, B, I, F>(f: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> I,
    I: IntoIterator<Item = B>,
{
    move |xs| xs.into_iter().flat_map(&f).collect()
}

/// Homogeneous `Option` chain; an empty list is the identity.
pub fn chain_maybes<T, F>(stages: Vec<F>) -> impl Fn(Option<T>) -> Option<T>
where
    F: Fn(T) -> Option<T>,
{
    move |x: Option<T>| -> Option<T> {
        stages.iter().try_fold(x?, |acc, stage| stage(acc))
    }
}

/// Homogeneous [`Either`] chain; an empty list wraps the input in `Right`.
pub fn chain_eithers<T, F>(stages: Vec<F>) -> impl Fn(T) -> Either<T>
where
    F: Fn(T) -> Either<T>,
{
    move |x: T| -> Either<T> {
        let mut acc = x;
        for stage in &stages {
            match stage(acc) {
                Either::Right(value) => acc = value,
                left @ Either::Left(_) => return left,
            }
        }
        Either::Right(acc)
    }
}

/// Homogeneous sequence chain; an empty list is the identity.
pub fn chain_lists<T, F>(stages: Vec<F>) -> impl Fn(Vec<T>) -> Vec<T>
where
    F: Fn(T) -> Vec<T>,
{
    move |xs: Vec<T>| -> Vec<T> {
        stages.iter().fold(xs, |acc, stage| {
            acc.into_iter().flat_map(|x| stage(x)).collect()
        })
    }
}

/// `Option` chain over heterogeneous stages.
///
/// The result takes an `Option` and returns an `Option`. A `None` input or
/// any stage returning `None` stops the chain, and later stages never run.
/// With no stages the result is the identity.
///
/// ```
/// use physocts_core::bind_maybes;
///
/// let parse_even = bind_maybes!(
///     |s: &str| s.parse::<u32>().ok(),
///     |n: u32| (n % 2 == 0).then_some(n),
/// );
/// assert_eq!(parse_even(Some("8")), Some(8));
/// assert_eq!(parse_even(Some("7")), None);
/// assert_eq!(parse_even(None), None);
/// ```
#[macro_export]
macro_rules! bind_maybes {
    (@stages $only:expr) => {
        $only
    };
    (@stages $first:expr, $($rest:expr),+) => {
        $crate::functional::bind_maybe($first, $crate::bind_maybes!(@stages $($rest),+))
    };
    () => {
        |x| x
    };
    ($($stage:expr),+ $(,)?) => {
        $crate::functional::lift_maybe($crate::bind_maybes!(@stages $($stage),+))
    };
}

/// [`Either`] chain over heterogeneous stages.
///
/// The result takes a plain value; each stage gets the previous `Right`
/// value and the first `Left` ends the chain. With no stages the result
/// wraps its input in `Right`.
#[macro_export]
macro_rules! bind_eithers {
    (@stages $only:expr) => {
        $only
    };
    (@stages $first:expr, $($rest:expr),+) => {
        $crate::functional::bind_either($first, $crate::bind_eithers!(@stages $($rest),+))
    };
    () => {
        $crate::Either::Right
    };
    ($($stage:expr),+ $(,)?) => {
        $crate::bind_eithers!(@stages $($stage),+)
    };
}

/// Flat-map chain over heterogeneous stages.
///
/// The result takes a `Vec` and returns a `Vec`. Outputs keep the order of
/// the nested expansion: incoming elements in order, and for each one its
/// stage outputs in order. With no stages the result is the identity.
#[macro_export]
macro_rules! bind_lists {
    (@stages $only:expr) => {
        $only
    };
    (@stages $first:expr, $($rest:expr),+) => {
        $crate::functional::bind_list($first, $crate::bind_lists!(@stages $($rest),+))
    };
    () => {
        |xs| xs
    };
    ($($stage:expr),+ $(,)?) => {
        $crate::functional::lift_list($crate::bind_lists!(@stages $($stage),+))
    };
}
