//! Plain function composition and small point-free helpers

/// Forward composition: the returned function applies `f`, then `g`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Compose a homogeneous list of stages, first stage applied first.
///
/// An empty list yields the identity function.
pub fn compose_all<T, F>(stages: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |x| stages.iter().fold(x, |acc, stage| stage(acc))
}

/// Identity function
pub fn identity<T>(x: T) -> T {
    x
}

/// Constant function
pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
where
    T: Clone,
{
    move |_| value.clone()
}

/// Flip the arguments of a two-argument function
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Run `handler` on `inst` and `item`, then hand `item` back.
///
/// Handy for side effects inside an expression, e.g. registering an item
/// while collecting it.
pub fn apply_item<X, Y, H>(handler: H, inst: &mut X, item: Y) -> Y
where
    H: FnOnce(&mut X, &Y),
{
    handler(inst, &item);
    item
}

/// Variadic forward composition.
///
/// `compose!(f1, f2, f3)` is `x -> f3(f2(f1(x)))`; every stage always runs.
/// With no stages it is the identity.
#[macro_export]
macro_rules! compose {
    () => {
        |x| x
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::functional::compose($first, $crate::compose!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_applies_left_stage_first() {
        let add_one = |x: i32| x + 1;
        let multiply_two = |x: i32| x * 2;

        let composed = compose(add_one, multiply_two);
        assert_eq!(composed(5), 12); // (5 + 1) * 2
    }

    #[test]
    fn test_compose_macro_runs_every_stage() {
        let f = crate::compose!(|x: i32| x + 5, |x: i32| x * 2, |x: i32| x - 3);
        assert_eq!(f(10), 27); // ((10 + 5) * 2) - 3

        let id = crate::compose!();
        assert_eq!(id("same"), "same");
    }

    #[test]
    fn test_compose_all_of_nothing_is_identity() {
        let stages: Vec<fn(u8) -> u8> = Vec::new();
        assert_eq!(compose_all(stages)(7), 7);

        let stages: Vec<fn(u8) -> u8> = vec![|x: u8| x + 1, |x: u8| x * 3];
        assert_eq!(compose_all(stages)(1), 6);
    }

    #[test]
    fn test_flip_swaps_arguments() {
        let sub = |a: i32, b: i32| a - b;
        assert_eq!(flip(sub)(1, 10), 9);
    }

    #[test]
    fn test_constant_ignores_input() {
        let always = constant::<_, &str>(3);
        assert_eq!(always("anything"), 3);
        assert_eq!(identity(4), 4);
    }

    #[test]
    fn test_apply_item_returns_the_item() {
        let mut seen = Vec::new();
        let item = apply_item(
            |v: &mut Vec<String>, s: &String| v.push(s.clone()),
            &mut seen,
            "x".to_string(),
        );
        assert_eq!(item, "x");
        assert_eq!(seen, vec!["x".to_string()]);
    }
}
