/// Builds a [`Unit`](crate::Unit) from a literal, mirroring OMFL value syntax.
///
/// ```rust
/// use omfl::{unit, Unit};
///
/// assert_eq!(unit!(true), Unit::Bool(true));
/// assert_eq!(unit!([1, "a", [2.5]]).len(), 3);
/// assert_eq!(unit!(empty), Unit::Empty);
/// ```
#[macro_export]
macro_rules! unit {
    // Handle the empty placeholder
    (empty) => {
        $crate::Unit::Empty
    };

    (true) => {
        $crate::Unit::Bool(true)
    };

    (false) => {
        $crate::Unit::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Unit::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Unit::Array(vec![$($crate::unit!($elem)),*])
    };

    // Numbers, strings and parenthesised expressions
    ($s:expr) => {
        $crate::Unit::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::Unit;

    #[test]
    fn test_unit_macro_primitives() {
        assert_eq!(unit!(empty), Unit::Empty);
        assert_eq!(unit!(false), Unit::Bool(false));
        assert_eq!(unit!(42), Unit::Int(42));
        assert_eq!(unit!(-7), Unit::Int(-7));
        assert_eq!(unit!(3.5), Unit::Float(3.5));
        assert_eq!(unit!("hi"), Unit::String("hi".to_string()));
    }

    #[test]
    fn test_unit_macro_arrays() {
        assert_eq!(unit!([]), Unit::Array(vec![]));

        let nested = unit!([1, [(-2), true], "x,y"]);
        assert_eq!(
            nested,
            Unit::Array(vec![
                Unit::Int(1),
                Unit::Array(vec![Unit::Int(-2), Unit::Bool(true)]),
                Unit::String("x,y".to_string()),
            ])
        );
    }
}
