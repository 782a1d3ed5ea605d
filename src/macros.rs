/// Builds a [`Value`](crate::Value) tree from JSON-like literal syntax.
///
/// ```rust
/// use dotpath::dot;
///
/// let tree = dot!({
///     "name": "Felipe",
///     "pets": ["Nina", null]
/// });
/// assert_eq!(dotpath::to_string(&tree).unwrap(), "name=Felipe\npets[0]=Nina\n");
/// ```
#[macro_export]
macro_rules! dot {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::dot!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::DotMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::DotMap::new();
        $(
            object.insert($key.to_string(), $crate::dot!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
