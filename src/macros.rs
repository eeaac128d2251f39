#[macro_export]
macro_rules! bijson {
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
        $crate::Value::Array(vec![$($crate::bijson!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::bijson!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonMap, Value};

    #[test]
    fn test_macro_primitives() {
        assert_eq!(bijson!(null), Value::Null);
        assert_eq!(bijson!(true), Value::Bool(true));
        assert_eq!(bijson!(false), Value::Bool(false));
        assert_eq!(bijson!(42), Value::Int(42));
        assert_eq!(bijson!(3.5), Value::Double(3.5));
        assert_eq!(bijson!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_macro_arrays() {
        assert_eq!(bijson!([]), Value::Array(vec![]));

        let arr = bijson!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Int(1));
                assert_eq!(vec[2], Value::Int(3));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_macro_objects() {
        assert_eq!(bijson!({}), Value::Object(JsonMap::new()));

        let obj = bijson!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Int(30)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_macro_nesting() {
        let value = bijson!({"a": [1, {"b": null}]});
        let inner = value.get("a").and_then(|v| v.get_index(1)).unwrap();
        assert_eq!(inner.get("b"), Some(&Value::Null));
    }
}
