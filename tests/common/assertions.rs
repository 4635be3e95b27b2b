//! Custom assertion macros

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a JSON body is exactly `{ "msg": <expected> }`
#[macro_export]
macro_rules! assert_msg {
    ($body:expr, $expected:expr) => {
        pretty_assertions::assert_eq!($body, serde_json::json!({ "msg": $expected }));
    };
}
