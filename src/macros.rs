// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Compile a CSS selector once and hand out a `&'static Selector`.
/// Only ever called with literals / consts, so a parse failure is a bug.
#[macro_export]
macro_rules! selector {
    ($css:expr) => {{
        static SEL: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| {
                ::scraper::Selector::parse($css).expect("static CSS selector must parse")
            });
        &*SEL
    }};
}

/// Same idea for regexes used by the page matchers.
#[macro_export]
macro_rules! regex {
    ($re:expr) => {{
        static RE: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| {
                ::regex::Regex::new($re).expect("static regex must compile")
            });
        &*RE
    }};
}
