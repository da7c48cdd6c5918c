/// Compile a literal pattern once per process and hand back a `&'static Regex`.
///
/// The pattern is a literal checked by the test suite, so the compile step
/// cannot fail at runtime.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
