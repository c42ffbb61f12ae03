//! Text-processing primitives shared by the segmenter and the renderer.
use regex::Regex;

/// Compile a pattern, logging and falling back to a never-matching regex if
/// compilation fails.
///
/// All patterns in this crate are literals, so the fallback only guards
/// against regressions; the caller degrades to treating input as plain text.
#[must_use]
pub fn compile_regex(name: &str, pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    log::error!(
      "Failed to compile {name} regex: {e}\n Falling back to never matching \
       regex."
    );
    never_matching_regex()
  })
}

/// Create a regex that never matches anything.
///
/// Safer than a trivial pattern like `^$`, which would match empty strings.
///
/// # Panics
///
/// Panics if the pattern `[^\s\S]` fails to compile, which cannot happen.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

/// Length of a string in Unicode scalar values.
///
/// Slide budgets count characters as a reader sees them, so a CJK character
/// and an ASCII letter both count as one.
#[must_use]
pub fn char_len(text: &str) -> usize {
  text.chars().count()
}
