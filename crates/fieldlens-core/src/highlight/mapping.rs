//! Placeholder mapping types

use crate::config::consts::highlight::{BUILTIN_FIELDS, WRAPPER_PREFIX, WRAPPER_SUFFIX};
use crate::error::{FieldlensError, Result};
use std::collections::HashSet;

/// Markup placed around a placeholder token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    prefix: String,
    suffix: String,
}

impl Wrapper {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn wrap(&self, token: &str) -> String {
        format!("{}{}{}", self.prefix, token, self.suffix)
    }
}

impl Default for Wrapper {
    fn default() -> Self {
        Self::new(WRAPPER_PREFIX, WRAPPER_SUFFIX)
    }
}

/// `{{name}}`
pub fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// One literal `pattern -> replacement` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pattern: String,
    replacement: String,
    /// Byte offset of `pattern` inside `replacement`, if it appears there
    inner_offset: Option<usize>,
}

/// Outcome of applying one [`Replacement`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyCount {
    pub wrapped: usize,
    pub already_wrapped: usize,
}

impl Replacement {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let replacement = replacement.into();
        let inner_offset = if pattern.is_empty() {
            None
        } else {
            replacement.find(pattern.as_str())
        };
        Self {
            pattern,
            replacement,
            inner_offset,
        }
    }

    /// `token -> wrapper(token)`
    pub fn wrapped(token: impl Into<String>, wrapper: &Wrapper) -> Self {
        let token = token.into();
        let replacement = wrapper.wrap(&token);
        Self::new(token, replacement)
    }

    /// `{{name}} -> wrapper({{name}})`
    pub fn field(name: &str, wrapper: &Wrapper) -> Self {
        Self::wrapped(placeholder(name), wrapper)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Whether the match at `pos` already sits inside a copy of the replacement.
    fn is_enclosed(&self, text: &str, pos: usize) -> bool {
        let Some(offset) = self.inner_offset else {
            return false;
        };
        let Some(start) = pos.checked_sub(offset) else {
            return false;
        };
        text.get(start..start + self.replacement.len()) == Some(self.replacement.as_str())
    }

    /// Replace every bare, non-overlapping occurrence of the pattern.
    pub fn apply(&self, text: &str) -> (String, ApplyCount) {
        let mut count = ApplyCount::default();
        if self.pattern.is_empty() {
            return (text.to_string(), count);
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (pos, _) in text.match_indices(self.pattern.as_str()) {
            if self.is_enclosed(text, pos) {
                count.already_wrapped += 1;
                continue;
            }
            out.push_str(&text[last..pos]);
            out.push_str(&self.replacement);
            last = pos + self.pattern.len();
            count.wrapped += 1;
        }
        out.push_str(&text[last..]);

        (out, count)
    }
}

/// Ordered list of replacements with distinct, non-empty patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMapping {
    replacements: Vec<Replacement>,
}

impl PlaceholderMapping {
    pub fn new(replacements: Vec<Replacement>) -> Result<Self> {
        if replacements.is_empty() {
            return Err(FieldlensError::EmptyMapping);
        }

        let mut seen = HashSet::new();
        for r in &replacements {
            if r.pattern.is_empty() {
                return Err(FieldlensError::InvalidMapping(
                    "pattern must not be empty".to_string(),
                ));
            }
            if !seen.insert(r.pattern.as_str()) {
                return Err(FieldlensError::InvalidMapping(format!(
                    "duplicate pattern '{}'",
                    r.pattern
                )));
            }
        }

        Ok(Self { replacements })
    }

    /// The 19 NDA template fields wrapped in `<span class="field">`.
    pub fn builtin() -> Self {
        let wrapper = Wrapper::default();
        Self {
            replacements: BUILTIN_FIELDS
                .iter()
                .map(|name| Replacement::field(name, &wrapper))
                .collect(),
        }
    }

    pub fn from_fields<S: AsRef<str>>(fields: &[S], wrapper: &Wrapper) -> Result<Self> {
        Self::new(
            fields
                .iter()
                .map(|name| Replacement::field(name.as_ref(), wrapper))
                .collect(),
        )
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_braces() {
        assert_eq!(placeholder("purpose"), "{{purpose}}");
    }

    #[test]
    fn test_builtin_mapping_is_valid_and_ordered() {
        let builtin = PlaceholderMapping::builtin();
        let validated = PlaceholderMapping::new(builtin.replacements().to_vec()).unwrap();
        assert_eq!(builtin, validated);
        assert_eq!(builtin.len(), 19);

        let first = &builtin.replacements()[0];
        assert_eq!(first.pattern(), "{{doc_title}}");
        assert_eq!(
            first.replacement(),
            r#"<span class="field">{{doc_title}}</span>"#
        );
        assert_eq!(
            builtin.replacements()[18].pattern(),
            "{{term_years_words}}"
        );
    }

    #[test]
    fn test_rejects_empty_mapping() {
        let err = PlaceholderMapping::new(vec![]).unwrap_err();
        assert!(matches!(err, FieldlensError::EmptyMapping));
    }

    #[test]
    fn test_rejects_duplicate_patterns() {
        let err = PlaceholderMapping::from_fields(&["purpose", "purpose"], &Wrapper::default())
            .unwrap_err();
        assert!(err.to_string().contains("duplicate pattern '{{purpose}}'"));
    }

    #[test]
    fn test_rejects_empty_pattern() {
        let err = PlaceholderMapping::new(vec![Replacement::new("", "x")]).unwrap_err();
        assert!(matches!(err, FieldlensError::InvalidMapping(_)));
    }

    #[test]
    fn test_apply_wraps_every_occurrence() {
        let r = Replacement::field("purpose", &Wrapper::new("[", "]"));
        let (out, count) = r.apply("{{purpose}} and {{purpose}}");
        assert_eq!(out, "[{{purpose}}] and [{{purpose}}]");
        assert_eq!(count.wrapped, 2);
        assert_eq!(count.already_wrapped, 0);
    }

    #[test]
    fn test_apply_skips_enclosed_occurrences() {
        let r = Replacement::field("purpose", &Wrapper::new("[", "]"));
        let (out, count) = r.apply("[{{purpose}}] then {{purpose}}");
        assert_eq!(out, "[{{purpose}}] then [{{purpose}}]");
        assert_eq!(count.wrapped, 1);
        assert_eq!(count.already_wrapped, 1);
    }

    #[test]
    fn test_apply_half_wrapped_counts_as_bare() {
        let r = Replacement::field("purpose", &Wrapper::new("[", "]"));
        let (out, count) = r.apply("[{{purpose}}");
        assert_eq!(out, "[[{{purpose}}]");
        assert_eq!(count.wrapped, 1);
    }

    #[test]
    fn test_apply_replacement_without_pattern() {
        let r = Replacement::new("old", "new");
        let (out, count) = r.apply("old, old");
        assert_eq!(out, "new, new");
        assert_eq!(count.wrapped, 2);
    }

    #[test]
    fn test_apply_near_multibyte_boundary() {
        let r = Replacement::field("x", &Wrapper::new("«", "»"));
        let (out, count) = r.apply("é{{x}}");
        assert_eq!(out, "é«{{x}}»");
        assert_eq!(count.wrapped, 1);
    }
}
