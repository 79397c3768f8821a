//! Policy rule and path pattern matching.

use serde::{Deserialize, Serialize};

use cesizen_entity::user::Role;

/// One row of the policy table: `role` may invoke `verb` on any concrete
/// path matching `path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRule {
    /// The subject role.
    pub role: Role,
    /// The path pattern (literal segments and `{param}` placeholders).
    pub path: String,
    /// The HTTP method token.
    pub verb: String,
}

/// A segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Matches any single non-empty request segment.
    Param,
}

/// A compiled path pattern.
///
/// Matching is whole-path: segment counts must agree, so a pattern for
/// `/admin/users/{id}` matches neither `/admin/users` nor
/// `/admin/users/{id}/extra`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .map(|s| {
                if s.starts_with('{') && s.ends_with('}') && s.len() > 2 {
                    Segment::Param
                } else {
                    Segment::Literal(s.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// Whether the normalized request path matches this pattern exactly.
    pub fn matches(&self, path: &str) -> bool {
        let mut segments = split_segments(path);
        for expected in &self.segments {
            let Some(actual) = segments.next() else {
                return false;
            };
            match expected {
                Segment::Literal(lit) => {
                    if lit != actual {
                        return false;
                    }
                }
                Segment::Param => {}
            }
        }
        segments.next().is_none()
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Normalize a request path for policy lookup: strip trailing slashes,
/// keeping the bare root as `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_patterns_match_exactly() {
        let pattern = PathPattern::parse("/auth/login");
        assert!(pattern.matches("/auth/login"));
        assert!(!pattern.matches("/auth"));
        assert!(!pattern.matches("/auth/login/extra"));
        assert!(!pattern.matches("/auth/logout"));
    }

    #[test]
    fn param_segment_matches_any_single_component() {
        let pattern = PathPattern::parse("/admin/users/disable/{user_id}");
        assert!(pattern.matches("/admin/users/disable/a8920a55-77df-493a-8c8a-7c9c98657b44"));
        assert!(pattern.matches("/admin/users/disable/42"));
        assert!(!pattern.matches("/admin/users/disable"));
        assert!(!pattern.matches("/admin/users/disable/42/extra"));
    }

    #[test]
    fn root_pattern_only_matches_root() {
        let pattern = PathPattern::parse("/");
        assert!(pattern.matches("/"));
        assert!(!pattern.matches("/auth"));
    }

    #[test]
    fn normalization_strips_trailing_slashes() {
        assert_eq!(normalize_path("/auth/login/"), "/auth/login");
        assert_eq!(normalize_path("/auth/login"), "/auth/login");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
    }
}
