//! Field-level rules for articles.

use content_model::{Article, ValidationLimits};

use super::{ValidationResult, Validator};

/// Validates article fields against the editorial limits.
///
/// Rules are independent: every violated rule contributes its own message.
/// The length rule is guarded by presence, so an empty title fails only the
/// required rule.
#[derive(Debug, Clone, Default)]
pub struct ArticleValidator {
    limits: ValidationLimits,
}

impl ArticleValidator {
    /// Create a validator with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with explicit limits.
    pub fn with_limits(limits: ValidationLimits) -> Self {
        Self { limits }
    }
}

impl Validator<Article> for ArticleValidator {
    fn validate(&self, article: &Article) -> ValidationResult {
        let mut errors = Vec::new();

        if article.title.trim().is_empty() {
            errors.push("Title is required.".to_owned());
        }
        if !article.title.is_empty()
            && article.title.chars().count() > self.limits.max_title_length
        {
            errors.push(format!(
                "Title must not exceed {} characters.",
                self.limits.max_title_length
            ));
        }
        if article.content.trim().is_empty() {
            errors.push("Content is required.".to_owned());
        }

        ValidationResult::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_article() {
        let article = Article::new("A sensible title", "With a body to match");
        let result = ArticleValidator::new().validate(&article);

        assert!(result.is_valid);
        assert!(result.errors.is_none());
    }

    #[test]
    fn test_empty_title_fails_only_required_rule() {
        let article = Article::new("", "hi");
        let result = ArticleValidator::new().validate(&article);

        assert!(!result.is_valid);
        assert!(result.has_error("Title is required."));
        assert!(!result.has_error("Title must not exceed 100 characters."));
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let article = Article::new("   ", "body");
        let result = ArticleValidator::new().validate(&article);

        assert!(result.has_error("Title is required."));
    }

    #[test]
    fn test_overlong_title() {
        let article = Article::new("t".repeat(101), "body");
        let result = ArticleValidator::new().validate(&article);

        assert!(!result.is_valid);
        assert_eq!(
            result.messages(),
            ["Title must not exceed 100 characters."]
        );
    }

    #[test]
    fn test_empty_content() {
        let article = Article::new("Title", "");
        let result = ArticleValidator::new().validate(&article);

        assert_eq!(result.messages(), ["Content is required."]);
    }

    #[test]
    fn test_all_rules_reported_together() {
        let article = Article::new("t".repeat(120), "");
        let result = ArticleValidator::new().validate(&article);

        assert_eq!(
            result.messages(),
            [
                "Title must not exceed 100 characters.",
                "Content is required."
            ]
        );
    }

    #[test]
    fn test_custom_limits() {
        let limits = ValidationLimits {
            max_title_length: 10,
            ..Default::default()
        };
        let article = Article::new("Well past ten chars", "body");
        let result = ArticleValidator::with_limits(limits).validate(&article);

        assert!(result.has_error("Title must not exceed 10 characters."));
    }

    #[test]
    fn test_multibyte_title_counts_characters() {
        // 100 two-byte characters are still 100 characters.
        let article = Article::new("é".repeat(100), "body");
        let result = ArticleValidator::new().validate(&article);

        assert!(result.is_valid);
    }
}
