//! Field-level rules for products.

use content_model::{Product, ValidationLimits};

use super::{ValidationResult, Validator};

/// Validates product fields against the editorial limits.
///
/// Rules are independent and reported in declaration order; the name length
/// rule is guarded by presence.
#[derive(Debug, Clone, Default)]
pub struct ProductValidator {
    limits: ValidationLimits,
}

impl ProductValidator {
    /// Create a validator with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with explicit limits.
    pub fn with_limits(limits: ValidationLimits) -> Self {
        Self { limits }
    }
}

impl Validator<Product> for ProductValidator {
    fn validate(&self, product: &Product) -> ValidationResult {
        let mut errors = Vec::new();

        if product.name.trim().is_empty() {
            errors.push("Product name is required.".to_owned());
        }
        if !product.name.is_empty()
            && product.name.chars().count() > self.limits.max_name_length
        {
            errors.push(format!(
                "Product name must not exceed {} characters.",
                self.limits.max_name_length
            ));
        }
        if product.price < 0.0 {
            errors.push("Price must be a non-negative value.".to_owned());
        }
        if product.stock < 0 {
            errors.push("Stock must be a non-negative value.".to_owned());
        }

        ValidationResult::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_product() {
        let product = Product::new("Gaming Laptop", 1999.99).with_stock(5);
        let result = ProductValidator::new().validate(&product);

        assert!(result.is_valid);
        assert!(result.errors.is_none());
    }

    #[test]
    fn test_empty_name_fails_only_required_rule() {
        let product = Product::new("", 10.0);
        let result = ProductValidator::new().validate(&product);

        assert_eq!(result.messages(), ["Product name is required."]);
    }

    #[test]
    fn test_all_violations_in_rule_order() {
        let product = Product::new("A".repeat(60), -1.0).with_stock(-1);
        let result = ProductValidator::new().validate(&product);

        assert!(!result.is_valid);
        assert_eq!(
            result.messages(),
            [
                "Product name must not exceed 50 characters.",
                "Price must be a non-negative value.",
                "Stock must be a non-negative value."
            ]
        );
    }

    #[test]
    fn test_zero_price_and_stock_are_fine() {
        let product = Product::new("Freebie", 0.0);
        let result = ProductValidator::new().validate(&product);

        assert!(result.is_valid);
    }

    #[test]
    fn test_custom_limits() {
        let limits = ValidationLimits {
            max_name_length: 5,
            ..Default::default()
        };
        let product = Product::new("Toolong", 1.0);
        let result = ProductValidator::with_limits(limits).validate(&product);

        assert!(result.has_error("Product name must not exceed 5 characters."));
    }
}
