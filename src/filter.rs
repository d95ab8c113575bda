//! Query-string filtering for the product listing.
//!
//! Recognised parameters are `name`, `category` and `available`; anything
//! else in the query string is ignored. Supplied filters are ANDed together
//! and the input order is preserved.

use std::collections::HashMap;

use crate::models::product::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-sensitive exact match on `name`.
    pub name: Option<String>,
    /// Case-sensitive exact match on `category`.
    pub category: Option<String>,
    pub available: Option<bool>,
}

/// Coerces an `available` query value. `true`, `1` and `yes` (any case) are
/// true; every other token is false.
pub fn parse_bool_token(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

impl ProductFilter {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            name: params.get("name").cloned(),
            category: params.get("category").cloned(),
            available: params.get("available").map(|v| parse_bool_token(v)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.available.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.name.as_ref().is_none_or(|n| product.name == *n)
            && self.category.as_ref().is_none_or(|c| product.category == *c)
            && self.available.is_none_or(|a| product.available == a)
    }

    /// Keeps the products that satisfy every supplied filter, in input order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        if self.is_empty() {
            return products;
        }
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: i64, name: &str, category: &str, available: bool) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("Description of {name}"),
            price: Decimal::new(10_050, 2),
            available,
            category: category.to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Hammer", "Tools", true),
            product(2, "Apple", "Food", false),
            product(3, "Hammer", "Tools", false),
            product(4, "Shirt", "Cloths", true),
            product(5, "Hammer", "Housewares", true),
        ]
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let filter = ProductFilter::from_params(&HashMap::new());
        assert!(filter.is_empty());
        assert_eq!(filter.apply(catalog()), catalog());
    }

    #[test]
    fn name_filter_is_exact_and_case_sensitive() {
        let result = ProductFilter::from_params(&params(&[("name", "Hammer")])).apply(catalog());
        assert_eq!(ids(&result), vec![1, 3, 5]);

        let result = ProductFilter::from_params(&params(&[("name", "hammer")])).apply(catalog());
        assert!(result.is_empty());

        let result = ProductFilter::from_params(&params(&[("name", "Ham")])).apply(catalog());
        assert!(result.is_empty());
    }

    #[test]
    fn category_filter_matches_label() {
        let result = ProductFilter::from_params(&params(&[("category", "Tools")])).apply(catalog());
        assert_eq!(ids(&result), vec![1, 3]);
        assert!(result.iter().all(|p| p.category == "Tools"));
    }

    #[test]
    fn available_filter_coerces_tokens() {
        for token in ["true", "True", "TRUE", "1", "yes", "Yes", " yes "] {
            let result =
                ProductFilter::from_params(&params(&[("available", token)])).apply(catalog());
            assert_eq!(ids(&result), vec![1, 4, 5], "token {token:?}");
        }
        for token in ["false", "0", "no", "maybe", ""] {
            let result =
                ProductFilter::from_params(&params(&[("available", token)])).apply(catalog());
            assert_eq!(ids(&result), vec![2, 3], "token {token:?}");
        }
    }

    #[test]
    fn filters_compose_with_and() {
        let filter = ProductFilter::from_params(&params(&[
            ("name", "Hammer"),
            ("category", "Tools"),
            ("available", "true"),
        ]));
        assert_eq!(ids(&filter.apply(catalog())), vec![1]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let filter = ProductFilter::from_params(&params(&[("color", "red"), ("page", "2")]));
        assert!(filter.is_empty());
        assert_eq!(filter.apply(catalog()).len(), 5);
    }

    #[test]
    fn no_match_and_empty_input_yield_empty() {
        let filter = ProductFilter::from_params(&params(&[("name", "Nothing")]));
        assert!(filter.apply(catalog()).is_empty());
        assert!(filter.apply(Vec::new()).is_empty());
        assert!(ProductFilter::default().apply(Vec::new()).is_empty());
    }
}
