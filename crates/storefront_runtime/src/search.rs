//! Client-side product search over an already loaded list.

use crate::model::Product;

/// Returns whether `product` matches `query` by case-insensitive substring of its name or
/// description. A blank query matches everything.
pub fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Products matching `query`, in their loaded order.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches_query(product, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, description: &str) -> Product {
        Product {
            name: name.to_string(),
            description: description.to_string(),
            ..Product::default()
        }
    }

    #[test]
    fn query_matches_name_or_description_ignoring_case() {
        let products = vec![
            product("Lụa Tơ Tằm Vàng", "mềm mại"),
            product("Vải Kate", "ít nhăn, dễ giặt"),
            product("Vải Linen", "thoáng mát"),
        ];
        let names = |query: &str| -> Vec<String> {
            filter_products(&products, query)
                .into_iter()
                .map(|p| p.name.clone())
                .collect()
        };
        assert_eq!(names("LỤA"), vec!["Lụa Tơ Tằm Vàng"]);
        assert_eq!(names("vải"), vec!["Vải Kate", "Vải Linen"]);
        assert_eq!(names("giặt"), vec!["Vải Kate"]);
        assert_eq!(names("  ").len(), 3);
        assert!(names("satin").is_empty());
    }
}
