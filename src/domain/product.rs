use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub product_name: String,
    pub website_name: String,
}

/// Text node matching the product name together with the link of its enclosing element
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedElement {
    pub name: String,
    pub link: String,
    pub parent_element: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMatch {
    pub name: String,
    pub link: String,
    pub price: String,
    #[serde(skip)]
    pub parent_element: String,
}

impl ProductMatch {
    pub fn new(element: MatchedElement, price: String) -> Self {
        ProductMatch {
            name: element.name,
            link: element.link,
            price,
            parent_element: element.parent_element,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct SearchResults {
    pub products: BTreeMap<String, ProductMatch>,
    pub count: usize,
}

impl SearchResults {
    /// Later products with the same name replace earlier ones, the count keeps growing
    pub fn insert(&mut self, product: ProductMatch) {
        self.products.insert(product.name.clone(), product);
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
