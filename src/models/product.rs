//! 商品数据模型

use serde::{Deserialize, Serialize};

/// 商品
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 商品名称
    pub name: String,

    /// 类目
    pub category: String,

    /// 子类目
    pub subcategory: String,

    /// 描述
    pub description: String,

    /// 价格
    pub price: f64,

    /// 是否有货
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

impl Product {
    /// 商品名称或描述是否包含查询词（大小写无关）
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            name: "GeForce RTX 4090".into(),
            category: "Graphics Cards".into(),
            subcategory: "GeForce".into(),
            description: "Flagship GPU for gaming and creation".into(),
            price: 1599.0,
            availability: true,
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        assert!(sample().matches("rtx"));
        assert!(sample().matches("RTX 4090"));
    }

    #[test]
    fn test_matches_description() {
        assert!(sample().matches("gaming"));
        assert!(!sample().matches("laptop"));
    }

    #[test]
    fn test_availability_defaults_to_true() {
        let json = r#"{"name":"Shield TV","category":"Streaming","subcategory":"Shield","description":"4K streaming device","price":149.0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.availability);
    }
}
