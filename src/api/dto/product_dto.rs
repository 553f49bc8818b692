//! 商品 DTO
//!
//! 定义商品查询相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// 商品搜索参数
#[derive(Debug, Deserialize, Default)]
pub struct ProductSearchParams {
    /// 自由文本查询
    pub query: Option<String>,
    /// 类目过滤
    pub category: Option<String>,
    /// 最大返回数量
    pub limit: Option<usize>,
}

/// 商品响应
#[derive(Debug, Serialize)]
pub struct ProductResponse {
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
    pub availability: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            category: product.category,
            subcategory: product.subcategory,
            description: product.description,
            price: product.price,
            availability: product.availability,
        }
    }
}

/// 商品列表响应
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    /// 商品列表
    pub products: Vec<ProductResponse>,
    /// 总数
    pub total: usize,
}
