//! Static product catalog.
//!
//! The catalog is a read-only data source: it is built once and never
//! mutated. Search is a pure helper over it.

use crate::types::{Price, Product, ProductId};

/// Build the full product catalog
///
/// Returns a fresh owned list; callers treat it as read-only.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Durex Invisible Ultra Thin".to_string(),
            brand: "Durex".to_string(),
            price: Price::from_vnd(155_000),
            description: "Sản phẩm mỏng nhất của Durex, cảm giác như không đeo gì.".to_string(),
            category: "Siêu mỏng".to_string(),
            image: "https://images.unsplash.com/photo-1612833609248-55b8e945898d?q=80&w=600&auto=format&fit=crop".to_string(),
            features: vec![
                "Siêu mỏng 0.04mm".to_string(),
                "Truyền nhiệt nhanh".to_string(),
                "Bôi trơn cao cấp".to_string(),
            ],
        },
        Product {
            id: ProductId::new("2"),
            name: "Sagami Original 0.01".to_string(),
            brand: "Sagami".to_string(),
            price: Price::from_vnd(245_000),
            description: "Đỉnh cao công nghệ Nhật Bản, mỏng đến mức khó tin.".to_string(),
            category: "Siêu mỏng".to_string(),
            image: "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?q=80&w=600&auto=format&fit=crop".to_string(),
            features: vec![
                "Polyurethane 0.01mm".to_string(),
                "Không mùi cao su".to_string(),
                "Chịu lực cực tốt".to_string(),
            ],
        },
        Product {
            id: ProductId::new("3"),
            name: "Durex Performa Longer".to_string(),
            brand: "Durex".to_string(),
            price: Price::from_vnd(185_000),
            description: "Chứa 5% Benzocain giúp kéo dài thời gian yêu, bền bỉ hơn.".to_string(),
            category: "Kéo dài".to_string(),
            image: "https://images.unsplash.com/photo-1583947215259-38e31be8751f?q=80&w=600&auto=format&fit=crop".to_string(),
            features: vec![
                "Chứa Benzocain".to_string(),
                "Kiểm soát tốt hơn".to_string(),
                "An toàn tuyệt đối".to_string(),
            ],
        },
        Product {
            id: ProductId::new("4"),
            name: "Durex Pleasuremax Ribbed".to_string(),
            brand: "Durex".to_string(),
            price: Price::from_vnd(170_000),
            description: "Thiết kế gân và hạt nổi kích thích tối đa cho cả hai.".to_string(),
            category: "Gân gai".to_string(),
            image: "https://images.unsplash.com/photo-1628771065518-0d82f1938462?q=80&w=600&auto=format&fit=crop".to_string(),
            features: vec![
                "Gân nổi".to_string(),
                "Hạt massage".to_string(),
                "Thiết kế ôm sát".to_string(),
            ],
        },
    ]
}

/// Filter products by a case-insensitive name or brand match
///
/// An empty query matches everything.
#[must_use]
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.brand.to_lowercase().contains(&needle)
        })
        .collect()
}
