// src/models/review.rs
use serde::{Deserialize, Serialize};

/// Glyph repeated `rating` times when a review is rendered.
pub const STAR_GLYPH: &str = "⭐";

/// A persisted customer review, exactly as serialized under the
/// `crochetReviews` storage key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,      // Millisecond timestamp, assigned by the store
    pub name: String, // Customer name
    pub product: String, // Product category key (see product_label)
    pub rating: u8,   // 1-5 stars
    pub review: String, // Free-text review body
    #[serde(default)]
    pub suggestions: String, // Optional free-text suggestions
    pub date: String, // Localized date, assigned by the store
}

/// What the form hands to the store; id and date are store-assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewInput {
    pub name: String,
    pub product: String,
    pub rating: u8,
    pub review: String,
    pub suggestions: String,
}

impl Review {
    /// Star-glyph rendering of the rating.
    pub fn stars(&self) -> String {
        STAR_GLYPH.repeat(self.rating as usize)
    }

    /// Display label for this review's product category.
    pub fn product_label(&self) -> &str {
        product_label(&self.product)
    }
}

/// Maps a product category key to its display label. Unknown keys pass
/// through verbatim.
pub fn product_label(key: &str) -> &str {
    match key {
        "flowers" => "Flowers & Flower Tops",
        "hair-accessories" => "Hair Accessories",
        "soft-toys" => "Soft Toys",
        "bags" => "Bags & Accessories",
        "clothing" => "Clothing & Wearables",
        "special" => "Special Items",
        other => other,
    }
}

/// The category keys offered by the review form.
pub const PRODUCT_CATEGORIES: [&str; 6] = [
    "flowers",
    "hair-accessories",
    "soft-toys",
    "bags",
    "clothing",
    "special",
];
