use leptos::logging::{log, warn};
use thiserror::Error;

use crate::models::review::{Review, ReviewInput};
use crate::storage::{StorageBackend, StorageError};

/// Storage key the whole review collection is serialized under. Shared by
/// every tab open on the origin; the last full write wins.
pub const STORAGE_KEY: &str = "crochetReviews";

/// Most recent reviews retained after an append; older entries are evicted.
pub const MAX_REVIEWS: usize = 20;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("rating {0} is outside the 1-5 range")]
    RatingOutOfRange(u8),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize reviews: {0}")]
    Serialize(#[from] serde_json::Error),
}


/// Owns the persisted review collection: newest-first, capped at
/// [`MAX_REVIEWS`], serialized as one JSON array under [`STORAGE_KEY`].
/// Every mutation is a full read-modify-write of that blob.
pub struct ReviewStore {
    backend: Box<dyn StorageBackend>,
    key: String,
}

impl ReviewStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Store over a non-default key, so tests and multiple instances can use
    /// isolated slots of the same backend.
    pub fn with_key(backend: impl StorageBackend + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    /// Current collection, newest first. A missing, unreadable or
    /// unparseable blob yields an empty list; corruption is logged and
    /// replaced wholesale by the next successful write.
    pub fn list(&self) -> Vec<Review> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("[STORE] Failed to read '{}': {}", self.key, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Review>>(&raw) {
            Ok(reviews) => reviews,
            Err(e) => {
                warn!("[STORE] Discarding unparseable blob under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Stores a new review at the head of the collection, evicting beyond
    /// [`MAX_REVIEWS`], and returns the record as persisted.
    pub fn append(&self, input: ReviewInput) -> Result<Review, StoreError> {
        if !(1..=5).contains(&input.rating) {
            return Err(StoreError::RatingOutOfRange(input.rating));
        }

        let mut reviews = self.list();

        // Millisecond timestamp, bumped past the current head so rapid
        // appends still get unique, ordered ids
        let mut id = now_millis();
        if let Some(head) = reviews.first() {
            if id <= head.id {
                id = head.id + 1;
            }
        }

        let review = Review {
            id,
            name: input.name,
            product: input.product,
            rating: input.rating,
            review: input.review,
            suggestions: input.suggestions,
            date: localized_today(),
        };

        reviews.insert(0, review.clone());
        reviews.truncate(MAX_REVIEWS);
        self.persist(&reviews)?;
        log!("[STORE] Appended review {} ({} retained)", review.id, reviews.len());
        Ok(review)
    }

    /// Removes the review with the given id. Returns whether anything was
    /// removed; a miss leaves the persisted blob untouched.
    pub fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut reviews = self.list();
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        if reviews.len() == before {
            return Ok(false);
        }
        self.persist(&reviews)?;
        log!("[STORE] Deleted review {}", id);
        Ok(true)
    }

    fn persist(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(reviews)?;
        self.backend.set(&self.key, &blob)?;
        Ok(())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// What the original page showed next to each review was the browser's
// toLocaleDateString; keep that on wasm and a fixed format elsewhere.
#[cfg(target_arch = "wasm32")]
fn localized_today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn localized_today() -> String {
    chrono::Local::now().format("%-d %B %Y").to_string()
}
