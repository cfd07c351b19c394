#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use crochet_reviews::models::review::ReviewInput;
use crochet_reviews::storage::{LocalStorageBackend, StorageBackend};
use crochet_reviews::store::{ReviewStore, STORAGE_KEY};

wasm_bindgen_test_configure!(run_in_browser);

// Each test starts from a clean slot so runs do not bleed into each other
fn clear_storage() {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item(STORAGE_KEY)
        .unwrap();
}

fn sample_input() -> ReviewInput {
    ReviewInput {
        name: "Ana".to_string(),
        product: "flowers".to_string(),
        rating: 5,
        review: "Lovely!".to_string(),
        suggestions: String::new(),
    }
}

#[wasm_bindgen_test]
fn backend_round_trips_values() {
    let backend = LocalStorageBackend::new().unwrap();
    backend.set("crochetReviewsTestKey", "hello").unwrap();
    assert_eq!(
        backend.get("crochetReviewsTestKey").unwrap(),
        Some("hello".to_string())
    );
}

#[wasm_bindgen_test]
fn review_survives_a_new_store_instance() {
    clear_storage();
    let store = ReviewStore::new(LocalStorageBackend::new().unwrap());
    store.append(sample_input()).unwrap();

    // A fresh store over the same origin storage sees the persisted review,
    // which is what a page reload amounts to
    let reloaded = ReviewStore::new(LocalStorageBackend::new().unwrap());
    let reviews = reloaded.list();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].name, "Ana");
    assert_eq!(reviews[0].product_label(), "Flowers & Flower Tops");
}

#[wasm_bindgen_test]
fn delete_is_visible_across_instances() {
    clear_storage();
    let store = ReviewStore::new(LocalStorageBackend::new().unwrap());
    let stored = store.append(sample_input()).unwrap();

    let other = ReviewStore::new(LocalStorageBackend::new().unwrap());
    assert!(other.delete_by_id(stored.id).unwrap());
    assert!(store.list().is_empty());
}
