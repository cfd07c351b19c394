/// Main application entry point for the crochet reviews page.
/// Owns the review store and the reactive list the form and list components
/// work against.
use leptos::logging::{error, log, warn};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::review::{Review, ReviewInput};
use crate::storage::default_backend;
use crate::store::ReviewStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/crochet-reviews.css"/>
        <Title text="Crochet Crafts - Customer Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let store = store_value(ReviewStore::new(default_backend()));
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());

    // Effects only run on the client, so the server renders the empty state
    // and the stored reviews appear once hydration has access to localStorage
    create_effect(move |_| {
        set_reviews.set(store.with_value(|s| s.list()));
    });

    let add_review = Callback::new(move |input: ReviewInput| {
        match store.with_value(|s| s.append(input)) {
            Ok(review) => {
                log!("Stored review {} from {}", review.id, review.name);
                set_reviews.set(store.with_value(|s| s.list()));
            }
            Err(e) => error!("Failed to store review: {}", e),
        }
    });

    let delete_review = Callback::new(move |id: i64| {
        match store.with_value(|s| s.delete_by_id(id)) {
            Ok(true) => set_reviews.set(store.with_value(|s| s.list())),
            Ok(false) => warn!("No stored review with id {}", id),
            Err(e) => error!("Failed to delete review {}: {}", id, e),
        }
    });

    view! {
        <div class="review-page">
            <header>
                <h1>{ "Crochet Crafts" }</h1>
                <p>{ "Handmade with love - tell us what you think" }</p>
            </header>
            // Form component for submitting a new review
            <ReviewForm on_submit=add_review/>
            // Component to display the stored reviews
            <ReviewsList reviews=reviews on_delete=delete_review/>
        </div>
    }
}
