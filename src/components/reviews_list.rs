/// Component to display the stored reviews.
/// Renders each review as a card with its stars, text, reviewer and date,
/// plus a delete button that asks for confirmation first.
use leptos::*;

use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: ReadSignal<Vec<Review>>, on_delete: Callback<i64>) -> impl IntoView {
    // Id of the review awaiting delete confirmation, if any
    let (pending_delete, set_pending_delete) = create_signal(None::<i64>);

    let confirm_delete = move |_| {
        if let Some(id) = pending_delete.get() {
            on_delete.call(id);
        }
        set_pending_delete.set(None);
    };

    view! {
        <section class="reviews">
            <h3>{ "Customer Reviews" }</h3>
            <div id="dynamic-reviews">
                {move || {
                    let current = reviews.get();
                    if current.is_empty() {
                        view! {
                            <p class="no-reviews">{ "No reviews yet. Be the first to share your experience!" }</p>
                        }.into_view()
                    } else {
                        current.into_iter().map(|review| {
                            let id = review.id;
                            let stars = review.stars();
                            let label = review.product_label().to_string();
                            view! {
                                <div class="review-card">
                                    <button
                                        class="delete-review-btn"
                                        on:click=move |_| set_pending_delete.set(Some(id))
                                    >
                                        { "×" }
                                    </button>
                                    <div class="stars">{ stars }</div>
                                    <p>{ format!("\"{}\"", review.review) }</p>
                                    <div class="reviewer">
                                        <strong>{ format!("- {}", review.name) }</strong>
                                        <span>{ label }</span>
                                        <small class="review-date">{ review.date }</small>
                                    </div>
                                </div>
                            }
                        }).collect::<Vec<_>>().into_view()
                    }
                }}
            </div>
            {move || pending_delete.get().map(|_| view! {
                <div class="delete-modal">
                    <div class="delete-modal-content">
                        <h3>{ "Delete Review" }</h3>
                        <p>{ "Are you sure you want to delete this review? This action cannot be undone." }</p>
                        <div class="modal-buttons">
                            <button
                                class="modal-btn modal-btn-cancel"
                                on:click=move |_| set_pending_delete.set(None)
                            >
                                { "Cancel" }
                            </button>
                            <button class="modal-btn modal-btn-delete" on:click=confirm_delete>
                                { "Delete" }
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </section>
    }
}
