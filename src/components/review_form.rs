use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::star_rating::StarRating;
use crate::models::review::{product_label, ReviewInput, PRODUCT_CATEGORIES};

/// Simulated network latency around a submission, matching the original site.
const SUBMIT_DELAY_MS: u32 = 1_500;

/// How long the success banner stays up before clearing itself.
const SUCCESS_BANNER_MS: u32 = 5_000;

/// Review submission form. Validates that name, product, rating and review
/// are all present before invoking `on_submit`; the submit control is
/// disabled while a submission is in flight so it cannot be sent twice.
#[component]
pub fn ReviewForm(on_submit: Callback<ReviewInput>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (product, set_product) = create_signal(String::new());
    let (rating, set_rating) = create_signal(0u8);
    let (review_text, set_review_text) = create_signal(String::new());
    let (suggestions, set_suggestions) = create_signal(String::new());

    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (show_success, set_show_success) = create_signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        if name.get().trim().is_empty()
            || product.get().is_empty()
            || rating.get() == 0
            || review_text.get().trim().is_empty()
        {
            set_error.set(Some(
                "Please fill in all required fields and select a rating.".to_string(),
            ));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let input = ReviewInput {
            name: name.get(),
            product: product.get(),
            rating: rating.get(),
            review: review_text.get(),
            suggestions: suggestions.get(),
        };

        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            on_submit.call(input);

            // Reset the form and re-enable the submit control
            set_name.set(String::new());
            set_product.set(String::new());
            set_rating.set(0);
            set_review_text.set(String::new());
            set_suggestions.set(String::new());
            set_submitting.set(false);

            set_show_success.set(true);
            TimeoutFuture::new(SUCCESS_BANNER_MS).await;
            set_show_success.set(false);
        });
    };

    view! {
        <section class="review-submission">
            <h3>{ "Share Your Experience" }</h3>
            {move || error.get().map(|msg| view! {
                <div class="form-error">{ msg }</div>
            })}
            <form id="reviewForm" on:submit=handle_submit>
                <div class="form-group">
                    <label for="customerName">{ "Your Name *" }</label>
                    <input
                        id="customerName"
                        name="customerName"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |e| set_name.set(event_target_value(&e))
                    />
                </div>
                <div class="form-group">
                    <label for="productType">{ "Product *" }</label>
                    <select
                        id="productType"
                        name="productType"
                        prop:value=move || product.get()
                        on:change=move |e| set_product.set(event_target_value(&e))
                    >
                        <option value="">{ "Select a product" }</option>
                        {PRODUCT_CATEGORIES.iter().map(|key| view! {
                            <option value={*key}>{ product_label(key) }</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="form-group">
                    <label>{ "Rating *" }</label>
                    <StarRating rating=rating on_change=Callback::new(move |value| set_rating.set(value)) />
                    <input id="rating" name="rating" type="hidden" prop:value=move || rating.get().to_string() />
                </div>
                <div class="form-group">
                    <label for="reviewText">{ "Your Review *" }</label>
                    <textarea
                        id="reviewText"
                        name="reviewText"
                        placeholder="What did you think of your order?"
                        prop:value=move || review_text.get()
                        on:input=move |e| set_review_text.set(event_target_value(&e))
                    />
                </div>
                <div class="form-group">
                    <label for="suggestions">{ "Suggestions" }</label>
                    <textarea
                        id="suggestions"
                        name="suggestions"
                        placeholder="Anything we could do better?"
                        prop:value=move || suggestions.get()
                        on:input=move |e| set_suggestions.set(event_target_value(&e))
                    />
                </div>
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                </button>
            </form>
            {move || show_success.get().then(|| view! {
                <div class="form-success">
                    <h4>{ "Thank You!" }</h4>
                    <p>{ "Your review has been submitted successfully. We appreciate your feedback!" }</p>
                </div>
            })}
        </section>
    }
}
