use leptos::*;

use crate::models::review::STAR_GLYPH;

/// Clickable five-star selector. Hovering previews a rating; clicking
/// reports it through `on_change`.
#[component]
pub fn StarRating(rating: ReadSignal<u8>, on_change: Callback<u8>) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(None::<u8>);

    view! {
        <div class="star-rating" on:mouseleave=move |_| set_hovered.set(None)>
            {(1..=5u8).map(|value| {
                // Hover preview wins over the committed rating
                let filled = move || match hovered.get() {
                    Some(h) => value <= h,
                    None => value <= rating.get(),
                };
                view! {
                    <span
                        class="star"
                        class:active=filled
                        on:click=move |_| on_change.call(value)
                        on:mouseenter=move |_| set_hovered.set(Some(value))
                    >
                        { STAR_GLYPH }
                    </span>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
