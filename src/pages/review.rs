//! Order review page with the star-rating widget.

use leptos::prelude::*;

use crate::components::star_rating::StarRating;
use crate::net::types::ReviewPayload;
use crate::state::review::RatingState;

/// Review form — pick an order, rate it, leave a comment.
#[component]
pub fn ReviewPage() -> impl IntoView {
    let orders = LocalResource::new(|| crate::net::api::fetch_orders());
    let rating = RwSignal::new(RatingState::default());
    let comment = RwSignal::new(String::new());
    let order_id = RwSignal::new(Option::<i32>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        let Some(service_request_id) = order_id.get() else {
            notice.set(Some("Pick the order you want to review".to_owned()));
            return;
        };
        let stars = rating.get().selected;
        if stars == 0 {
            notice.set(Some("Pick a star rating".to_owned()));
            return;
        }
        let payload = ReviewPayload {
            service_request_id,
            rating: stars,
            comment: comment.get().trim().to_owned(),
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_review(&payload).await {
                    Ok(()) => {
                        notice.set(Some("Thanks for your review!".to_owned()));
                        rating.set(RatingState::default());
                        comment.set(String::new());
                    }
                    Err(message) => notice.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <div class="review-page">
            <h1>"Review your order"</h1>

            <label class="review-page__order">
                "Order"
                <select on:change=move |ev| {
                    order_id.set(event_target_value(&ev).parse::<i32>().ok());
                }>
                    <option value="">"Select an order"</option>
                    <Suspense fallback=|| ()>
                        {move || {
                            orders
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|order| {
                                            let value = order.id.to_string();
                                            view! {
                                                <option value=value>
                                                    {format!("#{} {}", order.id, order.service_name)}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </select>
            </label>

            <StarRating rating=rating/>

            <label class="review-page__comment">
                "Comment"
                <textarea
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
            </label>

            <Show when=move || notice.get().is_some()>
                <p class="review-page__notice">{move || notice.get()}</p>
            </Show>

            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Submit review"
            </button>
        </div>
    }
}
