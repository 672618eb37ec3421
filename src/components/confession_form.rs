//! Confession Form Component
//!
//! Title/body inputs with per-field validation and an in-flight guard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::feed::{prepend, validate_submission};
use crate::models::{Confession, FieldErrors};

/// Submission form. The submit button is disabled while a write is in
/// flight; this is a presentation-layer guard, not a data-layer lock.
#[component]
pub fn ConfessionForm(
    title: ReadSignal<String>,
    set_title: WriteSignal<String>,
    confession: ReadSignal<String>,
    set_confession: WriteSignal<String>,
    errors: ReadSignal<FieldErrors>,
    set_errors: WriteSignal<FieldErrors>,
    is_submitting: ReadSignal<bool>,
    set_is_submitting: WriteSignal<bool>,
    set_confessions: WriteSignal<Vec<Confession>>,
    set_new_confession_id: WriteSignal<Option<String>>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_text = title.get();
        let confession_text = confession.get();

        if let Err(field_errors) = validate_submission(&title_text, &confession_text) {
            set_errors.set(field_errors);
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::submit_confession(&title_text, &confession_text).await {
                Ok(created) => {
                    set_new_confession_id.set(Some(created.id.clone()));
                    set_confessions.update(|list| prepend(list, created));
                    set_title.set(String::new());
                    set_confession.set(String::new());
                    set_errors.set(FieldErrors::default());
                }
                Err(e) => {
                    // Inputs are kept so the user can resubmit
                    web_sys::console::error_1(
                        &format!("Error submitting confession: {}", e).into(),
                    );
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <form class="confession-form" on:submit=submit>
            <div class="field">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    placeholder="Enter a title for your confession"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <Show when=move || !errors.get().title.is_empty()>
                    <p class="field-error">{move || errors.get().title}</p>
                </Show>
            </div>

            <div class="field">
                <label for="confession">"Confession"</label>
                <textarea
                    id="confession"
                    placeholder="Write your confession here"
                    rows="4"
                    prop:value=move || confession.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_confession.set(area.value());
                    }
                ></textarea>
                <Show when=move || !errors.get().confession.is_empty()>
                    <p class="field-error">{move || errors.get().confession}</p>
                </Show>
            </div>

            <button
                type="submit"
                class="submit-btn"
                disabled=move || is_submitting.get()
            >
                <Show when=move || is_submitting.get()>
                    <span class="loader"></span>
                </Show>
                "Submit Confession"
            </button>
        </form>
    }
}
