//! Confession App
//!
//! Main component owning the form-and-feed view state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConfessionFeed, ConfessionForm, Header};
use crate::feed::sort_by_recency;
use crate::models::{Confession, FieldErrors};

#[component]
pub fn App() -> impl IntoView {
    // View state
    let (title, set_title) = signal(String::new());
    let (confession, set_confession) = signal(String::new());
    let (confessions, set_confessions) = signal(Vec::<Confession>::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (errors, set_errors) = signal(FieldErrors::default());
    let (new_confession_id, set_new_confession_id) = signal::<Option<String>>(None);

    // Load the feed once at mount; failures are logged and the feed stays empty
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_confessions().await {
                Ok(mut loaded) => {
                    sort_by_recency(&mut loaded);
                    set_confessions.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching confessions: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="app-shell">
            <div class="container">
                <div class="form-card">
                    <Header />
                    <ConfessionForm
                        title=title
                        set_title=set_title
                        confession=confession
                        set_confession=set_confession
                        errors=errors
                        set_errors=set_errors
                        is_submitting=is_submitting
                        set_is_submitting=set_is_submitting
                        set_confessions=set_confessions
                        set_new_confession_id=set_new_confession_id
                    />
                </div>
                <ConfessionFeed
                    confessions=confessions
                    new_confession_id=new_confession_id
                />
            </div>
        </div>
    }
}
