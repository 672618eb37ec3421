//! Confession Feed Component
//!
//! Reverse-chronological list of confession cards.

use leptos::prelude::*;

use crate::models::Confession;
use crate::time::time_ago;

#[component]
pub fn ConfessionFeed(
    confessions: ReadSignal<Vec<Confession>>,
    new_confession_id: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="feed">
            <For
                each=move || confessions.get()
                key=|conf| conf.id.clone()
                children=move |conf: Confession| {
                    let id = conf.id.clone();
                    // Highlight the card that was just submitted
                    let card_class = move || {
                        if new_confession_id.get().as_deref() == Some(id.as_str()) {
                            "confession-card new-confession"
                        } else {
                            "confession-card"
                        }
                    };
                    view! {
                        <div class=card_class>
                            <div class="card-header">
                                <h2>
                                    <span class="card-title">{conf.title.clone()}</span>
                                    <span class="card-time">{time_ago(conf.timestamp)}</span>
                                </h2>
                            </div>
                            <div class="card-body">
                                <p>{conf.confession.clone()}</p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
