//! Header Component
//!
//! App banner with two static outbound profile links.

use leptos::prelude::*;

const LINKEDIN_URL: &str = "https://www.linkedin.com/in/nidhi-p-89090b211/";
const GITHUB_URL: &str = "https://github.com/Nidhi-Prakash";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header-bar">
            <a class="profile-link" href=LINKEDIN_URL target="_blank" rel="noreferrer">
                "LinkedIn"
            </a>
            <span class="header-title">"I'm listening"</span>
            <a class="profile-link" href=GITHUB_URL target="_blank" rel="noreferrer">
                "GitHub"
            </a>
        </div>
    }
}
