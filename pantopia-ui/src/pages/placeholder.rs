//! Placeholder Pages
//!
//! Menu routes whose screens live outside the dashboard.

use leptos::*;
use leptos_router::*;

/// Page with a title only
#[component]
pub fn Placeholder(title: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h1 class="text-3xl font-bold">{title}</h1>
            <p class="opacity-70">"Nothing here yet."</p>
        </div>
    }
}

/// Shown after a successful sign out
#[component]
pub fn SignedOut() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Signed out"</h1>
            <p class="opacity-70 mb-6">"Your session has ended."</p>
            <A href="/" class="px-6 py-3 bg-primary-600 text-white rounded-lg font-medium">
                "Back to Dashboard"
            </A>
        </div>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="opacity-70 mb-6">"The page you're looking for doesn't exist."</p>
            <A href="/" class="px-6 py-3 bg-primary-600 text-white rounded-lg font-medium">
                "Go to Dashboard"
            </A>
        </div>
    }
}
