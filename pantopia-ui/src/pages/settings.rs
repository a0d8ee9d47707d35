//! Settings Page
//!
//! API connection and display preferences.

use leptos::*;

use crate::api;
use crate::state::{Theme, ThemeController};

/// Settings page component
#[component]
pub fn Settings(theme: ThemeController) -> impl IntoView {
    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (saved, set_saved) = create_signal(false);

    let save = move |_| {
        api::set_api_base(&api_url.get());
        set_saved.set(true);
        gloo_timers::callback::Timeout::new(2000, move || set_saved.set(false)).forget();
    };

    let current = theme.theme();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="opacity-70 mt-1">"Configure your Pantopia dashboard"</p>
            </div>

            <section class="chart-card rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"API Connection"</h2>
                <div class="flex gap-3">
                    <input
                        type="text"
                        class="flex-1 px-3 py-2 rounded-lg border"
                        prop:value=api_url
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    />
                    <button on:click=save class="px-4 py-2 rounded-lg bg-primary-600 text-white">
                        {move || if saved.get() { "Saved" } else { "Save" }}
                    </button>
                </div>
                <p class="text-sm opacity-70">{format!("Default: {}", api::DEFAULT_API_BASE)}</p>
            </section>

            <section class="chart-card rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"Display"</h2>
                <div class="flex gap-3">
                    {[Theme::Light, Theme::Dark].into_iter().map(|option| view! {
                        <button
                            on:click=move |_| theme.set(option)
                            class=move || {
                                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                                if current.get() == option {
                                    format!("{} bg-primary-600 text-white", base)
                                } else {
                                    format!("{} border", base)
                                }
                            }
                        >
                            {option.label()}
                        </button>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
