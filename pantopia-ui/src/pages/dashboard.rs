//! Dashboard Page
//!
//! Company distribution charts for the current theme.

use leptos::*;

use crate::api;
use crate::components::{ChartSkeleton, CompanyCharts};
use crate::state::ThemeController;

/// Dashboard page component
#[component]
pub fn Dashboard(theme: ThemeController) -> impl IntoView {
    // Refetch when the theme flips so colors follow the palette
    let charts = create_local_resource(move || theme.get(), api::fetch_charts);

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="opacity-70 mt-1">"Your clients at a glance"</p>
            </div>

            <Suspense fallback=move || view! { <ChartSkeleton /> }>
                {move || charts.get().map(|result| match result {
                    Ok(loaded) => {
                        let (loaded, _) = create_signal(loaded);
                        view! { <CompanyCharts charts=loaded /> }.into_view()
                    }
                    Err(e) => view! {
                        <div class="chart-card rounded-xl p-6">
                            <p class="text-red-400">{format!("Failed to load charts: {}", e)}</p>
                            <button
                                class="mt-4 px-4 py-2 rounded-lg bg-primary-600 text-white"
                                on:click=move |_| charts.refetch()
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_view(),
                })}
            </Suspense>
        </div>
    }
}
