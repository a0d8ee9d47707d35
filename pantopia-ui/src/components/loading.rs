//! Loading Component
//!
//! Skeleton states shown while data loads.

use leptos::*;

/// Skeleton loader for the chart row
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 animate-pulse">
            {(0..2).map(|_| view! {
                <div class="chart-card rounded-xl p-6">
                    <div class="h-6 skeleton rounded w-1/3 mb-2" />
                    <div class="h-4 skeleton rounded w-1/2 mb-4" />
                    <div class="h-64 skeleton rounded" />
                </div>
            }).collect_view()}
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="skeleton rounded h-12" />
            }).collect_view()}
        </div>
    }
}
