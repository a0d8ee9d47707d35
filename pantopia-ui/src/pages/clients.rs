//! Clients Page
//!
//! Company list with a quick add form.

use leptos::*;

use crate::api::{self, Company};
use crate::components::ListSkeleton;

/// Clients page component
#[component]
pub fn Clients() -> impl IntoView {
    let companies = create_local_resource(|| (), |_| api::fetch_companies());

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Clients"</h1>
                <p class="opacity-70 mt-1">"Companies you work with"</p>
            </div>

            <AddCompany on_added=Callback::new(move |_| companies.refetch()) />

            <Suspense fallback=move || view! { <ListSkeleton count=5 /> }>
                {move || companies.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! {
                        <p class="opacity-70">"No companies yet"</p>
                    }.into_view(),
                    Ok(list) => view! { <CompanyTable companies=list /> }.into_view(),
                    Err(e) => view! {
                        <p class="text-red-400">{format!("Failed to load companies: {}", e)}</p>
                    }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn CompanyTable(companies: Vec<Company>) -> impl IntoView {
    view! {
        <table class="w-full text-left chart-card rounded-xl overflow-hidden">
            <thead>
                <tr class="text-sm opacity-70">
                    <th class="px-4 py-3">"Name"</th>
                    <th class="px-4 py-3">"Industry"</th>
                    <th class="px-4 py-3">"Status"</th>
                    <th class="px-4 py-3">"Added"</th>
                </tr>
            </thead>
            <tbody>
                {companies.into_iter().map(|company| view! {
                    <tr class="border-t">
                        <td class="px-4 py-3 font-medium">{company.name}</td>
                        <td class="px-4 py-3">{or_dash(company.industry)}</td>
                        <td class="px-4 py-3">{or_dash(company.status)}</td>
                        <td class="px-4 py-3 text-sm opacity-70">
                            {company.created_at.format("%b %d, %Y").to_string()}
                        </td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

/// Inline form for a single company
#[component]
fn AddCompany(on_added: Callback<()>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (industry, set_industry) = create_signal(String::new());
    let (status, set_status) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_company(&name.get_untracked(), &industry.get_untracked(), &status.get_untracked()).await {
                Ok(_) => {
                    set_name.set(String::new());
                    set_industry.set(String::new());
                    set_status.set(String::new());
                    on_added.call(());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex flex-wrap items-end gap-3">
            <input
                type="text"
                placeholder="Company name"
                class="px-3 py-2 rounded-lg border"
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Industry"
                class="px-3 py-2 rounded-lg border"
                prop:value=industry
                on:input=move |ev| set_industry.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Status"
                class="px-3 py-2 rounded-lg border"
                prop:value=status
                on:input=move |ev| set_status.set(event_target_value(&ev))
            />
            <button
                type="submit"
                disabled=move || saving.get()
                class="px-4 py-2 rounded-lg bg-primary-600 text-white"
            >
                {move || if saving.get() { "Saving..." } else { "Add" }}
            </button>
            {move || error.get().map(|e| view! { <span class="text-red-400 text-sm">{e}</span> })}
        </form>
    }
}

fn or_dash(value: String) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value
    }
}
