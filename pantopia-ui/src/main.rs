//! Pantopia Dashboard
//!
//! Client management dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sidebar navigation with active route highlighting
//! - Company distribution charts by industry and status
//! - Light/dark mode
//! - Sign out with fallback redirect
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Pantopia API over HTTP; counting
//! happens on the server and the charts only draw what it returns.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
