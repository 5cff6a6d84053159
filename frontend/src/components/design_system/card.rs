use leptos::prelude::*;

/// Rounded panel used for the dashboard columns and the upload form
#[component]
pub fn Panel(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "flex flex-col rounded-2xl border border-zinc-700/50 bg-zinc-800 shadow-xl min-h-0";

    view! {
        <section class=format!("{base_class} {class}")>
            {children()}
        </section>
    }
}

/// Fixed panel header with a title and a muted caption
#[component]
pub fn PanelHeader(
    #[prop(into)]
    title: String,
    /// Caption content under the title
    children: Children,
) -> impl IntoView {
    view! {
        <header class="shrink-0 border-b border-zinc-700/50 px-6 py-5">
            <h2 class="text-lg font-semibold text-zinc-100">{title}</h2>
            <p class="mt-1 text-sm text-zinc-400">{children()}</p>
        </header>
    }
}
