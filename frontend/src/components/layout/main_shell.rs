use leptos::prelude::*;

pub const APP_TITLE: &str = "Merch Lense";

/// Page wrapper: title bar plus the slot the active route renders into
#[component]
pub fn MainShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen w-full bg-zinc-900 text-zinc-100 flex flex-col">
            <header class="shrink-0 h-16 border-b border-zinc-800 px-6 flex items-center">
                <a href="/" class="text-base font-semibold tracking-tight text-zinc-100 hover:text-indigo-300">
                    {APP_TITLE}
                </a>
            </header>
            <main class="flex-1 min-h-0">
                {children()}
            </main>
        </div>
    }
}
