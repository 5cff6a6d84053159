use leptos::ev;
use leptos::prelude::*;

/// A styled text input bound to a signal
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    #[prop(into, optional)]
    placeholder: String,
    /// Keydown event handler
    #[prop(into, optional)]
    on_keydown: Option<Callback<ev::KeyboardEvent>>,
    #[prop(into, optional)]
    id: Option<String>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "h-11 w-full rounded-lg border border-zinc-700 bg-zinc-900 px-4 text-sm text-zinc-100 placeholder:text-zinc-500 focus:outline-none focus:ring-2 focus:ring-indigo-400 focus:ring-offset-2 focus:ring-offset-zinc-800";
    let full_class = format!("{base_class} {class}");

    let handle_keydown = move |evt: ev::KeyboardEvent| {
        if let Some(callback) = on_keydown {
            callback.run(evt);
        }
    };

    view! {
        <input
            id=id
            type="text"
            class=full_class
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |evt| value.set(event_target_value(&evt))
            on:keydown=handle_keydown
        />
    }
}
