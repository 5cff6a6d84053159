use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;

use super::loading::{LoadingSpinner, SpinnerSize};

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-500 hover:bg-indigo-400 text-white border border-transparent",
            ButtonVariant::Outline => {
                "bg-transparent border border-zinc-600 text-zinc-200 hover:bg-zinc-700"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-indigo-300 hover:text-white border border-transparent"
            }
        }
    }
}

const BASE_CLASS: &str = "h-10 px-5 rounded-lg text-sm font-medium transition-all duration-200 inline-flex items-center justify-center gap-2 focus:outline-none focus-visible:ring-2 focus-visible:ring-indigo-400 focus-visible:ring-offset-2 focus-visible:ring-offset-zinc-800";

/// A styled button
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(into, optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    /// `button` or `submit`
    #[prop(default = "button")]
    kind: &'static str,
    /// Shows a spinner and disables the button
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    #[prop(into, optional)]
    class: String,
    /// Extra marker for locating the button in tests
    #[prop(optional)]
    action: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let variant_class = variant.class();
    let busy = move || loading.get();

    let full_class = move || {
        let state_class = if busy() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        };
        format!("{BASE_CLASS} {variant_class} {state_class} {class}")
    };

    let handle_click = move |evt: ev::MouseEvent| {
        if busy() {
            return;
        }
        if let Some(callback) = on_click {
            callback.run(evt);
        }
    };

    view! {
        <button
            type=kind
            class=full_class
            on:click=handle_click
            disabled=busy
            data-action=action
        >
            {move || loading.get().then(|| view! { <LoadingSpinner size=SpinnerSize::Small label="Working" /> })}
            {children()}
        </button>
    }
}

/// A router link styled as a button
#[component]
pub fn LinkButton(
    #[prop(into)]
    href: String,
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("{BASE_CLASS} {} {class}", variant.class());

    view! {
        <A href=href attr:class=full_class>
            {children()}
        </A>
    }
}
