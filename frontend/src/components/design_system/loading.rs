use leptos::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerSize {
    /// Inline, inside buttons
    Small,
    #[default]
    Medium,
}

impl SpinnerSize {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4 border-2",
            SpinnerSize::Medium => "w-7 h-7 border-[3px]",
        }
    }
}

/// Indeterminate progress ring, announced to screen readers by `label`
#[component]
pub fn LoadingSpinner(
    #[prop(optional)]
    size: SpinnerSize,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <span role="status" class="inline-flex items-center">
            <span class=format!(
                "{} animate-spin rounded-full border-zinc-600 border-t-indigo-400",
                size.class()
            )></span>
            <span class="sr-only">{label}</span>
        </span>
    }
}

/// Bouncing dots in the transcript while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    let dot = |delay_ms: u32| {
        view! {
            <span
                class="w-2 h-2 rounded-full bg-indigo-300/70 animate-bounce"
                style=format!("animation-delay: {delay_ms}ms")
            ></span>
        }
    };

    view! {
        <div class="flex items-center gap-1 self-start" role="status" aria-label="Waiting for reply">
            {dot(0)}
            {dot(150)}
            {dot(300)}
        </div>
    }
}
