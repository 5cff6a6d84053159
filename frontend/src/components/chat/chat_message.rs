use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::bindings::copy_to_clipboard;
use crate::services::chat_transcript::MessageRole;

/// A single transcript entry with role-based styling
#[component]
pub fn ChatMessage(
    role: MessageRole,
    #[prop(into)]
    content: String,
) -> impl IntoView {
    let container_class = match role {
        MessageRole::User => "bg-indigo-900/40 p-3 rounded-lg max-w-[85%] ml-auto border border-indigo-800",
        MessageRole::Error => "bg-red-900/40 p-3 rounded-lg max-w-[85%] border border-red-800 text-red-200",
        MessageRole::Assistant => "bg-zinc-900/60 p-3 rounded-lg max-w-[85%] group border border-zinc-700/60",
    };

    // Replies are often tables or numbers worth pasting elsewhere
    let copy_button = (role == MessageRole::Assistant).then(|| {
        let text = content.clone();
        let copy = move |_: ev::MouseEvent| {
            let text = text.clone();
            spawn_local(async move {
                if let Err(e) = copy_to_clipboard(&text).await {
                    log::warn!("Copy to clipboard failed: {}", e);
                }
            });
        };
        view! {
            <button
                class="mt-2 text-xs text-zinc-500 hover:text-indigo-300 opacity-0 group-hover:opacity-100 transition"
                title="Copy"
                on:click=copy
            >
                "Copy"
            </button>
        }
    });

    view! {
        <div class=container_class data-role=role.as_str()>
            <div class="whitespace-pre-wrap break-words text-sm leading-relaxed">{content}</div>
            {copy_button}
        </div>
    }
}
