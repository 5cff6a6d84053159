pub mod chat_message;

pub use chat_message::ChatMessage;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::bindings::{analyse, ChatQuery, FileEntry};
use crate::components::design_system::{Button, Input, Panel, PanelHeader, TypingIndicator};
use crate::services::chat_transcript::{prepare_query, ChatTranscript, MessageRole};

pub const QUERY_PLACEHOLDER: &str = "Type Some Message Here ..";

/// Chat bound to one selected file.
///
/// The dashboard builds a fresh panel whenever the selection changes, so the
/// transcript always belongs to a single table.
#[component]
pub fn ChatPanel(file: FileEntry) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let transcript = RwSignal::new(ChatTranscript::default());
    let pending = RwSignal::new(0_usize);
    let file_name = file.file_name.clone();
    let file = StoredValue::new(file);

    let send = move || {
        let draft_text = draft.get_untracked();
        // Cleared on every send, whatever the request's outcome
        draft.set(String::new());
        let Some(query) = prepare_query(&draft_text) else {
            return;
        };

        let request = ChatQuery::new(query.clone(), &file.get_value());
        transcript.update(|t| {
            t.push(MessageRole::User, query);
        });
        pending.update(|n| *n += 1);

        spawn_local(async move {
            let (role, content) = match analyse(&request).await {
                Ok(reply) => (MessageRole::Assistant, reply.display_text()),
                Err(e) => {
                    log::warn!("Analyse failed for {}: {}", request.table_name, e);
                    (MessageRole::Error, e.to_string())
                }
            };
            // The panel may have been replaced by another selection meanwhile
            transcript.try_update(|t| {
                t.push(role, content);
            });
            pending.try_update(|n| *n = n.saturating_sub(1));
        });
    };

    let on_keydown = Callback::new(move |evt: ev::KeyboardEvent| {
        if evt.key() == "Enter" {
            evt.prevent_default();
            send();
        }
    });
    let on_send = Callback::new(move |_: ev::MouseEvent| send());

    view! {
        <Panel class="w-[70%]">
            <PanelHeader title="Chat">
                <b>"Ask questions about your " <u><i data-role="chat-file">{file_name}</i></u> " files."</b>
            </PanelHeader>

            <div class="flex-1 min-h-0 px-6 py-5">
                <div
                    class="h-full overflow-y-auto rounded-xl border border-dashed border-zinc-700/60 bg-zinc-900/30 p-4 flex flex-col gap-3"
                    data-role="transcript"
                >
                    {move || transcript.with(ChatTranscript::is_empty).then(|| view! {
                        <p class="text-sm text-zinc-400">"Messages will appear here."</p>
                    })}
                    <For
                        each=move || transcript.with(|t| t.messages().to_vec())
                        key=|message| message.id
                        children=|message| view! {
                            <ChatMessage role=message.role content=message.content />
                        }
                    />
                    {move || (pending.get() > 0).then(|| view! { <TypingIndicator /> })}
                </div>
            </div>

            <div class="shrink-0 border-t border-zinc-700/50 px-6 py-5">
                <div class="flex gap-3">
                    <Input
                        value=draft
                        id="message"
                        placeholder=QUERY_PLACEHOLDER
                        on_keydown=on_keydown
                        class="flex-1"
                    />
                    <Button on_click=on_send action="send" class="h-11 px-6">
                        "Send"
                    </Button>
                </div>
            </div>
        </Panel>
    }
}
