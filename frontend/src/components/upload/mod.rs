//! Upload view (`/upload_file`)

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::bindings::show_alert;
use crate::bindings::upload::UPLOAD_FIELD;
use crate::components::design_system::{Button, ButtonVariant, LinkButton, Panel, PanelHeader};
use crate::services::navigation::DASHBOARD_PATH;
use crate::services::upload_flow::submit_upload;

#[component]
pub fn UploadForm() -> impl IntoView {
    let file_input: NodeRef<html::Input> = NodeRef::new();
    let uploading = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        if uploading.get_untracked() {
            return;
        }

        let Some(file) = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            log::debug!("Submit without a chosen file");
            return;
        };

        uploading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = submit_upload(&file).await;
            if let Some(message) = outcome.alert_message() {
                show_alert(message);
            }
            if !finish_upload(uploading) {
                log::info!("Upload finished after leaving the form; not redirecting");
                return;
            }
            navigate(&outcome.redirect_href(), Default::default());
        });
    };

    view! {
        <div class="flex justify-center p-6">
            <Panel class="w-full max-w-xl">
                <PanelHeader title="Upload Sales CSV">
                    "Import sales data from a CSV file."
                </PanelHeader>

                <form class="px-6 py-5 space-y-5" on:submit=on_submit>
                    <div class="space-y-2">
                        <label for=UPLOAD_FIELD class="block text-sm font-medium text-zinc-200">
                            "CSV File"
                        </label>
                        <input
                            node_ref=file_input
                            id=UPLOAD_FIELD
                            name=UPLOAD_FIELD
                            type="file"
                            accept=".csv,text/csv"
                            required=true
                            class="block w-full text-sm text-zinc-300 file:mr-4 file:rounded-lg file:border-0 file:bg-zinc-700 file:px-4 file:py-2 file:text-zinc-100 hover:file:bg-zinc-600"
                        />
                        <p class="text-xs text-zinc-500">"Supported format: CSV only"</p>
                    </div>

                    <div class="flex justify-end gap-3">
                        <LinkButton href=DASHBOARD_PATH variant=ButtonVariant::Outline>
                            "Cancel"
                        </LinkButton>
                        <Button kind="submit" loading=uploading action="upload">
                            "Upload"
                        </Button>
                    </div>
                </form>
            </Panel>
        </div>
    }
}

/// Clear the busy flag. `false` when the form was unmounted meanwhile (the
/// user cancelled or navigated away), in which case there is nothing to
/// redirect from.
fn finish_upload(uploading: RwSignal<bool>) -> bool {
    uploading.try_set(false).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_upload_while_mounted() {
        let uploading = RwSignal::new(true);
        assert!(finish_upload(uploading));
        assert!(!uploading.get_untracked());
    }

    #[test]
    fn test_finish_upload_after_unmount() {
        let owner = Owner::new();
        let uploading = owner.with(|| RwSignal::new(true));
        owner.cleanup();
        assert!(!finish_upload(uploading));
    }
}
