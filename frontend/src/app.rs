use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::bindings::set_document_title;
use crate::components::dashboard::Dashboard;
use crate::components::design_system::LinkButton;
use crate::components::layout::{MainShell, APP_TITLE};
use crate::components::upload::UploadForm;
use crate::services::navigation::DASHBOARD_PATH;

#[component]
pub fn App() -> impl IntoView {
    set_document_title(APP_TITLE);

    view! {
        <Router>
            <MainShell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/upload_file") view=UploadForm />
                </Routes>
            </MainShell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-4 p-16 text-center">
            <h2 class="text-xl font-semibold text-zinc-100">"Page not found"</h2>
            <LinkButton href=DASHBOARD_PATH>"Back to dashboard"</LinkButton>
        </div>
    }
}
