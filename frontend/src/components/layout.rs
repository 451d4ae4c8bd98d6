use crate::{
    state::session::use_session,
    utils::navigation::{redirect_to, LOGIN_PATH},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let on_logout = move |_| {
        if let Err(err) = session.sign_out() {
            log::error!("Failed to clear session: {}", err);
        }
        redirect_to(LOGIN_PATH);
    };
    view! {
        <header class="bg-action-primary-bg text-action-primary-text shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold">"Employee Manager"</h1>
                    <button
                        type="button"
                        on:click=on_logout
                        class="inline-flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium hover:bg-action-primary-bg-hover"
                    >
                        <i class="fas fa-sign-out-alt"></i>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">
                    {children()}
                </div>
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::signed_in_session;
    use crate::test_support::ssr::{render_to_string, render_with_session};

    #[test]
    fn layout_renders_header_and_children() {
        let html = render_with_session(signed_in_session(), move || {
            view! { <Layout><p>"body-content"</p></Layout> }
        });
        assert!(html.contains("Employee Manager"));
        assert!(html.contains("Logout"));
        assert!(html.contains("body-content"));
    }

    #[test]
    fn loading_spinner_renders() {
        let html = render_to_string(move || view! { <LoadingSpinner/> });
        assert!(html.contains("animate-spin"));
    }
}
