use crate::{
    state::session::use_session,
    utils::navigation::{redirect_to, LOGIN_PATH},
};
use leptos::*;

/// Renders `children` only when the session holds a token.
///
/// The check runs once, synchronously, on entry; without a token the
/// children are never built, so nothing they would fetch is requested.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let has_token = session.is_authenticated();
    create_effect(move |_| {
        if !has_token {
            log::info!("No session token; redirecting to login");
            redirect_to(LOGIN_PATH);
        }
    });
    view! {
        <Show when=move || has_token fallback=|| ()>
            {children()}
        </Show>
    }
}
