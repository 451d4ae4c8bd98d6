use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
        }
    }
}

/// Shared button. While `loading` is set the button is disabled and, when a
/// `loading_label` is given, shows that text instead of its children.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] loading_label: Option<String>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.classes(),
        class
    );

    view! {
        <button class=classes disabled=move || disabled.get() || loading.get() {..attributes}>
            {move || match (loading.get(), loading_label.clone()) {
                (true, Some(label)) => label.into_view(),
                _ => children().into_view(),
            }}
        </button>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_button_shows_label_and_is_disabled() {
        let html = render_to_string(move || {
            view! {
                <Button loading=true loading_label="Logging in...">
                    "Login"
                </Button>
            }
        });
        assert!(html.contains("Logging in..."));
        assert!(!html.contains(">Login<"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn idle_button_shows_children() {
        let html = render_to_string(move || {
            view! {
                <Button variant=ButtonVariant::Danger loading_label="Working...">
                    "Delete"
                </Button>
            }
        });
        assert!(html.contains("Delete"));
        assert!(!html.contains("Working..."));
        assert!(html.contains("bg-action-danger-bg"));
    }
}
