use leptos::*;

#[component]
pub fn DepartmentFilterSelect(
    options: Signal<Vec<String>>,
    selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <label for="department-filter" class="text-sm font-medium text-fg-muted">"Department"</label>
            <select
                id="department-filter"
                class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                prop:value=move || selected.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="">"All"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|department| {
                            let is_selected = selected.with(|value| *value == department);
                            view! {
                                <option value=department.clone() selected=is_selected>
                                    {department}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn filter_offers_all_plus_each_department() {
        let html = render_to_string(move || {
            view! {
                <DepartmentFilterSelect
                    options=Signal::derive(|| vec!["Eng".to_string(), "Sales".to_string()])
                    selected=Signal::derive(String::new)
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains(">All<"));
        assert!(html.contains("value=\"Eng\""));
        assert!(html.contains("value=\"Sales\""));
    }
}
