use crate::utils::filter::StatusFilter;
use leptos::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

#[component]
pub fn RequestFilterBar(
    query: RwSignal<String>,
    status_filter: RwSignal<StatusFilter>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] show_status: bool,
    #[prop(optional)] on_refresh: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row gap-3 sm:items-center">
            <input
                type="search"
                placeholder=placeholder
                class="w-full sm:max-w-sm px-3 py-2 border border-border rounded-md text-sm"
                prop:value=query
                on:input=move |ev| query.set(event_target::<HtmlInputElement>(&ev).value())
            />
            <Show when=move || show_status>
                <select
                    class="px-3 py-2 border border-border rounded-md text-sm"
                    on:change=move |ev| {
                        let value = event_target::<HtmlSelectElement>(&ev).value();
                        status_filter.set(StatusFilter::parse(&value));
                    }
                >
                    {StatusFilter::OPTIONS
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <option
                                    value=option.as_str()
                                    selected=move || status_filter.get() == option
                                >
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </Show>
            {on_refresh.map(|refresh| view! {
                <button
                    type="button"
                    class="sm:ml-auto px-3 py-2 text-sm rounded-md border border-border text-fg-muted hover:text-fg"
                    on:click=move |_| refresh.call(())
                >
                    "Refresh"
                </button>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn filter_bar_lists_status_options() {
        let html = render_to_string(|| {
            let query = create_rw_signal(String::new());
            let status_filter = create_rw_signal(StatusFilter::All);
            view! {
                <RequestFilterBar
                    query=query
                    status_filter=status_filter
                    placeholder="Search requests"
                    show_status=true
                    on_refresh=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Search requests"));
        assert!(html.contains("value=\"pending\""));
        assert!(html.contains("Refresh"));
    }

    #[test]
    fn filter_bar_can_hide_status_select() {
        let html = render_to_string(|| {
            let query = create_rw_signal(String::new());
            let status_filter = create_rw_signal(StatusFilter::All);
            view! {
                <RequestFilterBar query=query status_filter=status_filter placeholder="Search" />
            }
        });
        assert!(!html.contains("<select"));
        assert!(!html.contains("Refresh"));
    }
}
