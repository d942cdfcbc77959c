use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Runs `f` inside a runtime where resources never start their fetch.
/// View models that own resources can be built without a backend.
pub fn with_idle_resources<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_idle_resources(|| view().into_view().render_to_string().to_string())
}

/// Text as it appears in rendered markup; SSR escapes `/` in text nodes.
pub fn escaped(text: &str) -> String {
    text.replace('/', "&#x2F;")
}
