use crate::{
    api::ApiClient,
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    pages::dashboard::{
        components::{QuickActions, RecentRequests, SummarySection},
        repository::DashboardRepository,
        utils::summarize,
    },
    state::auth::use_auth,
};
use leptos::*;

pub const LOAD_FAILED: &str = "Failed to load requests";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_admin = create_memo(move |_| auth.get().is_admin());
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(DashboardRepository::new(api));
    let requests = create_resource(
        move || is_admin.get(),
        move |admin| {
            let repo = repository.get_value();
            async move { repo.load(admin).await }
        },
    );

    view! {
        <Layout active="/dashboard">
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    requests.get().map(|result| match result {
                        Err(err) => {
                            log::warn!("{}: {}", LOAD_FAILED, err);
                            view! { <ErrorMessage message=LOAD_FAILED.to_string() /> }.into_view()
                        }
                        Ok(list) => {
                            let snapshot = summarize(&list);
                            view! {
                                <div class="space-y-6">
                                    <SummarySection counts=snapshot.counts />
                                    <div class="grid gap-4 md:grid-cols-2">
                                        <RecentRequests requests=snapshot.recent />
                                        <QuickActions is_admin=is_admin.get() />
                                    </div>
                                </div>
                            }
                            .into_view()
                        }
                    })
                }}
            </Suspense>
        </Layout>
    }
}
