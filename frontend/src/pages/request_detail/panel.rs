use crate::{
    api::{ApiClient, ApiError, TravelRequest, TravelStatus},
    components::{
        layout::{ErrorMessage, Layout, LoadingSpinner},
        status_badge::StatusBadge,
    },
    pages::my_requests::repository::MyRequestsRepository,
    utils::time::format_date_time,
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
fn DetailRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="py-3 sm:grid sm:grid-cols-3 sm:gap-4">
            <dt class="text-sm font-medium text-fg-muted">{label}</dt>
            <dd class="mt-1 text-sm text-fg sm:mt-0 sm:col-span-2 whitespace-pre-line">{value}</dd>
        </div>
    }
}

#[component]
pub fn RequestDetailCard(request: TravelRequest) -> impl IntoView {
    let approval = (request.status == TravelStatus::Approved).then(|| {
        view! {
            <DetailRow
                label="Approved by"
                value=request.approved_by.clone().unwrap_or_else(|| "N/A".into())
            />
            <DetailRow label="Approved at" value=format_date_time(request.approved_at.as_deref()) />
        }
    });
    let rejection = (request.status == TravelStatus::Rejected).then(|| {
        view! {
            <DetailRow label="Rejected at" value=format_date_time(request.rejected_at.as_deref()) />
        }
    });
    let comments = request
        .comments
        .clone()
        .filter(|c| !c.trim().is_empty())
        .map(|c| view! { <DetailRow label="Comments" value=c /> });

    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border">
            <div class="px-6 py-4 border-b border-border flex items-center justify-between">
                <h2 class="text-lg font-semibold text-fg">{request.destination.clone()}</h2>
                <StatusBadge status=request.status />
            </div>
            <dl class="px-6 divide-y divide-border">
                <DetailRow label="Destination" value=request.destination.clone() />
                <DetailRow label="Purpose" value=request.purpose.clone() />
                <DetailRow label="Created" value=format_date_time(request.created_at.as_deref()) />
                <DetailRow label="Status" value=request.status.label() />
                {approval}
                {rejection}
                {comments}
                <DetailRow label="Last updated" value=format_date_time(request.updated_at.as_deref()) />
            </dl>
        </div>
    }
}

pub fn detail_error_message(error: &ApiError) -> String {
    match error {
        ApiError::RequestFailed { status: 404, .. } => "Travel request not found".to_string(),
        _ => "Failed to load request details".to_string(),
    }
}

#[component]
pub fn RequestDetailPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(MyRequestsRepository::new(api));
    let params = use_params_map();
    let request_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let detail = create_resource(request_id, move |id| {
        let repo = repository.get_value();
        async move { repo.get(&id).await }
    });

    view! {
        <Layout active="/my-requests">
            <div class="space-y-4">
                <a href="/my-requests" class="inline-flex items-center text-sm text-fg-muted hover:text-fg">
                    "← Back to Requests"
                </a>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        detail.get().map(|result| match result {
                            Ok(request) => view! { <RequestDetailCard request=request /> }.into_view(),
                            Err(err) => {
                                log::warn!("Request detail failed: {}", err);
                                view! { <ErrorMessage message=detail_error_message(&err) /> }.into_view()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}
