use crate::{
    components::{
        confirm_dialog::ConfirmDeleteDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::all_requests::{
        components::{filter::RequestFilterBar, table::AdminRequestTable},
        view_model::{AllRequestsViewModel, LOAD_FAILED},
    },
};
use leptos::*;

#[component]
pub fn AllRequestsPage() -> impl IntoView {
    let vm = AllRequestsViewModel::new();
    let visible = vm.visible_requests();
    let resource = vm.requests_resource;
    let action_error = vm.action_error;
    let pending_delete = vm.pending_delete;
    let approve_action = vm.approve_action;
    let delete_action = vm.delete_action;
    let busy = Signal::derive(move || approve_action.pending().get() || delete_action.pending().get());
    let on_approve = vm.on_approve();
    let on_delete = vm.on_request_delete();
    let refresh = Callback::new(move |_| vm.refresh());
    let list = vm.list;
    let delete_target = Signal::derive(move || {
        pending_delete.get().map(|id| {
            list.with(|l| l.view().into_iter().find(|r| r.id == id))
                .map(|r| r.destination)
        })
    });

    view! {
        <Layout active="/all-requests">
            <div class="space-y-4">
                <RequestFilterBar
                    query=vm.query
                    status_filter=vm.status_filter
                    placeholder="Search by employee, destination or purpose"
                    show_status=true
                    on_refresh=refresh
                />
                {move || action_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        resource.get().map(|result| match result {
                            Err(_) => view! { <ErrorMessage message=LOAD_FAILED.to_string() /> }.into_view(),
                            Ok(_) => {
                                let rows = visible.get();
                                if rows.is_empty() {
                                    view! { <EmptyState title="No requests found" /> }.into_view()
                                } else {
                                    view! {
                                        <AdminRequestTable
                                            requests=rows
                                            on_approve=on_approve
                                            on_delete=on_delete
                                            busy=busy
                                        />
                                    }
                                    .into_view()
                                }
                            }
                        })
                    }}
                </Suspense>
            </div>
            <ConfirmDeleteDialog
                destination=delete_target
                deleting=Signal::derive(move || delete_action.pending().get())
                on_confirm=vm.on_confirm_delete()
                on_cancel=vm.on_cancel_delete()
            />
        </Layout>
    }
}
