//! Widget pages: every dashboard route except settings hosts its own grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route path is the widget partition key, so each page passes its own
//! path both to the layout (guard, navbar target) and to the grid.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::widget_grid::WidgetGrid;
use crate::util::routes::AppRoute;

#[component]
fn WorkspacePage(route: AppRoute) -> impl IntoView {
    let path = route.path();
    view! {
        <DashboardLayout route=path>
            <WidgetGrid route=path/>
        </DashboardLayout>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <WorkspacePage route=AppRoute::Dashboard/> }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! { <WorkspacePage route=AppRoute::Analytics/> }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! { <WorkspacePage route=AppRoute::Users/> }
}

#[component]
pub fn DataPage() -> impl IntoView {
    view! { <WorkspacePage route=AppRoute::Data/> }
}
