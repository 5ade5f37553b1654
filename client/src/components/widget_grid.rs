//! Route-scoped widget grid with drag-and-drop reordering.
//!
//! DESIGN
//! ======
//! The grid renders `route_view(route)` keyed by widget id, so reorders move
//! existing widget bodies instead of remounting them (their poll loops and
//! local state survive). The dragged id lives in a local signal; a drop onto
//! another cell is handed to `WidgetStore::move_within_route`, which owns the
//! reindexing.

#[cfg(test)]
#[path = "widget_grid_test.rs"]
mod widget_grid_test;

use leptos::prelude::*;

use crate::components::crypto_widget::CryptoWidget;
use crate::components::tasks_widget::TasksWidget;
use crate::components::weather_widget::WeatherWidget;
use crate::components::widget_frame::WidgetFrame;
use crate::state::registry::{WidgetKind, WidgetSize};
use crate::state::widgets::{WidgetInstance, WidgetStore};
use crate::util::storage::LocalStorage;

/// Class list of one grid cell.
pub fn cell_class(size: WidgetSize, dragging: bool, drop_target: bool) -> String {
    let mut class = size.grid_class().to_owned();
    if dragging {
        class.push_str(" widget-grid__cell--dragging");
    }
    if drop_target {
        class.push_str(" widget-grid__cell--over");
    }
    class
}

fn widget_body(widget: &WidgetInstance) -> AnyView {
    let id = widget.id.clone();
    match widget.kind {
        WidgetKind::Weather => view! { <WeatherWidget widget_id=id/> }.into_any(),
        WidgetKind::Crypto => view! { <CryptoWidget widget_id=id/> }.into_any(),
        WidgetKind::Tasks => view! { <TasksWidget widget_id=id/> }.into_any(),
    }
}

#[component]
pub fn WidgetGrid(route: &'static str) -> impl IntoView {
    let widgets = expect_context::<RwSignal<WidgetStore<LocalStorage>>>();
    let dragging = RwSignal::new(None::<String>);
    let drag_over = RwSignal::new(None::<String>);

    let items = Memo::new(move |_| widgets.with(|w| w.route_view(route)));

    let finish_drag = move || {
        dragging.set(None);
        drag_over.set(None);
    };

    view! {
        <Show
            when=move || !items.with(Vec::is_empty)
            fallback=|| {
                view! {
                    <div class="widget-grid__empty card">
                        <h2>"No widgets yet"</h2>
                        <p>"Use \"Add Widget\" in the top bar to place one on this page."</p>
                    </div>
                }
            }
        >
            <div class="widget-grid">
                <For
                    each=move || items.get()
                    key=|widget| widget.id.clone()
                    children=move |widget| {
                        let id = widget.id.clone();
                        let size = {
                            let id = id.clone();
                            move || widgets.with(|w| w.get(&id).map(|i| i.size).unwrap_or_default())
                        };
                        let class = {
                            let id = id.clone();
                            move || {
                                let is_dragging = dragging.with(|d| d.as_deref() == Some(id.as_str()));
                                let is_over = drag_over.with(|d| d.as_deref() == Some(id.as_str()));
                                cell_class(size(), is_dragging, is_over)
                            }
                        };
                        let start_id = id.clone();
                        let over_id = id.clone();
                        let drop_id = id.clone();
                        view! {
                            <div
                                class=class
                                draggable="true"
                                on:dragstart=move |ev: leptos::ev::DragEvent| {
                                    #[cfg(feature = "hydrate")]
                                    if let Some(dt) = ev.data_transfer() {
                                        let _ = dt.set_data("text/plain", &start_id);
                                    }
                                    #[cfg(not(feature = "hydrate"))]
                                    let _ = &ev;
                                    dragging.set(Some(start_id.clone()));
                                }
                                on:dragover=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    if drag_over.with_untracked(|d| d.as_deref() != Some(over_id.as_str())) {
                                        drag_over.set(Some(over_id.clone()));
                                    }
                                }
                                on:drop=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(active) = dragging.get_untracked() {
                                        widgets.update(|w| {
                                            w.move_within_route(route, &active, &drop_id);
                                        });
                                    }
                                    finish_drag();
                                }
                                on:dragend=move |_| finish_drag()
                            >
                                <WidgetFrame id=id.clone() title=widget.title.clone()>
                                    {widget_body(&widget)}
                                </WidgetFrame>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
