//! Card chrome around a widget body: title, resize and remove controls.

#[cfg(test)]
#[path = "widget_frame_test.rs"]
mod widget_frame_test;

use leptos::prelude::*;

use crate::state::registry::WidgetSize;
use crate::state::widgets::WidgetStore;
use crate::util::storage::LocalStorage;

/// Tooltip for the resize button while the widget is `size`.
pub fn resize_hint(size: WidgetSize) -> String {
    format!("Resize ({} → {})", size.as_str(), size.next().as_str())
}

#[component]
pub fn WidgetFrame(id: String, title: String, children: Children) -> impl IntoView {
    let widgets = expect_context::<RwSignal<WidgetStore<LocalStorage>>>();

    let size_id = id.clone();
    let size = move || widgets.with(|w| w.get(&size_id).map(|i| i.size).unwrap_or_default());
    let size_hint = size.clone();

    let resize_id = id.clone();
    let on_resize = move |_| {
        widgets.update(|w| {
            w.cycle_size(&resize_id);
        });
    };

    let on_remove = move |_| {
        widgets.update(|w| {
            w.remove(&id);
        });
    };

    view! {
        <section class="widget">
            <header class="widget__header">
                <span class="widget__drag-handle" title="Drag to reorder">"⋮⋮"</span>
                <h2 class="widget__title">{title}</h2>
                <button class="widget__action" title=move || resize_hint(size_hint()) on:click=on_resize>
                    {move || size().as_str().to_uppercase()}
                </button>
                <button class="widget__action widget__action--danger" title="Remove widget" on:click=on_remove>
                    "×"
                </button>
            </header>
            <div class="widget__body">{children()}</div>
        </section>
    }
}
