//! Local to-do list with completion filter and inline editing.

#[cfg(test)]
#[path = "tasks_widget_test.rs"]
mod tasks_widget_test;

use leptos::prelude::*;

use crate::state::tasks::{TaskFilter, TaskList};
use crate::util::storage::LocalStorage;
use crate::util::time::now_rfc3339;

/// Footer summary, e.g. `"2 of 5 remaining"`.
pub fn remaining_label(list: &TaskList) -> String {
    let total = list.tasks().len();
    let open = list.tasks().iter().filter(|t| !t.completed).count();
    format!("{open} of {total} remaining")
}

#[component]
pub fn TasksWidget(widget_id: String) -> impl IntoView {
    let list = RwSignal::new(TaskList::load(&LocalStorage, &widget_id));
    let filter = RwSignal::new(TaskFilter::default());
    let draft = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<(String, String)>);
    let widget_id = StoredValue::new(widget_id);

    // Apply `edit` and persist when it reports a change.
    let mutate = move |edit: &dyn Fn(&mut TaskList) -> bool| {
        let mut next = list.get_untracked();
        if edit(&mut next) {
            widget_id.with_value(|id| next.save(&LocalStorage, id));
            list.set(next);
        }
    };

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = draft.get_untracked();
        mutate(&|l| l.add(&title, now_rfc3339()).is_some());
        draft.set(String::new());
    };

    let commit_edit = move || {
        if let Some((id, title)) = editing.get_untracked() {
            mutate(&|l| l.rename(&id, &title));
        }
        editing.set(None);
    };

    view! {
        <div class="tasks">
            <form class="tasks__add" on:submit=on_add>
                <input
                    class="input"
                    type="text"
                    placeholder="Add a task"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Add"</button>
            </form>

            <div class="tasks__filters">
                {TaskFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="tasks__filter"
                                class:tasks__filter--active=move || filter.get() == f
                                on:click=move |_| filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="tasks__list">
                <For
                    each=move || list.with(|l| l.filtered(filter.get()))
                    key=|task| (task.id.clone(), task.title.clone(), task.completed)
                    children=move |task| {
                        let toggle_id = task.id.clone();
                        let delete_id = task.id.clone();
                        let edit_id = task.id.clone();
                        let row_id = task.id.clone();
                        let is_editing = move || editing.with(|e| e.as_ref().is_some_and(|(id, _)| *id == row_id));
                        let title = task.title.clone();
                        view! {
                            <li class="tasks__item" class:tasks__item--done=task.completed>
                                <input
                                    type="checkbox"
                                    prop:checked=task.completed
                                    on:change=move |_| mutate(&|l| l.toggle(&toggle_id))
                                />
                                <Show
                                    when=is_editing
                                    fallback=move || {
                                        let edit_id = edit_id.clone();
                                        let title = title.clone();
                                        view! {
                                            <span
                                                class="tasks__title"
                                                on:dblclick=move |_| editing.set(Some((edit_id.clone(), title.clone())))
                                            >
                                                {title.clone()}
                                            </span>
                                        }
                                    }
                                >
                                    <input
                                        class="input tasks__edit"
                                        type="text"
                                        prop:value=move || editing.with(|e| e.as_ref().map(|(_, t)| t.clone()).unwrap_or_default())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            editing.update(|e| {
                                                if let Some((_, t)) = e.as_mut() {
                                                    *t = value;
                                                }
                                            });
                                        }
                                        on:blur=move |_| commit_edit()
                                        on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                                            "Enter" => commit_edit(),
                                            "Escape" => editing.set(None),
                                            _ => {}
                                        }
                                    />
                                </Show>
                                <button
                                    class="widget__action widget__action--danger"
                                    title="Delete task"
                                    on:click=move |_| mutate(&|l| l.delete(&delete_id))
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <p class="tasks__summary">{move || list.with(remaining_label)}</p>
        </div>
    }
}
