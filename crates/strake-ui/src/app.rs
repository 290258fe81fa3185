use gloo::console::log;
use strake_core::{FormMode, Task, TaskForm};
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};

use crate::api::TaskStore;
use crate::components::{TaskEditor, TaskList};

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(TaskStore::configured);
    let tasks = use_state(Vec::<Task>::new);
    let form = use_state(TaskForm::default);
    let busy = use_state(|| false);
    let notice = use_state(|| None::<String>);
    let refresh_tick = use_state(|| 0_u64);

    {
        let store = (*store).clone();
        let tasks = tasks.clone();
        let notice = notice.clone();
        use_effect_with(*refresh_tick, move |tick| {
            let tick = *tick;
            wasm_bindgen_futures::spawn_local(async move {
                tracing::info!(tick, "refreshing task list");
                match store.list().await {
                    Ok(list) => {
                        tracing::debug!(count = list.len(), "task list refreshed");
                        tasks.set(list);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "task list refresh failed");
                        notice.set(Some(format!("Loading tasks failed: {err}")));
                    }
                }
            });

            || ()
        });
    }

    let on_submit = {
        let store = (*store).clone();
        let form = form.clone();
        let busy = busy.clone();
        let notice = notice.clone();
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |_| {
            if *busy {
                ui_debug("action.submit.skip", "ignored duplicate while busy");
                return;
            }

            let (mode, fields) = match form.submission() {
                Ok(submission) => submission,
                Err(message) => {
                    ui_debug("action.submit.invalid", &message);
                    let mut next = (*form).clone();
                    next.error = Some(message);
                    form.set(next);
                    return;
                }
            };

            busy.set(true);
            ui_debug(
                "action.submit",
                &format!(
                    "mode={}, title_len={}",
                    match mode {
                        FormMode::Create => "create",
                        FormMode::Edit(_) => "edit",
                    },
                    fields.title.len()
                ),
            );

            let store = store.clone();
            let form = form.clone();
            let busy = busy.clone();
            let notice = notice.clone();
            let refresh_tick = refresh_tick.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match &mode {
                    FormMode::Create => store.create(&fields).await,
                    FormMode::Edit(id) => store.update(id, &fields).await,
                };

                match outcome {
                    Ok(()) => {
                        ui_debug("action.submit.ok", "save complete, clearing form");
                        form.set(TaskForm::default());
                        notice.set(None);
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "saving task failed");
                        notice.set(Some(format!("Save failed: {err}")));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |task: Task| {
            ui_debug("action.edit", &format!("editing task {}", task.id));
            notice.set(None);
            form.set(TaskForm::editing(&task));
        })
    };

    let on_delete = {
        let store = (*store).clone();
        let busy = busy.clone();
        let notice = notice.clone();
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |id: String| {
            if *busy {
                ui_debug("action.delete.skip", "ignored while busy");
                return;
            }

            busy.set(true);
            let store = store.clone();
            let busy = busy.clone();
            let notice = notice.clone();
            let refresh_tick = refresh_tick.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.delete(&id).await {
                    Ok(()) => {
                        ui_debug("action.delete.ok", &format!("deleted task {id}"));
                        notice.set(None);
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, id = %id, "deleting task failed");
                        notice.set(Some(format!("Delete failed: {err}")));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <div class="masthead">{ "Task Management" }</div>
            {
                if let Some(message) = (*notice).clone() {
                    html! { <div class="banner">{ message }</div> }
                } else {
                    html! {}
                }
            }
            <TaskEditor form={form.clone()} busy={*busy} on_submit={on_submit} />
            <TaskList
                tasks={(*tasks).clone()}
                busy={*busy}
                on_edit={on_edit}
                on_delete={on_delete}
            />
        </div>
    }
}

fn ui_debug(event: &str, detail: &str) {
    tracing::debug!(event, detail, "ui-debug");
    log!(format!("[ui-debug] {event}: {detail}"));
}
