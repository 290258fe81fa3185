use strake_core::{Task, TaskForm, TaskStatus};
use yew::{
    Callback, Html, Properties, TargetCast, UseStateHandle, function_component, html,
};

#[derive(Properties, PartialEq)]
pub struct TaskEditorProps {
    pub form: UseStateHandle<TaskForm>,
    pub busy: bool,
    pub on_submit: Callback<()>,
}

#[function_component(TaskEditor)]
pub fn task_editor(props: &TaskEditorProps) -> Html {
    let form = props.form.clone();
    let busy = props.busy;

    let on_title_input = {
        let form = form.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.title = input.value();
            next.error = None;
            form.set(next);
        })
    };

    let on_description_input = {
        let form = form.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            next.error = None;
            form.set(next);
        })
    };

    let on_status_change = {
        let form = form.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.status = TaskStatus::parse(&select.value()).unwrap_or_default();
            next.error = None;
            form.set(next);
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="panel editor" {onsubmit}>
            <div class="header">{ if form.is_editing() { "Edit Task" } else { "New Task" } }</div>
            <div class="field">
                <label>{ "Title" }</label>
                <input
                    type="text"
                    placeholder="Title"
                    value={form.title.clone()}
                    oninput={on_title_input}
                    required={true}
                />
            </div>
            <div class="field">
                <label>{ "Description" }</label>
                <textarea
                    placeholder="Description"
                    value={form.description.clone()}
                    oninput={on_description_input}
                    required={true}
                />
            </div>
            <div class="field">
                <label>{ "Status" }</label>
                <select onchange={on_status_change}>
                    {
                        for TaskStatus::all().into_iter().map(|status| html! {
                            <option value={status.as_str()} selected={form.status == status}>
                                { status.as_str() }
                            </option>
                        })
                    }
                </select>
            </div>
            {
                if let Some(error) = form.error.clone() {
                    html! { <div class="form-error">{ error }</div> }
                } else {
                    html! {}
                }
            }
            <div class="footer">
                <button type="submit" class="btn" disabled={busy}>
                    { if busy { "Saving..." } else { form.submit_label() } }
                </button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub busy: bool,
    pub on_edit: Callback<Task>,
    pub on_delete: Callback<String>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    html! {
        <div class="panel list">
            <div class="header">
                { "Tasks" }
                <span class="badge">{ props.tasks.len() }</span>
            </div>
            {
                if props.tasks.is_empty() {
                    html! { <div class="list-empty">{ "No tasks yet." }</div> }
                } else {
                    html! {}
                }
            }
            {
                for props.tasks.iter().cloned().map(|task| {
                    let id = task.id.clone();
                    let task_for_edit = task.clone();
                    let on_edit = props.on_edit.clone();
                    let on_delete = props.on_delete.clone();

                    let dot_class = match task.status {
                        TaskStatus::ToDo => "dot todo",
                        TaskStatus::InProgress => "dot doing",
                        TaskStatus::Done => "dot done",
                    };

                    html! {
                        <div class="row">
                            <div class={dot_class}></div>
                            <div class="row-main">
                                <div class="row-title">{ &task.title }</div>
                                <div class="task-subtitle">{ &task.description }</div>
                                <span class="badge">{ task.status.as_str() }</span>
                            </div>
                            <div class="actions">
                                <button
                                    class="btn"
                                    disabled={props.busy}
                                    onclick={move |_| on_edit.emit(task_for_edit.clone())}
                                >
                                    { "Edit" }
                                </button>
                                <button
                                    class="btn danger"
                                    disabled={props.busy}
                                    onclick={move |_| on_delete.emit(id.clone())}
                                >
                                    { "Delete" }
                                </button>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
