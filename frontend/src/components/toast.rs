use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        kind: ToastKind,
    },
    Dismiss(u32),
}

impl ToastAction {
    pub fn success(title: &str, description: &str) -> Self {
        ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            kind: ToastKind::Error,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut list = (*self).clone();
        match action {
            ToastAction::Push {
                title,
                description,
                kind,
            } => {
                list.toasts.push(Toast {
                    id: list.next_id,
                    title,
                    description,
                    kind,
                });
                list.next_id = list.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => list.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(list)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastViewport)]
pub fn toast_viewport(props: &ToastViewportProps) -> Html {
    html! {
        <div class="toast-viewport">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 100;
                }
                .toast {
                    min-width: 280px;
                    max-width: 380px;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    background: rgba(17, 17, 17, 0.95);
                    border: 1px solid rgba(220, 38, 38, 0.3);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                }
                .toast.error {
                    background: rgba(127, 29, 29, 0.95);
                    border-color: rgba(248, 113, 113, 0.6);
                }
                .toast-title { font-weight: 600; color: #fff; margin-bottom: 0.25rem; }
                .toast-description { color: #d1d5db; font-size: 0.9rem; }
                @keyframes toastIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.kind {
        ToastKind::Success => "toast",
        ToastKind::Error => "toast error",
    };

    html! {
        <div class={class} {onclick} role="status">
            <div class="toast-title">{&props.toast.title}</div>
            <div class="toast-description">{&props.toast.description}</div>
        </div>
    }
}
