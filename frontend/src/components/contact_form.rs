use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::ToastAction;
use crate::contact::{submit_contact, ContactError, ContactField, ContactRequest, FieldErrors, ProjectType};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_toast: Callback<ToastAction>,
}

pub enum FormAction {
    SetField(ContactField, String),
    Reset,
}

impl Reducible for ContactRequest {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        match action {
            FormAction::SetField(field, value) => {
                let mut next = (*self).clone();
                next.set_field(field, value);
                Rc::new(next)
            }
            FormAction::Reset => Rc::new(ContactRequest::default()),
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactRequest::default);
    let errors = use_state(FieldErrors::default);
    let is_submitting = use_state(|| false);

    let set_field = {
        let form = form.clone();
        move |field: ContactField, value: String| form.dispatch(FormAction::SetField(field, value))
    };

    let text_input = |field: ContactField| {
        let set_field = set_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field(field, input.value());
        })
    };

    let on_project_type = {
        let set_field = set_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field(ContactField::ProjectType, select.value());
        })
    };

    let on_message = {
        let set_field = set_field.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            set_field(ContactField::Message, textarea.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let on_toast = props.on_toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = (*form).clone();
            if let Err(field_errors) = request.validate() {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());
            is_submitting.set(true);

            let form = form.clone();
            let errors = errors.clone();
            let is_submitting = is_submitting.clone();
            let on_toast = on_toast.clone();
            spawn_local(async move {
                match submit_contact(&request).await {
                    Ok(()) => {
                        info!("Contact request sent");
                        form.dispatch(FormAction::Reset);
                        on_toast.emit(ToastAction::success(
                            "Message Sent!",
                            "We'll get back to you within 24 hours.",
                        ));
                    }
                    Err(ContactError::Invalid(field_errors)) => errors.set(field_errors),
                    Err(err) => {
                        gloo_console::error!(format!("Contact submission failed: {}", err));
                        on_toast.emit(ToastAction::error(
                            "Error",
                            "Failed to send message. Please try again.",
                        ));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let error_for = |field: ContactField| match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
        None => html! {},
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate={true}>
            <div class="form-row">
                <div class="form-field">
                    <label for="first-name">{"First Name"}</label>
                    <input
                        id="first-name"
                        type="text"
                        placeholder="John"
                        value={form.field(ContactField::FirstName).to_string()}
                        oninput={text_input(ContactField::FirstName)}
                    />
                    { error_for(ContactField::FirstName) }
                </div>
                <div class="form-field">
                    <label for="last-name">{"Last Name"}</label>
                    <input
                        id="last-name"
                        type="text"
                        placeholder="Doe"
                        value={form.field(ContactField::LastName).to_string()}
                        oninput={text_input(ContactField::LastName)}
                    />
                    { error_for(ContactField::LastName) }
                </div>
            </div>
            <div class="form-field">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="john@example.com"
                    value={form.field(ContactField::Email).to_string()}
                    oninput={text_input(ContactField::Email)}
                />
                { error_for(ContactField::Email) }
            </div>
            <div class="form-field">
                <label for="project-type">{"Project Type"}</label>
                <select id="project-type" onchange={on_project_type}>
                    <option value="" selected={form.project_type.is_empty()} disabled={true}>
                        {"Select project type"}
                    </option>
                    { for ProjectType::ALL.iter().map(|kind| html! {
                        <option
                            value={kind.slug()}
                            selected={form.project_type == kind.slug()}
                        >
                            {kind.label()}
                        </option>
                    }) }
                </select>
                { error_for(ContactField::ProjectType) }
            </div>
            <div class="form-field">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    rows="5"
                    placeholder="Tell us about your project..."
                    value={form.field(ContactField::Message).to_string()}
                    oninput={on_message}
                />
                { error_for(ContactField::Message) }
            </div>
            <button type="submit" class="submit-button" disabled={*is_submitting}>
                { if *is_submitting { "Launching..." } else { "Launch Project" } }
            </button>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-field label { color: #d1d5db; }
                .form-field input, .form-field select, .form-field textarea {
                    background: #000;
                    border: 1px solid #4b5563;
                    border-radius: 0.5rem;
                    color: #fff;
                    padding: 0.75rem;
                    font: inherit;
                }
                .form-field input:focus, .form-field select:focus, .form-field textarea:focus {
                    border-color: #dc2626;
                    outline: none;
                }
                .field-error { color: #f87171; font-size: 0.85rem; }
                .submit-button {
                    background: linear-gradient(90deg, #dc2626, #ef4444);
                    color: #fff;
                    font-weight: 600;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .submit-button:disabled { opacity: 0.6; cursor: wait; }
                "#}
            </style>
        </form>
    }
}
