use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use super::submit::{begin_submission, cancellable, FormView, PendingSubmission, PENDING_LABEL};
use super::submitter_for;
use super::validation::Lead;
use crate::config::PageConfig;
use crate::dom;

pub const SUBMIT_LABEL: &str = "JOIN NOW";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: PageConfig,
}

struct LiveFormView {
    sending: UseStateHandle<bool>,
    form: NodeRef,
}

impl FormView for LiveFormView {
    fn set_sending(&self, sending: bool) {
        self.sending.set(sending);
    }

    fn alert(&self, message: &str) {
        dom::alert(message);
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let email_ref = use_node_ref();
    let sending = use_state(|| false);
    let pending = use_mut_ref(|| None::<PendingSubmission>);

    // Nothing may write to the form once it is gone.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let config = props.config.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let email_ref = email_ref.clone();
        let sending = sending.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let lead = match Lead::from_form(&input_value(&name_ref), &input_value(&phone_ref), &input_value(&email_ref)) {
                Ok(lead) => lead,
                Err(e) => {
                    dom::alert(&e.to_string());
                    return;
                }
            };
            info!("Submitting contact form");

            let view = Rc::new(LiveFormView {
                sending: sending.clone(),
                form: form_ref.clone(),
            });
            let submitter = submitter_for(&config);
            let (task, handle) = cancellable(begin_submission(view, &submitter, lead));
            if let Some(previous) = pending.borrow_mut().replace(handle) {
                previous.cancel();
            }
            spawn_local(task);
        })
    };

    html! {
        <form ref={form_ref} {onsubmit}>
            <input ref={name_ref} type="text" name="name" placeholder="Your name" />
            <input ref={phone_ref} type="tel" name="phone" placeholder="Phone number" />
            <input ref={email_ref} type="email" name="email" placeholder="Email (optional)" />
            <button type="submit" class="submit-btn" disabled={*sending}>
                { if *sending { PENDING_LABEL } else { SUBMIT_LABEL } }
            </button>
        </form>
    }
}
