//! Contact Form Component
//!
//! Validates locally and reports through a toast. Fields are cleared on success.

use leptos::prelude::*;

use crate::contact::ContactForm;
use crate::context::use_page_context;
use crate::notify::NotificationKind;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_page_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        let (text, kind) = form.submit_feedback();
        ctx.notify(text, kind);

        if kind == NotificationKind::Success {
            set_name.set(String::new());
            set_email.set(String::new());
            set_message.set(String::new());
        }
    };

    view! {
        <section class="contact-section" id="contact">
            <h2>"Get in touch"</h2>
            <form class="contact-form" novalidate on:submit=submit>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    class="form-input"
                    placeholder="Your email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    class="form-textarea"
                    placeholder="Your message"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="submit-btn">"Send Message"</button>
            </form>
        </section>
    }
}
