//! Contact section
//!
//! The form never leaves the browser. A valid submit flips the button to
//! "Sent!" and a timer flips it back.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::contact::{ContactMessage, SubmitState};
use shared::content::{Glyph, CONTACT_INFO};
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon};
use crate::utils::constants::{CONTENT_DELAY_MS, HEADER_DELAY_MS};
use crate::utils::dom::delay_style;

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submit_state = RwSignal::new(SubmitState::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactMessage {
            name: name.get(),
            email: email.get(),
            subject: subject.get(),
            message: message.get(),
        };

        match submit_state.try_update(|state| state.submit(&draft)) {
            Some(Ok(delay_ms)) => {
                set_error.set(None);
                log::debug!("Contact form acknowledged: {}", draft.subject);
                spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    submit_state.try_update(|state| state.reset());
                });
            }
            Some(Err(e)) => set_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let info_cards = CONTACT_INFO
        .iter()
        .enumerate()
        .map(|(index, info)| {
            view! {
                <div
                    class="info-card reveal"
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, index))
                >
                    <div class="icon-box">
                        <Icon glyph=info.icon/>
                    </div>
                    <div>
                        <h3 class="info-title">{info.title}</h3>
                        <p class="text-muted">{info.content}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let submitted = move || submit_state.with(|state| state.is_submitted());

    view! {
        <section id="contact" class="section section-tinted" node_ref=section>
            <div class="container">
                <div
                    class="section-header reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <h2 class="section-title">
                        "Get In " <span class="gradient-text">"Touch"</span>
                    </h2>
                    <p class="section-text">
                        "Have questions about Dr. Zoe? We'd love to hear from you."
                    </p>
                </div>

                <div class="two-column">
                    <div>
                        {info_cards}
                        <div class="image-placeholder map-placeholder">
                            <Icon glyph=Glyph::MapPin class="placeholder-icon"/>
                            <span>"Map"</span>
                        </div>
                    </div>

                    <form
                        class="card contact-form reveal"
                        class:visible=move || visible.get()
                        style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, CONTACT_INFO.len()))
                        on:submit=on_submit
                    >
                        <div class="form-row">
                            <div class="form-group">
                                <label class="form-label" for="contact-name">"Your Name"</label>
                                <input
                                    id="contact-name"
                                    class="input"
                                    type="text"
                                    placeholder="John Doe"
                                    required
                                    bind:value=name
                                />
                            </div>
                            <div class="form-group">
                                <label class="form-label" for="contact-email">"Email Address"</label>
                                <input
                                    id="contact-email"
                                    class="input"
                                    type="email"
                                    placeholder="john@example.com"
                                    required
                                    bind:value=email
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="contact-subject">"Subject"</label>
                            <input
                                id="contact-subject"
                                class="input"
                                type="text"
                                placeholder="How can we help?"
                                required
                                bind:value=subject
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="contact-message">"Message"</label>
                            <textarea
                                id="contact-message"
                                class="input textarea"
                                rows="5"
                                placeholder="Your message..."
                                required
                                bind:value=message
                            ></textarea>
                        </div>

                        <Show when=move || error.get().is_some()>
                            <div class="alert alert-error">
                                <Icon glyph=Glyph::AlertCircle/>
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>
                        <Show when=submitted>
                            <div class="alert alert-success">
                                <Icon glyph=Glyph::CheckCircle/>
                                "Message Sent! Thank you for contacting us. We'll get back to you soon."
                            </div>
                        </Show>

                        <button type="submit" class="btn btn-primary btn-block" disabled=submitted>
                            <Show
                                when=submitted
                                fallback=|| view! { <Icon glyph=Glyph::Send/> "Send Message" }
                            >
                                <Icon glyph=Glyph::CheckCircle/>
                                "Sent!"
                            </Show>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
