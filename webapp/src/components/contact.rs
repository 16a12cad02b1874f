//! Contact section: reach-out channels plus the form that posts to the
//! form-relay service.  The relay response is only checked for success;
//! the body is never inspected.

use anyhow::anyhow;
use dioxus::prelude::*;
use serde::Serialize;
use tracing::error;

use crate::components::reveal::Reveal;
use crate::nav::icons;

const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
const CONTACT_EMAIL: &str = "hello@brightfold.studio";
const CONTACT_PHONE: &str = "+44 20 7946 0118";

#[derive(Clone, Debug, Serialize)]
struct RelaySubmission {
    access_key: String,
    name: String,
    email: String,
    subject: String,
    message: String,
}

async fn submit_to_relay(submission: &RelaySubmission) -> anyhow::Result<()> {
    let resp = gloo_net::http::Request::post(RELAY_ENDPOINT)
        .json(submission)?
        .send()
        .await?;

    if !resp.ok() {
        return Err(anyhow!("form relay returned status {}", resp.status()));
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed,
}

fn form_value(event: &FormEvent, name: &str) -> String {
    event
        .values()
        .get(name)
        .map(|value| value.as_value())
        .unwrap_or_default()
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactFormProps {
    access_key: String,
}

#[component]
pub fn ContactForm(props: ContactFormProps) -> Element {
    let mut status = use_signal(|| SubmitState::Idle);
    let access_key = props.access_key;

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |event: FormEvent| {
                let access_key = access_key.clone();
                async move {
                    status.set(SubmitState::Sending);
                    let submission = RelaySubmission {
                        access_key,
                        name: form_value(&event, "name"),
                        email: form_value(&event, "email"),
                        subject: form_value(&event, "subject"),
                        message: form_value(&event, "message"),
                    };
                    match submit_to_relay(&submission).await {
                        Ok(()) => status.set(SubmitState::Sent),
                        Err(err) => {
                            error!("contact form submission failed: {err}");
                            status.set(SubmitState::Failed);
                        }
                    }
                }
            },

            input {
                class: "form-input",
                name: "name",
                r#type: "text",
                placeholder: "Your Name",
                required: true,
            }
            input {
                class: "form-input",
                name: "email",
                r#type: "email",
                placeholder: "Your Email",
                required: true,
            }
            input {
                class: "form-input",
                name: "subject",
                r#type: "text",
                placeholder: "Subject",
                required: true,
            }
            textarea {
                class: "form-input",
                name: "message",
                placeholder: "Your Message",
                rows: "5",
                required: true,
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: status() == SubmitState::Sending,
                "Send Message"
            }

            {match status() {
                SubmitState::Idle => rsx! {},
                SubmitState::Sending => rsx! {
                    span { class: "form-status", "Sending…" }
                },
                SubmitState::Sent => rsx! {
                    span { class: "form-status form-status-ok",
                        "Thanks, your message is on its way."
                    }
                },
                SubmitState::Failed => rsx! {
                    span { class: "form-status form-status-error",
                        "Something went wrong. Please try again or email directly."
                    }
                },
            }}
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact-section", class: "contact-section",
            div { class: "container",
                Reveal {
                    h2 { class: "section-heading",
                        "Let's "
                        span { class: "hero-highlight", "connect" }
                    }
                    p { class: "section-subheading",
                        "Got a project in mind? Use the form, or reach out \
                         through any of these channels."
                    }
                }

                div { class: "contact-grid",
                    div { class: "contact-channels",
                        div { class: "contact-channel",
                            div { class: "contact-channel-glyph",
                                {icons::info("contact-channel-icon")}
                            }
                            div {
                                h3 { "Email" }
                                a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                            }
                        }
                        div { class: "contact-channel",
                            div { class: "contact-channel-glyph",
                                {icons::phone("contact-channel-icon")}
                            }
                            div {
                                h3 { "Phone" }
                                p { "{CONTACT_PHONE}" }
                            }
                        }
                    }

                    div { class: "contact-form-panel",
                        h3 { class: "contact-form-heading", "Send a Message" }
                        ContactForm { access_key: String::from("BRIGHTFOLD-RELAY-KEY") }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Field names are the relay's contract; renaming one silently drops it
    // from delivered mail.
    #[test]
    fn submission_payload_shape() {
        let submission = RelaySubmission {
            access_key: String::from("key"),
            name: String::from("A"),
            email: String::from("a@example.com"),
            subject: String::from("Hi"),
            message: String::from("Hello"),
        };

        let json = serde_json::to_value(&submission).unwrap();
        for field in ["access_key", "name", "email", "subject", "message"] {
            assert!(json.get(field).is_some(), "missing relay field {field}");
        }
    }
}
