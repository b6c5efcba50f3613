use crate::animation::reveal::{Reveal, RevealFrom, STAGGER_MS};
use crate::config;
use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    AcRepair,
    AcInstall,
    Heating,
    Maintenance,
    Other,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::AcRepair,
        ServiceKind::AcInstall,
        ServiceKind::Heating,
        ServiceKind::Maintenance,
        ServiceKind::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ServiceKind::AcRepair => "ac-repair",
            ServiceKind::AcInstall => "ac-install",
            ServiceKind::Heating => "heating",
            ServiceKind::Maintenance => "maintenance",
            ServiceKind::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::AcRepair => "🔧 AC Repair",
            ServiceKind::AcInstall => "❄️ AC Installation",
            ServiceKind::Heating => "🔥 Heating Service",
            ServiceKind::Maintenance => "🛠️ Maintenance",
            ServiceKind::Other => "📋 Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Emergency,
    Today,
    Week,
    Planning,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Emergency,
        Urgency::Today,
        Urgency::Week,
        Urgency::Planning,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Urgency::Emergency => "emergency",
            Urgency::Today => "today",
            Urgency::Week => "week",
            Urgency::Planning => "planning",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Emergency => "🚨 Emergency - ASAP!",
            Urgency::Today => "📅 Today if possible",
            Urgency::Week => "📆 This week",
            Urgency::Planning => "🤔 Just planning ahead",
        }
    }
}

/// Body posted to the form relay.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct LeadRequest {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub urgency: String,
}

impl LeadRequest {
    /// First required field that is still blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.phone.trim().is_empty() {
            Some("phone number")
        } else if !ServiceKind::ALL.iter().any(|s| s.value() == self.service) {
            Some("service")
        } else {
            None
        }
    }
}

fn post_lead(lead: LeadRequest, on_done: Callback<()>) {
    spawn_local(async move {
        let request = Request::post(config::get_form_endpoint())
            .header("Accept", "application/json")
            .json(&lead);
        match request {
            Ok(request) => match request.send().await {
                Ok(response) if response.ok() => info!("Lead submitted"),
                Ok(response) => warn!("Form relay answered with status {}", response.status()),
                Err(e) => gloo_console::error!("Failed to submit lead:", e.to_string()),
            },
            Err(e) => gloo_console::error!("Failed to encode lead:", e.to_string()),
        }
        // Thank-you panel is shown whatever the relay said.
        on_done.emit(());
    });
}

const BENEFITS: [(&str, &str); 4] = [
    ("✅", "Free, no-obligation estimates"),
    ("⏱️", "Response within 30 minutes"),
    ("🛡️", "100% satisfaction guaranteed"),
    ("🏅", "Licensed & insured professionals"),
];

#[function_component(LeadFormSection)]
pub fn lead_form_section() -> Html {
    let form = use_state(LeadRequest::default);
    let submitted = use_state(|| false);
    let sending = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadRequest {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadRequest {
                phone: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(LeadRequest {
                service: select.value(),
                ..(*form).clone()
            });
        })
    };

    let on_urgency = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(LeadRequest {
                urgency: select.value(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let sending = sending.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if let Some(field) = form.missing_field() {
                error.set(Some(format!("Please fill in your {}.", field)));
                return;
            }
            error.set(None);
            sending.set(true);

            let submitted = submitted.clone();
            let sending = sending.clone();
            post_lead(
                (*form).clone(),
                Callback::from(move |_| {
                    sending.set(false);
                    submitted.set(true);
                }),
            );
        })
    };

    html! {
        <section id="form" class="form-section">
            <div class="form-section-pattern"></div>
            <div class="container form-grid">
                <Reveal from={RevealFrom::Left}>
                    <span class="eyebrow">{"GET YOUR FREE QUOTE"}</span>
                    <h2 class="form-title">
                        {"Ready to Get"}
                        <span class="gradient-text">{" Comfortable?"}</span>
                    </h2>
                    <p class="form-lead">
                        {"Fill out the form and one of our certified technicians will contact you within 30 minutes. No obligation, no pressure."}
                    </p>
                    <div class="benefits">
                        { for BENEFITS.iter().enumerate().map(|(i, (icon, text))| html! {
                            <Reveal from={RevealFrom::Left} delay_ms={i as u32 * STAGGER_MS} class="benefit">
                                <span class="benefit-icon">{*icon}</span>
                                <span>{*text}</span>
                            </Reveal>
                        }) }
                    </div>
                    <Reveal from={RevealFrom::None} class="availability">
                        <p>{"🔥 "}<strong>{"3 technicians available now"}</strong>{" in your area"}</p>
                    </Reveal>
                </Reveal>

                <Reveal from={RevealFrom::Right}>
                    <div class="form-card">
                        <div class="form-badge">{"FREE ESTIMATE"}</div>
                        if *submitted {
                            <div class="form-thanks">
                                <div class="thanks-icon">{"✔"}</div>
                                <h3>{"We Got Your Request!"}</h3>
                                <p>{"A technician will call you within 30 minutes."}</p>
                                <p class="muted">{"Or call us now:"}</p>
                                <a href={config::PHONE_HREF} class="thanks-phone">{config::PHONE_DISPLAY}</a>
                            </div>
                        } else {
                            <h3>{"Get Your Free Quote"}</h3>
                            <p class="muted">{"No spam, ever. We respect your privacy."}</p>
                            <form {onsubmit} class="lead-form">
                                <input type="text" name="name" placeholder="Your Name" required=true
                                    value={form.name.clone()} oninput={on_name} />
                                <input type="tel" name="phone" placeholder="Phone Number" required=true
                                    value={form.phone.clone()} oninput={on_phone} />
                                <select name="service" required=true onchange={on_service}>
                                    <option value="" selected={form.service.is_empty()}>{"What do you need?"}</option>
                                    { for ServiceKind::ALL.iter().map(|s| html! {
                                        <option value={s.value()} selected={form.service == s.value()}>{s.label()}</option>
                                    }) }
                                </select>
                                <select name="urgency" onchange={on_urgency}>
                                    <option value="" selected={form.urgency.is_empty()}>{"How urgent?"}</option>
                                    { for Urgency::ALL.iter().map(|u| html! {
                                        <option value={u.value()} selected={form.urgency == u.value()}>{u.label()}</option>
                                    }) }
                                </select>
                                if let Some(message) = (*error).clone() {
                                    <p class="form-error">{message}</p>
                                }
                                <button type="submit" class="btn btn-primary btn-block" disabled={*sending}>
                                    { if *sending { "SENDING..." } else { "GET MY FREE QUOTE →" } }
                                </button>
                            </form>
                            <div class="form-assurances">
                                <span>{"🛡️ No Spam"}</span>
                                <span>{"✔ Licensed"}</span>
                                <span>{"⚡ Fast Reply"}</span>
                            </div>
                        }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
