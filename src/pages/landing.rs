use crate::animation::counter::Counter;
use crate::animation::hero_visibility::use_hero_visibility;
use crate::animation::reveal::{Reveal, RevealFrom, STAGGER_MS};
use crate::config::{self, HeroTiming};
use crate::pages::lead_form::LeadFormSection;
use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD_PX
}

#[function_component(Header)]
pub fn header() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = is_scrolled(scroll_y);

    html! {
        <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
            <div class="container header-content">
                <div class="logo">
                    <div class="logo-mark">{"🌡️"}</div>
                    <span class="logo-text">{"YOUR LOGO"}</span>
                </div>
                <div class="header-actions">
                    <a href={config::PHONE_HREF} class="header-phone">
                        <span class="phone-pulse">{"📞"}</span>
                        <span>{config::PHONE_DISPLAY}</span>
                    </a>
                    <a href="#form" class="btn btn-primary btn-small">{"FREE Quote"}</a>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub timing: HeroTiming,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let visibility = use_hero_visibility(props.timing);
    let text_style = visibility.text_style();

    html! {
        <section class="hero">
            <div class="hero-bg">
                <img src="/hero.png" alt="HVAC Professionals" />
            </div>
            <div class="hero-glow"></div>

            <div class="container hero-content">
                <div class="hero-inner">
                    <div class="hero-text" style={text_style.clone()}>
                        <div class="urgency-badge">
                            <span class="pulse">{"⚠️"}</span>
                            <span>{"Limited Time: $50 OFF Any Service"}</span>
                        </div>
                        <h1>
                            {"AC Broken?"}
                            <br />
                            <span class="gradient-text warm">{"We'll Fix It Today."}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Fast, reliable HVAC repair & installation. "}
                            <strong>{"Same-day service available."}</strong>
                        </p>
                    </div>

                    <div class="hero-ctas" style={visibility.cta_style()}>
                        <a href="#form" class="btn btn-primary btn-large">{"Get FREE Quote →"}</a>
                        <a href={config::PHONE_HREF} class="btn btn-ghost btn-large">
                            {"📞 "}{config::PHONE_DISPLAY}
                        </a>
                    </div>

                    <div class="hero-trust" style={text_style}>
                        <div class="trust-signals">
                            <div class="trust-signal">
                                <span class="trust-icon green">{"⏱️"}</span>
                                <div>
                                    <p class="trust-value">{"2 Hour"}</p>
                                    <p class="trust-label">{"Response Time"}</p>
                                </div>
                            </div>
                            <div class="trust-signal">
                                <span class="trust-icon blue">{"🛡️"}</span>
                                <div>
                                    <p class="trust-value">{"100%"}</p>
                                    <p class="trust-label">{"Satisfaction"}</p>
                                </div>
                            </div>
                            <div class="trust-signal">
                                <span class="trust-icon yellow">{"⭐"}</span>
                                <div>
                                    <p class="trust-value">{"500+"}</p>
                                    <p class="trust-label">{"5-Star Reviews"}</p>
                                </div>
                            </div>
                        </div>
                        <div class="social-proof">
                            <div class="avatars">
                                { for ["M", "S", "R", "J"].iter().map(|letter| html! {
                                    <div class="avatar">{*letter}</div>
                                }) }
                            </div>
                            <div>
                                <div class="stars">{"★★★★★"}</div>
                                <p>
                                    <strong>{"2,847 homeowners"}</strong>{" served this year"}
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

struct Service {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    tone: &'static str,
}

const SERVICES: [Service; 4] = [
    Service { icon: "❄️", title: "AC Repair", desc: "Same-day cooling fixes", tone: "cool" },
    Service { icon: "🔥", title: "Heating", desc: "Furnace & heat pumps", tone: "warm" },
    Service { icon: "🌬️", title: "Air Quality", desc: "Breathe cleaner air", tone: "fresh" },
    Service { icon: "🔧", title: "Maintenance", desc: "Prevent costly repairs", tone: "violet" },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services">
            <div class="container">
                <Reveal class="section-heading">
                    <h2>{"What We Fix"}</h2>
                    <p>{"All major brands. All problems. One call."}</p>
                </Reveal>
                <div class="card-grid four">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal key={service.title} delay_ms={i as u32 * STAGGER_MS}>
                            <a href="#form" class="service-card">
                                <div class={classes!("service-icon", service.tone)}>{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.desc}</p>
                            </a>
                        </Reveal>
                    }) }
                </div>
                <Reveal from={RevealFrom::None} class="section-cta">
                    <a href="#form" class="btn btn-dark">{"Get Started →"}</a>
                </Reveal>
            </div>
        </section>
    }
}

struct Testimonial {
    text: &'static str,
    name: &'static str,
    location: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: "They showed up in 90 minutes and fixed our AC before dinner. Absolutely incredible service!",
        name: "Mike R.",
        location: "Phoenix, AZ",
        rating: 5,
    },
    Testimonial {
        text: "Fair pricing, no upsells, just honest work. This is how all companies should operate.",
        name: "Sarah T.",
        location: "Scottsdale, AZ",
        rating: 5,
    },
    Testimonial {
        text: "Our furnace died on the coldest night of the year. They came at 11pm and saved us!",
        name: "James K.",
        location: "Mesa, AZ",
        rating: 5,
    },
];

fn stars(rating: usize) -> String {
    str::repeat("★", rating)
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="container">
                <Reveal class="section-heading">
                    <div class="stars big">{"★★★★★"}</div>
                    <h2>{"500+ Five-Star Reviews"}</h2>
                    <p>{"Don't take our word for it"}</p>
                </Reveal>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal key={t.name} delay_ms={i as u32 * STAGGER_MS} class="testimonial">
                            <div class="quote-mark">{"\u{201C}"}</div>
                            <div class="stars">{ stars(t.rating) }</div>
                            <p class="testimonial-text">{t.text}</p>
                            <div class="testimonial-author">
                                <div class="avatar">{initial(t.name)}</div>
                                <div>
                                    <p class="author-name">{t.name}</p>
                                    <p class="author-location">{t.location}</p>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

const GUARANTEES: [(&str, &str, &str); 4] = [
    ("⏱️", "2-Hour Response", "Or your service call is FREE"),
    ("🛡️", "100% Satisfaction", "Money-back guarantee"),
    ("✅", "Licensed & Insured", "Fully certified technicians"),
    ("🏆", "5-Year Warranty", "On all installations"),
];

/// (target, suffix, label)
const STATS: [(i64, &str, &str); 3] = [
    (20, "+", "Years Experience"),
    (100, "+", "Jobs Completed"),
    (98, "%", "Would Recommend"),
];

#[function_component(Trust)]
pub fn trust() -> Html {
    html! {
        <section class="trust">
            <div class="trust-pattern"></div>
            <div class="container">
                <Reveal class="section-heading light">
                    <h2>{"Our Guarantees To You"}</h2>
                    <p>{"No risk. No hassle. Just results."}</p>
                </Reveal>
                <div class="card-grid four">
                    { for GUARANTEES.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                        <Reveal key={*title} delay_ms={i as u32 * STAGGER_MS} class="guarantee">
                            <div class="guarantee-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </Reveal>
                    }) }
                </div>
                <div class="stats">
                    { for STATS.iter().enumerate().map(|(i, (target, suffix, label))| html! {
                        <Reveal key={*label} from={RevealFrom::Zoom} delay_ms={i as u32 * STAGGER_MS} class="stat">
                            <p class="stat-value">
                                <Counter target={*target} suffix={*suffix} />
                            </p>
                            <p class="stat-label">{*label}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
pub fn final_cta() -> Html {
    html! {
        <section class="final-cta">
            <div class="final-cta-pattern"></div>
            <div class="container narrow">
                <Reveal>
                    <h2>{"Ready to Get Comfortable?"}</h2>
                    <p class="final-cta-lead">
                        {"Join 15,000+ happy customers. Get your free quote in under 60 seconds."}
                    </p>
                    <div class="final-cta-buttons">
                        <a href="#form" class="btn btn-light btn-large">{"Get FREE Quote →"}</a>
                        <a href={config::PHONE_HREF} class="btn btn-ghost btn-large">{"📞 Call Now"}</a>
                    </div>
                    <p class="final-cta-note">
                        {"⚡ Average response time: "}<strong>{"27 minutes"}</strong>
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-row">
                    <div class="logo">
                        <div class="logo-mark small">{"🌡️"}</div>
                        <span class="logo-text">{"YOUR LOGO"}</span>
                    </div>
                    <div class="footer-badges">
                        <span>{"Licensed & Insured"}</span>
                        <span>{"•"}</span>
                        <span>{"24/7 Emergency Service"}</span>
                        <span>{"•"}</span>
                        <a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                    </div>
                </div>
                <div class="footer-copy">
                    {format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Header />
            <Hero />
            <LeadFormSection />
            <Services />
            <Testimonials />
            <Trust />
            <FinalCta />
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: #0f172a; }
    h1, h2, h3, p { margin: 0; }
    a { text-decoration: none; color: inherit; }
    .container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
    .container.narrow { max-width: 56rem; text-align: center; }
    .gradient-text { background: linear-gradient(90deg, #f97316, #ef4444); -webkit-background-clip: text; background-clip: text; color: transparent; }
    .gradient-text.warm { background-image: linear-gradient(90deg, #fb923c, #facc15); }
    .muted { color: #64748b; }

    .btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; border-radius: 9999px; font-weight: 800; border: none; cursor: pointer; transition: transform 0.2s ease, box-shadow 0.2s ease; }
    .btn:hover { transform: scale(1.05); }
    .btn:active { transform: scale(0.95); }
    .btn:disabled { opacity: 0.6; cursor: wait; transform: none; }
    .btn-primary { background: linear-gradient(90deg, #f97316, #ef4444); color: #fff; box-shadow: 0 10px 25px rgba(249, 115, 22, 0.4); }
    .btn-ghost { background: rgba(255, 255, 255, 0.1); color: #fff; border: 2px solid rgba(255, 255, 255, 0.3); backdrop-filter: blur(4px); }
    .btn-light { background: #fff; color: #ea580c; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2); }
    .btn-dark { background: #0f172a; color: #fff; padding: 1rem 2rem; font-size: 1.125rem; }
    .btn-small { padding: 0.75rem 1.5rem; }
    .btn-large { padding: 1.25rem 2rem; font-size: 1.25rem; }
    .btn-block { width: 100%; padding: 1.25rem; font-size: 1.25rem; border-radius: 0.75rem; }

    .reveal { opacity: 0; transition: opacity 0.6s ease, transform 0.6s ease; }
    .reveal-up { transform: translateY(30px); }
    .reveal-left { transform: translateX(-30px); }
    .reveal-right { transform: translateX(30px); }
    .reveal-zoom { transform: scale(0.8); }
    .reveal.visible { opacity: 1; transform: none; }

    .site-header { position: fixed; top: 0; left: 0; right: 0; z-index: 50; padding: 1rem 0; background: transparent; transition: all 0.5s ease; }
    .site-header.scrolled { background: #fff; padding: 0.75rem 0; box-shadow: 0 25px 50px rgba(15, 23, 42, 0.1); }
    .header-content, .header-actions, .logo { display: flex; align-items: center; }
    .header-content { justify-content: space-between; }
    .header-actions { gap: 1rem; }
    .logo { gap: 0.75rem; }
    .logo-mark { width: 3rem; height: 3rem; border-radius: 0.75rem; display: flex; align-items: center; justify-content: center; background: #fff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .logo-mark.small { width: 2.5rem; height: 2.5rem; background: linear-gradient(135deg, #0ea5e9, #2563eb); }
    .logo-text { font-weight: 900; font-size: 1.25rem; color: #fff; }
    .site-header.scrolled .logo-text, .site-header.scrolled .header-phone { color: #0f172a; }
    .site-header.scrolled .logo-mark { background: linear-gradient(135deg, #0ea5e9, #2563eb); }
    .header-phone { display: none; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.125rem; color: #fff; }
    .phone-pulse, .pulse { display: inline-block; animation: pulse 1.5s infinite; }
    @keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.1); } }

    .hero { position: relative; min-height: 100vh; display: flex; align-items: flex-end; overflow: hidden; background: #0f172a; }
    .hero-bg { position: absolute; inset: 0; }
    .hero-bg img { width: 100%; height: 100%; object-fit: cover; object-position: calc(100% + 35px) center; }
    .hero-glow { position: absolute; top: 25%; right: 25%; width: 24rem; height: 24rem; border-radius: 50%; background: rgba(59, 130, 246, 0.2); filter: blur(64px); animation: glow 8s infinite; }
    @keyframes glow { 0%, 100% { transform: scale(1); opacity: 0.3; } 50% { transform: scale(1.3); opacity: 0.5; } }
    .hero-content { position: relative; z-index: 10; width: 100%; padding-top: 6rem; padding-bottom: 3rem; }
    .hero-inner { max-width: 42rem; }
    .urgency-badge { display: inline-flex; align-items: center; gap: 0.5rem; background: rgba(239, 68, 68, 0.2); border: 1px solid rgba(239, 68, 68, 0.3); border-radius: 9999px; padding: 0.5rem 1rem; margin-bottom: 1.25rem; color: #fca5a5; font-weight: 600; font-size: 0.875rem; }
    .hero h1 { font-size: 2.25rem; font-weight: 900; color: #fff; line-height: 1.1; margin-bottom: 1.25rem; }
    .hero-subtitle { font-size: 1.125rem; color: rgba(255, 255, 255, 0.8); margin-bottom: 1.5rem; line-height: 1.6; }
    .hero-subtitle strong { color: #fff; }
    .hero-ctas { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2.5rem; }
    .trust-signals { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-bottom: 2rem; }
    .trust-signal { display: flex; align-items: center; gap: 0.5rem; }
    .trust-icon { width: 2.5rem; height: 2.5rem; border-radius: 50%; display: flex; align-items: center; justify-content: center; }
    .trust-icon.green { background: rgba(34, 197, 94, 0.2); }
    .trust-icon.blue { background: rgba(59, 130, 246, 0.2); }
    .trust-icon.yellow { background: rgba(234, 179, 8, 0.2); }
    .trust-value { color: #fff; font-weight: 700; }
    .trust-label { color: rgba(255, 255, 255, 0.6); font-size: 0.875rem; }
    .social-proof { display: inline-flex; align-items: center; gap: 1rem; padding: 1rem; background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(8px); border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); color: rgba(255, 255, 255, 0.7); font-size: 0.875rem; }
    .social-proof strong { color: #fff; }
    .avatars { display: flex; }
    .avatars .avatar { margin-left: -0.75rem; border: 2px solid #0f172a; }
    .avatars .avatar:first-child { margin-left: 0; }
    .avatar { width: 2.5rem; height: 2.5rem; border-radius: 50%; background: linear-gradient(135deg, #3b82f6, #2563eb); color: #fff; font-weight: 700; display: flex; align-items: center; justify-content: center; }
    .stars { color: #facc15; letter-spacing: 0.1em; }
    .stars.big { font-size: 2rem; margin-bottom: 1rem; }

    .form-section { position: relative; padding: 5rem 0; background: #f0f9ff; overflow: hidden; }
    .form-section-pattern { position: absolute; inset: 0; opacity: 0.5; background-image: radial-gradient(circle at 1px 1px, rgba(148, 163, 184, 0.3) 1px, transparent 0); background-size: 24px 24px; }
    .form-grid { position: relative; display: grid; gap: 3rem; align-items: center; }
    .eyebrow { display: inline-block; background: rgba(249, 115, 22, 0.1); color: #ea580c; font-weight: 700; font-size: 0.875rem; padding: 0.5rem 1rem; border-radius: 9999px; margin-bottom: 1rem; }
    .form-title { font-size: 2.25rem; font-weight: 900; margin-bottom: 1.5rem; line-height: 1.2; }
    .form-lead { font-size: 1.25rem; color: #475569; margin-bottom: 2rem; }
    .benefits { display: flex; flex-direction: column; gap: 1rem; }
    .benefit { display: flex; align-items: center; gap: 0.75rem; color: #334155; font-weight: 500; }
    .benefit-icon { width: 2.5rem; height: 2.5rem; border-radius: 50%; background: #dcfce7; display: flex; align-items: center; justify-content: center; flex-shrink: 0; }
    .availability { margin-top: 2rem; padding: 1rem; background: #ffedd5; border: 1px solid #fed7aa; border-radius: 1rem; color: #9a3412; font-weight: 600; }
    .form-card { position: relative; overflow: hidden; background: #fff; border-radius: 1.5rem; padding: 2rem; box-shadow: 0 25px 50px rgba(15, 23, 42, 0.1); }
    .form-card h3 { font-size: 1.5rem; font-weight: 900; margin-bottom: 0.5rem; }
    .form-card > .muted { margin-bottom: 1.5rem; }
    .form-badge { position: absolute; top: 0; right: 0; background: linear-gradient(270deg, #22c55e, #10b981); color: #fff; font-size: 0.875rem; font-weight: 700; padding: 0.5rem 1rem; border-bottom-left-radius: 1rem; }
    .lead-form { display: flex; flex-direction: column; gap: 1rem; }
    .lead-form input, .lead-form select { width: 100%; padding: 1rem; border-radius: 0.75rem; border: 2px solid #e2e8f0; font-size: 1.125rem; transition: border-color 0.2s ease, box-shadow 0.2s ease; }
    .lead-form input:focus, .lead-form select:focus { outline: none; border-color: #3b82f6; box-shadow: 0 0 0 4px rgba(59, 130, 246, 0.1); }
    .form-error { color: #dc2626; font-weight: 600; }
    .form-assurances { margin-top: 1.5rem; display: flex; justify-content: center; gap: 1.5rem; font-size: 0.875rem; color: #64748b; }
    .form-thanks { text-align: center; padding: 2rem 0; animation: pop 0.4s ease-out; }
    .form-thanks p { margin-bottom: 0.5rem; }
    .thanks-icon { width: 5rem; height: 5rem; margin: 0 auto 1rem; border-radius: 50%; background: #dcfce7; color: #22c55e; font-size: 2.5rem; display: flex; align-items: center; justify-content: center; }
    .thanks-phone { font-size: 1.5rem; font-weight: 900; color: #2563eb; }
    @keyframes pop { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }

    .services { padding: 5rem 0; background: #f8fafc; }
    .testimonials { padding: 5rem 0; background: #fff; }
    .section-heading { text-align: center; margin-bottom: 3rem; }
    .section-heading h2 { font-size: 1.875rem; font-weight: 900; margin-bottom: 1rem; }
    .section-heading p { font-size: 1.25rem; color: #475569; }
    .section-heading.light h2 { color: #fff; }
    .section-heading.light p { color: rgba(255, 255, 255, 0.7); }
    .section-cta { text-align: center; margin-top: 3rem; }
    .card-grid { display: grid; gap: 1.5rem; }
    .service-card { display: block; background: #fff; border-radius: 1rem; padding: 1.5rem; box-shadow: 0 10px 15px rgba(15, 23, 42, 0.05); transition: transform 0.3s ease; }
    .service-card:hover { transform: translateY(-8px) scale(1.02); }
    .service-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.25rem; }
    .service-card p { color: #475569; }
    .service-icon { width: 3.5rem; height: 3.5rem; border-radius: 1rem; display: flex; align-items: center; justify-content: center; font-size: 1.75rem; margin-bottom: 1rem; transition: transform 0.3s ease; }
    .service-card:hover .service-icon { transform: scale(1.1); }
    .service-icon.cool { background: linear-gradient(135deg, #3b82f6, #06b6d4); }
    .service-icon.warm { background: linear-gradient(135deg, #f97316, #ef4444); }
    .service-icon.fresh { background: linear-gradient(135deg, #22c55e, #10b981); }
    .service-icon.violet { background: linear-gradient(135deg, #a855f7, #ec4899); }
    .testimonial { position: relative; background: #f8fafc; border-radius: 1rem; padding: 1.5rem; }
    .quote-mark { position: absolute; top: -0.75rem; left: 1.5rem; font-size: 3.75rem; color: #bfdbfe; font-family: serif; }
    .testimonial .stars { margin-bottom: 1rem; }
    .testimonial-text { position: relative; z-index: 1; color: #334155; margin-bottom: 1rem; }
    .testimonial-author { display: flex; align-items: center; gap: 0.75rem; }
    .author-name { font-weight: 700; }
    .author-location { font-size: 0.875rem; color: #64748b; }

    .trust { position: relative; overflow: hidden; padding: 5rem 0; background: linear-gradient(135deg, #0f172a, #1e293b); }
    .trust .container { position: relative; }
    .trust-pattern { position: absolute; inset: 0; opacity: 0.1; background-image: radial-gradient(circle at 2px 2px, #fff 1px, transparent 0); background-size: 40px 40px; }
    .guarantee { text-align: center; }
    .guarantee-icon { width: 4rem; height: 4rem; margin: 0 auto 1rem; border-radius: 1rem; background: rgba(255, 255, 255, 0.1); display: flex; align-items: center; justify-content: center; font-size: 2rem; }
    .guarantee h3 { color: #fff; font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
    .guarantee p { color: rgba(255, 255, 255, 0.6); }
    .stats { margin-top: 4rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .stat { text-align: center; }
    .stat-value { font-size: 3rem; font-weight: 900; color: #fff; margin-bottom: 0.5rem; }
    .stat-label { color: rgba(255, 255, 255, 0.6); }

    .final-cta { position: relative; overflow: hidden; padding: 5rem 0; background: linear-gradient(90deg, #f97316, #ef4444); color: #fff; }
    .final-cta-pattern { position: absolute; inset: 0; opacity: 0.1; background-image: radial-gradient(circle at 4px 4px, #fff 2px, transparent 0); background-size: 60px 60px; }
    .final-cta .container { position: relative; }
    .final-cta h2 { font-size: 2.25rem; font-weight: 900; margin-bottom: 1.5rem; }
    .final-cta-lead { font-size: 1.25rem; color: rgba(255, 255, 255, 0.9); margin-bottom: 2rem; }
    .final-cta-buttons { display: flex; flex-direction: column; gap: 1rem; justify-content: center; }
    .final-cta-note { margin-top: 1.5rem; color: rgba(255, 255, 255, 0.7); }
    .final-cta-note strong { color: #fff; }

    .site-footer { padding: 2rem 0; background: #0f172a; }
    .footer-row { display: flex; flex-direction: column; align-items: center; justify-content: space-between; gap: 1rem; }
    .footer-badges { display: flex; align-items: center; gap: 1.5rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.5); }
    .footer-badges a { color: #fff; font-weight: 600; }
    .footer-copy { margin-top: 1.5rem; padding-top: 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); text-align: center; font-size: 0.875rem; color: rgba(255, 255, 255, 0.4); }

    @media (min-width: 640px) {
        .hero { align-items: center; }
        .hero-bg img { object-position: center; }
        .hero-content { padding-top: 6rem; padding-bottom: 6rem; }
        .hero h1 { font-size: 3.75rem; margin-bottom: 1.5rem; }
        .hero-subtitle { font-size: 1.5rem; margin-bottom: 2rem; }
        .hero-ctas, .final-cta-buttons { flex-direction: row; }
        .header-phone { display: flex; }
        .card-grid.four { grid-template-columns: repeat(2, 1fr); }
        .footer-row { flex-direction: row; }
        .section-heading h2 { font-size: 2.25rem; }
        .form-title, .final-cta h2 { font-size: 3rem; }
        .stat-value { font-size: 3.75rem; }
    }
    @media (min-width: 768px) {
        .card-grid.three { grid-template-columns: repeat(3, 1fr); }
    }
    @media (min-width: 1024px) {
        .hero h1 { font-size: 4.5rem; }
        .card-grid.four { grid-template-columns: repeat(4, 1fr); }
        .form-grid { grid-template-columns: repeat(2, 1fr); }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_scrolled(2_000.0));
    }

    #[test]
    fn rating_renders_as_star_run() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "");
        assert!(TESTIMONIALS.iter().all(|t| stars(t.rating).chars().count() == t.rating));
    }

    #[test]
    fn initials_take_first_char() {
        assert_eq!(initial("Mike R."), "M");
        assert_eq!(initial(""), "");
    }
}
