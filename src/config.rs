use log::Level;

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("HVAC_FORM_ENDPOINT") {
        Some(url) => url,
        None => "http://localhost:3001/f/dev-leads", // Local relay when running with trunk serve
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("HVAC_FORM_ENDPOINT") {
        Some(url) => url,
        None => "https://formspree.io/f/YOUR_FORM_ID",
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COMPANY_NAME: &str = "Your HVAC Company";
pub const PHONE_DISPLAY: &str = "(123) 456-7890";
pub const PHONE_HREF: &str = "tel:+1234567890";

/// Header switches to its solid style past this many pixels of scroll.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Tuning for the mobile hero text cycle.
///
/// None of these values carry functional meaning; they are presentation
/// constants and every hero can override them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTiming {
    /// Widths strictly below this are treated as narrow.
    pub breakpoint_px: f64,
    pub shown_ms: u32,
    pub hidden_ms: u32,
    /// How far the CTA group slides down while the text is hidden.
    pub cta_offset_px: f64,
    pub transition_secs: f64,
}

impl Default for HeroTiming {
    fn default() -> Self {
        Self {
            breakpoint_px: 640.0,
            shown_ms: 8000,
            hidden_ms: 5000,
            cta_offset_px: 270.0,
            transition_secs: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTiming {
    pub tick_ms: u32,
    /// Number of equal steps the ramp from zero is split into.
    pub steps: u32,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            steps: 40,
        }
    }
}
