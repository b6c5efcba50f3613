// Shared mount/cleanup helpers for browser tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(mount).ok();
}

pub async fn wait(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

pub fn text_of(mount: &web_sys::Element) -> String {
    mount.text_content().unwrap_or_default()
}

/// Polls every 10ms until `check` holds or `timeout` passes.
pub async fn wait_until(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let mut waited = Duration::ZERO;
    while !check() {
        if waited >= timeout {
            return false;
        }
        wait(Duration::from_millis(10)).await;
        waited += Duration::from_millis(10);
    }
    true
}

pub fn style_of(mount: &web_sys::Element, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .and_then(|el| el.get_attribute("style"))
        .unwrap_or_default()
}
