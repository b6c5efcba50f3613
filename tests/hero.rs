// Browser tests for the hero text cycle, running the real resize listener
// and dwell timeouts with shortened timings.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use hvac_landing::config::HeroTiming;
use hvac_landing::pages::landing::{Hero, HeroProps};
use support::{cleanup, create_mount_point, style_of, wait, wait_until};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const SHOWN: &str = "opacity: 1;";
const HIDDEN: &str = "opacity: 0;";

fn fast_timing(breakpoint_px: f64) -> HeroTiming {
    HeroTiming {
        breakpoint_px,
        shown_ms: 60,
        hidden_ms: 40,
        ..HeroTiming::default()
    }
}

fn mount_hero(timing: HeroTiming) -> (web_sys::Element, yew::AppHandle<Hero>) {
    let mount = create_mount_point();
    let handle =
        yew::Renderer::<Hero>::with_root_and_props(mount.clone(), HeroProps { timing }).render();
    (mount, handle)
}

#[wasm_bindgen_test]
async fn narrow_hero_cycles_text_and_ctas() {
    // Any real window is narrower than this breakpoint.
    let (mount, handle) = mount_hero(fast_timing(1e6));
    wait(Duration::ZERO).await;
    assert!(style_of(&mount, ".hero-text").contains(SHOWN));
    assert!(style_of(&mount, ".hero-ctas").contains("translateY(0px)"));

    let hid = wait_until(Duration::from_millis(1_000), || {
        style_of(&mount, ".hero-text").contains(HIDDEN)
    })
    .await;
    assert!(hid, "text never hid");
    assert!(style_of(&mount, ".hero-trust").contains(HIDDEN));
    assert!(style_of(&mount, ".hero-ctas").contains("translateY(270px)"));

    let shown = wait_until(Duration::from_millis(1_000), || {
        style_of(&mount, ".hero-text").contains(SHOWN)
    })
    .await;
    assert!(shown, "text never came back");
    assert!(style_of(&mount, ".hero-ctas").contains("translateY(0px)"));

    // Second lap proves the dwell is re-armed on every phase entry.
    let hid_again = wait_until(Duration::from_millis(1_000), || {
        style_of(&mount, ".hero-text").contains(HIDDEN)
    })
    .await;
    assert!(hid_again, "cycle stopped after one lap");

    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn wide_hero_keeps_text_visible() {
    let (mount, handle) = mount_hero(fast_timing(0.0));
    for _ in 0..10 {
        wait(Duration::from_millis(30)).await;
        assert!(style_of(&mount, ".hero-text").contains(SHOWN));
        assert!(style_of(&mount, ".hero-ctas").contains("translateY(0px)"));
    }
    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unmounted_hero_stops_rendering() {
    let (mount, handle) = mount_hero(fast_timing(1e6));
    wait(Duration::from_millis(20)).await;
    assert!(mount.query_selector(".hero").unwrap().is_some());

    handle.destroy();
    wait(Duration::ZERO).await;
    assert!(mount.query_selector(".hero").unwrap().is_none());

    // Several dwell periods later nothing has been re-rendered into the root.
    wait(Duration::from_millis(300)).await;
    assert_eq!(mount.child_element_count(), 0);
    cleanup(&mount);
}
