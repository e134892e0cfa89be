//! Integration tests for the LightWidget → PixelSink render pipeline.
//!
//! Render counts come from the mock strip: every render ends in exactly
//! one `refresh`, so `renders()` is the render counter.

use crate::mock_hw::{MockStrip, SinkCall};

use lightwidget::app::light::LightWidget;
use lightwidget::color::{self, BLACK, Rgb};
use lightwidget::config::LightConfig;
use lightwidget::error::{Error, SinkError};

fn make_light() -> LightWidget<MockStrip> {
    let mut light = LightWidget::new(&LightConfig::default());
    light.init(Ok(MockStrip::new()));
    light
}

fn renders(light: &LightWidget<MockStrip>) -> usize {
    light.sink().unwrap().renders()
}

fn last_rgb(light: &LightWidget<MockStrip>) -> Option<Rgb> {
    light.sink().unwrap().last_rgb()
}

// ── Defaults ─────────────────────────────────────────────────

#[test]
fn starts_off_at_full_level_and_white() {
    let light = make_light();
    assert!(!light.is_on());
    assert_eq!(light.brightness(), 255);
    assert_eq!((light.hue(), light.saturation()), (0, 0));
    assert_eq!(renders(&light), 0, "init must not render");
}

// ── Change detection ─────────────────────────────────────────

#[test]
fn set_power_to_current_value_never_renders() {
    let mut light = make_light();
    light.set_power(false);
    assert_eq!(renders(&light), 0);

    light.set_power(true);
    light.set_power(true);
    assert_eq!(renders(&light), 1);
}

#[test]
fn set_brightness_to_current_value_never_renders() {
    let mut light = make_light();
    light.set_brightness(255);
    assert_eq!(renders(&light), 0);

    light.set_brightness(10);
    light.set_brightness(10);
    assert_eq!(renders(&light), 1);
}

#[test]
fn set_color_to_current_value_never_renders() {
    let mut light = make_light();
    light.set_color(0, 0);
    assert_eq!(renders(&light), 0);

    light.set_color(100, 200);
    light.set_color(100, 200);
    assert_eq!(renders(&light), 1);
}

#[test]
fn set_color_changing_one_component_renders_once() {
    let mut light = make_light();
    light.set_color(0, 255);
    assert_eq!(renders(&light), 1);
    light.set_color(50, 255);
    assert_eq!(renders(&light), 2);
    assert_eq!((light.hue(), light.saturation()), (50, 255));
}

#[test]
fn toggle_always_renders_even_back_to_back() {
    let mut light = make_light();
    light.toggle_power();
    assert!(light.is_on());
    light.toggle_power();
    assert!(!light.is_on());
    assert_eq!(renders(&light), 2);
}

// ── Rendered colour ──────────────────────────────────────────

#[test]
fn power_on_renders_white_at_full_level() {
    let mut light = make_light();
    light.set_power(true);
    assert_eq!(last_rgb(&light), Some(Rgb::new(255, 255, 255)));
}

#[test]
fn saturated_red_renders_pure_red() {
    let mut light = make_light();
    light.set_power(true);
    light.set_color(0, 255);
    assert_eq!(last_rgb(&light), Some(Rgb::new(255, 0, 0)));
}

#[test]
fn off_renders_black_whatever_the_colour() {
    let mut light = make_light();
    light.set_power(true);
    light.set_color(170, 200);
    light.set_brightness(90);
    light.set_power(false);
    assert_eq!(last_rgb(&light), Some(BLACK));
    assert_eq!(last_rgb(&light), Some(color::hsv(170, 200, 0)));
}

#[test]
fn changes_while_off_still_render_black() {
    let mut light = make_light();
    light.set_color(85, 255);
    light.set_brightness(30);
    assert_eq!(renders(&light), 2);
    assert_eq!(last_rgb(&light), Some(BLACK));
}

#[test]
fn brightness_query_ignores_power_state() {
    let mut light = make_light();
    light.set_brightness(128);
    light.set_power(false);
    assert_eq!(light.brightness(), 128);
}

#[test]
fn power_cycle_reproduces_previous_colour() {
    let mut light = make_light();
    light.set_power(true);
    light.set_color(140, 180);
    light.set_brightness(77);
    let before = last_rgb(&light);

    light.set_power(false);
    assert_eq!(last_rgb(&light), Some(BLACK));

    light.set_power(true);
    assert_eq!(last_rgb(&light), before);
}

#[test]
fn render_targets_configured_pixel_with_refresh_budget() {
    let config = LightConfig {
        max_leds: 4,
        pixel_index: 2,
        refresh_timeout_ms: 250,
        ..LightConfig::default()
    };
    let mut light = LightWidget::new(&config);
    light.init(Ok(MockStrip::new()));
    light.set_power(true);

    assert_eq!(
        light.sink().unwrap().calls,
        vec![
            SinkCall::SetPixel {
                index: 2,
                r: 255,
                g: 255,
                b: 255
            },
            SinkCall::Refresh { timeout_ms: 250 },
        ]
    );
}

// ── Degraded hardware ────────────────────────────────────────

#[test]
fn unbound_sink_makes_renders_no_ops() {
    let mut light: LightWidget<MockStrip> = LightWidget::new(&LightConfig::default());
    light.init(Err(Error::Sink(SinkError::WriteFailed)));
    assert!(!light.has_sink());

    light.toggle_power();
    light.set_brightness(12);
    light.set_color(1, 2);
    assert!(light.is_on());
    assert_eq!(light.brightness(), 12);
    assert_eq!((light.hue(), light.saturation()), (1, 2));
}

#[test]
fn set_pixel_failure_skips_refresh_but_keeps_state() {
    let mut light = make_light();
    light.sink_mut().unwrap().fail_set_pixel = true;
    light.set_power(true);
    assert!(light.is_on());
    assert_eq!(renders(&light), 0, "refresh is not attempted after set_pixel fails");
}

#[test]
fn refresh_failure_keeps_state() {
    let mut light = make_light();
    light.sink_mut().unwrap().fail_refresh = true;
    light.set_color(43, 255);
    assert_eq!((light.hue(), light.saturation()), (43, 255));
    assert_eq!(renders(&light), 1);
}

#[test]
fn init_rebinds_and_resets() {
    let mut light = make_light();
    light.set_power(true);
    light.set_brightness(3);
    light.init(Ok(MockStrip::new()));
    assert!(!light.is_on());
    assert_eq!(light.brightness(), 255);
    assert_eq!(renders(&light), 0, "fresh sink after re-init");
}
