//! Display-variant tests: the on-screen indicator follows power only.

use crate::mock_hw::{MockScreen, MockStrip};

use lightwidget::app::light::LightWidget;
use lightwidget::config::LightConfig;

fn make_display_light() -> LightWidget<MockStrip, MockScreen> {
    let mut light = LightWidget::with_mirror(&LightConfig::default(), MockScreen::new());
    light.init(Ok(MockStrip::new()));
    light
}

#[test]
fn unbound_mirror_receives_nothing() {
    let mut light = make_display_light();
    light.set_power(true);
    light.toggle_power();
    assert!(light.mirror().updates.is_empty());
}

#[test]
fn binding_pushes_current_state_immediately() {
    let mut light = make_display_light();
    light.set_power(true);
    light.bind_virtual_mirror(Some(3));
    assert_eq!(light.mirror().updates, vec![(3, true)]);
    assert_eq!(light.sink().unwrap().renders(), 1, "binding does not render the strip");
}

#[test]
fn binding_while_off_reports_off() {
    let mut light = make_display_light();
    light.bind_virtual_mirror(Some(0));
    assert_eq!(light.mirror().last(), Some((0, false)));
}

#[test]
fn every_render_updates_bound_indicator() {
    let mut light = make_display_light();
    light.bind_virtual_mirror(Some(1));
    light.set_power(true);
    light.set_brightness(40);
    light.toggle_power();
    assert_eq!(
        light.mirror().updates,
        vec![(1, false), (1, true), (1, true), (1, false)]
    );
}

#[test]
fn no_op_setters_leave_indicator_alone() {
    let mut light = make_display_light();
    light.bind_virtual_mirror(Some(1));
    light.set_power(false);
    light.set_color(0, 0);
    assert_eq!(light.mirror().updates.len(), 1);
}

#[test]
fn unbinding_stops_updates() {
    let mut light = make_display_light();
    light.bind_virtual_mirror(Some(2));
    light.bind_virtual_mirror(None);
    light.toggle_power();
    assert_eq!(light.virtual_led(), None);
    assert_eq!(light.mirror().updates, vec![(2, false)]);
}

#[test]
fn mirror_still_updates_without_strip() {
    let mut light: LightWidget<MockStrip, MockScreen> =
        LightWidget::with_mirror(&LightConfig::default(), MockScreen::new());
    light.bind_virtual_mirror(Some(5));
    light.toggle_power();
    assert!(!light.has_sink());
    assert_eq!(light.mirror().last(), Some((5, true)));
}
