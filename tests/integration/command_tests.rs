//! Command dispatch: each LightCommand lands on exactly one operation.

use crate::mock_hw::{MockScreen, MockStrip};

use lightwidget::app::commands::LightCommand;
use lightwidget::app::light::LightWidget;
use lightwidget::config::LightConfig;

fn make_light() -> LightWidget<MockStrip, MockScreen> {
    let mut light = LightWidget::with_mirror(&LightConfig::default(), MockScreen::new());
    light.init(Ok(MockStrip::new()));
    light
}

#[test]
fn on_off_toggle() {
    let mut light = make_light();
    light.handle_command(LightCommand::On);
    assert!(light.is_on());
    light.handle_command(LightCommand::On);
    light.handle_command(LightCommand::Off);
    assert!(!light.is_on());
    light.handle_command(LightCommand::Toggle);
    assert!(light.is_on());
    assert_eq!(light.sink().unwrap().renders(), 3);
}

#[test]
fn level_and_colour() {
    let mut light = make_light();
    light.handle_command(LightCommand::SetLevel(12));
    light.handle_command(LightCommand::SetColor {
        hue: 99,
        saturation: 150,
    });
    assert_eq!(light.brightness(), 12);
    assert_eq!((light.hue(), light.saturation()), (99, 150));
    assert_eq!(light.sink().unwrap().renders(), 2);
}

#[test]
fn saturated_level_from_wide_input() {
    let mut light = make_light();
    light.handle_command(LightCommand::level_from_u16(1000));
    assert_eq!(light.brightness(), 255);
    assert_eq!(light.sink().unwrap().renders(), 0, "255 is already the level");
}

#[test]
fn bind_virtual_led_command() {
    let mut light = make_light();
    light.handle_command(LightCommand::BindVirtualLed(Some(4)));
    assert_eq!(light.virtual_led(), Some(4));
    assert_eq!(light.mirror().last(), Some((4, false)));
}
