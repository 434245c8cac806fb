//! 7H tactical config menu flows: entering, saving slots, returning.

use torchui::adapters::memory_store::MemoryStorage;
use torchui::app::service::LightService;
use torchui::config::LightConfig;
use torchui::fsm::StateId;
use torchui::fsm::event::{Event, EventResult};
use torchui::fsm::tactical::MomentaryOutput;

use super::mock_hw::MockLight;

fn start(config: LightConfig) -> (LightService, MockLight) {
    let mut svc = LightService::new(config).unwrap();
    svc.boot(&MemoryStorage::new());
    let mut light = MockLight::new();
    svc.start(StateId::Tactical, &mut light);
    light.clear();
    (svc, light)
}

fn enter_menu(svc: &mut LightService, light: &mut MockLight) {
    svc.handle_event(Event::click_hold(7), 0, light);
    svc.handle_event(Event::click_hold_release(7), 0, light);
}

fn enter_values(svc: &mut LightService, light: &mut MockLight, values: &[u8]) {
    for &v in values {
        let r = svc.handle_event(Event::clicks(v), 0, light);
        assert_eq!(r, EventResult::Handled);
    }
}

#[test]
fn seven_hold_pushes_menu_over_tactical() {
    let (mut svc, mut light) = start(LightConfig::default());
    svc.handle_event(Event::click_hold(7), 0, &mut light);
    assert_eq!(svc.current_state(), Some(StateId::TacticalConfig));
    assert_eq!(svc.stack().depth(), 2);
    assert!(svc.stack().contains(StateId::Tactical));
    assert_eq!(light.menu, vec![Event::Enter]);
}

#[test]
fn single_channel_menu_has_three_steps() {
    let (mut svc, mut light) = start(LightConfig::default());
    enter_menu(&mut svc, &mut light);
    enter_values(&mut svc, &mut light, &[100, 40]);
    assert_eq!(svc.current_state(), Some(StateId::TacticalConfig));
    enter_values(&mut svc, &mut light, &[153]);
    assert_eq!(svc.current_state(), Some(StateId::Tactical));
    assert_eq!(svc.context().slots.as_bytes(), &[100, 40, 153]);
    assert!(svc.context().slots_dirty());
}

#[test]
fn new_slots_take_effect_after_menu() {
    let (mut svc, mut light) = start(LightConfig::default());
    enter_menu(&mut svc, &mut light);
    enter_values(&mut svc, &mut light, &[100, 40, 153]);
    light.clear();

    svc.handle_event(Event::click_hold(1), 0, &mut light);
    assert_eq!(
        light.last_momentary().unwrap().output,
        MomentaryOutput::Steady { level: 100 }
    );
    svc.handle_event(Event::click_hold(3), 0, &mut light);
    assert_eq!(
        light.last_momentary().unwrap().output,
        MomentaryOutput::Strobe { index: 2 }
    );
}

#[test]
fn multi_channel_menu_has_six_steps() {
    let config = LightConfig {
        num_channel_modes: 3,
        ..LightConfig::default()
    };
    let (mut svc, mut light) = start(config);
    enter_menu(&mut svc, &mut light);
    enter_values(&mut svc, &mut light, &[90, 20, 151, 2, 3]);
    assert_eq!(svc.current_state(), Some(StateId::TacticalConfig));
    enter_values(&mut svc, &mut light, &[1]);
    assert_eq!(svc.current_state(), Some(StateId::Tactical));
    assert_eq!(svc.context().slots.as_bytes(), &[90, 20, 151, 2, 3, 1]);
}

#[test]
fn out_of_range_channel_keeps_previous_value() {
    let config = LightConfig {
        num_channel_modes: 2,
        tactical_defaults: Some([120, 30, 152, 1, 0, 2]),
        ..LightConfig::default()
    };
    let (mut svc, mut light) = start(config);
    enter_menu(&mut svc, &mut light);
    enter_values(&mut svc, &mut light, &[120, 30, 152, 3, 9, 2]);
    assert_eq!(svc.context().slots.as_bytes(), &[120, 30, 152, 1, 0, 2]);
}

#[test]
fn ticks_during_menu_fall_through_to_lockout() {
    let (mut svc, mut light) = start(LightConfig::default());
    enter_menu(&mut svc, &mut light);
    light.clear();
    let r = svc.handle_event(Event::Tick, 0, &mut light);
    assert_eq!(r, EventResult::Handled);
    assert_eq!(light.menu, vec![Event::Tick]);
    assert_eq!(light.lockout, vec![Event::Tick]);
}

#[test]
fn suspended_tactical_only_sees_ticks() {
    let (mut svc, mut light) = start(LightConfig::default());
    enter_menu(&mut svc, &mut light);
    light.menu_ignores_buttons = true;
    light.clear();

    svc.handle_event(Event::click_press(1), 0, &mut light);
    svc.handle_event(Event::click_hold(1), 0, &mut light);
    assert!(light.momentary.is_empty());
    assert!(!svc.stack().tactical().is_momentary());

    svc.handle_event(Event::clicks(6), 0, &mut light);
    assert_eq!(svc.current_state(), Some(StateId::TacticalConfig));
    assert_eq!(svc.stack().depth(), 2);
    assert!(light.off.is_empty());
    assert_eq!(light.blinks(), 0);

    svc.handle_event(Event::Tick, 0, &mut light);
    svc.handle_event(Event::SleepTick, 0, &mut light);
    assert_eq!(light.lockout, vec![Event::Tick, Event::SleepTick]);
}

#[test]
fn menu_return_resumes_idle() {
    let (mut svc, mut light) = start(LightConfig::default());
    enter_menu(&mut svc, &mut light);
    enter_values(&mut svc, &mut light, &[1, 2]);
    light.clear();
    enter_values(&mut svc, &mut light, &[3]);
    assert_eq!(light.menu.last(), Some(&Event::Leave));
    assert_eq!(light.last_level(), None);
    assert!(!svc.stack().tactical().is_momentary());
    assert_eq!(light.blinks(), 0);
}
