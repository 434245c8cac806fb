//! Service lifecycle: boot, start, persistence of tactical slots.

use torchui::adapters::memory_store::MemoryStorage;
use torchui::adapters::preset_store;
use torchui::app::ports::StoragePort;
use torchui::app::service::LightService;
use torchui::config::LightConfig;
use torchui::fsm::StateId;
use torchui::fsm::event::Event;

use super::mock_hw::MockLight;

fn enter_values(svc: &mut LightService, light: &mut MockLight, values: &[u8]) {
    for &v in values {
        svc.handle_event(Event::clicks(v), 0, light);
    }
}

/// 7H into the config menu, then one completed click run per value.
fn configure(svc: &mut LightService, light: &mut MockLight, values: &[u8]) {
    svc.handle_event(Event::click_hold(7), 0, light);
    enter_values(svc, light, values);
}

#[test]
fn start_enters_requested_state() {
    let mut svc = LightService::new(LightConfig::default()).unwrap();
    svc.boot(&MemoryStorage::new());
    let mut light = MockLight::new();
    svc.start(StateId::Off, &mut light);
    assert_eq!(svc.current_state(), Some(StateId::Off));
    assert_eq!(light.off, vec![Event::Enter]);
}

#[test]
fn events_are_counted() {
    let mut svc = LightService::new(LightConfig::default()).unwrap();
    let mut light = MockLight::new();
    svc.start(StateId::Tactical, &mut light);
    svc.handle_event(Event::Tick, 0, &mut light);
    svc.handle_event(Event::clicks(3), 0, &mut light);
    assert_eq!(svc.events_handled(), 2);
}

#[test]
fn flush_waits_for_menu_to_finish() {
    let mut store = MemoryStorage::new();
    let mut svc = LightService::new(LightConfig::default()).unwrap();
    svc.boot(&store);
    let mut light = MockLight::new();
    svc.start(StateId::Tactical, &mut light);

    configure(&mut svc, &mut light, &[80]);
    assert!(svc.context().slots_dirty());
    assert_eq!(svc.flush(&mut store), Ok(false));
    assert!(store.is_empty());

    enter_values(&mut svc, &mut light, &[25, 155]);
    assert_eq!(svc.flush(&mut store), Ok(true));
    assert!(!svc.context().slots_dirty());
    assert_eq!(svc.flush(&mut store), Ok(false));
}

#[test]
fn committed_slots_survive_reboot() {
    let mut store = MemoryStorage::new();
    {
        let mut svc = LightService::new(LightConfig::default()).unwrap();
        svc.boot(&store);
        let mut light = MockLight::new();
        svc.start(StateId::Tactical, &mut light);
        configure(&mut svc, &mut light, &[80, 25, 155]);
        svc.flush(&mut store).unwrap();
    }

    let mut svc = LightService::new(LightConfig::default()).unwrap();
    svc.boot(&store);
    assert_eq!(svc.context().slots.as_bytes(), &[80, 25, 155]);
}

#[test]
fn corrupted_block_boots_with_factory_slots() {
    let mut store = MemoryStorage::new();
    store.write("torchui", "tactical", &[6, 1]).unwrap();
    let mut svc = LightService::new(LightConfig::default()).unwrap();
    svc.boot(&store);
    assert_eq!(svc.context().slots.as_bytes(), &[120, 30, 152]);
}

#[test]
fn reset_slots_returns_to_factory_on_next_boot() {
    let config = LightConfig {
        police_color_strobe: true,
        ..LightConfig::default()
    };
    let mut store = MemoryStorage::new();
    let mut svc = LightService::new(config.clone()).unwrap();
    svc.boot(&store);
    let mut light = MockLight::new();
    svc.start(StateId::Tactical, &mut light);
    configure(&mut svc, &mut light, &[1, 2, 3]);
    svc.flush(&mut store).unwrap();

    preset_store::reset_slots(&mut store).unwrap();
    let mut svc = LightService::new(config).unwrap();
    svc.boot(&store);
    assert_eq!(svc.context().slots.as_bytes(), &[120, 30, 153]);
}
