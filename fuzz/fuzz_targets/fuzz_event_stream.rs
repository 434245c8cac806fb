//! Fuzz target: tactical mode under arbitrary event streams
//!
//! The first bytes pick the build (channel count, strobe count, slot
//! values); every following byte is one event.  Checks:
//! - No panics under any byte sequence
//! - The memorized level and channel are never left changed by an event
//! - The state stack never empties
//!
//! cargo fuzz run fuzz_event_stream

#![no_main]

use libfuzzer_sys::fuzz_target;
use torchui::app::ports::{ConfigSaveFn, ModeDelegates, OutputPort};
use torchui::app::service::LightService;
use torchui::config::LightConfig;
use torchui::fsm::StateId;
use torchui::fsm::context::{Transition, UiContext};
use torchui::fsm::event::{ButtonPhase, Event, EventResult};
use torchui::fsm::tactical::MomentaryOutput;

struct NullLight {
    menu_step: u8,
}

impl OutputPort for NullLight {
    fn set_level(&mut self, _level: u8) {}
    fn blink_once(&mut self) {}
    fn cancel_animations(&mut self) {}
}

impl ModeDelegates for NullLight {
    fn momentary(
        &mut self,
        _event: Event,
        _arg: u16,
        _output: MomentaryOutput,
        _ctx: &mut UiContext,
    ) -> EventResult {
        EventResult::Handled
    }

    fn lockout(&mut self, _event: Event, _arg: u16, _ctx: &mut UiContext) -> EventResult {
        EventResult::Handled
    }

    fn off(&mut self, event: Event, _arg: u16, ctx: &mut UiContext) -> EventResult {
        if event == Event::click_hold(1) {
            ctx.request(Transition::Set(StateId::Tactical, 0));
        }
        EventResult::Handled
    }

    fn config_menu(
        &mut self,
        event: Event,
        _arg: u16,
        ctx: &mut UiContext,
        num_steps: u8,
        save: ConfigSaveFn,
    ) -> EventResult {
        match event {
            Event::Enter => self.menu_step = 1,
            Event::Button {
                clicks,
                phase: ButtonPhase::Complete,
            } => {
                save(ctx, self.menu_step, clicks);
                self.menu_step = self.menu_step.saturating_add(1);
                if self.menu_step > num_steps {
                    ctx.request(Transition::Pop);
                }
            }
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }
}

fn decode_event(byte: u8) -> Event {
    let clicks = (byte >> 3) & 0x0f;
    let phase = match byte & 0x07 {
        0 => return Event::Tick,
        1 => ButtonPhase::Press,
        2 => ButtonPhase::Hold,
        3 => ButtonPhase::Release,
        4 => ButtonPhase::HoldRelease,
        5 => ButtonPhase::Complete,
        6 => return Event::SleepTick,
        _ => ButtonPhase::Hold,
    };
    Event::Button { clicks, phase }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (head, events) = data.split_at(8);

    let mut slots = [0u8; 6];
    slots.copy_from_slice(&head[2..8]);
    let config = LightConfig {
        num_channel_modes: 1 + head[0] % 4,
        num_strobe_types: 1 + head[1] % 8,
        tactical_defaults: Some(slots),
        ..LightConfig::default()
    };
    let channel = head[0] % config.num_channel_modes;

    let Ok(mut svc) = LightService::new(config) else {
        return;
    };
    svc.context_mut().device.memorized_level = 42;
    svc.context_mut().device.channel_mode = channel;
    let mut light = NullLight { menu_step: 0 };
    svc.start(StateId::Tactical, &mut light);

    for &byte in events {
        let event = decode_event(byte);
        svc.handle_event(event, 0, &mut light);
        assert_eq!(svc.context().device.memorized_level, 42);
        assert_eq!(svc.context().device.channel_mode, channel);
        assert!(svc.current_state().is_some());
    }
});
