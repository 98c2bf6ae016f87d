//! Bed light strip — swappable lighting behavior plus emergency fan-out.
//!
//! The strip holds exactly one behavior at a time. Swapping in a new one
//! drops the old one on the spot; every subsequent call goes to the new
//! behavior. Emergency transitions notify subscribed listeners in
//! registration order, synchronously.

use crate::observer::{Listeners, SubscriptionId};
use log::{info, warn};
use wardsim_logic::lighting::{self, LightColor};

/// One lighting mode of the strip. The strip owns its active behavior
/// exclusively and swaps it wholesale.
pub trait LightBehavior {
    fn activate(&mut self);
    fn deactivate(&mut self);
    fn set_brightness(&mut self, intensity: f32);
    fn set_color(&mut self, color: LightColor);
    fn brightness(&self) -> f32;
    fn color(&self) -> LightColor;
    fn is_active(&self) -> bool;
    fn is_emergency(&self) -> bool;
    fn mode_name(&self) -> &'static str;
}

/// Day-to-day ward lighting: adjustable brightness and color.
#[derive(Debug, Clone)]
pub struct NormalLight {
    brightness: f32,
    color: LightColor,
    active: bool,
}

impl Default for NormalLight {
    fn default() -> Self {
        Self {
            brightness: 0.5,
            color: LightColor::WHITE,
            active: false,
        }
    }
}

impl LightBehavior for NormalLight {
    fn activate(&mut self) {
        self.active = true;
        info!("Normal lights activated");
    }

    fn deactivate(&mut self) {
        self.active = false;
        info!("Normal lights deactivated - gentle glow mode");
    }

    fn set_brightness(&mut self, intensity: f32) {
        self.brightness = lighting::clamp_brightness(intensity);
        info!("Brightness set to: {:.2}", self.brightness);
    }

    fn set_color(&mut self, color: LightColor) {
        self.color = color;
        info!(
            "Color set to RGB({},{},{})",
            color.red, color.green, color.blue
        );
    }

    fn brightness(&self) -> f32 {
        self.brightness
    }

    fn color(&self) -> LightColor {
        self.color
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_emergency(&self) -> bool {
        false
    }

    fn mode_name(&self) -> &'static str {
        "Normal"
    }
}

/// Emergency lighting: red, blinking, brightness and color locked.
#[derive(Debug, Clone, Default)]
pub struct EmergencyLight {
    active: bool,
    blinking: bool,
}

impl LightBehavior for EmergencyLight {
    fn activate(&mut self) {
        self.active = true;
        self.blinking = true;
        warn!("EMERGENCY LIGHTS ACTIVATED - red blinking");
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.blinking = false;
        info!("Emergency lights deactivated");
    }

    fn set_brightness(&mut self, _intensity: f32) {
        info!("Emergency mode - brightness locked to maximum");
    }

    fn set_color(&mut self, _color: LightColor) {
        info!("Emergency mode - color locked to red");
    }

    fn brightness(&self) -> f32 {
        1.0
    }

    fn color(&self) -> LightColor {
        LightColor::RED
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_emergency(&self) -> bool {
        true
    }

    fn mode_name(&self) -> &'static str {
        "Emergency"
    }
}

/// Notified on emergency transitions of one strip.
pub trait EmergencyListener {
    fn emergency_activated(&mut self);
    fn emergency_cleared(&mut self);
}

/// The light strip mounted on a bed frame.
pub struct LightStrip {
    behavior: Box<dyn LightBehavior>,
    listeners: Listeners<dyn EmergencyListener>,
}

impl LightStrip {
    pub fn new() -> Self {
        Self {
            behavior: Box::new(NormalLight::default()),
            listeners: Listeners::new(),
        }
    }

    /// Replace the active behavior. The previous one is dropped; the new
    /// one takes effect for every subsequent call.
    pub fn set_behavior(&mut self, behavior: Box<dyn LightBehavior>) {
        self.behavior = behavior;
    }

    pub fn activate(&mut self) {
        self.behavior.activate();
    }

    pub fn deactivate(&mut self) {
        self.behavior.deactivate();
    }

    pub fn set_brightness(&mut self, intensity: f32) {
        self.behavior.set_brightness(intensity);
    }

    pub fn set_color(&mut self, color: LightColor) {
        self.behavior.set_color(color);
    }

    /// Install fresh emergency lighting, switch it on, and notify
    /// listeners. Always swaps, even when already in emergency mode.
    pub fn activate_emergency_mode(&mut self) {
        self.set_behavior(Box::new(EmergencyLight::default()));
        self.activate();
        self.listeners.notify(|l| l.emergency_activated());
    }

    /// Swap back to normal lighting and notify listeners.
    pub fn deactivate_emergency_mode(&mut self) {
        self.set_behavior(Box::new(NormalLight::default()));
        self.listeners.notify(|l| l.emergency_cleared());
    }

    pub fn is_emergency_mode(&self) -> bool {
        self.behavior.is_emergency()
    }

    pub fn is_active(&self) -> bool {
        self.behavior.is_active()
    }

    pub fn brightness(&self) -> f32 {
        self.behavior.brightness()
    }

    pub fn color(&self) -> LightColor {
        self.behavior.color()
    }

    pub fn mode_name(&self) -> &'static str {
        self.behavior.mode_name()
    }

    pub fn subscribe(&mut self, listener: Box<dyn EmergencyListener>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl Default for LightStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LightStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightStrip")
            .field("mode", &self.behavior.mode_name())
            .field("active", &self.behavior.is_active())
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        events: Rc<RefCell<Vec<&'static str>>>,
        tag: &'static str,
    }

    impl EmergencyListener for Recorder {
        fn emergency_activated(&mut self) {
            self.events.borrow_mut().push(self.tag);
        }
        fn emergency_cleared(&mut self) {
            self.events.borrow_mut().push("cleared");
        }
    }

    #[test]
    fn test_starts_in_normal_mode() {
        let strip = LightStrip::new();
        assert!(!strip.is_emergency_mode());
        assert_eq!(strip.mode_name(), "Normal");
        assert_eq!(strip.brightness(), 0.5);
    }

    #[test]
    fn test_emergency_until_explicitly_cleared() {
        let mut strip = LightStrip::new();
        strip.activate_emergency_mode();
        assert!(strip.is_emergency_mode());
        assert!(strip.is_active());

        // Locked controls: requests are refused, state unchanged.
        strip.set_brightness(0.1);
        strip.set_color(LightColor::WHITE);
        assert_eq!(strip.brightness(), 1.0);
        assert_eq!(strip.color(), LightColor::RED);
        assert!(strip.is_emergency_mode());

        strip.deactivate_emergency_mode();
        assert!(!strip.is_emergency_mode());
        assert_eq!(strip.mode_name(), "Normal");
    }

    #[test]
    fn test_brightness_clamped_in_normal_mode() {
        let mut strip = LightStrip::new();
        strip.set_brightness(2.5);
        assert_eq!(strip.brightness(), 1.0);
        strip.set_brightness(-0.5);
        assert_eq!(strip.brightness(), 0.0);
    }

    #[test]
    fn test_listeners_notified_in_registration_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut strip = LightStrip::new();
        strip.subscribe(Box::new(Recorder {
            events: events.clone(),
            tag: "first",
        }));
        strip.subscribe(Box::new(Recorder {
            events: events.clone(),
            tag: "second",
        }));

        strip.activate_emergency_mode();
        assert_eq!(*events.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribed_listener_hears_nothing() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut strip = LightStrip::new();
        let id = strip.subscribe(Box::new(Recorder {
            events: events.clone(),
            tag: "gone",
        }));
        assert!(strip.unsubscribe(id));

        strip.activate_emergency_mode();
        strip.deactivate_emergency_mode();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_swap_discards_previous_behavior_state() {
        let mut strip = LightStrip::new();
        strip.set_brightness(0.9);
        strip.activate_emergency_mode();
        strip.deactivate_emergency_mode();
        // Fresh normal behavior, not the 0.9 one from before.
        assert_eq!(strip.brightness(), 0.5);
    }
}
