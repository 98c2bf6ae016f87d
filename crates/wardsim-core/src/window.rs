//! Window furnishings — shade and curtain, one active state each.
//!
//! Both furnishings are two-state toggles applied through an ownership
//! swap: installing a state drops the previous one. A window starts bare;
//! operating a bare furnishing is a logged no-op.

use log::info;

/// Light-transmission state of the shade.
pub trait ShadeState {
    fn apply(&self);
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy)]
pub struct Transparent;

impl ShadeState for Transparent {
    fn apply(&self) {
        info!("Window shade is now transparent");
    }
    fn name(&self) -> &'static str {
        "transparent"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Opaque;

impl ShadeState for Opaque {
    fn apply(&self) {
        info!("Window shade is now opaque");
    }
    fn name(&self) -> &'static str {
        "opaque"
    }
}

/// Drawn state of the curtain.
pub trait CurtainState {
    fn operate(&self);
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy)]
pub struct OpenCurtain;

impl CurtainState for OpenCurtain {
    fn operate(&self) {
        info!("Curtain is now open");
    }
    fn name(&self) -> &'static str {
        "open"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClosedCurtain;

impl CurtainState for ClosedCurtain {
    fn operate(&self) {
        info!("Curtain is now closed");
    }
    fn name(&self) -> &'static str {
        "closed"
    }
}

/// A ward window with optional shade and curtain fittings.
#[derive(Default)]
pub struct Window {
    shade: Option<Box<dyn ShadeState>>,
    curtain: Option<Box<dyn CurtainState>>,
}

impl Window {
    pub fn new() -> Self {
        info!("Window created");
        Self::default()
    }

    /// Install a shade state, dropping any previous one.
    pub fn set_shade(&mut self, shade: Box<dyn ShadeState>) {
        self.shade = Some(shade);
    }

    /// Install a curtain state, dropping any previous one.
    pub fn set_curtain(&mut self, curtain: Box<dyn CurtainState>) {
        self.curtain = Some(curtain);
    }

    pub fn apply_shade(&self) {
        match &self.shade {
            Some(shade) => shade.apply(),
            None => info!("No shade state set"),
        }
    }

    pub fn operate_curtain(&self) {
        match &self.curtain {
            Some(curtain) => curtain.operate(),
            None => info!("No curtain state set"),
        }
    }

    pub fn shade_name(&self) -> Option<&'static str> {
        self.shade.as_ref().map(|s| s.name())
    }

    pub fn curtain_name(&self) -> Option<&'static str> {
        self.curtain.as_ref().map(|c| c.name())
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("shade", &self.shade_name())
            .field("curtain", &self.curtain_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_bare() {
        let window = Window::new();
        assert_eq!(window.shade_name(), None);
        assert_eq!(window.curtain_name(), None);
        // Bare operations are inert.
        window.apply_shade();
        window.operate_curtain();
    }

    #[test]
    fn test_shade_swap() {
        let mut window = Window::new();
        window.set_shade(Box::new(Transparent));
        assert_eq!(window.shade_name(), Some("transparent"));
        window.set_shade(Box::new(Opaque));
        assert_eq!(window.shade_name(), Some("opaque"));
        window.apply_shade();
    }

    #[test]
    fn test_curtain_swap() {
        let mut window = Window::new();
        window.set_curtain(Box::new(ClosedCurtain));
        assert_eq!(window.curtain_name(), Some("closed"));
        window.set_curtain(Box::new(OpenCurtain));
        assert_eq!(window.curtain_name(), Some("open"));
        window.operate_curtain();
    }
}
