//! Display surface capability

use crate::sim::OverlayContent;

/// Something that can show and hide the overlay panel
pub trait DisplaySurface {
    /// Replace the panel content and make it visible
    fn show(&mut self, content: &OverlayContent);
    /// Hide the panel
    fn hide(&mut self);
}

/// Surface that records every call (headless runs and tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Every `show`, in call order
    pub shown: Vec<OverlayContent>,
    pub hides: usize,
    pub visible: bool,
}

impl RecordingSurface {
    /// Content currently on screen
    pub fn current(&self) -> Option<&OverlayContent> {
        if self.visible { self.shown.last() } else { None }
    }
}

impl DisplaySurface for RecordingSurface {
    fn show(&mut self, content: &OverlayContent) {
        self.shown.push(content.clone());
        self.visible = true;
    }

    fn hide(&mut self) {
        self.hides += 1;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_tracks_visibility() {
        let mut s = RecordingSurface::default();
        assert!(s.current().is_none());
        s.show(&OverlayContent::None);
        assert_eq!(s.current(), Some(&OverlayContent::None));
        s.hide();
        assert!(s.current().is_none());
        assert_eq!(s.hides, 1);
    }
}
