//! Floating chat panel settings.

use ayursutra_common::{PanelPlacement, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub initial_x: f64,
    pub initial_y: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial_x: 20.0,
            initial_y: 100.0,
        }
    }
}

impl PanelConfig {
    /// Placement for a freshly mounted panel, not yet dragged.
    ///
    /// For graphical front-ends that host the floating panel; the terminal
    /// binary has no panel and never calls this.
    pub fn placement(&self) -> PanelPlacement {
        PanelPlacement::new(Point::new(self.initial_x, self.initial_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_starts_at_configured_corner() {
        let panel = PanelConfig {
            initial_x: 40.0,
            initial_y: 60.0,
        };
        let placement = panel.placement();
        assert_eq!(placement.position(), Point::new(40.0, 60.0));
        assert!(!placement.is_dragging());
    }
}
