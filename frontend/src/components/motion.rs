use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// Maximum card rotation in degrees, reached at the card edges.
const MAX_TILT_DEG: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<web_sys::DomRect> for Bounds {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilts toward the pointer: the right edge turns rotateY to +10deg,
    /// the top edge turns rotateX to +10deg.
    pub fn from_pointer(client_x: f64, client_y: f64, bounds: Bounds) -> Tilt {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Tilt::default();
        }
        let x = ((client_x - bounds.left) / bounds.width - 0.5).clamp(-0.5, 0.5);
        let y = ((client_y - bounds.top) / bounds.height - 0.5).clamp(-0.5, 0.5);
        Tilt {
            rotate_x: -y * 2.0 * MAX_TILT_DEG,
            rotate_y: x * 2.0 * MAX_TILT_DEG,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Inline style delaying an entrance transition for the `index`-th child.
pub fn stagger(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", index as u32 * step_ms)
}

/// Becomes `true` shortly after mount so CSS entrance transitions run once.
#[hook]
pub fn use_reveal() -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::REVEAL_DELAY_MS, move || {
                    revealed.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };

    #[test]
    fn center_has_no_tilt() {
        assert_eq!(Tilt::from_pointer(200.0, 100.0, CARD), Tilt::default());
    }

    #[test]
    fn corners_reach_max_tilt() {
        let top_left = Tilt::from_pointer(100.0, 50.0, CARD);
        assert_eq!(top_left, Tilt { rotate_x: 10.0, rotate_y: -10.0 });

        let bottom_right = Tilt::from_pointer(300.0, 150.0, CARD);
        assert_eq!(bottom_right, Tilt { rotate_x: -10.0, rotate_y: 10.0 });
    }

    #[test]
    fn outside_pointer_is_clamped() {
        let far = Tilt::from_pointer(1000.0, -500.0, CARD);
        assert_eq!(far, Tilt { rotate_x: 10.0, rotate_y: 10.0 });
    }

    #[test]
    fn zero_sized_bounds_do_not_tilt() {
        let flat = Bounds { width: 0.0, ..CARD };
        assert_eq!(Tilt::from_pointer(150.0, 60.0, flat), Tilt::default());
    }

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger(0, 80), "transition-delay: 0ms;");
        assert_eq!(stagger(3, 80), "transition-delay: 240ms;");
    }
}
