//! Frame painting
//!
//! The sim knows nothing about the canvas; it hands a `GameState` to
//! [`draw`], which paints through the narrow [`Surface`] trait: background,
//! walls, then the player, in the host theme's colors.

use crate::platform::Theme;
use crate::sim::{GameState, Rect};

/// A 2D drawable target.
pub trait Surface {
    fn fill_rect(&mut self, rect: &Rect, color: &str);
}

/// Paint one frame.
pub fn draw(state: &GameState, theme: &Theme, surface: &mut dyn Surface) {
    surface.fill_rect(
        &Rect::new(0.0, 0.0, state.view.w, state.view.h),
        &theme.background,
    );
    for wall in state.walls.iter() {
        surface.fill_rect(&wall.bounds(), &theme.wall);
    }
    surface.fill_rect(&state.player.bounds(), &theme.player);
}

#[cfg(target_arch = "wasm32")]
mod canvas {
    use web_sys::CanvasRenderingContext2d;

    use super::Surface;
    use crate::sim::Rect;

    /// Surface backed by a 2D canvas context.
    pub struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        pub fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self { ctx }
        }
    }

    impl Surface for CanvasSurface {
        fn fill_rect(&mut self, rect: &Rect, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx
                .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Viewport};
    use crate::tuning::Tuning;

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<(Rect, String)>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, rect: &Rect, color: &str) {
            self.calls.push((*rect, color.to_string()));
        }
    }

    #[test]
    fn test_draw_order_and_colors() {
        let state = GameState::new(Tuning::default(), Viewport::new(400.0, 800.0));
        let theme = Theme::default();
        let mut surface = RecordingSurface::default();

        draw(&state, &theme, &mut surface);

        assert_eq!(surface.calls.len(), state.walls.len() + 2);

        // Background first, covering the whole viewport
        let (bg, bg_color) = &surface.calls[0];
        assert_eq!(*bg, Rect::new(0.0, 0.0, 400.0, 800.0));
        assert_eq!(bg_color, "#ffffff");

        // Walls in field order
        for (call, wall) in surface.calls[1..].iter().zip(state.walls.iter()) {
            assert_eq!(call.0, wall.bounds());
            assert_eq!(call.1, "#3390ec");
        }

        // Player last, on top of everything
        let (player, player_color) = surface.calls.last().unwrap();
        assert_eq!(*player, state.player.bounds());
        assert_eq!(player_color, "#000000");
    }
}
