use stellate_engine::coords::Vec2;
use stellate_engine::core::{App, AppControl, FrameCtx};
use stellate_engine::input::{InputEvent, Key, KeyState};
use stellate_engine::paint::Color;
use stellate_engine::render::{Camera, MeshObject, MeshRenderer, OverlayRenderer};
use stellate_engine::scene::DrawList;
use stellate_star::{ParamValue, Star, StarError};

use crate::config::StudioConfig;
use crate::panel::{ControlPanel, PanelChange, PanelValues};

const PANEL_ORIGIN: Vec2 = Vec2::new(16.0, 16.0);
const PANEL_WIDTH: f32 = 240.0;

/// The studio: one star, its control panel and the renderers.
pub struct StudioApp {
    title: String,
    clear_color: Color,
    camera: Camera,

    star: Star<MeshObject>,
    rotate: bool,
    rotation_speed: f32,

    panel: ControlPanel,
    overlay: DrawList,
    mesh_renderer: MeshRenderer,
    overlay_renderer: OverlayRenderer,
}

impl StudioApp {
    pub fn new(config: StudioConfig) -> Result<Self, StarError> {
        let star = Star::new(config.star, MeshObject::new())?;
        Ok(Self {
            title: config.runtime.title.clone(),
            clear_color: config.clear_color,
            camera: config.camera(),
            star,
            rotate: config.rotate,
            rotation_speed: config.rotation_speed,
            panel: ControlPanel::new(PANEL_ORIGIN, PANEL_WIDTH),
            overlay: DrawList::new(),
            mesh_renderer: MeshRenderer::new(),
            overlay_renderer: OverlayRenderer::new(),
        })
    }

    pub fn star(&self) -> &Star<MeshObject> {
        &self.star
    }

    fn values(&self) -> PanelValues {
        PanelValues {
            params: *self.star.params(),
            rotate: self.rotate,
            rotation_speed: self.rotation_speed,
        }
    }

    /// Applies one edit. Rejected star edits are logged and dropped; the
    /// star keeps its previous state.
    fn apply(&mut self, change: PanelChange) {
        match change {
            PanelChange::Param(value) => {
                if let Err(err) = self.star.apply(value) {
                    log::warn!("rejected {} edit: {err}", value.field());
                }
            }
            PanelChange::Rotate(on) => self.rotate = on,
            PanelChange::RotationSpeed(speed) => self.rotation_speed = speed,
        }
    }

    /// Routes one input event through the shortcuts, then the panel.
    fn handle_event(&mut self, event: &InputEvent) {
        let values = self.values();
        let change = match event {
            InputEvent::Key { key, state: KeyState::Pressed, repeat } => shortcut(*key, *repeat, &values),
            _ => None,
        }
        .or_else(|| self.panel.handle_event(event, &values));

        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Spins the star to `elapsed · speed` while rotation is on; the last
    /// angle holds while it is off.
    fn animate(&mut self, elapsed: f32) {
        if !self.rotate {
            return;
        }
        if let Err(err) = self.star.set_rotation(elapsed * self.rotation_speed) {
            log::warn!("rotation skipped: {err}");
        }
    }

    fn window_title(&self) -> String {
        format!("{} | {}", self.title, self.panel.status(&self.values()))
    }
}

/// Single-key shortcuts on top of the panel's own keys: `W` wireframe,
/// `R` rotation, `+`/`-` point count. Repeats only apply to `+`/`-`.
fn shortcut(key: Key, repeat: bool, values: &PanelValues) -> Option<PanelChange> {
    let n = values.params.point_count;
    match key {
        Key::W if !repeat => Some(PanelChange::Param(ParamValue::Wireframe(!values.params.wireframe))),
        Key::R if !repeat => Some(PanelChange::Rotate(!values.rotate)),
        Key::Equal => Some(PanelChange::Param(ParamValue::PointCount(n.saturating_add(1)))),
        Key::Minus => Some(PanelChange::Param(ParamValue::PointCount(n.saturating_sub(1)))),
        _ => None,
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        for event in &ctx.input_frame.events {
            self.handle_event(event);
        }
        self.animate(ctx.time.elapsed);

        ctx.window.set_title(&self.window_title());

        self.overlay.clear();
        let values = self.values();
        self.panel.paint(&mut self.overlay, &values);

        let view_proj = self.camera.view_projection(ctx.viewport().aspect_ratio());
        let Self { star, mesh_renderer, overlay_renderer, overlay, clear_color, .. } = self;

        ctx.render(*clear_color, |rctx, target| {
            mesh_renderer.render(rctx, target, star.renderable(), view_proj);
            overlay_renderer.render(rctx, target, overlay);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellate_engine::input::{ButtonState, MouseButton};

    fn app() -> StudioApp {
        StudioApp::new(StudioConfig::default()).unwrap()
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    #[test]
    fn starts_with_configured_star() {
        let a = app();
        assert_eq!(a.star().params().point_count, 5);
        assert_eq!(a.star().renderable().positions().len(), 11);
        assert!(a.star().renderable().material().wireframe);
    }

    #[test]
    fn rejected_edit_leaves_star_untouched() {
        let mut a = app();
        let before = *a.star().params();
        a.apply(PanelChange::Param(ParamValue::PointCount(2)));
        assert_eq!(*a.star().params(), before);
    }

    #[test]
    fn keyboard_steps_selected_row() {
        let mut a = app();
        // Row 1 is pointCount.
        a.handle_event(&press(Key::ArrowDown));
        a.handle_event(&press(Key::ArrowRight));
        a.handle_event(&press(Key::ArrowRight));
        assert_eq!(a.star().params().point_count, 7);
        assert_eq!(a.star().renderable().positions().len(), 15);
        assert!(a.window_title().ends_with("pointCount: 7"));
    }

    #[test]
    fn shortcuts_toggle_and_step() {
        let mut a = app();
        a.handle_event(&press(Key::W));
        assert!(!a.star().params().wireframe);
        a.handle_event(&press(Key::R));
        assert!(!a.rotate);
        a.handle_event(&press(Key::Minus));
        a.handle_event(&press(Key::Minus));
        a.handle_event(&press(Key::Minus));
        // 3 is the floor; the last step is rejected.
        assert_eq!(a.star().params().point_count, 3);
    }

    #[test]
    fn held_shortcut_toggles_once() {
        let values = app().values();
        assert_eq!(shortcut(Key::W, true, &values), None);
        assert!(shortcut(Key::Equal, true, &values).is_some());
    }

    #[test]
    fn rotation_follows_elapsed_time_while_on() {
        let mut a = app();
        a.apply(PanelChange::RotationSpeed(3.0));
        a.animate(2.0);
        assert_eq!(a.star().params().rotation, 6.0);
        assert_eq!(a.star().renderable().transform().rotation, 6.0);

        a.apply(PanelChange::Rotate(false));
        a.animate(5.0);
        assert_eq!(a.star().params().rotation, 6.0);
    }

    #[test]
    fn clicking_a_channel_slider_recolors_the_star() {
        let mut a = app();
        let i = a.panel.rows().iter().position(|r| r.label() == "color.r").unwrap();
        let track = a.panel.track_rect(i);
        a.handle_event(&InputEvent::PointerMoved { x: track.origin.x, y: track.center().y });
        a.handle_event(&InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
        });
        assert_eq!(a.star().params().color.to_hex(), 0x00ffff);
        assert_eq!(a.panel.selected().label(), "color.r");
    }
}
