//! Parameter control panel.
//!
//! A column of sliders and toggles drawn into the overlay `DrawList`. The
//! panel never owns star state: it reads a [`PanelValues`] snapshot and
//! returns [`PanelChange`]s for the app to apply.
//!
//! Mouse: press on a slider row to set it and drag to scrub; press on a
//! toggle row to flip it. Keyboard: Up/Down select, Left/Right step the
//! selected row, Space/Enter flip a toggle.

mod row;

pub use row::{Channel, PanelChange, PanelValues, Row, RowKind};

use stellate_engine::coords::{Rect, Vec2};
use stellate_engine::input::{ButtonState, InputEvent, Key, KeyState, MouseButton};
use stellate_engine::paint::Color;
use stellate_engine::scene::{Border, DrawList};

const PAD: f32 = 12.0;
const ROW_HEIGHT: f32 = 28.0;
const ROW_GAP: f32 = 4.0;
const THUMB_RADIUS: f32 = 8.0;
const TRACK_HEIGHT: f32 = 4.0;
const TOGGLE_SIZE: Vec2 = Vec2::new(44.0, 22.0);
const SWATCH_HEIGHT: f32 = 18.0;

/// Panel colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelStyle {
    pub background: Color,
    pub border: Color,
    pub selection: Color,
    pub hover: Color,
    pub track: Color,
    pub fill: Color,
    pub thumb: Color,
    pub thumb_border: Color,
    pub toggle_on: Color,
    pub toggle_off: Color,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            background: Color::from_srgb(0.07, 0.09, 0.12, 0.88),
            border: Color::from_srgb(0.2, 0.25, 0.35, 1.0),
            selection: Color::from_srgb(0.16, 0.21, 0.31, 1.0),
            hover: Color::from_srgb(0.12, 0.15, 0.21, 1.0),
            track: Color::from_srgb(0.15, 0.2, 0.3, 1.0),
            fill: Color::from_srgb(0.2, 0.6, 1.0, 1.0),
            thumb: Color::from_srgb(1.0, 1.0, 1.0, 1.0),
            thumb_border: Color::from_srgb(0.4, 0.6, 0.9, 1.0),
            toggle_on: Color::from_srgb(0.1, 0.7, 0.45, 1.0),
            toggle_off: Color::from_srgb(0.2, 0.25, 0.35, 1.0),
        }
    }
}

pub struct ControlPanel {
    rows: Vec<Row>,
    origin: Vec2,
    width: f32,
    style: PanelStyle,

    selected: usize,
    hovered: Option<usize>,
    /// Slider row being scrubbed with the left button held.
    dragging: Option<usize>,
    pointer: Option<Vec2>,
}

impl ControlPanel {
    pub fn new(origin: Vec2, width: f32) -> Self {
        Self {
            rows: Row::all(),
            origin,
            width,
            style: PanelStyle::default(),
            selected: 0,
            hovered: None,
            dragging: None,
            pointer: None,
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn selected(&self) -> Row {
        self.rows[self.selected]
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    // ── layout ─────────────────────────────────────────────────────────────

    pub fn bounds(&self) -> Rect {
        let n = self.rows.len() as f32;
        let rows_h = n * ROW_HEIGHT + (n - 1.0).max(0.0) * ROW_GAP;
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.width,
            PAD + rows_h + PAD + SWATCH_HEIGHT + PAD,
        )
    }

    pub fn row_rect(&self, i: usize) -> Rect {
        Rect::new(
            self.origin.x + PAD,
            self.origin.y + PAD + i as f32 * (ROW_HEIGHT + ROW_GAP),
            (self.width - 2.0 * PAD).max(0.0),
            ROW_HEIGHT,
        )
    }

    /// Slider track; the thumb center travels its full width.
    pub fn track_rect(&self, i: usize) -> Rect {
        let row = self.row_rect(i);
        let cy = row.center().y;
        Rect::new(
            row.origin.x + THUMB_RADIUS,
            cy - TRACK_HEIGHT * 0.5,
            (row.size.x - 2.0 * THUMB_RADIUS).max(0.0),
            TRACK_HEIGHT,
        )
    }

    fn toggle_rect(&self, i: usize) -> Rect {
        let row = self.row_rect(i);
        Rect::new(
            row.origin.x,
            row.center().y - TOGGLE_SIZE.y * 0.5,
            TOGGLE_SIZE.x,
            TOGGLE_SIZE.y,
        )
    }

    fn swatch_rect(&self) -> Rect {
        let b = self.bounds();
        Rect::new(
            b.origin.x + PAD,
            b.bottom() - PAD - SWATCH_HEIGHT,
            (b.size.x - 2.0 * PAD).max(0.0),
            SWATCH_HEIGHT,
        )
    }

    pub fn row_at(&self, p: Vec2) -> Option<usize> {
        (0..self.rows.len()).find(|&i| self.row_rect(i).contains(p))
    }

    // ── input ──────────────────────────────────────────────────────────────

    /// Feeds one input event. Returns the edit it produced, if any.
    ///
    /// Apply each change before feeding the next event so stepping sees the
    /// updated value.
    pub fn handle_event(&mut self, event: &InputEvent, values: &PanelValues) -> Option<PanelChange> {
        match *event {
            InputEvent::PointerMoved { x, y } => {
                let p = Vec2::from((x, y));
                self.pointer = Some(p);
                self.hovered = self.row_at(p);
                let i = self.dragging?;
                self.slide_to(i, x, values)
            }
            InputEvent::PointerLeft => {
                self.pointer = None;
                self.hovered = None;
                None
            }
            InputEvent::PointerButton { button: MouseButton::Left, state: ButtonState::Pressed } => {
                let i = self.row_at(self.pointer?)?;
                self.selected = i;
                match self.rows[i].kind() {
                    RowKind::Toggle => self.rows[i].flipped(values),
                    RowKind::Slider(_) => {
                        self.dragging = Some(i);
                        let x = self.pointer?.x;
                        self.slide_to(i, x, values)
                    }
                }
            }
            InputEvent::PointerButton { button: MouseButton::Left, state: ButtonState::Released } => {
                self.dragging = None;
                None
            }
            InputEvent::Key { key, state: KeyState::Pressed, .. } => self.on_key(key, values),
            _ => None,
        }
    }

    fn on_key(&mut self, key: Key, values: &PanelValues) -> Option<PanelChange> {
        let n = self.rows.len();
        match key {
            Key::ArrowUp => {
                self.selected = (self.selected + n - 1) % n;
                None
            }
            Key::ArrowDown => {
                self.selected = (self.selected + 1) % n;
                None
            }
            Key::ArrowLeft => self.step(values, -1.0),
            Key::ArrowRight => self.step(values, 1.0),
            Key::Space | Key::Enter => self.selected().flipped(values),
            _ => None,
        }
    }

    /// Moves the selected row one step; on toggles Left turns off and Right
    /// turns on.
    fn step(&self, values: &PanelValues, direction: f32) -> Option<PanelChange> {
        let row = self.selected();
        match row.kind() {
            RowKind::Slider(range) => {
                let current = row.number(values)?;
                let next = range.snap(current + direction * range.step);
                if !changed(current, next) {
                    return None;
                }
                row.with_number(next, values)
            }
            RowKind::Toggle => {
                let want = direction > 0.0;
                if row.flag(values)? == want {
                    return None;
                }
                row.flipped(values)
            }
        }
    }

    fn slide_to(&self, i: usize, x: f32, values: &PanelValues) -> Option<PanelChange> {
        let row = self.rows[i];
        let RowKind::Slider(range) = row.kind() else { return None; };
        let next = range.snap(range.denormalize(self.track_rect(i).fraction_x(x)));
        let current = row.number(values)?;
        if !changed(current, next) {
            return None;
        }
        row.with_number(next, values)
    }

    /// Title-bar summary of the selected row.
    pub fn status(&self, values: &PanelValues) -> String {
        let row = self.selected();
        format!("{}: {}", row.label(), row.display(values))
    }

    // ── paint ──────────────────────────────────────────────────────────────

    pub fn paint(&self, list: &mut DrawList, values: &PanelValues) {
        let s = &self.style;
        list.push_rounded_rect(self.bounds(), 8.0, s.background, Some(Border::new(1.0, s.border)));

        for (i, row) in self.rows.iter().enumerate() {
            let rect = self.row_rect(i);
            if i == self.selected {
                list.push_rounded_rect(rect, 4.0, s.selection, None);
            } else if self.hovered == Some(i) {
                list.push_rounded_rect(rect, 4.0, s.hover, None);
            }

            match row.kind() {
                RowKind::Slider(range) => {
                    let t = row.number(values).map_or(0.0, |v| range.normalize(v));
                    self.paint_slider(list, self.track_rect(i), t, self.fill_for(*row));
                }
                RowKind::Toggle => {
                    let on = row.flag(values).unwrap_or(false);
                    self.paint_toggle(list, self.toggle_rect(i), on);
                }
            }
        }

        list.push_rounded_rect(
            self.swatch_rect(),
            4.0,
            values.params.color.into(),
            Some(Border::new(1.0, s.border)),
        );
    }

    fn fill_for(&self, row: Row) -> Color {
        match row {
            Row::Channel(Channel::Red) => Color::from_hex(0xe04040),
            Row::Channel(Channel::Green) => Color::from_hex(0x40c060),
            Row::Channel(Channel::Blue) => Color::from_hex(0x4070e0),
            _ => self.style.fill,
        }
    }

    fn paint_slider(&self, list: &mut DrawList, track: Rect, t: f32, fill: Color) {
        let s = &self.style;
        let radius = TRACK_HEIGHT * 0.5;
        list.push_rounded_rect(track, radius, s.track, None);

        let thumb_x = track.origin.x + t * track.size.x;
        let filled = Rect::new(track.origin.x, track.origin.y, thumb_x - track.origin.x, track.size.y);
        list.push_rounded_rect(filled, radius, fill, None);

        list.push_circle(
            Vec2::new(thumb_x, track.center().y),
            THUMB_RADIUS,
            s.thumb,
            Some(Border::new(2.0, s.thumb_border)),
        );
    }

    fn paint_toggle(&self, list: &mut DrawList, rect: Rect, on: bool) {
        let s = &self.style;
        let track = if on { s.toggle_on } else { s.toggle_off };
        list.push_rounded_rect(rect, rect.size.y * 0.5, track, None);

        let margin = rect.size.y * 0.13;
        let r = rect.size.y * 0.5 - margin;
        let cx = if on {
            rect.right() - margin - r
        } else {
            rect.origin.x + margin + r
        };
        list.push_circle(Vec2::new(cx, rect.center().y), r, s.thumb, None);
    }
}

fn changed(current: f32, next: f32) -> bool {
    (current - next).abs() > f32::EPSILON * current.abs().max(1.0)
}
