use stellate_star::{FieldKind, NumericRange, ParamField, ParamValue, Rgb, StarParameters};

/// Color channel edited by one slider row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Channels are edited in whole 8-bit steps.
    pub const RANGE: NumericRange = NumericRange::new(0.0, 255.0, 1.0);

    fn read(self, c: Rgb) -> f32 {
        let v = match self {
            Channel::Red => c.r,
            Channel::Green => c.g,
            Channel::Blue => c.b,
        };
        (v * 255.0).round()
    }

    fn write(self, mut c: Rgb, v: f32) -> Rgb {
        let v = (v / 255.0).clamp(0.0, 1.0);
        match self {
            Channel::Red => c.r = v,
            Channel::Green => c.g = v,
            Channel::Blue => c.b = v,
        }
        c
    }
}

/// One line of the control panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Row {
    /// A star field other than color.
    Field(ParamField),
    Channel(Channel),
    Rotate,
    RotationSpeed,
}

/// Control drawn for a row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RowKind {
    Slider(NumericRange),
    Toggle,
}

pub const ROTATION_SPEED_RANGE: NumericRange = NumericRange::new(1.0, 10.0, 1.0);

impl Row {
    /// Panel rows in display order: the star schema with color expanded to
    /// its channels, then the animation controls.
    pub fn all() -> Vec<Row> {
        let mut rows = Vec::new();
        for field in ParamField::ALL {
            match field {
                ParamField::Color => rows.extend(Channel::ALL.map(Row::Channel)),
                other => rows.push(Row::Field(other)),
            }
        }
        rows.push(Row::Rotate);
        rows.push(Row::RotationSpeed);
        rows
    }

    pub fn kind(self) -> RowKind {
        match self {
            Row::Field(field) => match field.kind() {
                FieldKind::Integer(r) | FieldKind::Real(r) => RowKind::Slider(r),
                FieldKind::Toggle | FieldKind::Color => RowKind::Toggle,
            },
            Row::Channel(_) => RowKind::Slider(Channel::RANGE),
            Row::Rotate => RowKind::Toggle,
            Row::RotationSpeed => RowKind::Slider(ROTATION_SPEED_RANGE),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Row::Field(field) => field.name(),
            Row::Channel(Channel::Red) => "color.r",
            Row::Channel(Channel::Green) => "color.g",
            Row::Channel(Channel::Blue) => "color.b",
            Row::Rotate => "rotate",
            Row::RotationSpeed => "rotationSpeed",
        }
    }

    /// Slider reading for the row, `None` for toggles.
    pub fn number(self, values: &PanelValues) -> Option<f32> {
        match self {
            Row::Field(field) => values.params.get(field).as_f32(),
            Row::Channel(ch) => Some(ch.read(values.params.color)),
            Row::RotationSpeed => Some(values.rotation_speed),
            Row::Rotate => None,
        }
    }

    /// Toggle state for the row, `None` for sliders.
    pub fn flag(self, values: &PanelValues) -> Option<bool> {
        match self {
            Row::Field(ParamField::Wireframe) => Some(values.params.wireframe),
            Row::Rotate => Some(values.rotate),
            _ => None,
        }
    }

    /// Change that sets this slider row to `v`.
    pub fn with_number(self, v: f32, values: &PanelValues) -> Option<PanelChange> {
        match self {
            Row::Field(field) => ParamValue::from_numeric(field, v).map(PanelChange::Param),
            Row::Channel(ch) => Some(PanelChange::Param(ParamValue::Color(
                ch.write(values.params.color, v),
            ))),
            Row::RotationSpeed => Some(PanelChange::RotationSpeed(v)),
            Row::Rotate => None,
        }
    }

    /// Change that flips this toggle row.
    pub fn flipped(self, values: &PanelValues) -> Option<PanelChange> {
        match self {
            Row::Field(ParamField::Wireframe) => Some(PanelChange::Param(ParamValue::Wireframe(
                !values.params.wireframe,
            ))),
            Row::Rotate => Some(PanelChange::Rotate(!values.rotate)),
            _ => None,
        }
    }

    /// Current value as shown in the title bar.
    pub fn display(self, values: &PanelValues) -> String {
        match self {
            Row::Field(field) => values.params.get(field).to_string(),
            Row::Channel(ch) => format!("{}", ch.read(values.params.color) as u32),
            Row::Rotate => (if values.rotate { "on" } else { "off" }).to_string(),
            Row::RotationSpeed => format!("{}", values.rotation_speed),
        }
    }
}

/// Snapshot of everything the panel displays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelValues {
    pub params: StarParameters,
    pub rotate: bool,
    pub rotation_speed: f32,
}

/// Edit requested by the panel. Star edits go through `Star::apply`; the
/// rest is studio state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PanelChange {
    Param(ParamValue),
    Rotate(bool),
    RotationSpeed(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> PanelValues {
        PanelValues {
            params: StarParameters {
                point_count: 5,
                size: 4.0,
                color: Rgb::from_hex(0x336699),
                ..Default::default()
            },
            rotate: true,
            rotation_speed: 2.0,
        }
    }

    #[test]
    fn rows_expand_color_into_channels() {
        let rows = Row::all();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], Row::Field(ParamField::Wireframe));
        assert!(rows.contains(&Row::Channel(Channel::Green)));
        assert!(!rows.contains(&Row::Field(ParamField::Color)));
        assert_eq!(rows[rows.len() - 1], Row::RotationSpeed);
    }

    #[test]
    fn kinds_follow_schema() {
        assert_eq!(Row::Field(ParamField::Wireframe).kind(), RowKind::Toggle);
        assert_eq!(
            Row::Field(ParamField::PointCount).kind(),
            RowKind::Slider(NumericRange::new(3.0, 100.0, 1.0))
        );
        assert_eq!(Row::RotationSpeed.kind(), RowKind::Slider(ROTATION_SPEED_RANGE));
    }

    #[test]
    fn channel_rows_read_and_write_8_bit() {
        let v = values();
        let green = Row::Channel(Channel::Green);
        assert_eq!(green.number(&v), Some(102.0));

        let Some(PanelChange::Param(ParamValue::Color(c))) = green.with_number(255.0, &v) else {
            panic!("expected a color change");
        };
        assert_eq!(c.to_hex(), 0x33ff99);
    }

    #[test]
    fn toggles_flip_their_own_flag() {
        let v = values();
        assert_eq!(
            Row::Field(ParamField::Wireframe).flipped(&v),
            Some(PanelChange::Param(ParamValue::Wireframe(true)))
        );
        assert_eq!(Row::Rotate.flipped(&v), Some(PanelChange::Rotate(false)));
        assert_eq!(Row::RotationSpeed.flipped(&v), None);
    }

    #[test]
    fn display_strings() {
        let v = values();
        assert_eq!(Row::Field(ParamField::Size).display(&v), "4.0");
        assert_eq!(Row::Channel(Channel::Red).display(&v), "51");
        assert_eq!(Row::Rotate.display(&v), "on");
        assert_eq!(Row::RotationSpeed.display(&v), "2");
    }
}
