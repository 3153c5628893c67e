use stellate_engine::paint::Color;
use stellate_engine::render::Camera;
use stellate_engine::window::RuntimeConfig;
use stellate_star::StarParameters;
use winit::dpi::LogicalSize;

/// Everything the studio needs at startup.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub runtime: RuntimeConfig,
    /// Initial star; any field the panel does not show keeps this value.
    pub star: StarParameters,
    /// Spin the star about +Z.
    pub rotate: bool,
    /// Radians per second while rotating.
    pub rotation_speed: f32,
    pub clear_color: Color,
    pub camera_distance: f32,
    pub fov_y_degrees: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                title: "stellate studio".to_string(),
                initial_size: LogicalSize::new(1280.0, 720.0),
            },
            star: StarParameters {
                point_count: 5,
                size: 4.0,
                inner_angle_offset: 0.5,
                inner_radius_scale: 0.5,
                wireframe: true,
                ..Default::default()
            },
            rotate: true,
            rotation_speed: 1.0,
            clear_color: Color::from_hex(0x0d1117),
            camera_distance: 10.0,
            fov_y_degrees: 45.0,
        }
    }
}

impl StudioConfig {
    pub fn camera(&self) -> Camera {
        Camera {
            distance: self.camera_distance,
            fov_y: self.fov_y_degrees.to_radians(),
            ..Camera::default()
        }
    }
}
