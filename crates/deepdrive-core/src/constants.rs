//! Fixed tables shared by the simulator client, agents and trainers.

use serde::Serialize;

/// Control outputs predicted by the driving networks, in output order.
pub const CONTROL_NAMES: [&str; 6] = [
    "spin",
    "direction",
    "speed",
    "speed_change",
    "steering",
    "throttle",
];

/// Number of network targets.
pub const NUM_TARGETS: usize = CONTROL_NAMES.len();

// Normalization
pub const SPIN_THRESHOLD: f32 = 1.0;
pub const SPEED_NORMALIZATION_FACTOR: f32 = 2000.0;
pub const SPIN_NORMALIZATION_FACTOR: f32 = 10.0;
/// Per-channel mean subtracted from camera frames (BGR).
pub const MEAN_PIXEL: [f32; 3] = [104.0, 117.0, 123.0];

// OS
pub const IS_LINUX: bool = cfg!(target_os = "linux");
pub const IS_MAC: bool = cfg!(target_os = "macos");
pub const IS_UNIX: bool = cfg!(unix);
pub const IS_WINDOWS: bool = cfg!(windows);

/// Agent identifiers accepted by the agent launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgentId {
    Dagger,
    DaggerMobilenetV2,
    BootstrappedPpo2,
}

impl AgentId {
    pub const ALL: [Self; 3] = [Self::Dagger, Self::DaggerMobilenetV2, Self::BootstrappedPpo2];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dagger => "dagger",
            Self::DaggerMobilenetV2 => "dagger_mobilenet_v2",
            Self::BootstrappedPpo2 => "bootstrapped_ppo2",
        }
    }

    /// Look an agent up by its string identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|agent| agent.as_str() == name)
    }
}

/// Camera mounted on the ego vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraConfig {
    pub name: &'static str,
    pub field_of_view: u32,
    pub capture_width: u32,
    pub capture_height: u32,
    pub relative_position: [f32; 3],
    pub relative_rotation: [f32; 3],
}

/// Forward-facing camera used when the caller does not configure one.
pub const DEFAULT_CAM: CameraConfig = CameraConfig {
    name: "forward cam 227x227 60 FOV",
    field_of_view: 60,
    capture_width: 227,
    capture_height: 227,
    relative_position: [150.0, 1.0, 200.0],
    relative_rotation: [0.0, 0.0, 0.0],
};

pub const DEFAULT_FPS: u32 = 8;

// PPO
pub const SIMPLE_PPO: bool = false;
pub const PPO_RESUME_PATH: Option<&str> = None;

// API
pub const API_PORT: u16 = 5557;
pub const API_TIMEOUT_MS: u64 = 5000;
pub const IS_EVAL: bool = false;

// Stream
pub const STREAM_PORT: u16 = 5558;

/// `strftime` layout for per-run directory names, e.g. `2018-06-17__05-48-24PM`.
pub const DIR_DATE_FORMAT: &str = "%Y-%m-%d__%I-%M-%S%p";
