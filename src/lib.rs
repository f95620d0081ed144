#![deny(clippy::unwrap_used)]
#![allow(async_fn_in_trait)]

pub mod actions;
pub mod api_protocols;
pub mod client;
pub mod components;
pub mod math;
pub mod net;
pub mod services;

use std::time::Duration;

pub const ROBOT_ADDRESS: &str = "vision-rover-main.robot.cloud:9031";
pub const ROBOT_CREDENTIAL: &str = "change-me-location-secret";

pub const BASE_NAME: &str = "rover_base";
pub const VISION_SERVICE_NAME: &str = "obstacle-vision-service";
pub const OBSTACLE_SENSOR: &str = "rplidar";

/// deg/s for in-place turns
pub const ANGULAR_SPEED_DEGS: f64 = 25.;
/// mm/s straight-line cruise speed
pub const LINEAR_SPEED_MM_S: f64 = 100.;
pub const RUN_DURATION: Duration = Duration::from_secs(60 * 15);
