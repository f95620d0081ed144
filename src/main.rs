use rover_async::actions::roam_for;
use rover_async::client::{ClientError, RobotClient};
use rover_async::{
    BASE_NAME, ROBOT_ADDRESS, ROBOT_CREDENTIAL, RUN_DURATION, VISION_SERVICE_NAME,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let robot = RobotClient::connect(ROBOT_ADDRESS, ROBOT_CREDENTIAL).await?;
    let base = robot.base(BASE_NAME);
    let vision = robot.vision(VISION_SERVICE_NAME);

    let mut rng = rand::thread_rng();
    roam_for(&base, &vision, &mut rng, RUN_DURATION).await?;

    robot.close().await
}
