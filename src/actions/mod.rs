use std::fmt::Debug;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::components::Base;
use crate::math::Vector3;
use crate::services::VisionService;
use crate::{ANGULAR_SPEED_DEGS, LINEAR_SPEED_MM_S, OBSTACLE_SENSOR};

/// Turn angles the rover picks from when something is in the way.
pub const SPIN_DEGREES: [f64; 6] = [30., 60., 90., 120., 150., 180.];

pub fn random_spin_degrees(rng: &mut impl Rng) -> f64 {
    *SPIN_DEGREES
        .choose(rng)
        .expect("SPIN_DEGREES is never empty")
}

/// One avoidance cycle: keep stopping and turning in place until the sensor
/// reports a clear path, then drive straight ahead.
pub async fn go_straight_avoiding_obstacles<E: Debug>(
    base: &impl Base<E>,
    vision: &impl VisionService<E>,
    rng: &mut impl Rng,
) -> Result<(), E> {
    let mut obstacles = vision.get_detections(OBSTACLE_SENSOR).await?;

    while !obstacles.is_empty() {
        debug!("{} obstacle(s) in the way, turning away", obstacles.len());
        base.stop().await?;
        base.spin(random_spin_degrees(rng), ANGULAR_SPEED_DEGS).await?;
        obstacles = vision.get_detections(OBSTACLE_SENSOR).await?;
    }

    base.set_velocity(Vector3::new(0., LINEAR_SPEED_MM_S, 0.), Vector3::zero())
        .await
}

/// Drive around, avoiding obstacles, until the wall-clock budget runs out,
/// then halt the base. The deadline is only checked between cycles; an
/// avoidance sequence already under way runs to completion.
pub async fn roam_for<E: Debug>(
    base: &impl Base<E>,
    vision: &impl VisionService<E>,
    rng: &mut impl Rng,
    budget: Duration,
) -> Result<(), E> {
    let t_end = Instant::now() + budget;
    while Instant::now() < t_end {
        go_straight_avoiding_obstacles(base, vision, rng).await?;
    }

    info!("run budget elapsed, halting the base");
    base.stop().await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::Detection;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashSet, VecDeque};
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Detect,
        Stop,
        Spin(f64),
        SetVelocity(Vector3, Vector3),
    }

    #[derive(Clone, Default)]
    struct CallLog(Arc<Mutex<Vec<Call>>>);

    impl CallLog {
        fn push(&self, call: Call) {
            self.0.lock().unwrap().push(call);
        }

        fn take(&self) -> Vec<Call> {
            std::mem::take(&mut self.0.lock().unwrap())
        }
    }

    struct RecordingBase {
        log: CallLog,
    }

    impl Base<Infallible> for RecordingBase {
        async fn stop(&self) -> Result<(), Infallible> {
            self.log.push(Call::Stop);
            Ok(())
        }

        async fn spin(&self, angle_degs: f64, _degs_per_sec: f64) -> Result<(), Infallible> {
            self.log.push(Call::Spin(angle_degs));
            Ok(())
        }

        async fn set_velocity(&self, linear: Vector3, angular: Vector3) -> Result<(), Infallible> {
            self.log.push(Call::SetVelocity(linear, angular));
            Ok(())
        }
    }

    struct ScriptedVision {
        log: CallLog,
        rounds: Mutex<VecDeque<usize>>,
    }

    impl VisionService<Infallible> for ScriptedVision {
        async fn get_detections(&self, _sensor: &str) -> Result<Vec<Detection>, Infallible> {
            self.log.push(Call::Detect);
            let count = self.rounds.lock().unwrap().pop_front().unwrap_or(0);
            let obstacle = Detection {
                label: "obstacle".to_string(),
                confidence: 0.9,
                center: Vector3::zero(),
            };
            Ok(vec![obstacle; count])
        }
    }

    /// `rounds` scripts the object count of successive detection queries;
    /// queries past the end of the script report a clear path.
    fn fixture(rounds: &[usize]) -> (RecordingBase, ScriptedVision, CallLog) {
        let log = CallLog::default();
        let base = RecordingBase { log: log.clone() };
        let vision = ScriptedVision {
            log: log.clone(),
            rounds: Mutex::new(rounds.iter().copied().collect()),
        };
        (base, vision, log)
    }

    fn forward() -> Call {
        Call::SetVelocity(Vector3::new(0., LINEAR_SPEED_MM_S, 0.), Vector3::zero())
    }

    #[tokio::test]
    async fn clear_path_goes_straight() {
        let (base, vision, log) = fixture(&[0]);
        let mut rng = StdRng::seed_from_u64(7);

        go_straight_avoiding_obstacles(&base, &vision, &mut rng)
            .await
            .unwrap();

        assert_eq!(log.take(), vec![Call::Detect, forward()]);
    }

    #[tokio::test]
    async fn obstacle_triggers_stop_and_spin_before_driving() {
        let (base, vision, log) = fixture(&[1, 0]);
        let mut rng = StdRng::seed_from_u64(7);

        go_straight_avoiding_obstacles(&base, &vision, &mut rng)
            .await
            .unwrap();

        let calls = log.take();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0], Call::Detect);
        assert_eq!(calls[1], Call::Stop);
        assert!(matches!(calls[2], Call::Spin(a) if SPIN_DEGREES.contains(&a)));
        assert_eq!(calls[3], Call::Detect);
        assert_eq!(calls[4], forward());
    }

    #[tokio::test]
    async fn keeps_turning_until_the_way_is_clear() {
        let (base, vision, log) = fixture(&[3, 2, 0]);
        let mut rng = StdRng::seed_from_u64(7);

        go_straight_avoiding_obstacles(&base, &vision, &mut rng)
            .await
            .unwrap();

        let calls = log.take();
        assert_eq!(calls.len(), 8);
        // never drives forward while the sensor still reports obstacles
        assert!(calls[..7].iter().all(|c| !matches!(c, Call::SetVelocity(..))));
        assert_eq!(calls[7], forward());
        let spins = calls
            .iter()
            .filter(|c| matches!(c, Call::Spin(_)))
            .count();
        assert_eq!(spins, 2);
    }

    #[tokio::test]
    async fn spent_budget_stops_immediately() {
        let (base, vision, log) = fixture(&[0]);
        let mut rng = StdRng::seed_from_u64(7);

        roam_for(&base, &vision, &mut rng, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(log.take(), vec![Call::Stop]);
    }

    #[tokio::test]
    async fn roaming_ends_with_a_halt() {
        let (base, vision, log) = fixture(&[]);
        let mut rng = StdRng::seed_from_u64(7);

        roam_for(&base, &vision, &mut rng, Duration::from_millis(5))
            .await
            .unwrap();

        let calls = log.take();
        assert_eq!(*calls.last().unwrap(), Call::Stop);
        // with a clear path, every cycle is one query followed by one
        // forward command
        for pair in calls[..calls.len() - 1].chunks(2) {
            assert_eq!(pair, &[Call::Detect, forward()][..]);
        }
    }

    #[test]
    fn spin_angle_always_from_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(SPIN_DEGREES.contains(&random_spin_degrees(&mut rng)));
        }
    }

    #[test]
    fn spin_angles_cover_the_whole_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<u32> = (0..500)
            .map(|_| random_spin_degrees(&mut rng) as u32)
            .collect();
        assert_eq!(seen.len(), SPIN_DEGREES.len());
    }
}
