use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use crossbeam::channel::{Sender, TrySendError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::core::types::{Rating, RatingUpdate, UserId};
use crate::writer::snapshot_writer::WriterMetrics;

/// Background load source: every 50-100 ms submit a burst of 5-15 random
/// rating updates. Offers are non-blocking; when the intake channel is full
/// the update is dropped and counted.
///
/// The thread exits once `stop` is set, releasing its channel handle.
pub fn spawn_update_simulator(
    intake: Sender<RatingUpdate>,
    metrics: Arc<WriterMetrics>,
    user_count: u32,
    rating_min: Rating,
    rating_max: Rating,
    stop: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut rng = StdRng::from_entropy();

        while !stop.load(Ordering::Relaxed) {
            let sleep_ms = 50 + rng.gen_range(0..51);
            thread::sleep(Duration::from_millis(sleep_ms));

            let burst = 5 + rng.gen_range(0..11);
            for _ in 0..burst {
                let update = RatingUpdate {
                    user_id: UserId(1 + rng.gen_range(0..user_count)),
                    new_rating: rng.gen_range(rating_min..=rating_max),
                };

                match intake.try_send(update) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        metrics.updates_dropped.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(TrySendError::Disconnected(_)) => return,
                }
            }
        }
    })
}
