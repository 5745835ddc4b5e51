use std::{
    io,
    sync::{Arc, Mutex, PoisonError},
    thread,
};

use optpair::Optional;
use rand::{Rng, rngs::StdRng};

use crate::config::Config;

/// Counter guarded by a lock which itself lives in an [`Optional`].
pub type Statistics = Optional<Mutex<Optional<i32>>>;

/// Begin and end value of a counter run.
#[derive(Debug, Clone, Copy)]
pub struct Run {
    pub begin: i32,
    pub end: i32,
    pub added: i32,
}

impl Run {
    fn check(self) -> io::Result<Self> {
        if self.begin + self.added == self.end {
            Ok(self)
        } else {
            Err(io::Error::other(format!("lost update: {self:?}")))
        }
    }
}

fn increments(config: &Config, rng: &mut StdRng) -> Vec<i32> {
    (0..config.workers).map(|_| rng.random_range(0..=config.max_increment)).collect()
}

/// Create the counter, initialized to 1.
pub fn statistics() -> Statistics {
    let mut stats = Statistics::new();
    stats.default_initialize();

    let mut counter = stats.get_value().lock().unwrap_or_else(PoisonError::into_inner);
    *counter.default_initialize() += 1;
    drop(counter);

    stats
}

fn value(stats: &Statistics) -> i32 {
    *stats.get_value().lock().unwrap_or_else(PoisonError::into_inner).get_value()
}

/// Add one random increment per worker, each on its own thread.
pub fn run_threads(config: &Config, rng: &mut StdRng) -> io::Result<Run> {
    let stats = statistics();
    let begin = value(&stats);

    let added = thread::scope(|s| {
        let handles = increments(config, rng)
            .into_iter()
            .enumerate()
            .map(|(id, increment)| {
                let stats = &stats;
                s.spawn(move || {
                    let mut counter = stats.get_value().lock().unwrap_or_else(PoisonError::into_inner);
                    let current = *counter.get_value();
                    counter.set_value(current + increment);
                    log::debug!("thread worker {id} added {increment} to {current}");
                    increment
                })
            })
            .collect::<Vec<_>>();

        handles.into_iter().try_fold(0, |sum, handle| {
            let increment = handle
                .join()
                .map_err(|_| io::Error::other("statistics worker panicked"))?;
            Ok::<_, io::Error>(sum + increment)
        })
    })?;

    Run { begin, end: value(&stats), added }.check()
}

/// Add one random increment per worker, each on its own tokio task.
pub fn run_tasks(config: &Config, rng: &mut StdRng) -> io::Result<Run> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let mut stats = Optional::<tokio::sync::Mutex<Optional<i32>>>::new();
        stats.default_initialize().get_mut().default_initialize();
        let stats = Arc::new(stats);
        let begin = *stats.get_value().lock().await.get_value();

        let handles = increments(config, rng)
            .into_iter()
            .enumerate()
            .map(|(id, increment)| {
                let stats = Arc::clone(&stats);
                tokio::spawn(async move {
                    let mut counter = stats.get_value().lock().await;
                    let current = *counter.get_value();
                    counter.set_value(current + increment);
                    log::debug!("task worker {id} added {increment} to {current}");
                    increment
                })
            })
            .collect::<Vec<_>>();

        let mut added = 0;
        for handle in handles {
            added += handle.await.map_err(io::Error::other)?;
        }

        let end = *stats.get_value().lock().await.get_value();
        Run { begin, end, added }.check()
    })
}

#[test]
fn test_statistics_no_lost_updates() {
    use rand::SeedableRng;

    let config = Config { workers: 16, max_increment: 5, ..Config::default() };
    let mut rng = StdRng::seed_from_u64(7);

    let run = run_threads(&config, &mut rng).unwrap();
    assert_eq!(run.begin, 1);
    assert_eq!(run.end, run.begin + run.added);

    let run = run_tasks(&config, &mut rng).unwrap();
    assert_eq!(run.begin, 0);
    assert_eq!(run.end, run.added);
}
