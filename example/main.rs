use std::{
    io::{self, Write},
    sync::Mutex,
};

use bytes::{BufMut, BytesMut};
use optpair::{First, Optional, OptionalPair, Tag};
use rand::{SeedableRng, rngs::StdRng};

mod config;
mod game;
mod stats;

use config::Config;

fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    log::info!("{config:?}");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    basics();

    let mut out = BytesMut::with_capacity(game::output_capacity(config.rounds));

    let tally = game::play(config.rounds, &mut rng, &mut out).map_err(io::Error::other)?;
    out.put_slice(
        format!(
            "\n Results: {} success, {} error, score {}\n",
            tally.success, tally.error, tally.score
        )
        .as_bytes(),
    );

    let run = stats::run_threads(&config, &mut rng)?;
    out.put_slice(format!(" \n Statistics Begin: {}\n", run.begin).as_bytes());
    out.put_slice(format!(" \n Statistics End: {}\n", run.end).as_bytes());

    let run = stats::run_tasks(&config, &mut rng)?;
    out.put_slice(format!(" \n Async Statistics: {} -> {}\n", run.begin, run.end).as_bytes());

    let mut stdout = io::stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()
}

/// Plain and non-trivial payloads through every container operation.
fn basics() {
    let mut int_opt = Optional::new();
    int_opt.set_value(5);
    int_opt.set_value(15);
    let new_opt = int_opt.clone();

    let mut pair = OptionalPair::<i32, bool>::new();
    pair.set_value_a(25325);
    let int_pair = *pair.get_value_a();
    pair.set_value_b(false);
    let bool_pair = *pair.get_value_b();

    let moved_pair = pair.take();
    let moved_opt = int_opt.take();
    assert_eq!(pair.tag(), Tag::Unset);
    assert_eq!(moved_pair.tag(), Tag::B);
    assert!(!int_opt.is_set());

    let mut mutex_opt = Optional::<Mutex<()>>::new();
    mutex_opt.default_initialize();

    let mut lock_pair = OptionalPair::<Mutex<i32>, String>::new();
    lock_pair.default_initialize::<First>();
    lock_pair.emplace_move_b(String::from("released"));

    log::debug!(
        "basics: {new_opt:?} {moved_opt:?} {int_pair} {bool_pair} {moved_pair:?} {mutex_opt:?} {:?}",
        lock_pair.tag(),
    );
}
