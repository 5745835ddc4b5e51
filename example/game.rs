use std::fmt::{self, Write};

use bytes::{BufMut, BytesMut};
use optpair::{Either, OptionalPair};
use rand::Rng;

/// Upper bound of the output buffer reserved up front.
const MAX_RESERVE: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct ErrorGame {
    pub name: &'static str,
    pub code: i32,
}

impl Default for ErrorGame {
    fn default() -> Self {
        Self { name: "ErrorGame", code: 999 }
    }
}

#[derive(Debug, Clone)]
pub struct Success {
    pub name: &'static str,
    pub op_success: i32,
}

impl Default for Success {
    fn default() -> Self {
        Self { name: "Success", op_success: 150 }
    }
}

impl fmt::Display for ErrorGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub type GameResult = OptionalPair<Success, ErrorGame>;

/// Draw one result, [`Success`] with a chance of 4 in 25.
pub fn game_result(rng: &mut impl Rng) -> GameResult {
    let mut result = GameResult::new();
    if rng.random_range(0..25) > 19 {
        result.set_value_a(Success::default());
    } else {
        result.set_value_b(ErrorGame::default());
    }
    result
}

#[derive(Debug, Default)]
pub struct Tally {
    pub success: usize,
    pub error: usize,
    pub score: i64,
}

/// Bytes to reserve for the output of `rounds` results.
pub fn output_capacity(rounds: usize) -> usize {
    rounds.saturating_mul(32).min(MAX_RESERVE)
}

/// Draw `rounds` results, write each name into `out`.
pub fn play(rounds: usize, rng: &mut impl Rng, out: &mut BytesMut) -> Result<Tally, fmt::Error> {
    let mut tally = Tally::default();

    for _ in 0..rounds {
        let result = game_result(rng);

        if let Some(either) = result.as_either() {
            write!(out, " || New Pair: {either} || ")?;
        }

        match result.into_either() {
            Some(Either::Left(success)) => {
                tally.success += 1;
                tally.score += i64::from(success.op_success);
            }
            Some(Either::Right(error)) => {
                tally.error += 1;
                log::trace!("game error code {}", error.code);
            }
            None => unreachable!("`game_result` always sets an alternative"),
        }
    }

    out.put_u8(b'\n');
    Ok(tally)
}
