// Logic behind the small utility commands (hello, add, roll, choose, repeat).
//
// Everything here works on plain strings and numbers. Randomness is passed
// in so tests can use a seeded generator, and every validation step returns
// a `FunError` instead of bailing out halfway through a reply.

use super::fun_models::{DiceSpec, FunError, RepeatPlan, MAX_ROLLS};
use crate::core::replies::Reply;
use rand::seq::SliceRandom;
use rand::Rng;

const GREETING: &str = "Hi there!";
const DEFAULT_REPEAT_CONTENT: &str = "repeating...";

pub fn hello_reply() -> Reply {
    Reply::text(GREETING)
}

/// Sums the tokens left to right, stopping at the first one that is not an
/// integer.
pub fn sum_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<i64, FunError> {
    tokens.iter().try_fold(0i64, |acc, token| {
        let value: i64 = token
            .as_ref()
            .trim()
            .parse()
            .map_err(|_| FunError::NotANumber)?;
        acc.checked_add(value).ok_or(FunError::NotANumber)
    })
}

pub fn add_reply<S: AsRef<str>>(tokens: &[S]) -> Reply {
    match sum_tokens(tokens) {
        Ok(sum) => Reply::text(format!("Result : {}", sum)),
        Err(e) => Reply::text(e.to_string()),
    }
}

/// Parses a dice request. Accepts `"2 6"` as well as `"2d6"`.
pub fn parse_dice(input: &str) -> Result<DiceSpec, FunError> {
    let input = input.trim();

    let (rolls, limit) = match input.split_once(['d', 'D']) {
        Some((rolls, limit)) => (rolls.trim(), limit.trim()),
        None => {
            let parts: Vec<&str> = input.split_whitespace().collect();
            match parts.as_slice() {
                [rolls, limit] => (*rolls, *limit),
                _ => return Err(FunError::BadDiceFormat),
            }
        }
    };

    let rolls: i64 = rolls.parse().map_err(|_| FunError::BadDiceFormat)?;
    let limit: i64 = limit.parse().map_err(|_| FunError::BadDiceFormat)?;

    if rolls < 1 || limit < 1 {
        return Err(FunError::BadDiceFormat);
    }
    if rolls > MAX_ROLLS as i64 {
        return Err(FunError::TooManyDice { max: MAX_ROLLS });
    }

    Ok(DiceSpec {
        rolls: rolls as u32,
        limit: limit as u64,
    })
}

pub fn roll_dice<R: Rng>(spec: DiceSpec, rng: &mut R) -> Vec<u64> {
    (0..spec.rolls)
        .map(|_| rng.gen_range(1..=spec.limit))
        .collect()
}

pub fn roll_reply<R: Rng>(input: &str, rng: &mut R) -> Reply {
    match parse_dice(input) {
        Ok(spec) => {
            let rolled: Vec<String> = roll_dice(spec, rng)
                .iter()
                .map(|value| value.to_string())
                .collect();
            Reply::text(rolled.join(", "))
        }
        Err(e) => Reply::text(e.to_string()),
    }
}

pub fn choose<'a, S: AsRef<str>, R: Rng>(
    choices: &'a [S],
    rng: &mut R,
) -> Result<&'a str, FunError> {
    choices
        .choose(rng)
        .map(|choice| choice.as_ref())
        .ok_or(FunError::NoChoices)
}

pub fn choose_reply<S: AsRef<str>, R: Rng>(choices: &[S], rng: &mut R) -> Reply {
    match choose(choices, rng) {
        Ok(choice) => Reply::text(choice),
        Err(e) => Reply::text(e.to_string()),
    }
}

/// Validates a repeat request. Missing or blank content falls back to the
/// default text.
pub fn repeat_plan(times: i64, content: Option<&str>) -> Result<RepeatPlan, FunError> {
    if times < 0 {
        return Err(FunError::NegativeRepeat);
    }

    let content = content
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_REPEAT_CONTENT);

    Ok(RepeatPlan {
        times: times as u64,
        content: content.to_string(),
    })
}
