use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::EmptySequenceError;

const TOKEN_LEN: usize = 9;

/// Returns a uniformly chosen element of `seq`.
pub fn pick<'a, T, R>(seq: &'a [T], rng: &mut R) -> Result<&'a T, EmptySequenceError>
where
    R: Rng + ?Sized,
{
    seq.choose(rng).ok_or(EmptySequenceError)
}

/// Returns a uniformly permuted copy of `seq`; the input is left untouched.
pub fn shuffled<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut out = seq.to_vec();
    // Fisher-Yates
    out.shuffle(rng);
    out
}

/// Short alphanumeric token, unique enough for ids scoped to a single round.
pub fn option_token<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    (0..TOKEN_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
