//! The shared loop behind single-valued `tail_rec_m` implementations.

use super::either::Either;

/// Repeats `step` from `seed` until it yields `Either::Right`, stopping
/// early on the first `Err`.
///
/// This is the explicit loop that gives `Option`, `Result`, `Identity` and
/// `Either` their stack-safe `tail_rec_m`: each of them maps its own
/// short-circuit case onto `Err`.
///
/// # Examples
///
/// ```rust
/// use lawful::control::{tail_rec, Either};
///
/// let outcome: Result<u64, &str> = tail_rec(1_u64, |value| {
///     Ok(if value >= 1_000 { Either::Right(value) } else { Either::Left(value * 2) })
/// });
/// assert_eq!(outcome, Ok(1_024));
/// ```
///
/// # Errors
///
/// Returns the first error produced by `step`.
pub fn tail_rec<A, B, E, F>(seed: A, mut step: F) -> Result<B, E>
where
    F: FnMut(A) -> Result<Either<A, B>, E>,
{
    let mut current = seed;
    let mut iterations: u64 = 0;
    loop {
        iterations += 1;
        match step(current) {
            Ok(Either::Left(next)) => current = next,
            Ok(Either::Right(done)) => {
                trace_event!(iterations = iterations; "tail_rec loop finished");
                return Ok(done);
            }
            Err(error) => {
                trace_event!(iterations = iterations; "tail_rec loop short-circuited");
                return Err(error);
            }
        }
    }
}
