//! Bounded regeneration of unsolvable mazes.

use crate::config::DEFAULT_MAX_ATTEMPTS;
use crate::error::{Result, ServiceError};

/// How many fresh mazes a request may go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Call `attempt` with attempt numbers `1, 2, ...` until it yields a
    /// value, and return the value with the number of attempts used.
    ///
    /// `Ok(None)` means "no luck, start over". An `Err` is returned at once
    /// without retrying. After `max_attempts` misses the result is
    /// [`ServiceError::MazeUnsolvable`].
    pub fn run<T>(&self, mut attempt: impl FnMut(u32) -> Result<Option<T>>) -> Result<(T, u32)> {
        for n in 1..=self.max_attempts {
            match attempt(n)? {
                Some(value) => {
                    log::debug!("attempt {n} succeeded");
                    return Ok((value, n));
                }
                None => log::warn!("attempt {n} of {} found no path", self.max_attempts),
            }
        }
        log::warn!("giving up after {} attempts", self.max_attempts);
        Err(ServiceError::MazeUnsolvable {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_success_wins() {
        let mut calls = 0;
        let out = RetryPolicy::new(5).run(|n| {
            calls += 1;
            Ok((n == 3).then_some("maze"))
        });
        assert_eq!(out, Ok(("maze", 3)));
        assert_eq!(calls, 3);
    }

    #[test]
    fn gives_up_after_cap() {
        let mut calls = 0;
        let out: Result<((), u32)> = RetryPolicy::new(4).run(|_| {
            calls += 1;
            Ok(None)
        });
        assert_eq!(out, Err(ServiceError::MazeUnsolvable { attempts: 4 }));
        assert_eq!(calls, 4);
    }

    #[test]
    fn errors_are_not_retried() {
        let mut calls = 0;
        let out: Result<((), u32)> = RetryPolicy::default().run(|_| {
            calls += 1;
            Err(ServiceError::InvalidCoordinates("bad".into()))
        });
        assert!(matches!(out, Err(ServiceError::InvalidCoordinates(_))));
        assert_eq!(calls, 1);
    }
}
