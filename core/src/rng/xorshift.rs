//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact run)
//! - Testing (verify strategy behavior step by step)
//! - Trial statistics (re-run a sweep and get identical means)
//!
//! Every trial owns its own `RngManager`; the batch layer derives per-trial
//! seeds from a parent generator so trials stay independent.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let heading = rng.heading_degrees(); // [0, 360)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64)
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let floor = rng.range(1, 10); // floors 1 through 9
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by dividing by 2^64
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Bernoulli draw: true with probability `p`
    ///
    /// Used for the lobby bias in passenger journey assignment.
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let from_lobby = rng.chance(0.5);
    /// ```
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform integer heading in [0, 360) degrees
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let heading = rng.heading_degrees();
    /// assert!((0..360).contains(&heading));
    /// ```
    pub fn heading_degrees(&mut self) -> i32 {
        self.range(0, 360) as i32
    }

    /// Sample `k` distinct indices from `0..n` without replacement
    ///
    /// Partial Fisher–Yates shuffle: the first `k` positions of a virtual
    /// 0..n sequence are shuffled and returned. Used for obstacle placement.
    ///
    /// # Panics
    /// Panics if k > n
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let picks = rng.sample_indices(25, 5);
    /// assert_eq!(picks.len(), 5);
    /// ```
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        assert!(k <= n, "cannot sample more indices than available");

        let mut pool: Vec<usize> = (0..n).collect();
        for i in 0..k {
            let j = self.range(i as i64, n as i64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }

    /// Get current RNG state (for replay/forking)
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// let state = rng.get_state();
    ///
    /// // Later, can recreate RNG from this state
    /// let rng2 = RngManager::new(state);
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
