use bacteriaguard_engine::traits::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Uniform picks from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible uniform picks.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

pub fn random_source(seed: Option<u64>) -> std::sync::Arc<dyn RandomSource> {
    match seed {
        Some(seed) => std::sync::Arc::new(SeededRandom::new(seed)),
        None => std::sync::Arc::new(ThreadRandom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);
        let xs: Vec<_> = (0..32).map(|_| a.pick_index(3)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.pick_index(3)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn picks_stay_in_range_and_cover_the_catalog() {
        let r = ThreadRandom;
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let i = r.pick_index(3);
            assert!(i < 3);
            seen[i] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn empty_range_yields_zero() {
        assert_eq!(ThreadRandom.pick_index(0), 0);
        assert_eq!(SeededRandom::new(1).pick_index(0), 0);
    }
}
