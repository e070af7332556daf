use rand::{prelude::*, rngs::StdRng};

const SEED: u64 = 63;

#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::{rngs::SysRng, TryRng};
    let seed = SysRng::try_next_u64(&mut SysRng).unwrap_or(SEED);

    StdRng::seed_from_u64(seed)
}

/// A fixed seed wins over the build-dependent default
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => make_rng(),
    }
}
