//! Determinism testing utilities.
//!
//! Provides a harness for verifying that cost evaluation produces
//! identical results given identical inputs.
//!
//! # Testing Strategy
//!
//! Path searches on different threads and machines must agree on every
//! edge cost. Sources of non-determinism include:
//!
//! - **Floating-point math**: costs use `f32` in a fixed operation
//!   order, so identical inputs give bit-identical results.
//!
//! - **HashMap iteration order**: Rust's default hasher is randomized.
//!   Cost tables are always built in row-major cell order.
//!
//! - **Shared mutable state**: evaluation only reads the map.
//!
//! # Test Levels
//!
//! 1. **Unit tests**: each cost term in isolation
//! 2. **Property tests**: random agents and maps still give stable costs
//! 3. **Parallel tests**: N threads evaluating one table all match

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use terrain_core::prelude::*;

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each run.
    pub hashes: Vec<u64>,
}

impl DeterminismResult {
    /// Get all unique hashes (should be 1 for deterministic evaluation).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that evaluation was deterministic, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different hashes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "Cost evaluation is non-deterministic!\n\
                 Runs: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                unique.len(),
                self.hashes
            );
        }
    }
}

/// Evaluate a scenario several times and verify determinism.
///
/// # Arguments
///
/// * `runs` - Number of times to evaluate
/// * `setup` - Function to create the scenario
/// * `evaluate` - Function computing a hash of the scenario's costs
///
/// # Example
///
/// ```ignore
/// use terrain_test_utils::determinism::{cost_table_hash, verify_determinism};
///
/// let result = verify_determinism(5, || setup_marsh_scenario(), |(grid, agents)| {
///     cost_table_hash(grid, agents)
/// });
/// result.assert_deterministic();
/// ```
pub fn verify_determinism<S, Setup, Evaluate>(
    runs: usize,
    setup: Setup,
    evaluate: Evaluate,
) -> DeterminismResult
where
    Setup: Fn() -> S,
    Evaluate: Fn(&S) -> u64,
{
    let hashes: Vec<u64> = (0..runs).map(|_| evaluate(&setup())).collect();
    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    tracing::debug!(runs, is_deterministic, "Determinism check finished");

    DeterminismResult {
        is_deterministic,
        hashes,
    }
}

/// Evaluate one scenario on `threads` scoped threads sharing the same map.
///
/// Catches any hidden shared state: every thread reads the same grid and
/// must produce the same hash.
///
/// # Panics
///
/// Panics if a worker thread panics.
pub fn verify_parallel_determinism<S, Evaluate>(
    scenario: &S,
    threads: usize,
    evaluate: Evaluate,
) -> DeterminismResult
where
    S: Sync,
    Evaluate: Fn(&S) -> u64 + Sync,
{
    let hashes: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| s.spawn(|| evaluate(scenario)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("evaluation thread panicked"))
            .collect()
    });

    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);
    DeterminismResult {
        is_deterministic,
        hashes,
    }
}

/// Every entry cost for `agents` on `grid`, in a stable order.
///
/// For each agent and each cell, records the cost of entering the cell
/// from its west neighbour and from its south-west neighbour, with the
/// agent standing on the neighbour.
#[must_use]
pub fn cost_table(grid: &MovementGrid, agents: &[Agent]) -> Vec<u32> {
    let mut table = Vec::with_capacity(agents.len() * (grid.width() * grid.height()) as usize * 2);
    for agent in agents {
        let mut mover = agent.clone();
        for z in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let to = GridPos::new(x, z);
                for from in [GridPos::new(x - 1, z), GridPos::new(x - 1, z - 1)] {
                    mover.position = from;
                    table.push(cost_to_enter_from_position(&mover, to, grid));
                }
            }
        }
    }
    table
}

/// Hash of [`cost_table`].
#[must_use]
pub fn cost_table_hash(grid: &MovementGrid, agents: &[Agent]) -> u64 {
    compute_hash(&cost_table(grid, agents))
}

/// Index of the first differing entry of two cost tables.
///
/// Useful for debugging non-determinism by finding exactly which edge
/// diverged. Tables of different lengths diverge at the shorter length.
#[must_use]
pub fn find_first_divergence(a: &[u32], b: &[u32]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Compute a simple hash for any hashable value.
pub fn compute_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Proptest strategies for movement testing.
///
/// These strategies generate random but reproducible agents and move
/// targets for property-based testing of the cost model.
pub mod strategies {
    use proptest::prelude::*;
    use terrain_core::prelude::*;

    /// Any locomotion urgency.
    pub fn arb_urgency() -> impl Strategy<Value = LocomotionUrgency> {
        prop_oneof![
            Just(LocomotionUrgency::Amble),
            Just(LocomotionUrgency::Walk),
            Just(LocomotionUrgency::Jog),
            Just(LocomotionUrgency::Sprint),
        ]
    }

    /// A stat value, including immobile zero.
    ///
    /// Range: 0 to 20 (fast animals sit near 10)
    pub fn arb_speed() -> impl Strategy<Value = f32> {
        prop_oneof![
            1 => Just(0.0f32),
            9 => 0.05f32..20.0f32,
        ]
    }

    /// A position within a `size` x `size` grid.
    pub fn arb_grid_pos(size: i32) -> impl Strategy<Value = GridPos> {
        (0..size, 0..size).prop_map(|(x, z)| GridPos::new(x, z))
    }

    /// A step from `from` into one of its eight neighbours.
    pub fn arb_step(size: i32) -> impl Strategy<Value = (GridPos, GridPos)> {
        (arb_grid_pos(size), -1i32..=1, -1i32..=1)
            .prop_filter("must move", |(_, dx, dz)| *dx != 0 || *dz != 0)
            .prop_map(|(from, dx, dz)| (from, GridPos::new(from.x + dx, from.z + dz)))
    }

    /// An optional job without a leader.
    pub fn arb_job() -> impl Strategy<Value = Option<JobDescriptor>> {
        proptest::option::of(arb_urgency().prop_map(JobDescriptor::new))
    }

    /// A kindless agent with random speeds, status and job.
    ///
    /// `swim_speed` is the catalog's swimming stat, if any.
    pub fn arb_agent(size: i32, swim_speed: Option<StatId>) -> impl Strategy<Value = Agent> {
        (
            arb_grid_pos(size),
            arb_speed(),
            arb_speed(),
            any::<bool>(),
            any::<bool>(),
            arb_job(),
        )
            .prop_map(move |(position, walk, swim, restrained, carrying, job)| {
                let mut agent = Agent::new(AgentId::new(1), AgentKindId::default(), position)
                    .with_stat(StatId::MOVE_SPEED, walk);
                if let Some(stat) = swim_speed {
                    agent = agent.with_stat(stat, swim);
                }
                agent.restrained = restrained;
                agent.carried = carrying.then_some(ThingCategory::Agent);
                agent.job = job;
                agent
            })
    }
}
