//! Property tests for the entry cost model.
//!
//! Agents, speeds and steps are random; the relationships between cost
//! terms must hold regardless.

use proptest::prelude::*;
use terrain_core::crossing::{
    effective_speed, CARRYING_AGENT_SPEED_FACTOR, DIAGONAL_COST_FACTOR, RESTRAINED_SPEED_FACTOR,
};
use terrain_core::prelude::*;
use terrain_test_utils::determinism::strategies::{arb_agent, arb_step, arb_urgency};
use terrain_test_utils::determinism::{cost_table_hash, verify_parallel_determinism};
use terrain_test_utils::fixtures::{
    sample_agent, sample_catalog, stat_id, striped_grid, uniform_grid, walker,
};

const SIZE: i32 = 8;

/// Expected crossing ticks for a raw (unclamped) tick count.
fn expected_ticks(raw: f32) -> f32 {
    raw.round().clamp(MIN_CELL_COST as f32, MAX_CELL_COST as f32)
}

fn expected_urgency(cost: u32, urgency: LocomotionUrgency) -> u32 {
    let transformed = match urgency {
        LocomotionUrgency::Amble => (cost * 3).max(60),
        LocomotionUrgency::Walk => (cost * 2).max(50),
        LocomotionUrgency::Jog => cost,
        LocomotionUrgency::Sprint => (cost as f32 * 0.75).round() as u32,
    };
    transformed.clamp(MIN_CELL_COST, MAX_CELL_COST)
}

proptest! {
    /// Every edge cost lands in [1, 450], on or off the map.
    #[test]
    fn prop_cost_is_always_in_range(
        agent in arb_agent(SIZE, Some(StatId::new(1))),
        (from, to) in arb_step(SIZE),
    ) {
        let catalog = sample_catalog();
        let grid = striped_grid(&catalog, SIZE as u32, SIZE as u32);
        let cost = cost_to_enter(&agent, from, to, &grid);
        prop_assert!((MIN_CELL_COST..=MAX_CELL_COST).contains(&cost), "cost {cost}");
    }

    /// Diagonal crossing is the cardinal raw cost times 1.41421, rounded.
    #[test]
    fn prop_diagonal_scales_cardinal(speed in 0.2f32..40.0) {
        let catalog = sample_catalog();
        let grid = uniform_grid(&catalog, "Floor", 4);
        let agent = walker(1, speed, GridPos::new(1, 1));
        let floor = grid.terrain_at(agent.position).unwrap();

        let raw = 60.0 / speed * DIAGONAL_COST_FACTOR;
        let diagonal = ticks_to_cross_diagonal(&agent, floor, &grid);
        prop_assert!((diagonal as f32 - expected_ticks(raw)).abs() <= 1.0);
    }

    /// Restraint and burden multiply the speed, never add to the cost.
    #[test]
    fn prop_penalties_compose(
        speed in 0.2f32..40.0,
        restrained in any::<bool>(),
        carrying in any::<bool>(),
    ) {
        let catalog = sample_catalog();
        let grid = uniform_grid(&catalog, "Floor", 4);
        let mut agent = walker(1, speed, GridPos::new(1, 1));
        agent.restrained = restrained;
        agent.carried = carrying.then_some(ThingCategory::Agent);
        let floor = grid.terrain_at(agent.position).unwrap();

        let mut effective = speed;
        if restrained {
            effective *= RESTRAINED_SPEED_FACTOR;
        }
        if carrying {
            effective *= CARRYING_AGENT_SPEED_FACTOR;
        }
        let ticks = ticks_to_cross_cardinal(&agent, floor, &grid);
        prop_assert!((ticks as f32 - expected_ticks(60.0 / effective)).abs() <= 1.0);
    }

    /// Toggling one penalty scales the effective speed by exactly the
    /// other's factor, for all four restraint/burden combinations.
    #[test]
    fn prop_penalty_factors_are_exact(speed in 0.0f32..40.0) {
        let catalog = sample_catalog();
        let grid = uniform_grid(&catalog, "Floor", 4);
        let floor = grid.terrain_at(GridPos::new(1, 1)).unwrap();
        let speed_with = |restrained: bool, carrying: bool| {
            let mut agent = walker(1, speed, GridPos::new(1, 1));
            agent.restrained = restrained;
            agent.carried = carrying.then_some(ThingCategory::Agent);
            effective_speed(&agent, floor)
        };

        let free = speed_with(false, false);
        let restrained = speed_with(true, false);
        let carrying = speed_with(false, true);
        let both = speed_with(true, true);

        prop_assert_eq!(free, speed);
        prop_assert_eq!(restrained, speed * RESTRAINED_SPEED_FACTOR);
        prop_assert_eq!(carrying, speed * CARRYING_AGENT_SPEED_FACTOR);
        prop_assert_eq!(both, restrained * CARRYING_AGENT_SPEED_FACTOR);
        // Dropping restraint from the pair reorders one multiplication.
        let reordered = carrying * RESTRAINED_SPEED_FACTOR;
        prop_assert!((both - reordered).abs() <= 2.0 * f32::EPSILON * reordered.abs());
    }

    /// Restraint can only slow an agent down.
    #[test]
    fn prop_restraint_never_helps(
        agent in arb_agent(SIZE, Some(StatId::new(1))),
        (from, to) in arb_step(SIZE),
    ) {
        let catalog = sample_catalog();
        let grid = striped_grid(&catalog, SIZE as u32, SIZE as u32);
        let mut free = agent.clone();
        free.restrained = false;
        let mut bound = agent;
        bound.restrained = true;
        let free_cost = cost_to_enter(&free, from, to, &grid);
        prop_assert!(cost_to_enter(&bound, from, to, &grid) >= free_cost);
    }

    /// Without a leader, urgency is a pure function of the Jog cost.
    ///
    /// Off-map targets skip urgency entirely and are excluded.
    #[test]
    fn prop_urgency_transform(
        speed in 0.0f32..20.0,
        urgency in arb_urgency(),
        (from, to) in arb_step(SIZE),
    ) {
        let catalog = sample_catalog();
        let grid = striped_grid(&catalog, SIZE as u32, SIZE as u32);
        prop_assume!(grid.in_bounds(to));
        let jogging = walker(1, speed, from);
        let hurried = jogging.clone().with_job(JobDescriptor::new(urgency));

        let base = cost_to_enter(&jogging, from, to, &grid);
        prop_assert_eq!(
            cost_to_enter(&hurried, from, to, &grid),
            expected_urgency(base, urgency)
        );
    }

    /// A follower moves at the slower of its own pace and its leader's.
    #[test]
    fn prop_follower_takes_slower_cost(
        own_speed in 0.0f32..20.0,
        leader_speed in 0.0f32..20.0,
        urgency in arb_urgency(),
        (from, to) in arb_step(SIZE),
    ) {
        let catalog = sample_catalog();
        let mut grid = striped_grid(&catalog, SIZE as u32, SIZE as u32);
        let leader = walker(9, leader_speed, GridPos::new(SIZE / 2, SIZE / 2));
        let leader_cost = cost_to_enter_from_position(&leader, to, &grid);
        grid.spawn_agent(leader).unwrap();

        let alone = walker(1, own_speed, from);
        let own_cost = cost_to_enter(&alone, from, to, &grid);
        let follower = alone.with_job(JobDescriptor {
            urgency,
            leader: Some(AgentId::new(9)),
        });

        prop_assert_eq!(
            cost_to_enter(&follower, from, to, &grid),
            own_cost.max(leader_cost)
        );
    }

    /// Exactly tied pairs resolve to the later one.
    #[test]
    fn prop_ties_go_to_later_pair(
        speed in 1u16..20,
        first_cost in 1u32..10,
        second_cost in 1u32..10,
    ) {
        let (first_speed, second_speed) = (StatId::new(1), StatId::new(2));
        let (first_stat, second_stat) = (StatId::new(3), StatId::new(4));
        let terrain = Terrain::new(TerrainId::new(0), "Shallows", 5)
            .with_movement_cost(first_stat, first_cost)
            .with_movement_cost(second_stat, second_cost)
            .with_stat_pair(StatPair::new(first_speed, first_stat))
            .with_stat_pair(StatPair::new(second_speed, second_stat));
        let agent = walker(1, 1.0, GridPos::new(0, 0))
            .with_stat(first_speed, f32::from(speed) * first_cost as f32)
            .with_stat(second_speed, f32::from(speed) * second_cost as f32);

        let best = best_movement_stats(&agent, &terrain);
        prop_assert_eq!(best, StatPair::new(second_speed, second_stat));
        prop_assert_eq!(terrain_move_cost(&agent, &terrain), second_cost);
    }

    /// Fish may occupy exactly the Water-tagged cells.
    #[test]
    fn prop_fish_reachability_follows_water_tag(
        cell in (0..SIZE, 0..SIZE).prop_map(|(x, z)| GridPos::new(x, z)),
    ) {
        let catalog = sample_catalog();
        let grid = striped_grid(&catalog, SIZE as u32, SIZE as u32);
        let model = catalog.movement_model();
        let fish = sample_agent(&catalog, "Fish", 1, cell);
        let is_water = grid.terrain_at(cell).unwrap().has_tag("Water");
        prop_assert_eq!(model.can_occupy(&fish, cell, true, &grid), is_water);
    }
}

#[test]
fn test_zero_speed_agent_is_capped_everywhere() {
    let catalog = sample_catalog();
    let grid = striped_grid(&catalog, SIZE as u32, SIZE as u32);
    let stuck = walker(1, 0.0, GridPos::new(0, 0))
        .with_stat(stat_id(&catalog, "SwimSpeed"), 0.0);
    for x in 0..SIZE {
        let to = GridPos::new(x, 1);
        assert_eq!(cost_to_enter(&stuck, GridPos::new(x, 0), to, &grid), MAX_CELL_COST);
    }
}

#[test]
fn test_parallel_cost_tables_match() {
    let catalog = sample_catalog();
    let grid = striped_grid(&catalog, 16, 16);
    let agents = vec![
        walker(1, 4.6, GridPos::new(0, 0)),
        walker(2, 0.0, GridPos::new(5, 5)),
        sample_agent(&catalog, "Crocodile", 3, GridPos::new(2, 2)),
    ];
    verify_parallel_determinism(&(grid, agents), 8, |(grid, agents)| {
        cost_table_hash(grid, agents)
    })
    .assert_deterministic();
}
