//! Block raycasting along a player's line of sight.
//!
//! Walks the voxel grid cell by cell from the start point (Amanatides and Woo), so only
//! the blocks the segment actually passes through are read.

use steel_registry::blocks::BlockState;
use steel_registry::blocks::properties::Direction;
use steel_utils::BlockPos;
use steel_utils::math::Vector3;

use super::{BlockHitResult, FluidHandling, HitResult, World};
use crate::player::Player;

/// The segment from the player's eyes to `range` blocks along their view direction.
#[must_use]
pub fn view_ray(player: &dyn Player, range: f64) -> (Vector3<f64>, Vector3<f64>) {
    let start = player.eye_position();
    let (yaw, pitch) = player.rotation();
    let (yaw_rad, pitch_rad) = (f64::from(yaw.to_radians()), f64::from(pitch.to_radians()));
    let direction = Vector3::new(
        -yaw_rad.sin() * pitch_rad.cos(),
        -pitch_rad.sin(),
        pitch_rad.cos() * yaw_rad.cos(),
    );

    (start, start.add(&direction.scale(range)))
}

/// Casts a ray from `start` to `end`.
///
/// Blocks with an outline always stop the ray; fluids stop it according to `fluid`. An
/// entity reported by the world in front of the first block wins over the block.
pub fn clip(
    world: &dyn World,
    start: Vector3<f64>,
    end: Vector3<f64>,
    fluid: FluidHandling,
) -> HitResult {
    let block_hit = clip_blocks(world, start, end, fluid);
    let block_end = block_hit.map_or(end, |hit| hit.location);

    if let Some(entity) = world.clip_entities(start, block_end) {
        return HitResult::Entity(entity);
    }

    match block_hit {
        Some(hit) => HitResult::Block(hit),
        None => HitResult::Miss { location: end },
    }
}

fn stops_ray(state: &BlockState, fluid: FluidHandling) -> bool {
    if state.get_block().has_outline {
        return true;
    }
    let fluid_state = state.fluid_state();
    match fluid {
        FluidHandling::None => false,
        FluidHandling::SourceOnly => fluid_state.is_source(),
        FluidHandling::Any => !fluid_state.is_empty(),
    }
}

fn step_of(d: f64) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

/// Ray parameter at which the first cell boundary on one axis is crossed.
fn first_boundary(s: f64, cell: i32, d: f64) -> f64 {
    if d > 0.0 {
        (f64::from(cell) + 1.0 - s) / d
    } else if d < 0.0 {
        (s - f64::from(cell)) / -d
    } else {
        f64::INFINITY
    }
}

fn clip_blocks(
    world: &dyn World,
    start: Vector3<f64>,
    end: Vector3<f64>,
    fluid: FluidHandling,
) -> Option<BlockHitResult> {
    let delta = end.sub(&start);
    let stops = |cell: Vector3<i32>| stops_ray(&world.get_block_state(&BlockPos(cell)), fluid);

    let mut cell = start.floor();
    if stops(cell) {
        return Some(BlockHitResult {
            block_pos: BlockPos(cell),
            direction: Direction::nearest(&delta).opposite(),
            location: start,
            inside: true,
        });
    }

    let step = Vector3::new(step_of(delta.x), step_of(delta.y), step_of(delta.z));
    let t_delta = Vector3::new(
        1.0 / delta.x.abs(),
        1.0 / delta.y.abs(),
        1.0 / delta.z.abs(),
    );
    let mut t_max = Vector3::new(
        first_boundary(start.x, cell.x, delta.x),
        first_boundary(start.y, cell.y, delta.y),
        first_boundary(start.z, cell.z, delta.z),
    );

    loop {
        // Entering a cell along +x means coming through its west face, and so on.
        let (t, face) = if t_max.x <= t_max.y && t_max.x <= t_max.z {
            let t = t_max.x;
            cell.x += step.x;
            t_max.x += t_delta.x;
            (t, if step.x > 0 { Direction::West } else { Direction::East })
        } else if t_max.y <= t_max.z {
            let t = t_max.y;
            cell.y += step.y;
            t_max.y += t_delta.y;
            (t, if step.y > 0 { Direction::Down } else { Direction::Up })
        } else {
            let t = t_max.z;
            cell.z += step.z;
            t_max.z += t_delta.z;
            (t, if step.z > 0 { Direction::North } else { Direction::South })
        };

        if t > 1.0 {
            return None;
        }

        if stops(cell) {
            return Some(BlockHitResult {
                block_pos: BlockPos(cell),
                direction: face,
                location: start.lerp(&end, t),
                inside: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use steel_registry::vanilla_blocks;

    use super::*;
    use crate::testing::{TestPlayer, TestWorld};

    fn cast(world: &TestWorld, player: &TestPlayer, fluid: FluidHandling) -> HitResult {
        let (start, end) = view_ray(player, 5.0);
        clip(world, start, end, fluid)
    }

    #[test]
    fn test_hits_block_below_on_top_face() {
        let world = TestWorld::new();
        world.set_block(BlockPos::new(0, 64, 0), &vanilla_blocks::STONE);
        let player = TestPlayer::looking_at(BlockPos::new(0, 64, 0));

        let HitResult::Block(hit) = cast(&world, &player, FluidHandling::None) else {
            panic!("expected a block hit");
        };
        assert_eq!(hit.block_pos, BlockPos::new(0, 64, 0));
        assert_eq!(hit.direction, Direction::Up);
        assert!(!hit.inside);
        assert!((hit.location.y - 65.0).abs() < 1e-6);
    }

    #[test]
    fn test_hits_wall_on_facing_side() {
        let world = TestWorld::new();
        world.set_block(BlockPos::new(0, 64, 0), &vanilla_blocks::GLASS);
        let player = TestPlayer::at_eye(Vector3::new(0.5, 64.5, 3.5), 180.0, 0.0);

        let HitResult::Block(hit) = cast(&world, &player, FluidHandling::None) else {
            panic!("expected a block hit");
        };
        assert_eq!(hit.block_pos, BlockPos::new(0, 64, 0));
        assert_eq!(hit.direction, Direction::South);
    }

    #[test]
    fn test_source_only_stops_on_water_source() {
        let world = TestWorld::new();
        world.set_block(BlockPos::new(0, 64, 0), &vanilla_blocks::WATER);
        world.set_block(BlockPos::new(0, 63, 0), &vanilla_blocks::STONE);
        let player = TestPlayer::looking_at(BlockPos::new(0, 64, 0));

        let HitResult::Block(hit) = cast(&world, &player, FluidHandling::SourceOnly) else {
            panic!("expected a block hit");
        };
        assert_eq!(hit.block_pos, BlockPos::new(0, 64, 0));

        let HitResult::Block(hit) = cast(&world, &player, FluidHandling::None) else {
            panic!("expected a block hit");
        };
        assert_eq!(hit.block_pos, BlockPos::new(0, 63, 0));
    }

    #[test]
    fn test_source_only_ignores_flowing_fluid() {
        let world = TestWorld::new();
        world.set_flowing_water(BlockPos::new(0, 64, 0), 3);
        let player = TestPlayer::looking_at(BlockPos::new(0, 64, 0));

        assert!(matches!(
            cast(&world, &player, FluidHandling::SourceOnly),
            HitResult::Miss { .. }
        ));
        assert!(matches!(
            cast(&world, &player, FluidHandling::Any),
            HitResult::Block(_)
        ));
    }

    #[test]
    fn test_miss_past_range() {
        let world = TestWorld::new();
        world.set_block(BlockPos::new(0, 58, 0), &vanilla_blocks::STONE);
        let player = TestPlayer::looking_at(BlockPos::new(0, 64, 0));

        let (_, end) = view_ray(&player, 5.0);
        let result = cast(&world, &player, FluidHandling::None);
        assert!(matches!(result, HitResult::Miss { .. }));
        assert_eq!(result.location(), end);
    }

    #[test]
    fn test_location_of_block_hit() {
        let world = TestWorld::new();
        world.set_block(BlockPos::new(0, 64, 0), &vanilla_blocks::STONE);
        let player = TestPlayer::looking_at(BlockPos::new(0, 64, 0));

        let location = cast(&world, &player, FluidHandling::None).location();
        assert!((location.x - 0.5).abs() < 1e-6);
        assert!((location.y - 65.0).abs() < 1e-6);
        assert!((location.z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_entity_in_front_wins() {
        let world = TestWorld::new();
        world.set_block(BlockPos::new(0, 64, 0), &vanilla_blocks::STONE);
        world.put_entity_in_reach();
        let player = TestPlayer::looking_at(BlockPos::new(0, 64, 0));

        assert!(matches!(
            cast(&world, &player, FluidHandling::None),
            HitResult::Entity(_)
        ));
    }

    #[test]
    fn test_start_inside_block() {
        let world = TestWorld::new();
        let player = TestPlayer::looking_at(BlockPos::new(0, 64, 0));
        let eye_cell = BlockPos(player.eye().floor());
        world.set_block(eye_cell, &vanilla_blocks::STONE);

        let HitResult::Block(hit) = cast(&world, &player, FluidHandling::None) else {
            panic!("expected a block hit");
        };
        assert!(hit.inside);
        assert_eq!(hit.block_pos, eye_cell);
        assert_eq!(hit.direction, Direction::Up);
    }
}
