use conway_life::{Loc, Pattern, SimulationConfig, SimulationController, Snapshot};
use std::time::Duration;

fn controller(rows: u32, cols: u32) -> SimulationController {
    let config = SimulationConfig::new(rows, cols, Duration::from_millis(50))
        .unwrap()
        .with_rng_seed(2024);
    SimulationController::new(config)
}

fn translated(cells: &[(u32, u32)], d_row: u32, d_col: u32) -> Vec<(u32, u32)> {
    cells
        .iter()
        .map(|&(row, col)| (row + d_row, col + d_col))
        .collect()
}

/// Bounded Moore count straight from the snapshot.
fn reference_neighbors(snapshot: &Snapshot, row: u32, col: u32) -> usize {
    let mut count = 0;
    for d_row in -1i64..=1 {
        for d_col in -1i64..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let (r, c) = (row as i64 + d_row, col as i64 + d_col);
            if r < 0 || c < 0 {
                continue;
            }
            if snapshot.is_alive(r as u32, c as u32) == Some(true) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn random_grids_follow_b3_s23() {
    for density in [0.2, 0.35, 0.5, 0.8] {
        let mut life = controller(17, 23);
        life.randomize_and_reset(Some(density)).unwrap();
        for _ in 0..5 {
            let before = life.snapshot();
            life.step();
            let after = life.snapshot();
            for row in 0..before.rows() {
                for col in 0..before.cols() {
                    let neighbors = reference_neighbors(&before, row, col);
                    let alive = before.is_alive(row, col).unwrap();
                    let expected = if alive {
                        neighbors == 2 || neighbors == 3
                    } else {
                        neighbors == 3
                    };
                    assert_eq!(
                        after.is_alive(row, col),
                        Some(expected),
                        "cell {row}, {col} alive={alive} neighbors={neighbors}"
                    );
                }
            }
        }
    }
}

#[test]
fn corners_see_at_most_three_neighbors() {
    let mut life = controller(3, 3);
    life.randomize_and_reset(Some(1.0)).unwrap();
    life.step();
    assert_eq!(life.snapshot().live_cells(), vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
}

#[test]
fn dead_grid_stays_dead() {
    let mut life = controller(12, 9);
    for _ in 0..50 {
        life.step();
        assert_eq!(life.live_count(), 0);
    }
    assert_eq!(life.generation(), 50);
}

#[test]
fn blinker_has_period_two() {
    let mut life = controller(5, 5);
    life.place_pattern(&Pattern::BLINKER, Loc::new(2, 1)).unwrap();
    let horizontal = vec![(2, 1), (2, 2), (2, 3)];
    let vertical = vec![(1, 2), (2, 2), (3, 2)];
    assert_eq!(life.snapshot().live_cells(), horizontal);

    life.step();
    assert_eq!(life.snapshot().live_cells(), vertical);
    life.step();
    assert_eq!(life.snapshot().live_cells(), horizontal);
}

#[test]
fn glider_moves_one_diagonal_every_four_generations() {
    let mut life = controller(12, 12);
    life.place_pattern(&Pattern::GLIDER, Loc::new(0, 0)).unwrap();
    let start = life.snapshot().live_cells();

    for lap in 1..=3 {
        for _ in 0..4 {
            life.step();
            assert_eq!(life.live_count(), 5);
        }
        assert_eq!(life.snapshot().live_cells(), translated(&start, lap, lap));
    }
}

#[test]
fn block_and_beacon() {
    let mut life = controller(10, 10);
    life.place_pattern(&Pattern::BLOCK, Loc::new(1, 1)).unwrap();
    let block = life.snapshot();
    life.step();
    assert_eq!(life.snapshot().live_cells(), block.live_cells());

    let mut life = controller(10, 10);
    life.place_pattern(&Pattern::BEACON, Loc::new(3, 3)).unwrap();
    assert_eq!(life.live_count(), 8);
    life.step();
    assert_eq!(life.live_count(), 6);
    life.step();
    assert_eq!(life.live_count(), 8);
}

#[test]
fn pulsar_has_period_three() {
    let mut life = controller(17, 17);
    life.place_pattern(&Pattern::PULSAR, Loc::new(2, 2)).unwrap();
    let start = life.snapshot().live_cells();
    life.step();
    assert_ne!(life.snapshot().live_cells(), start);
    life.step();
    life.step();
    assert_eq!(life.snapshot().live_cells(), start);
}

#[test]
fn clear_then_steps_stay_dead() {
    let mut life = controller(16, 16);
    life.randomize_and_reset(None).unwrap();
    assert!(life.live_count() > 0);
    life.clear_all();
    for _ in 0..10 {
        life.step();
        assert_eq!(life.live_count(), 0);
    }
}

#[test]
fn out_of_range_toggle_leaves_grid_unchanged() {
    let mut life = controller(6, 4);
    life.place_pattern(&Pattern::BLINKER, Loc::new(1, 0)).unwrap();
    let before = life.snapshot();
    assert!(life.toggle_cell(6, 0).is_err());
    assert!(life.toggle_cell(0, 4).is_err());
    assert!(life.toggle_cell(u32::MAX, u32::MAX).is_err());
    assert_eq!(life.snapshot(), before);
}
