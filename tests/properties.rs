use toroidal_automata::automaton::{run_line, step_grid, step_grid_n, step_row};
use toroidal_automata::{
    ElementaryRule, Grid, GridConfig, GridEngine, LifeRule, LineEngine, Row, RULE_30,
};

fn random_grids() -> Vec<Grid> {
    vec![
        Grid::random(16, 16, 0.3, 1).unwrap(),
        Grid::random(7, 13, 0.5, 2).unwrap(),
        Grid::random(1, 9, 0.5, 3).unwrap(),
        Grid::random(9, 1, 0.5, 4).unwrap(),
        Grid::random(2, 2, 0.6, 5).unwrap(),
    ]
}

#[test]
fn step_is_deterministic() {
    for grid in random_grids() {
        for rule in LifeRule::ALL {
            let a = step_grid_n(&grid, rule, 5);
            let b = step_grid_n(&grid.clone(), rule, 5);
            assert_eq!(a, b, "{rule} on {}x{}", grid.height(), grid.width());
        }
    }
}

#[test]
fn step_commutes_with_toroidal_shift() {
    for grid in random_grids() {
        for rule in LifeRule::ALL {
            for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1), (3, 2)] {
                let shifted_then_stepped = step_grid(&grid.shifted(dx, dy), rule);
                let stepped_then_shifted = step_grid(&grid, rule).shifted(dx, dy);
                assert_eq!(
                    shifted_then_stepped, stepped_then_shifted,
                    "{rule} shift ({dx}, {dy}) on {}x{}",
                    grid.height(),
                    grid.width()
                );
            }
        }
    }
}

#[test]
fn blinker_has_period_two() {
    for size in [5usize, 6, 9] {
        let mut grid = Grid::new(size, size).unwrap();
        let mid = size / 2;
        for x in mid - 1..=mid + 1 {
            grid.set(x, mid, 1);
        }

        let once = step_grid(&grid, LifeRule::GameOfLife);
        assert_ne!(once, grid);
        assert_eq!(step_grid(&once, LifeRule::GameOfLife), grid);
    }
}

#[test]
fn seeds_keeps_empty_grid_empty() {
    let mut engine = GridEngine::new(10, 14, LifeRule::Seeds, 0.0, 0).unwrap();
    engine.run(25, |_, grid| assert!(grid.is_all_dead()));
}

#[test]
fn rule_30_single_seed_step() {
    let row = Row::from_cells(vec![0, 0, 0, 1, 0, 0, 0]).unwrap();
    let next = step_row(&row, &RULE_30);

    let n = row.len();
    for i in 0..n {
        let left = row.get((i + n - 1) % n);
        let right = row.get((i + 1) % n);
        assert_eq!(next.get(i), RULE_30.apply(left, row.get(i), right));
    }
    assert_eq!(next.cells(), &[0, 0, 1, 1, 1, 0, 0]);
}

#[test]
fn run_reports_every_generation_in_order() {
    let mut engine = GridConfig {
        height: 20,
        width: 20,
        rule: LifeRule::Chaotic,
        p_alive: 0.25,
        seed: 3,
    }
    .build()
    .unwrap();
    let initial = engine.grid().clone();

    let mut indices = Vec::new();
    let mut first = None;
    engine.run(10, |t, grid| {
        if t == 0 {
            first = Some(grid.clone());
        }
        indices.push(t);
    });

    assert_eq!(indices, (0..=10).collect::<Vec<_>>());
    assert_eq!(first, Some(initial));
}

#[test]
fn same_seed_same_initial_grid() {
    for rule in LifeRule::ALL {
        let a = GridEngine::new(40, 25, rule, 0.4, 1234).unwrap();
        let b = GridEngine::new(40, 25, LifeRule::GameOfLife, 0.4, 1234).unwrap();
        assert_eq!(a.grid(), b.grid());
    }
}

#[test]
fn line_timeline_rows_are_generations() {
    let rule = ElementaryRule::from_number(90);
    let start = Row::centered(21).unwrap();
    let timeline = run_line(&start, &rule, 8);

    let mut engine = LineEngine::new(start, rule);
    let mut expected = Vec::new();
    engine.run(7, |_, row| expected.push(row.clone()));

    assert_eq!(timeline.rows(), expected.as_slice());
}
