use grid::{
    search::{bfs_steps, dijkstra, dijkstra_costs},
    Grid, GridBuilder, Position,
};

fn weights() -> Grid<usize> {
    let mut builder = GridBuilder::new();
    for row in ["131", "191", "111"] {
        builder
            .add_row(row, |c, _| c.to_digit(10).map(|d| d as usize))
            .unwrap();
    }

    builder.build()
}

#[test]
fn dijkstra_finds_cheapest_route() {
    let grid = weights();
    let end = Position::new(2, 2);
    let res = dijkstra(
        [(Position::new(0, 0), 0)],
        |pos| {
            grid.neighbors4(pos)
                .map(|next| (next, *grid.tile(&next).unwrap()))
                .collect::<Vec<_>>()
        },
        |pos| *pos == end,
    );

    assert_eq!(res, Some((end, 4)));
}

#[test]
fn dijkstra_without_goal_returns_none() {
    let res = dijkstra([(0u32, 0)], |n| (*n < 5).then(|| (n + 1, 1)), |n| *n == 10);

    assert_eq!(res, None);
}

#[test]
fn dijkstra_costs_respects_limit() {
    let costs = dijkstra_costs([(0i32, 0)], |n| [(n - 1, 1), (n + 1, 2)], 3);

    assert_eq!(costs.get(&-3), Some(&3));
    assert_eq!(costs.get(&1), Some(&2));
    assert_eq!(costs.get(&2), None);
    assert_eq!(costs.get(&-4), None);
}

#[test]
fn bfs_counts_unit_steps() {
    let steps = bfs_steps(0i32, |n| [n - 1, n + 1], 4);

    assert_eq!(steps.len(), 9);
    assert_eq!(steps.get(&-4), Some(&4));
    assert_eq!(steps.get(&3), Some(&3));
}
