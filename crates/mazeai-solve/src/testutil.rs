//! Shared helpers for solver tests.

use std::collections::{HashMap, VecDeque};

use mazeai_core::{CellId, Direction, Maze, MazeBuilder, Point};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Check that the flagged cells connect root to exit through real links and
/// return the route.
pub(crate) fn assert_valid_route(maze: &Maze) -> Vec<CellId> {
    let route = maze
        .solution_route()
        .expect("flagged cells do not connect root to exit");
    assert_eq!(route.first().copied(), maze.root());
    assert_eq!(route.last().copied(), maze.exit());
    for pair in route.windows(2) {
        let linked = maze[pair[0]]
            .neighbors(&Direction::ALL)
            .any(|n| n == pair[1]);
        assert!(linked, "{} and {} are not linked", pair[0], pair[1]);
    }
    route
}

/// Length in edges of the shortest root-to-exit path, computed
/// independently of the solvers.
pub(crate) fn shortest_len(maze: &Maze) -> Option<usize> {
    let root = maze.root()?;
    let exit = maze.exit()?;
    let mut dist = HashMap::from([(root, 0usize)]);
    let mut queue = VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        if id == exit {
            return dist.get(&id).copied();
        }
        let d = dist[&id];
        for n in maze[id].neighbors(&Direction::ALL) {
            dist.entry(n).or_insert_with(|| {
                queue.push_back(n);
                d + 1
            });
        }
    }
    None
}

/// A random `width` × `height` maze: a recursive-backtracker spanning tree
/// plus `extra` random openings to create loops. Root and exit are random
/// and may coincide.
pub(crate) fn random_maze(seed: u64, width: i32, height: i32, extra: usize) -> Maze {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut b = MazeBuilder::grid(width, height);
    let at = |b: &MazeBuilder, x: i32, y: i32| b.id_at(Point::new(x, y));

    let mut seen = vec![false; (width * height) as usize];
    let mut stack = vec![Point::new(0, 0)];
    seen[0] = true;
    while let Some(&cur) = stack.last() {
        let options: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| {
                let n = cur.step(d);
                n.x >= 0 && n.y >= 0 && n.x < width && n.y < height
                    && !seen[(n.y * width + n.x) as usize]
            })
            .collect();
        if options.is_empty() {
            stack.pop();
            continue;
        }
        let dir = options[rng.random_range(0..options.len())];
        let from = at(&b, cur.x, cur.y).unwrap();
        b.link(from, dir).unwrap();
        let next = cur.step(dir);
        seen[(next.y * width + next.x) as usize] = true;
        stack.push(next);
    }

    for _ in 0..extra {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let dir = Direction::ALL[rng.random_range(0..4)];
        let from = at(&b, x, y).unwrap();
        // Openings off the edge are simply skipped.
        let _ = b.link(from, dir);
    }

    let root = Point::new(rng.random_range(0..width), rng.random_range(0..height));
    let exit = Point::new(rng.random_range(0..width), rng.random_range(0..height));
    b.endpoints(root, exit).unwrap();
    b.build()
}
