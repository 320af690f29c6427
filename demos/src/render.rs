//! Text rendering of a solved maze.

use crossterm::style::{Stylize, style};
use mazeai_core::{Direction, Maze, Point};

/// Glyph for each kind of position.
fn glyph(maze: &Maze, pos: Point) -> char {
    let Some(id) = maze.id_at(pos) else {
        return '#';
    };
    let cell = &maze[id];
    if maze.root() == Some(id) {
        'S'
    } else if cell.is_exit() {
        'E'
    } else if cell.is_on_solution_path() {
        '*'
    } else if cell.is_visited() {
        ','
    } else {
        '.'
    }
}

/// Render the maze one character per position. With `color`, path cells
/// are highlighted and explored cells dimmed.
pub fn render(maze: &Maze, color: bool) -> String {
    let (mut w, mut h) = (0, 0);
    for (_, cell) in maze.cells() {
        w = w.max(cell.pos().x + 1);
        h = h.max(cell.pos().y + 1);
    }

    let mut out = String::new();
    for y in 0..h {
        for x in 0..w {
            let ch = glyph(maze, Point::new(x, y));
            if !color {
                out.push(ch);
                continue;
            }
            let styled = match ch {
                'S' | 'E' => style(ch).bold().yellow(),
                '*' => style(ch).bold().green(),
                ',' => style(ch).dark_grey(),
                '#' => style(ch).dark_blue(),
                _ => style(ch),
            };
            out.push_str(&styled.to_string());
        }
        out.push('\n');
    }
    out
}

/// The flagged route as a list of moves, e.g. `right right bottom`.
pub fn moves(maze: &Maze) -> Option<String> {
    let route = maze.solution_route()?;
    let steps: Vec<String> = route
        .windows(2)
        .filter_map(|w| Direction::between(maze[w[0]].pos(), maze[w[1]].pos()))
        .map(|d| d.to_string())
        .collect();
    Some(steps.join(" "))
}
