//! Plain-text maze drawing for terminals.

use crate::mazegen::MazeResult;
use crate::types::{Point, Walls};

/// Draws the maze with `+`, `---` and `|`, marking the start `S` and end `E`
/// (`*` when both sit on the same cell).
pub fn to_ascii(maze: &MazeResult) -> String {
    let mut out = String::new();
    if maze.rows == 0 || maze.cols == 0 {
        return out;
    }

    for y in 0..maze.rows {
        for x in 0..maze.cols {
            let top = wall_of(maze, x, y).is_some_and(|walls| walls.top);
            out.push('+');
            out.push_str(if top { "---" } else { "   " });
        }
        out.push_str("+\n");

        for x in 0..maze.cols {
            let left = wall_of(maze, x, y).is_some_and(|walls| walls.left);
            out.push(if left { '|' } else { ' ' });
            out.push(' ');
            out.push(marker(maze, Point { x, y }));
            out.push(' ');
        }
        let right = wall_of(maze, maze.cols - 1, y).is_some_and(|walls| walls.right);
        out.push(if right { '|' } else { ' ' });
        out.push('\n');
    }

    for x in 0..maze.cols {
        let bottom = wall_of(maze, x, maze.rows - 1).is_some_and(|walls| walls.bottom);
        out.push('+');
        out.push_str(if bottom { "---" } else { "   " });
    }
    out.push_str("+\n");
    out
}

fn wall_of(maze: &MazeResult, x: usize, y: usize) -> Option<Walls> {
    maze.cell(Point { x, y }).map(|cell| cell.walls)
}

fn marker(maze: &MazeResult, point: Point) -> char {
    match (point == maze.start, point == maze.end) {
        (true, true) => '*',
        (true, false) => 'S',
        (false, true) => 'E',
        (false, false) => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mazegen::MazeCell;

    #[test]
    fn corridor_renders_open_shared_wall() {
        let mut left = Walls::CLOSED;
        left.right = false;
        let mut right = Walls::CLOSED;
        right.left = false;
        let maze = MazeResult {
            rows: 1,
            cols: 2,
            start: Point { x: 0, y: 0 },
            end: Point { x: 1, y: 0 },
            cells: vec![
                MazeCell { x: 0, y: 0, walls: left },
                MazeCell { x: 1, y: 0, walls: right },
            ],
        };

        assert_eq!(to_ascii(&maze), "+---+---+\n| S   E |\n+---+---+\n");
    }

    #[test]
    fn single_cell_marks_shared_endpoint() {
        let maze = MazeResult {
            rows: 1,
            cols: 1,
            start: Point { x: 0, y: 0 },
            end: Point { x: 0, y: 0 },
            cells: vec![MazeCell { x: 0, y: 0, walls: Walls::CLOSED }],
        };

        assert_eq!(to_ascii(&maze), "+---+\n| * |\n+---+\n");
    }
}
