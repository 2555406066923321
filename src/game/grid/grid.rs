use crate::game::types::{Cell, Direction, Grid, Link, Node, Position};

/// Empty grid of `rows` x `cols` slots.
pub fn generate_grid(rows: usize, cols: usize) -> Grid {
    vec![vec![None; cols]; rows]
}

/// Grid with an inactive node at each layout position.
pub fn generate_layout(rows: usize, cols: usize, nodes: &[Position]) -> Grid {
    let mut grid = generate_grid(rows, cols);
    for &pos in nodes {
        if let Some(slot) = slot_mut(&mut grid, pos) {
            *slot = Some(Cell::Node(Node::new(pos)));
        }
    }
    grid
}

pub fn cell_at(grid: &Grid, pos: Position) -> Option<&Cell> {
    grid.get(pos.y)?.get(pos.x)?.as_ref()
}

pub fn cell_at_mut(grid: &mut Grid, pos: Position) -> Option<&mut Cell> {
    slot_mut(grid, pos)?.as_mut()
}

fn slot_mut(grid: &mut Grid, pos: Position) -> Option<&mut Option<Cell>> {
    grid.get_mut(pos.y)?.get_mut(pos.x)
}

/// Position one step away, or `None` past the grid border.
pub fn neighbor(grid: &Grid, pos: Position, direction: Direction) -> Option<Position> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, |row| row.len());
    let next = match direction {
        Direction::Up => Position { x: pos.x, y: pos.y.checked_sub(1)? },
        Direction::Down => Position { x: pos.x, y: pos.y + 1 },
        Direction::Left => Position { x: pos.x.checked_sub(1)?, y: pos.y },
        Direction::Right => Position { x: pos.x + 1, y: pos.y },
    };
    (next.x < cols && next.y < rows).then_some(next)
}

/// Place a new link on an empty slot. Returns false if the slot is taken
/// or outside the grid.
pub fn place_link(grid: &mut Grid, pos: Position) -> bool {
    match slot_mut(grid, pos) {
        Some(slot) if slot.is_none() => {
            *slot = Some(Cell::Link(Link::new(pos)));
            true
        }
        _ => false,
    }
}

/// Rotate whatever occupies the slot. Returns true only if a link turned;
/// empty slots and nodes are left as they are.
pub fn rotate_cell(grid: &mut Grid, pos: Position) -> bool {
    match cell_at_mut(grid, pos) {
        Some(cell) => {
            cell.rotate();
            matches!(cell, Cell::Link(_))
        }
        None => false,
    }
}

pub fn count_links(grid: &Grid) -> usize {
    grid.iter().flatten().flatten().filter(|cell| matches!(cell, Cell::Link(_))).count()
}

/// Positions of every node, in row-major order.
pub fn node_positions(grid: &Grid) -> Vec<Position> {
    grid.iter()
        .flatten()
        .flatten()
        .filter(|cell| matches!(cell, Cell::Node(_)))
        .map(Cell::pos)
        .collect()
}
