use std::collections::{HashMap, VecDeque};

use super::types::{Coordinate, Direction};

/// Snake segments, head first, mirrored by an occupancy count per cell.
///
/// The occupancy map is a multiset: `grow` duplicates the tail, so a cell can
/// briefly hold two segments and must stay occupied until both are gone.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    body: VecDeque<Coordinate>,
    occupancy: HashMap<Coordinate, u32>,
    direction: Direction,
    self_collision: bool,
}

impl SnakeBody {
    pub fn new(start: Coordinate, direction: Direction) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            occupancy: HashMap::new(),
            direction,
            self_collision: false,
        };
        snake.push_front(start);
        snake
    }

    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.occupancy.contains_key(&cell)
    }

    /// Advances one cell along the current direction.
    ///
    /// The tail is vacated before the collision test, so stepping onto the cell
    /// the tail is leaving is allowed. On collision the head is not added and
    /// the body stays one segment short.
    pub fn move_forward(&mut self) {
        let new_head = self.head().moved(self.direction);

        if let Some(tail) = self.body.pop_back() {
            self.release(tail);
        }

        if self.occupies(new_head) {
            self.self_collision = true;
            return;
        }

        self.push_front(new_head);
    }

    /// Duplicates the tail segment. Only meaningful right after a
    /// non-colliding `move_forward` that landed on food.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
        *self.occupancy.entry(tail).or_insert(0) += 1;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head(&self) -> Coordinate {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Coordinate {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn body(&self) -> Vec<Coordinate> {
        self.body.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn is_self_collision(&self) -> bool {
        self.self_collision
    }

    /// Distinct cells covered by the body.
    pub fn occupied_cell_count(&self) -> usize {
        self.occupancy.len()
    }

    fn push_front(&mut self, cell: Coordinate) {
        self.body.push_front(cell);
        *self.occupancy.entry(cell).or_insert(0) += 1;
    }

    fn release(&mut self, cell: Coordinate) {
        if let Some(count) = self.occupancy.get_mut(&cell) {
            *count -= 1;
            if *count == 0 {
                self.occupancy.remove(&cell);
            }
        }
    }

    /// Builds a snake from explicit segments, head first.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Coordinate], direction: Direction) -> Self {
        let mut snake = Self::new(cells[0], direction);
        for &cell in &cells[1..] {
            snake.body.push_back(cell);
            *snake.occupancy.entry(cell).or_insert(0) += 1;
        }
        snake
    }

    #[cfg(test)]
    fn occupancy_matches_body(&self) -> bool {
        let mut expected: HashMap<Coordinate, u32> = HashMap::new();
        for cell in &self.body {
            *expected.entry(*cell).or_insert(0) += 1;
        }
        expected == self.occupancy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_new_snake_has_single_segment() {
        let snake = SnakeBody::new(c(2, 3), Direction::Up);
        assert_eq!(snake.body(), vec![c(2, 3)]);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
        assert!(snake.occupies(c(2, 3)));
        assert!(!snake.is_self_collision());
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_move_offsets_head_per_direction() {
        let cases = [
            (Direction::Right, c(6, 5)),
            (Direction::Left, c(4, 5)),
            (Direction::Up, c(5, 4)),
            (Direction::Down, c(5, 6)),
        ];
        for (direction, expected) in cases {
            let mut snake = SnakeBody::new(c(5, 5), direction);
            snake.move_forward();
            assert_eq!(snake.head(), expected);
            assert!(!snake.occupies(c(5, 5)));
            assert_eq!(snake.len(), 1);
        }
    }

    #[test]
    fn test_straight_line_translates_every_segment() {
        let mut snake = SnakeBody::from_cells(&[c(5, 5), c(4, 5), c(3, 5)], Direction::Right);
        for _ in 0..3 {
            snake.move_forward();
        }
        assert_eq!(snake.body(), vec![c(8, 5), c(7, 5), c(6, 5)]);
        assert!(snake.occupancy_matches_body());
    }

    #[test]
    fn test_length_changes_only_on_grow() {
        let mut snake = SnakeBody::from_cells(&[c(5, 5), c(4, 5)], Direction::Down);
        snake.move_forward();
        assert_eq!(snake.len(), 2);
        snake.grow();
        assert_eq!(snake.len(), 3);
        snake.move_forward();
        snake.move_forward();
        assert_eq!(snake.len(), 3);
        assert!(snake.occupancy_matches_body());
    }

    #[test]
    fn test_self_collision_does_not_add_head() {
        // Head at (2,1) turning left into (1,1), which stays occupied after the tail leaves (1,0).
        let mut snake = SnakeBody::from_cells(
            &[c(2, 1), c(2, 2), c(1, 2), c(1, 1), c(1, 0)],
            Direction::Left,
        );
        snake.move_forward();

        assert!(snake.is_self_collision());
        assert_eq!(snake.body(), vec![c(2, 1), c(2, 2), c(1, 2), c(1, 1)]);
        assert!(!snake.occupies(c(1, 0)));
        assert!(snake.occupancy_matches_body());
    }

    #[test]
    fn test_moving_into_vacating_tail_is_not_collision() {
        let mut snake = SnakeBody::from_cells(
            &[c(1, 1), c(2, 1), c(2, 2), c(1, 2)],
            Direction::Down,
        );
        snake.move_forward();

        assert!(!snake.is_self_collision());
        assert_eq!(snake.body(), vec![c(1, 2), c(1, 1), c(2, 1), c(2, 2)]);
        assert!(snake.occupancy_matches_body());
    }

    #[test]
    fn test_grow_duplicates_tail_and_keeps_cell_occupied() {
        let mut snake = SnakeBody::from_cells(&[c(3, 3), c(2, 3)], Direction::Right);
        snake.move_forward();
        snake.grow();
        assert_eq!(snake.body(), vec![c(4, 3), c(3, 3), c(3, 3)]);
        assert_eq!(snake.occupied_cell_count(), 2);

        // The duplicate leaves first; the real segment still holds the cell.
        snake.move_forward();
        assert!(snake.occupies(c(3, 3)));
        assert_eq!(snake.body(), vec![c(5, 3), c(4, 3), c(3, 3)]);
        assert!(snake.occupancy_matches_body());
    }

    #[test]
    fn test_body_is_a_copy() {
        let snake = SnakeBody::new(c(1, 1), Direction::Right);
        let mut copy = snake.body();
        copy[0].x = 99;
        assert_eq!(snake.head(), c(1, 1));
    }
}
