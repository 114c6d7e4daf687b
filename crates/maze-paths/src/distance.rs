use maze_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(6, 6);
        assert_eq!(manhattan(a, b), 12);
        assert_eq!(manhattan(b, a), 12);
        assert_eq!(manhattan(a, a), 0);
    }
}
