use crate::models::Shape;

/// Closed shapes in the order they were closed, which is also draw order.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn shape(tag: f64) -> Shape {
        Shape::from_points(&[Point::new(tag, tag)])
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = ShapeStore::new();
        for i in 0..5 {
            store.append(shape(i as f64));
        }
        let tags: Vec<f64> = store.iter().map(|s| s.points()[0].latitude).collect();
        assert_eq!(tags, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_append_does_not_dedup() {
        let mut store = ShapeStore::new();
        store.append(shape(1.0));
        store.append(shape(1.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = ShapeStore::new();
        store.append(shape(1.0));
        store.clear();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }
}
