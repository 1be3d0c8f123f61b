use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Vector3D,
    pub color: [f32; 4],
}

impl Default for TrailPoint {
    fn default() -> Self {
        TrailPoint {
            position: Vector3D::default(),
            color: [0.0; 4],
        }
    }
}

/// Fixed ring of recent satellite positions.
///
/// Storage is allocated once; `record` overwrites the slot under the cursor and
/// `reset` only rewinds the counters.
pub struct TrailBuffer {
    points: Vec<TrailPoint>,
    cursor: usize,
    live: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        TrailBuffer {
            points: vec![TrailPoint::default(); capacity.max(1)],
            cursor: 0,
            live: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn record(&mut self, position: Vector3D, color: [f32; 4]) {
        self.points[self.cursor] = TrailPoint { position, color };
        self.cursor = (self.cursor + 1) % self.capacity();
        if self.live < self.capacity() {
            self.live += 1;
        }
    }

    /// Alpha falls linearly with age and reaches zero at half the ring's span.
    pub fn age_fade(&mut self) {
        let capacity = self.capacity();
        for i in 0..self.live {
            let age = (self.cursor + capacity - i) % capacity;
            let normalized_age = age as f32 / capacity as f32;
            self.points[i].color[3] = (1.0 - normalized_age * 2.0).max(0.0);
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.live = 0;
    }

    /// Slots `0..len()`, in storage order, as handed to the renderer.
    pub fn live_points(&self) -> &[TrailPoint] {
        &self.points[..self.live]
    }
}
