//! Strips and the line segments they produce

/// One line segment handed to the frame renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint `(x, y)`
    pub start: [f64; 2],
    /// Second endpoint `(x, y)`
    pub end: [f64; 2],
    /// Anchor pixel colour replacing the default stroke, if requested
    pub color: Option<[u8; 3]>,
}

impl Segment {
    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        (self.end[0] - self.start[0]).hypot(self.end[1] - self.start[1])
    }

    /// Midpoint of the segment, which is the anchor it was emitted for
    pub fn midpoint(&self) -> [f64; 2] {
        [
            (self.start[0] + self.end[0]) / 2.0,
            (self.start[1] + self.end[1]) / 2.0,
        ]
    }
}

/// Width-modulated band sample at one anchor
///
/// `spread` is perpendicular to `direction`; both are unit vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    /// Sample point on the strip's centerline
    pub anchor: [f64; 2],
    /// Unit vector along the centerline
    pub direction: [f64; 2],
    /// Unit vector along which the half-width is applied
    pub spread: [f64; 2],
    /// Half of the drawn segment's length
    pub half_width: f64,
}

impl Strip {
    /// The segment `anchor - spread*half_width .. anchor + spread*half_width`
    pub fn segment(&self, color: Option<[u8; 3]>) -> Segment {
        let [ax, ay] = self.anchor;
        let [sx, sy] = self.spread;
        let w = self.half_width;
        Segment {
            start: [sx.mul_add(-w, ax), sy.mul_add(-w, ay)],
            end: [sx.mul_add(w, ax), sy.mul_add(w, ay)],
            color,
        }
    }
}
