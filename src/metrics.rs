//! Derived geometry for one icon edge length.
//!
//! Every offset, radius, and anchor the elements draw with comes from
//! integer division of the target edge length, so the whole composition
//! scales linearly across density variants. Nothing here touches pixels;
//! [`IconMetrics`] is plain arithmetic that the element stack consumes.

/// Scalar offsets derived from a target edge length.
///
/// All fields use integer division of `edge`, matching the linear scaling
/// relationships of the icon: the margin is 1/16 of the edge, the moon 1/3,
/// the star's outer radius 1/8, and the mosque occupies the bottom half of
/// the width at 1/6 of the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMetrics {
    /// Target edge length in pixels.
    pub edge: u32,

    /// Inset of the background disc from every canvas edge.
    pub margin: u32,

    /// Height of the crescent's outer ellipse.
    pub moon_size: u32,

    /// Outer vertex radius of the star. Inner vertices sit at half of this.
    pub star_radius: u32,

    /// Width of the mosque's main building.
    pub mosque_width: u32,

    /// Height of the mosque's main building (and of the minaret).
    pub mosque_height: u32,

    /// Diameter of the dome ellipse.
    pub dome_size: u32,

    /// Width of the minaret, also its gap from the building.
    pub minaret_width: u32,
}

impl IconMetrics {
    /// Computes the metrics for the given edge length.
    ///
    /// Edge lengths below a handful of pixels degenerate (divisions round
    /// to zero and shapes vanish); the density table never produces them.
    pub fn for_edge(edge: u32) -> Self {
        let mosque_width = edge / 2;
        Self {
            edge,
            margin: edge / 16,
            moon_size: edge / 3,
            star_radius: edge / 8,
            mosque_width,
            mosque_height: edge / 6,
            dome_size: mosque_width / 3,
            minaret_width: mosque_width / 8,
        }
    }

    /// Top-left anchor of the crescent's layout box.
    pub fn moon_origin(&self) -> (i32, i32) {
        (
            (self.edge / 2 - self.moon_size / 4) as i32,
            (self.edge / 2 - self.moon_size / 2) as i32,
        )
    }

    /// Center of the star polygon, up and to the right of the moon.
    pub fn star_center(&self) -> (i32, i32) {
        (
            (self.edge / 2 + self.moon_size / 4) as i32,
            (self.edge / 2 - self.moon_size / 3) as i32,
        )
    }

    /// Top-left corner of the mosque's main building.
    ///
    /// The building is horizontally centered with its bottom edge resting
    /// on the disc margin.
    pub fn mosque_origin(&self) -> (i32, i32) {
        (
            (self.edge / 2 - self.mosque_width / 2) as i32,
            (self.edge - self.margin - self.mosque_height) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_density_scalars() {
        let m = IconMetrics::for_edge(48);
        assert_eq!(m.margin, 3);
        assert_eq!(m.moon_size, 16);
        assert_eq!(m.star_radius, 6);
        assert_eq!(m.mosque_width, 24);
        assert_eq!(m.mosque_height, 8);
        assert_eq!(m.dome_size, 8);
        assert_eq!(m.minaret_width, 3);
    }

    #[test]
    fn largest_density_scalars() {
        let m = IconMetrics::for_edge(192);
        assert_eq!(m.margin, 12);
        assert_eq!(m.moon_size, 64);
        assert_eq!(m.star_radius, 24);
    }

    #[test]
    fn anchors_at_smallest_density() {
        let m = IconMetrics::for_edge(48);
        assert_eq!(m.moon_origin(), (20, 16));
        assert_eq!(m.star_center(), (28, 19));
        assert_eq!(m.mosque_origin(), (12, 37));
    }

    #[test]
    fn mosque_bottom_rests_on_margin() {
        for edge in [48, 72, 96, 144, 192] {
            let m = IconMetrics::for_edge(edge);
            let (_, y) = m.mosque_origin();
            assert_eq!(y as u32 + m.mosque_height, edge - m.margin);
        }
    }
}
