//! Pre-rendered sprites

use crate::sim::Rgba;

/// Square sprite with a per-pixel coverage mask
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    size: u32,
    color: Rgba,
    mask: Vec<bool>,
}

impl Sprite {
    /// Filled disc of the given radius, rendered once up front
    pub fn disc(radius: u32, color: Rgba) -> Self {
        let size = radius * 2;
        let r = radius as i64;
        let mut mask = vec![false; (size * size) as usize];

        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (r + dx, r + dy);
                // Discs overhang by one pixel on the far edges
                if x < size as i64 && y < size as i64 {
                    mask[(y * size as i64 + x) as usize] = true;
                }
            }
        }

        Self { size, color, mask }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Whether the pixel at (x, y) is covered
    pub fn covers(&self, x: u32, y: u32) -> bool {
        x < self.size && y < self.size && self.mask[(y * self.size + x) as usize]
    }

    /// Number of covered pixels
    pub fn coverage(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_shape() {
        let sprite = Sprite::disc(8, Rgba::WHITE);
        assert_eq!(sprite.size(), 16);
        assert!(sprite.covers(8, 8));
        assert!(sprite.covers(0, 8));
        assert!(!sprite.covers(0, 0));
        assert!(!sprite.covers(15, 15));
        assert!(!sprite.covers(16, 8));

        // Roughly pi * r^2
        let area = sprite.coverage() as f32;
        assert!((area - std::f32::consts::PI * 64.0).abs() < 25.0);
    }
}
