// Copyright @yucwang 2026

use crate::math::constants::Float;

/// A rendered image with one named scalar channel list per pixel. The
/// channel order is exactly the integrator's `aov_names` order.
pub struct AovFrame {
    names: Vec<String>,
    data: Vec<Float>,
    width: usize,
    height: usize,
}

impl AovFrame {
    pub fn new(names: Vec<String>, width: usize, height: usize) -> Self {
        let stride = names.len();
        Self { names, data: vec![0.0; width * height * stride], width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn stride(&self) -> usize {
        self.names.len()
    }

    pub fn pixel(&self, x: usize, y: usize) -> &[Float] {
        let stride = self.stride();
        let start = (y * self.width + x) * stride;
        &self.data[start..start + stride]
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [Float] {
        let stride = self.stride();
        let start = (y * self.width + x) * stride;
        &mut self.data[start..start + stride]
    }
}

#[cfg(test)]
mod tests {
    use super::AovFrame;

    #[test]
    fn test_frame_layout() {
        let names = vec!["S0.R".to_string(), "S0.G".to_string(), "S0.B".to_string()];
        let mut frame = AovFrame::new(names, 4, 2);
        assert_eq!(frame.stride(), 3);
        assert_eq!(frame.pixel(3, 1).len(), 3);

        frame.pixel_mut(2, 1)[1] = 0.5;
        assert_eq!(frame.pixel(2, 1), &[0.0, 0.5, 0.0]);
        assert_eq!(frame.pixel(1, 1), &[0.0, 0.0, 0.0]);
    }
}
