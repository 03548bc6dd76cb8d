use macroquad::prelude::*;

// converts world coordinates (tree base at origin, y up) to screen pixels
pub fn world_to_screen(x: f32, y: f32, pixels_per_unit: f32) -> (f32, f32) {
    (screen_width() / 2.0 + x * pixels_per_unit, screen_height() * 0.9 - y * pixels_per_unit)
}

// end point of a branch leaving `start`; angle is measured from vertical, clockwise positive
pub fn branch_end(start: (f32, f32), angle: f32, length: f32) -> (f32, f32) {
    (start.0 + length * angle.sin(), start.1 + length * angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_branch_grows_up() {
        let (x, y) = branch_end((1.0, 2.0), 0.0, 3.0);
        assert_eq!(x, 1.0);
        assert_eq!(y, 5.0);
    }

    #[test]
    fn right_angle_branch_grows_sideways() {
        let (x, y) = branch_end((0.0, 0.0), std::f32::consts::FRAC_PI_2, 2.0);
        assert!((x - 2.0).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }
}
