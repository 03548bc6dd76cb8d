use macroquad::prelude::*;
use param_world::TreeStyle;

use crate::geometry::{branch_end, world_to_screen};

const TALLEST_TREE: f32 = 20.0; // upper bound of the height parameter
const TRUNK_FRACTION: f32 = 0.35; // trunk share of the tree height

fn rgb(c: [f32; 3]) -> Color {
    Color::new(c[0], c[1], c[2], 1.0)
}

fn pixels_per_unit() -> f32 {
    screen_height() * 0.7 / TALLEST_TREE
}

// ground patch tinted by the scene colour, then the tree on top
pub fn draw_tree(style: &TreeStyle) {
    let ppu = pixels_per_unit();
    let [r, g, b, a] = style.color;
    let (_, gy) = world_to_screen(0.0, 0.0, ppu);
    draw_rectangle(0.0, gy, screen_width(), screen_height() - gy, Color::new(r, g, b, a.max(0.2)));
    draw_line(0.0, gy, screen_width(), gy, 2.0, DARKGRAY);

    let trunk = style.height * TRUNK_FRACTION;
    draw_branch(style, (0.0, 0.0), 0.0, trunk, style.width, style.depth, ppu);
}

/*
 * each level splits into two children at +/- split_angle, shrinking length
 * and thickness by `scale`; leaves sit on the terminal branches
 */
fn draw_branch(
    style: &TreeStyle,
    start: (f32, f32),
    angle: f32,
    length: f32,
    thickness: f32,
    depth: u32,
    ppu: f32,
) {
    let end = branch_end(start, angle, length);
    let (x1, y1) = world_to_screen(start.0, start.1, ppu);
    let (x2, y2) = world_to_screen(end.0, end.1, ppu);
    draw_line(x1, y1, x2, y2, (thickness * ppu * 0.5).max(1.0), rgb(style.branch_color));

    if depth <= 1 {
        draw_circle(x2, y2, style.leaf_size * ppu * 0.25, rgb(style.leaf_color));
        return;
    }

    let child_length = length * style.scale;
    let child_thickness = thickness * style.scale;
    for side in [-1.0, 1.0] {
        draw_branch(
            style,
            end,
            angle + side * style.split_angle,
            child_length,
            child_thickness,
            depth - 1,
            ppu,
        );
    }
}
