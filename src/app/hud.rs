use macroquad::prelude::*;
use param_world::{ParamId, ParameterSpace, Regime};

use super::user_settings::UserSettings;
use super::{FONT_SIZE, LINE_SPACING, SHADOW_OFFSET};

// text with a drop shadow so it stays readable over the scene
fn draw_shadowed(text: &str, x: f32, y: f32, color: Color) {
    draw_text(text, x + SHADOW_OFFSET, y + SHADOW_OFFSET, FONT_SIZE as f32, BLACK);
    draw_text(text, x, y, FONT_SIZE as f32, color);
}

/*
 * left column: sampler state and controls
 * right column: per-parameter mean and variance
 */
pub fn draw_hud(space: &ParameterSpace, settings: &UserSettings) {
    let regime = match space.regime() {
        Regime::Exploring => "exploring",
        Regime::Converged => "converged",
    };

    let status = [
        format!("seed: {}", space.seed()),
        format!("regime: {regime}"),
        format!("learning rate: {:.4}", space.learning_rate()),
        format!("samples: {}", space.sample_count()),
        format!("clamped draws: {}", space.fallback_draws()),
        format!("deviance: {:.2}", settings.deviance),
        String::new(),
        "space: new  u: uniform  enter: accept  backspace: reject".to_string(),
        "up/down: variability  r: reset  [ ]: deviance".to_string(),
    ];

    let mut y = 30.0;
    for line in &status {
        draw_shadowed(line, 20.0, y, WHITE);
        y += LINE_SPACING;
    }

    let x = screen_width() - 300.0;
    let mut y = 30.0;
    for id in ParamId::ALL {
        let line = format!(
            "{:<12} {:>7.3}  var {:.4}",
            id.name(),
            space.means()[id],
            space.variances()[id]
        );
        draw_shadowed(&line, x, y, LIGHTGRAY);
        y += LINE_SPACING;
    }
}
