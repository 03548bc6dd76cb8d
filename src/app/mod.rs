pub mod hud;
pub mod renderer;
pub mod user_settings;

const SHADOW_OFFSET: f32 = 2.0;
const FONT_SIZE: u16 = 20;
const LINE_SPACING: f32 = 22.0;
