use macroquad::prelude::*;

const DEVIANCE_STEP: f32 = 0.1;
const MAX_DEVIANCE: f32 = 4.0;

/// Front-end knobs that are not part of the sampler state.
#[derive(Debug, Clone, Copy)]
pub struct UserSettings {
    pub deviance: f32,
    /// Factor applied by the widen/narrow keys.
    pub variability_step: f32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            deviance: 1.0,
            variability_step: 1.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    NewCandidate,
    UniformCandidate,
    Accept,
    Reject,
    ChangeVariability(f32),
    ResetVariability,
}

impl UserSettings {
    // keyboard controls; deviance is handled here, everything else goes to the sampler
    pub fn poll_command(&mut self) -> Option<Command> {
        if is_key_pressed(KeyCode::LeftBracket) {
            self.deviance = (self.deviance - DEVIANCE_STEP).max(0.0);
        }
        if is_key_pressed(KeyCode::RightBracket) {
            self.deviance = (self.deviance + DEVIANCE_STEP).min(MAX_DEVIANCE);
        }

        if is_key_pressed(KeyCode::Space) {
            Some(Command::NewCandidate)
        } else if is_key_pressed(KeyCode::U) {
            Some(Command::UniformCandidate)
        } else if is_key_pressed(KeyCode::Enter) {
            Some(Command::Accept)
        } else if is_key_pressed(KeyCode::Backspace) {
            Some(Command::Reject)
        } else if is_key_pressed(KeyCode::Up) {
            Some(Command::ChangeVariability(self.variability_step))
        } else if is_key_pressed(KeyCode::Down) {
            Some(Command::ChangeVariability(1.0 / self.variability_step))
        } else if is_key_pressed(KeyCode::R) {
            Some(Command::ResetVariability)
        } else {
            None
        }
    }
}
