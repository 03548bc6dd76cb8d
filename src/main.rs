use macroquad::prelude::*;
use param_world::{ParameterSpace, ParameterVector, SpaceConfig, TreeStyle};
use tracing::{error, info};

mod app;
mod geometry;

use app::hud::draw_hud;
use app::renderer::draw_tree;
use app::user_settings::{Command, UserSettings};

// optional first argument: path to a JSON SpaceConfig
fn load_config() -> SpaceConfig {
    match std::env::args().nth(1) {
        Some(path) => match SpaceConfig::load(&path) {
            Ok(config) => {
                info!(%path, "loaded sampler config");
                config
            }
            Err(err) => {
                error!(%path, %err, "falling back to default sampler config");
                SpaceConfig::default()
            }
        },
        None => SpaceConfig::default(),
    }
}

fn apply(command: Command, space: &mut ParameterSpace, candidate: &mut ParameterVector, deviance: f32) {
    match command {
        Command::NewCandidate => *candidate = space.generate(deviance),
        Command::UniformCandidate => *candidate = space.random_sp(),
        Command::Accept | Command::Reject => {
            space.move_means(candidate, command == Command::Accept);
            *candidate = space.generate(deviance);
        }
        Command::ChangeVariability(modifier) => {
            if let Err(err) = space.change_variability(modifier) {
                error!(%err, "ignoring variability change");
            }
        }
        Command::ResetVariability => space.reset_variability(),
    }
}

#[macroquad::main("Param World")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let space = ParameterSpace::from_config(load_config()).or_else(|err| {
        error!(%err, "invalid sampler config, using defaults");
        ParameterSpace::from_config(SpaceConfig::default())
    });
    let mut space = match space {
        Ok(space) => space,
        Err(err) => {
            error!(%err, "could not build parameter space");
            return;
        }
    };

    // start in exploration mode
    space.reset_variability();

    let mut settings = UserSettings::default();
    let mut candidate = space.generate(settings.deviance);

    loop {
        clear_background(Color::new(0.05, 0.07, 0.12, 1.0));

        if let Some(command) = settings.poll_command() {
            apply(command, &mut space, &mut candidate, settings.deviance);
        }

        draw_tree(&TreeStyle::from(&candidate));
        draw_hud(&space, &settings);

        next_frame().await
    }
}
