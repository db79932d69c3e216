use std::{env, process::ExitCode, time::Duration};

use bevy::{app::ScheduleRunnerPlugin, input::InputPlugin, log::LogPlugin, prelude::*};
use log::{error, info};

use tilenav::{
    config::SimulationConfig, controller::Controller, scenario::Scenario, simulator::Simulator,
};

fn main() -> ExitCode {
    let mut app = App::new();
    app.add_plugins(LogPlugin::default());

    let config = match env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => {
                info!("loaded config from {path}");
                config
            }
            Err(e) => {
                error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };

    let scenario = match Scenario::demo() {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("failed to build the demo scenario: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tick = Duration::from_secs_f64(1.0 / f64::from(config.simulation.tick_rate_hz.max(1)));
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(tick)))
        .add_plugins(InputPlugin)
        .add_plugins(Controller)
        .add_plugins(Simulator);
    scenario.setup(&mut app, config);

    app.run();
    ExitCode::SUCCESS
}
