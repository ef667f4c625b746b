use std::path::PathBuf;

use combat::{CombatTemplate, SeededRng, Simulation, SimulationResult};

#[allow(unused)]
pub static SEED: u64 = 0x3a3f7af8085da7a2;

#[allow(unused)]
pub fn run_simulation(
    name: String,
    template: CombatTemplate,
) -> Result<SimulationResult, Box<dyn std::error::Error>> {
    let name = name.replace('"', "");
    let rng = SeededRng::seed_from_u64(template.seed.unwrap_or(SEED));
    let simulation: Simulation = template.try_into()?;
    let result =
        tracing::info_span!("simulation", %name).in_scope(|| simulation.run_once_with_rng(rng));
    Ok(result)
}

#[allow(unused)]
pub fn read_simulation(path: &PathBuf) -> Result<CombatTemplate, Box<dyn std::error::Error>> {
    let simulation_str = std::fs::read_to_string(path)?;
    let template = toml::from_str::<CombatTemplate>(&simulation_str)?;
    Ok(template.with_source(&path.to_string_lossy()))
}
