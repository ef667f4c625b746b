mod aux;

use std::path::PathBuf;

use aux::{SEED, read_simulation, run_simulation};
use combat::{SeededRng, Simulation, SimulationResult, SimulationSummary};
use rstest::rstest;

#[rstest]
fn test_victory(
    #[files("tests/combats/victory/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_simulation(&path)?;
    let result = run_simulation(format!("{:?}", path.file_name().unwrap()), template)?;
    assert!(
        matches!(result, SimulationResult::Victory(..)),
        "Simulation `{:?}` failed: Expected `Victory` got `{}`",
        path.file_name().unwrap(),
        result.short_str()
    );
    let inner = result.inner_ref();
    assert!(inner.enemies.is_empty());
    assert!(inner.reward.is_some());
    assert!(inner.player.power_cards.is_empty());
    Ok(())
}

#[rstest]
fn test_defeat(
    #[files("tests/combats/defeat/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_simulation(&path)?;
    let result = run_simulation(format!("{:?}", path.file_name().unwrap()), template)?;
    assert!(
        matches!(result, SimulationResult::Defeat(..)),
        "Simulation `{:?}` failed: Expected `Defeat` got `{}`",
        path.file_name().unwrap(),
        result.short_str(),
    );
    assert_eq!(result.inner_ref().player.combatant.health.current(), 0);
    Ok(())
}

#[rstest]
fn test_invalid_template(
    #[files("tests/combats/invalid/template/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = read_simulation(&path);
    assert!(
        matches!(result, Err(..)),
        "Template parsing `{:?}` succeeded: Expected `Err` got `{result:?}`",
        path.file_name().unwrap(),
    );
    Ok(())
}

#[rstest]
fn test_invalid_combat(
    #[files("tests/combats/invalid/combat/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_simulation(&path)?;
    let result = run_simulation(format!("{:?}", path.file_name().unwrap()), template);
    assert!(
        matches!(result, Err(..)),
        "Simulation `{:?}` succeeded: Expected `Err` got `{result:?}`",
        path.file_name().unwrap(),
    );
    Ok(())
}

#[rstest]
fn test_same_seed_same_combat(
    #[files("tests/combats/victory/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let simulation: Simulation = read_simulation(&path)?.try_into()?;
    let a = simulation.run_once_with_rng(SeededRng::seed_from_u64(SEED));
    let b = simulation.run_once_with_rng(SeededRng::seed_from_u64(SEED));
    assert_eq!(a.inner_ref().events, b.inner_ref().events);
    assert_eq!(a.inner_ref().turns, b.inner_ref().turns);
    Ok(())
}

#[test]
fn test_summary() -> Result<(), Box<dyn std::error::Error>> {
    let path = PathBuf::from("tests/combats/victory/louse.toml");
    let simulation: Simulation = read_simulation(&path)?.try_into()?;
    let results = simulation.run_with_rng(8, SeededRng::seed_from_u64(SEED));
    let summary = SimulationSummary::from(&results);
    assert_eq!(summary.total_runs, 8);
    assert_eq!(summary.victories, 8);
    assert_eq!(summary.win_rate.as_fraction(), 1.0);
    assert!(summary.average_gold >= 10.0 && summary.average_gold <= 20.0);
    assert_eq!(summary.average_enemy_health, 0.0);

    let empty = SimulationSummary::from(&Vec::<SimulationResult>::new());
    assert_eq!(empty.total_runs, 0);
    assert_eq!(empty.average_turns, 0.0);
    Ok(())
}
