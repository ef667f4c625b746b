use combat::{SeededRng, Simulation, SimulationResult};

pub fn spawn_run_simulation_thread(
    chunk: usize,
    seed: u64,
    simulation: Simulation,
    thread_res_tx: std::sync::mpsc::Sender<SimulationResult>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let rng = SeededRng::seed_from_u64(seed);
        for result in simulation.run_with_rng(chunk, rng) {
            if let Err(error) = thread_res_tx.send(result) {
                tracing::error!(?error, "error sending simulation result");
                break;
            }
        }
    })
}
