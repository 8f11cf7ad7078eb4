use std::time::Instant;

use combatcalc::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("combatcalc=debug")),
        )
        .init();

    let attacker = AttackerProfile::new(3, 4)
        .units(5)
        .attacks_per_unit(2)
        .build();
    let defender = DefenderProfile::new(4, 3).units(5).build();
    println!("{attacker}\n\n{defender}\n");

    let start = Instant::now();
    let report = CombatReport::new(&attacker, &defender)?;
    let elapsed = start.elapsed().as_micros();
    println!("{report}");
    println!("elapsed = {elapsed}us");

    let estimate = Approx::default().combat(&attacker, &defender)?;
    println!(
        "simulated failed saves: mean = {:.3} stddev = {:.3}",
        mean(&estimate),
        std_dev(&estimate)
    );
    Ok(())
}
