use swarmline::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`, defaulting to `info`. Returns `false`
/// if a global subscriber was already set.
fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

fn main() -> Result<(), SwarmError> {
    init_logging();
    let kind: TopologyKind = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => TopologyKind::Global,
    };
    let sink = MemorySink::build();
    let swarm = SwarmBuilder::demo()?;
    let mut runner = Runner::new(Pipeline::standard(kind, sink.clone()), swarm);
    runner.run()?;
    println!("{}", runner.summary());
    for snapshot in sink.read().history() {
        println!(
            "{:>4} {:>12.6} {:?}",
            snapshot.iteration, snapshot.global_best.score, snapshot.global_best.position
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_installs_once() {
        init_logging();
        assert!(!init_logging());
    }
}
