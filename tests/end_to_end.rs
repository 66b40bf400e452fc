use std::collections::HashMap;

use approx::assert_relative_eq;
use swarmline::{particles::ConfigValue, prelude::*};

fn builder(problem_type: &str, function: &str, bounds: &[[Float; 2]]) -> SwarmBuilder {
    SwarmBuilder::new()
        .with_problem_type(problem_type)
        .unwrap()
        .with_objective_function(function)
        .unwrap()
        .with_num_particles(10)
        .unwrap()
        .with_bounds(bounds)
        .unwrap()
        .with_cognitive_weight(0.5)
        .unwrap()
        .with_social_weight(0.5)
        .unwrap()
        .with_inertia_weight(0.5)
        .unwrap()
        .with_max_iterations(10)
        .unwrap()
}

fn assert_within_bounds(swarm: &Swarm) {
    for p in &swarm.particles {
        let x = p.position.as_ref().unwrap();
        assert!(swarm.bounds().contains(x));
        assert!(swarm.bounds().contains(p.best_position.as_ref().unwrap()));
    }
    assert!(swarm
        .bounds()
        .contains(swarm.global_best_position.as_ref().unwrap()));
}

#[test]
fn global_sphere_minimization() {
    let swarm = builder("min", "sphere", &[[-5.0, 5.0], [-5.0, 5.0]])
        .with_seed(1)
        .build()
        .unwrap();
    let mut runner = Runner::new(Pipeline::standard_global(NopSink::build()), swarm);
    runner.run().unwrap();
    let swarm = runner.into_swarm();
    assert_eq!(swarm.current_iteration, 10);
    assert!(swarm.global_best_score.is_finite());
    assert!(swarm.global_best_score >= 0.0);
    assert_eq!(swarm.score_precision.len(), 10);
    assert_eq!(swarm.position_precision.len(), 10);
    assert_within_bounds(&swarm);
    assert_relative_eq!(
        swarm.global_best_score,
        swarm.global_best_position.as_ref().unwrap().norm_squared()
    );
}

#[test]
fn ring_topology_run() {
    let swarm = builder("min", "rastrigin", &[[-5.12, 5.12]; 3])
        .with_seed(2)
        .build()
        .unwrap();
    let mut runner = Runner::new(Pipeline::standard_ring(NopSink::build()), swarm);
    runner.run().unwrap();
    assert_eq!(runner.swarm.current_iteration, 10);
    for (i, p) in runner.swarm.particles.iter().enumerate() {
        assert_eq!(p.neighbours, vec![(i + 9) % 10, (i + 1) % 10]);
    }
    assert_within_bounds(&runner.swarm);
}

#[test]
fn maximization_never_decreases() {
    let sink = MemorySink::build();
    let swarm = builder("max", "sphere", &[[-1.0, 1.0], [-1.0, 1.0]])
        .with_seed(3)
        .build()
        .unwrap();
    let mut runner = Runner::new(Pipeline::standard_global(sink.clone()), swarm);
    runner.run().unwrap();
    let scores: Vec<Float> = sink
        .read()
        .history()
        .iter()
        .map(|s| s.global_best.score)
        .collect();
    assert_eq!(scores.len(), 10);
    assert!(scores.windows(2).all(|w| w[1] >= w[0]));
    assert!(scores.iter().all(|s| *s <= 2.0));
}

#[test]
fn minimization_never_increases() {
    let sink = MemorySink::build();
    let swarm = builder("min", "sphere", &[[-5.0, 5.0], [-5.0, 5.0]])
        .with_seed(4)
        .build()
        .unwrap();
    let mut runner = Runner::new(Pipeline::standard_global(sink.clone()), swarm);
    runner.run().unwrap();
    let sink = sink.read();
    let history = sink.history();
    assert!(history
        .windows(2)
        .all(|w| w[1].global_best.score <= w[0].global_best.score));
    for (i, snapshot) in history.iter().enumerate() {
        assert_eq!(snapshot.iteration, i);
        assert_eq!(snapshot.score_precision.len(), i + 1);
        assert_eq!(snapshot.finished_at.is_some(), i == 9);
        for particle in &snapshot.particles {
            assert!(particle.best_score >= snapshot.global_best.score);
        }
    }
}

#[test]
fn seeded_runs_repeat() {
    let run_once = || {
        let swarm = builder("min", "rastrigin", &[[-5.12, 5.12], [-5.12, 5.12]])
            .with_seed(99)
            .build()
            .unwrap();
        let mut runner = Runner::new(Pipeline::standard_ring(NopSink::build()), swarm);
        runner.run().unwrap();
        runner.summary()
    };
    let a = run_once();
    let b = run_once();
    assert_eq!(a.global_best_score, b.global_best_score);
    assert_eq!(a.global_best_position, b.global_best_position);
}

#[test]
fn one_dimensional_quadratic() {
    let swarm = builder("min", "quadratic_1d", &[[-10.0, 10.0]])
        .with_seed(5)
        .build()
        .unwrap();
    let mut runner = Runner::new(Pipeline::standard_global(NopSink::build()), swarm);
    runner.run().unwrap();
    assert_eq!(runner.swarm.global_best_position.as_ref().unwrap().len(), 1);
    assert!(runner.swarm.global_best_score >= 0.0);
}

#[test]
fn degenerate_bounds_pin_the_swarm() {
    let swarm = builder("min", "sphere", &[[1.0, 1.0], [-2.0, -2.0]])
        .with_seed(6)
        .build()
        .unwrap();
    let mut runner = Runner::new(Pipeline::standard_global(NopSink::build()), swarm);
    runner.run().unwrap();
    for p in &runner.swarm.particles {
        assert_eq!(p.position.as_ref().unwrap().as_slice(), &[1.0, -2.0]);
    }
    assert_relative_eq!(runner.swarm.global_best_score, 5.0);
}

#[test]
fn extreme_finite_bounds_run_to_completion() {
    let swarm = builder("min", "sphere", &[[-1e308, 1e308], [-1e308, 1e308]])
        .with_seed(12)
        .build()
        .unwrap();
    let mut runner = Runner::new(Pipeline::standard_ring(NopSink::build()), swarm);
    runner.run().unwrap();
    assert_eq!(runner.swarm.current_iteration, 10);
    assert_within_bounds(&runner.swarm);
    for p in &runner.swarm.particles {
        assert!(runner.swarm.bounds().contains(p.velocity.as_ref().unwrap()));
    }
}

#[test]
fn infinite_bounds_fail_at_configuration() {
    assert!(matches!(
        SwarmBuilder::new().with_bounds([[Float::NEG_INFINITY, Float::INFINITY]]),
        Err(ConfigError::NonFiniteBound { index: 0, .. })
    ));
}

#[test]
fn build_from_unordered_map() {
    let mut map = HashMap::new();
    map.insert("num_particles".to_string(), ConfigValue::Integer(6));
    map.insert("max_iterations".to_string(), ConfigValue::Integer(5));
    map.insert(
        "bounds".to_string(),
        ConfigValue::Bounds(vec![vec![-1.0, 1.0], vec![-1.0, 1.0]]),
    );
    map.insert("cognitive_weight".to_string(), ConfigValue::Number(1.0));
    map.insert("social_weight".to_string(), ConfigValue::Number(1.0));
    map.insert("inertia_weight".to_string(), ConfigValue::Number(0.5));
    map.insert(
        "objective_function".to_string(),
        ConfigValue::Text("quadratic_2d".to_string()),
    );
    map.insert("problem_type".to_string(), ConfigValue::Text("max".to_string()));
    let swarm = SwarmBuilder::new()
        .with_seed(7)
        .build_from_map(&map)
        .unwrap();
    assert_eq!(swarm.problem_type(), ProblemType::Maximize);
    assert!(swarm
        .particles
        .iter()
        .all(|p| p.problem_type == ProblemType::Maximize));
    let mut runner = Runner::new(Pipeline::standard_global(NopSink::build()), swarm);
    runner.run().unwrap();
    assert_eq!(runner.swarm.current_iteration, 5);
}

#[test]
fn run_from_json_config() {
    let config: SwarmConfig = serde_json::from_str(
        r#"{
            "topology": "ring",
            "problem_type": "min",
            "num_particles": 20,
            "max_iterations": 50,
            "bounds": [[-5.0, 5.0], [-5.0, 5.0]],
            "cognitive_weight": 1.5,
            "social_weight": 1.5,
            "inertia_weight": 0.5,
            "objective_function": "sphere",
            "seed": 11
        }"#,
    )
    .unwrap();
    let sink = MemorySink::build();
    let summary = run(&config, sink.clone()).unwrap();
    assert_eq!(sink.read().history().len(), 50);
    assert!(summary.global_best_score < 1.0);
    assert!(summary.time_taken_seconds.is_some());
    if summary.converged {
        let iteration = summary.convergence_iteration.unwrap();
        assert!(iteration < 50);
        assert_relative_eq!(
            summary.convergence_rate.unwrap(),
            100.0 * iteration as Float / 50.0
        );
    }
}

#[test]
fn invalid_configurations_are_rejected() {
    assert_eq!(
        SwarmBuilder::new().with_problem_type("median").unwrap_err(),
        ConfigError::InvalidProblemType("median".to_string())
    );
    assert_eq!(
        SwarmBuilder::new().with_max_iterations(0).unwrap_err(),
        ConfigError::TooFewIterations
    );
    assert_eq!(
        SwarmBuilder::new().with_objective_function("ackley").unwrap_err(),
        ConfigError::UnknownFunction("ackley".to_string())
    );
    assert!(SwarmBuilder::new().with_num_particles(1).is_err());
    assert!(SwarmBuilder::new().with_bounds([[1.0, 0.0]]).is_err());
    assert!(SwarmBuilder::new().with_cognitive_weight(-0.1).is_err());
    assert!(matches!(
        SwarmBuilder::new().with_problem_type("min").unwrap().build(),
        Err(ConfigError::MissingField(_))
    ));
}
