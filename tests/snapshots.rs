use std::fs;

use manna::testutil::{lattice_from, passive, seeded};
use manna::{RunConfig, RunStatus, Snapshot, run};

#[test]
fn runner_writes_snapshots_at_intervals_and_termination() {
    let dir = tempfile::tempdir().unwrap();
    let mut lattice = lattice_from(&[3, 0]);
    let mut source = seeded(5);
    let config = RunConfig {
        max_iterations: 5,
        report_interval: 0,
        flush_interval: Some(2),
        output_dir: Some(dir.path().to_path_buf()),
    };
    let report = run(
        &mut lattice,
        &passive(&[0, 1]),
        1,
        &mut source,
        &config,
        |_, _| {},
    )
    .unwrap();
    assert_eq!(report.status, RunStatus::CappedOut);

    // Interval checkpoints plus the terminal one.
    for iteration in [2u64, 4, 5] {
        let path = dir.path().join(format!("iter_{iteration:06}.jsonl"));
        let contents = fs::read_to_string(&path).unwrap();
        let snapshot: Snapshot = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(snapshot.iteration, iteration);
        assert_eq!(snapshot.occupancy.iter().map(|&c| u64::from(c)).sum::<u64>(), 3);
    }
    assert!(!dir.path().join("iter_000003.jsonl").exists());
}

#[test]
fn no_snapshots_without_an_output_dir() {
    // flush_interval alone must not write anything anywhere.
    let mut lattice = lattice_from(&[3, 0]);
    let mut source = seeded(5);
    let config = RunConfig {
        max_iterations: 3,
        report_interval: 0,
        flush_interval: Some(1),
        output_dir: None,
    };
    run(
        &mut lattice,
        &passive(&[0, 1]),
        1,
        &mut source,
        &config,
        |_, _| {},
    )
    .unwrap();
    assert_eq!(lattice.total_particles(), 3);
}
