//! Reading the on-disk formats from real files.

use std::fs::{self, File};
use std::io::BufReader;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scascade_core::{EpidemicId, NodeId, StopCriterion};
use scascade_io::{
    attach_bounds, choose_seeds, read_bounds, read_random_seed_records, read_seed_records,
    InputError, TraceReader,
};

#[test]
fn initial_conditions_with_size_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let ic_path = dir.path().join("epidemics.txt");
    let bounds_path = dir.path().join("bounds.txt");
    fs::write(&ic_path, "3\n100 2 4 1\n101 1 0\n102 3 5 6 7\n").unwrap();
    fs::write(&bounds_path, "100 10\n101 20\n102 30\n").unwrap();

    let records = read_seed_records(BufReader::new(File::open(&ic_path).unwrap())).unwrap();
    let bounds = read_bounds(
        BufReader::new(File::open(&bounds_path).unwrap()),
        records.len(),
    )
    .unwrap();
    let ics = attach_bounds(records, &bounds, StopCriterion::MaxSize).unwrap();

    assert_eq!(ics.len(), 3);
    assert_eq!(ics[0].id, EpidemicId(100));
    assert_eq!(ics[0].seeds.as_slice(), &[NodeId(4), NodeId(1)]);
    assert_eq!(ics[2].bound, 30);
    assert!(ics.iter().all(|ic| ic.validate(8).is_ok()));
}

#[test]
fn random_seeds_ignore_missing_lists() {
    let dir = tempfile::tempdir().unwrap();
    let ic_path = dir.path().join("random.txt");
    fs::write(&ic_path, "2\n1 99\n2 1\n").unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let records =
        read_random_seed_records(BufReader::new(File::open(&ic_path).unwrap()), 100, &mut rng)
            .unwrap();
    assert_eq!(records[0].seeds.len(), 99);
    assert_eq!(records[1].seeds.len(), 1);
}

#[test]
fn all_but_one_node_seeded() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for n in [2usize, 3, 10, 101] {
        let seeds = choose_seeds(n - 1, n, &mut rng).unwrap();
        let mut distinct = seeds.to_vec();
        distinct.dedup();
        assert_eq!(distinct.len(), n - 1, "n = {n}");
    }
}

#[test]
fn trace_file_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out-maxdepth.trace");
    fs::write(&path, "1 0 1 3\n1 0 2 3\n2 1 2 3\n").unwrap();

    let records: Vec<_> = TraceReader::new(BufReader::new(File::open(&path).unwrap()))
        .collect::<Result<_, InputError>>()
        .unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.epidemic == EpidemicId(3)));
    assert_eq!(records[2].step, 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = File::open(dir.path().join("absent")).map_err(InputError::from);
    assert!(matches!(err, Err(InputError::Io(_))));
}
