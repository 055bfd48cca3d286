use std::sync::LazyLock;

use crate::Choice;
use crate::Experiment;

pub static FRUIT: LazyLock<Experiment<&'static str>> = LazyLock::new(|| {
    Experiment::builder()
        .choices(vec![
            Choice::new("apples", 1.0),
            Choice::new("banana", 2.0),
            Choice::new("cherry", 7.0),
        ])
        .build()
});

pub static UNIFORM_DIE: LazyLock<Experiment<u8>> = LazyLock::new(|| {
    Experiment::builder()
        .choices((1..=6).map(|face| Choice::new(face, 1.0)).collect())
        .sample_count(600)
        .build()
});
