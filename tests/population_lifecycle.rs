use deluge::entities::{params_generator, Params};
use deluge::generation::Population;
use deluge::random::UniformSource;
use deluge::GaError;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

/// Entity that reports its own release
struct Counted {
    id: usize,
    released: Rc<Cell<usize>>,
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

struct Counters {
    created: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
}

impl Counters {
    fn new() -> Self {
        Self {
            created: Rc::new(Cell::new(0)),
            released: Rc::new(Cell::new(0)),
        }
    }

    fn generator(&self) -> impl FnMut() -> anyhow::Result<Counted> {
        let created = Rc::clone(&self.created);
        let released = Rc::clone(&self.released);
        move || {
            let id = created.get();
            created.set(id + 1);
            Ok(Counted {
                id,
                released: Rc::clone(&released),
            })
        }
    }
}

#[test]
fn size_matches_request_for_any_size() {
    for size in [0usize, 1, 2, 17, 256] {
        let counters = Counters::new();
        let population = Population::new(size, counters.generator()).unwrap();
        assert_eq!(population.len(), size);
        assert_eq!(counters.created.get(), size);
    }
}

#[test]
fn every_slot_holds_a_distinct_entity() {
    let counters = Counters::new();
    let population = Population::new(64, counters.generator()).unwrap();

    let ids: HashSet<usize> = population.iter().map(|entity| entity.id).collect();
    assert_eq!(ids.len(), 64);

    let addresses: HashSet<*const Counted> =
        population.iter().map(|entity| entity as *const Counted).collect();
    assert_eq!(addresses.len(), 64);
}

#[test]
fn dropping_the_population_releases_each_entity_once() {
    let counters = Counters::new();
    {
        let population = Population::new(10, counters.generator()).unwrap();
        assert_eq!(population.len(), 10);
        assert_eq!(counters.released.get(), 0);
    }
    assert_eq!(counters.released.get(), counters.created.get());
    assert_eq!(counters.released.get(), 10);
}

#[test]
fn regeneration_replaces_the_whole_generation() {
    let counters = Counters::new();
    let mut population = Population::new(6, counters.generator()).unwrap();
    let first: HashSet<usize> = population.iter().map(|entity| entity.id).collect();

    population.regenerate(4).unwrap();

    assert_eq!(counters.released.get(), 6);
    assert_eq!(population.len(), 4);
    assert!(population.iter().all(|entity| !first.contains(&entity.id)));

    drop(population);
    assert_eq!(counters.released.get(), 10);
    assert_eq!(counters.created.get(), 10);
}

#[test]
fn second_clear_is_a_no_op() {
    let counters = Counters::new();
    let mut population = Population::new(3, counters.generator()).unwrap();

    population.clear();
    population.clear();

    assert!(population.is_empty());
    assert_eq!(counters.released.get(), 3);
}

#[test]
fn generator_failure_on_kth_call_empties_population() {
    let size = 8;
    for k in 1..=size {
        let released = Rc::new(Cell::new(0));
        let calls = Rc::new(Cell::new(0));
        let armed = Rc::new(Cell::new(false));

        let generator = {
            let released = Rc::clone(&released);
            let calls = Rc::clone(&calls);
            let armed = Rc::clone(&armed);
            move || {
                let call = calls.get() + 1;
                calls.set(call);
                if armed.get() && call == k {
                    anyhow::bail!("generator exhausted at call {}", call);
                }
                Ok(Counted {
                    id: call,
                    released: Rc::clone(&released),
                })
            }
        };

        let mut population = Population::new(2, generator).unwrap();
        population.clear();
        released.set(0);
        calls.set(0);
        armed.set(true);

        let err = population.regenerate(size).unwrap_err();

        assert!(
            matches!(err, GaError::EntityCreation { index, .. } if index == k - 1),
            "unexpected error for k = {}: {}",
            k,
            err
        );
        assert!(population.is_empty());
        assert_eq!(released.get(), k - 1, "leak or double release for k = {}", k);
    }
}

#[test]
fn population_of_zeroed_params() {
    let population = Population::new(3, || Ok(Params::new(0.0, 0.0))).unwrap();

    assert_eq!(population.len(), 3);
    assert!(population
        .iter()
        .all(|params| params.x() == 0.0 && params.y() == 0.0));
}

#[test]
fn seeded_params_populations_are_reproducible() {
    let build = || {
        let source = UniformSource::new(-100_000.0, 100_000.0, Some(99)).unwrap();
        Population::new(20, params_generator(source)).unwrap()
    };

    let a = build();
    let b = build();

    assert_eq!(a.entities(), b.entities());
    assert!(a
        .iter()
        .all(|p| (-100_000.0..=100_000.0).contains(&p.x())
            && (-100_000.0..=100_000.0).contains(&p.y())));
}
