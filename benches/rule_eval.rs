use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_rando::core::PlayerId;
use rust_rando::games::sm64::{Sm64Options, Sm64World};
use rust_rando::graph::MultiWorld;
use rust_rando::logic::{sweep, update_reachable, CollectionState, RuleContext};
use rust_rando::world::{Generator, World};

fn prepared(players: usize) -> Generator {
    let names = (1..=players).map(|i| format!("Player{i}")).collect();
    let world = MultiWorld::new(names, 1);
    let worlds: Vec<Box<dyn World>> = (0..players)
        .map(|i| {
            let options = Sm64Options::default().with_area_randomizer(i % 2 == 1);
            Box::new(Sm64World::new(PlayerId::new(i as u8), options)) as Box<dyn World>
        })
        .collect();
    let mut generator = Generator::new(world, worlds).expect("valid worlds");
    generator.prepare().expect("prepare");
    generator
}

/// A state holding every player's whole pool, reachability not yet computed.
fn full_state(world: &MultiWorld) -> CollectionState {
    let mut state = CollectionState::new(world);
    for item in &world.itempool {
        state.collect(item);
    }
    state
}

fn bench_rule_eval(c: &mut Criterion) {
    let generator = prepared(1);
    let world = generator.multiworld();
    let mut state = full_state(world);
    update_reachable(&mut state, world);

    c.bench_function("evaluate all location rules", |b| {
        b.iter(|| {
            let ctx = RuleContext::new(world, &state);
            world
                .locations()
                .iter()
                .filter(|l| black_box(&l.access_rule).evaluate(&ctx))
                .count()
        })
    });
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");
    for players in [1, 4, 16] {
        let generator = prepared(players);
        let world = generator.multiworld();
        let empty = CollectionState::new(world);
        let full = full_state(world);

        group.bench_function(format!("update_reachable/{players}p"), |b| {
            b.iter(|| {
                let mut state = full.clone();
                update_reachable(&mut state, black_box(world));
                state
            })
        });
        group.bench_function(format!("sweep/{players}p"), |b| {
            b.iter(|| {
                let mut state = empty.clone();
                sweep(&mut state, black_box(world))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rule_eval, bench_reachability);
criterion_main!(benches);
