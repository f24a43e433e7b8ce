use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASS, Item, ItemCategory, SULFURAS, advance_day};

/// Mixed catalogue with every category represented.
fn mixed_inventory(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| match i % 5 {
            0 => Item::new(AGED_BRIE, 2, 0),
            1 => Item::new(BACKSTAGE_PASS, 15, 20),
            2 => Item::new(SULFURAS, 0, 80),
            3 => Item::new("+5 Dexterity Vest", 10, 20),
            _ => Item::new("Elixir of the Mongoose", 5, 7),
        })
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for n in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            // Aged values clamp into range and stay there, so the per-pass
            // work is constant across iterations.
            let mut items = mixed_inventory(n);
            b.iter(|| advance_day(black_box(&mut items)));
        });
    }

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let names = [SULFURAS, AGED_BRIE, BACKSTAGE_PASS, "Elixir of the Mongoose"];

    c.bench_function("classify", |b| {
        b.iter(|| {
            for name in names {
                black_box(ItemCategory::of(black_box(name)));
            }
        });
    });
}

criterion_group!(benches, bench_advance_day, bench_classifier);
criterion_main!(benches);
