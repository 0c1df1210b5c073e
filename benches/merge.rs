use criterion::{criterion_group, criterion_main, Criterion};
use steam_inventory_cache::{
    response::InventoryResponse,
    inventory::{merge_descriptions, parse_descriptions},
};

fn criterion_benchmark(c: &mut Criterion) {
    let inventory_bytes = include_bytes!("fixtures/inventory_730.json");
    let inventory = serde_json::from_slice::<InventoryResponse>(inventory_bytes).unwrap();
    
    c.bench_function("deserializes inventory", |b| b.iter(|| {
        serde_json::from_slice::<InventoryResponse>(inventory_bytes).ok();
    }));
    
    c.bench_function("merges descriptions", |b| b.iter(|| {
        merge_descriptions(&inventory.assets, &inventory.descriptions, 2);
    }));
    
    c.bench_function("parses descriptions", |b| b.iter(|| {
        parse_descriptions(&inventory.descriptions, false);
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
