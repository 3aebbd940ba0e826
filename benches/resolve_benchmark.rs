//! Benchmarks for block graph resolution performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test resolution throughput with synthetic block graphs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unform::{resolve_with_options, Block, BlockType, EntityRole, Relationship, ResolveOptions};

/// Creates a synthetic block graph with the given number of form fields
/// and tables (each table a 10x4 grid of populated cells).
fn create_test_blocks(field_count: usize, table_count: usize) -> Vec<Block> {
    let mut blocks = Vec::new();

    for n in 0..field_count {
        blocks.push(Block::leaf(
            format!("kw-{}", n),
            BlockType::Word,
            format!("Field {}", n),
        ));
        blocks.push(Block::leaf(
            format!("vw-{}", n),
            BlockType::Word,
            format!("Value {}", n),
        ));
        blocks.push(
            Block::new(format!("key-{}", n), BlockType::KeyValueSet)
                .with_roles(vec![EntityRole::Key])
                .with_relationship(Relationship::value(vec![format!("val-{}", n)]))
                .with_relationship(Relationship::child(vec![format!("kw-{}", n)])),
        );
        blocks.push(
            Block::new(format!("val-{}", n), BlockType::KeyValueSet)
                .with_roles(vec![EntityRole::Value])
                .with_relationship(Relationship::child(vec![format!("vw-{}", n)])),
        );
    }

    for t in 0..table_count {
        blocks.push(Block::new(format!("t-{}", t), BlockType::Table).with_dimensions(10, 4));
        for row in 1..=10 {
            for col in 1..=4 {
                let word_id = format!("tw-{}-{}-{}", t, row, col);
                blocks.push(Block::leaf(
                    &word_id,
                    BlockType::Word,
                    format!("{}x{}", row, col),
                ));
                blocks.push(
                    Block::new(format!("c-{}-{}-{}", t, row, col), BlockType::Cell)
                        .at(row, col)
                        .with_relationship(Relationship::child(vec![word_id])),
                );
            }
        }
    }

    blocks
}

fn bench_resolve_small(c: &mut Criterion) {
    let blocks = create_test_blocks(10, 2);

    c.bench_function("resolve_small", |b| {
        b.iter(|| resolve_with_options(black_box(&blocks), &ResolveOptions::new().sequential()))
    });
}

fn bench_resolve_large(c: &mut Criterion) {
    let blocks = create_test_blocks(200, 20);

    c.bench_function("resolve_large_sequential", |b| {
        b.iter(|| resolve_with_options(black_box(&blocks), &ResolveOptions::new().sequential()))
    });

    c.bench_function("resolve_large_parallel", |b| {
        b.iter(|| resolve_with_options(black_box(&blocks), &ResolveOptions::default()))
    });
}

criterion_group!(benches, bench_resolve_small, bench_resolve_large);
criterion_main!(benches);
