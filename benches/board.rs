// benches/board.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use arcane_prices::{
    board::build_section,
    price::qualifying_prices,
    specs::orders,
    ArcaneInfo,
};

/// A large order book in the market's response shape.
fn sample_body(n: usize) -> String {
    let statuses = ["ingame", "online", "offline"];
    let rows: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"order_type":"{}","platinum":{},"mod_rank":{},"user":{{"status":"{}","ingame_name":"seller{i}"}}}}"#,
                if i % 4 == 0 { "buy" } else { "sell" },
                5 + (i * 37) % 200,
                i % 6,
                statuses[i % statuses.len()],
            )
        })
        .collect();
    format!(r#"{{"payload":{{"orders":[{}]}}}}"#, rows.join(","))
}

fn bench_orders(c: &mut Criterion) {
    let body = sample_body(2_000);

    c.bench_function("orders_parse", |b| {
        b.iter(|| {
            let orders = orders::parse(black_box(&body)).unwrap();
            black_box(orders.len())
        })
    });

    let parsed = orders::parse(&body).unwrap();
    c.bench_function("qualifying_prices", |b| {
        b.iter(|| black_box(qualifying_prices(black_box(&parsed))))
    });
}

fn bench_section(c: &mut Criterion) {
    let results: Vec<Option<ArcaneInfo>> = (0..40u32)
        .map(|i| {
            let base = 5 + (i * 13) % 90;
            ArcaneInfo::new(&format!("arcane_{i}"), vec![base, base + 1, base + 3, base + 7], "images/fallback.png".into())
        })
        .collect();

    c.bench_function("build_section", |b| {
        b.iter(|| {
            let section = build_section("Cephalon Simaris", black_box(results.clone()));
            black_box(section.cards.len())
        })
    });
}

criterion_group!(benches, bench_orders, bench_section);
criterion_main!(benches);
