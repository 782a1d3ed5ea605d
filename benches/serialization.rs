use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use dotpath::{from_str, parse, to_query_string, to_string};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Catalog {
    products: Vec<Product>,
}

#[derive(Serialize, Deserialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn catalog(size: u32) -> Catalog {
    Catalog {
        products: (0..size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = "active=true\nemail=alice@example.com\nid=123\nname=Alice";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_serialize_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_list");

    for size in [10, 50, 100, 500].iter() {
        let data = catalog(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&data)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_list");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&catalog(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str::<Catalog>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serialize_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    };

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data)))
    });
}

fn benchmark_deserialize_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    };
    let text = to_string(&data).unwrap();

    c.bench_function("deserialize_nested_struct", |b| {
        b.iter(|| from_str::<NestedData>(black_box(&text)))
    });
}

fn benchmark_parse_tree(c: &mut Criterion) {
    let text = to_string(&catalog(100)).unwrap();

    c.bench_function("parse_tree", |b| b.iter(|| parse(black_box(&text))));
}

fn benchmark_primitive_lists(c: &mut Criterion) {
    #[derive(Serialize, Deserialize)]
    struct Series<T> {
        values: Vec<T>,
    }

    let mut group = c.benchmark_group("primitive_lists");

    let numbers = Series {
        values: (0..100).collect::<Vec<i32>>(),
    };
    let bools = Series {
        values: (0..100).map(|i| i % 2 == 0).collect::<Vec<bool>>(),
    };
    let floats = Series {
        values: (0..100).map(|i| f64::from(i) * 1.5).collect::<Vec<f64>>(),
    };

    group.bench_function("serialize_integers", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });

    group.bench_function("serialize_booleans", |b| {
        b.iter(|| to_string(black_box(&bools)))
    });

    group.bench_function("serialize_floats", |b| {
        b.iter(|| to_string(black_box(&floats)))
    });

    let numbers_text = to_string(&numbers).unwrap();
    let bools_text = to_string(&bools).unwrap();
    let floats_text = to_string(&floats).unwrap();

    group.bench_function("deserialize_integers", |b| {
        b.iter(|| from_str::<Series<i32>>(black_box(&numbers_text)))
    });

    group.bench_function("deserialize_booleans", |b| {
        b.iter(|| from_str::<Series<bool>>(black_box(&bools_text)))
    });

    group.bench_function("deserialize_floats", |b| {
        b.iter(|| from_str::<Series<f64>>(black_box(&floats_text)))
    });

    group.finish();
}

fn benchmark_query_string(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("query_string", |b| {
        b.iter(|| to_query_string(black_box(&user)))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    let mut group = c.benchmark_group("comparison");

    group.bench_function("dot_serialize", |b| {
        b.iter(|| dotpath::to_string(black_box(&user)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    let dot_str = dotpath::to_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    group.bench_function("dot_deserialize", |b| {
        b.iter(|| dotpath::from_str::<User>(black_box(&dot_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("roundtrip_simple", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&user)).unwrap();
            let _deserialized: User = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_list,
    benchmark_deserialize_list,
    benchmark_serialize_nested,
    benchmark_deserialize_nested,
    benchmark_parse_tree,
    benchmark_primitive_lists,
    benchmark_query_string,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
