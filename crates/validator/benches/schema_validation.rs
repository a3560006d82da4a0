// Throughput of fluent validators and cached schemas
// Run with: cargo bench -p strata-validator

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use strata_validator::prelude::*;

struct Customer {
    name: String,
    email: String,
    age: String,
    tier: String,
}

impl Model for Customer {
    fn schema() -> Schema<Self> {
        Schema::new()
            .field(
                "name",
                |c: &Customer| &c.name,
                builder(|f, v| validate(f, v).required().length_max(64)),
            )
            .field(
                "email",
                |c: &Customer| &c.email,
                RulePack::<String>::new().required().email(),
            )
            .parsed(
                "age",
                |c: &Customer| c.age.as_str(),
                RulePack::<u8>::new().between(18, 120),
            )
            .field(
                "tier",
                |c: &Customer| &c.tier,
                RulePack::<String>::new().in_set(["basic", "gold"]),
            )
    }
}

fn customer(valid: bool) -> Customer {
    if valid {
        Customer {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            age: "36".into(),
            tier: "gold".into(),
        }
    } else {
        Customer {
            name: String::new(),
            email: "ada-at-example".into(),
            age: "x".into(),
            tier: "platinum".into(),
        }
    }
}

/// Single-value chains, the building block of every schema field
fn bench_fluent(c: &mut Criterion) {
    c.bench_function("fluent_text_chain", |b| {
        b.iter(|| {
            validate("email", black_box("ada@example.com"))
                .required()
                .email()
                .length_max(120)
                .result()
        });
    });

    c.bench_function("fluent_parsed_chain", |b| {
        b.iter(|| {
            validate_parsed::<i32>("age", black_box("42"))
                .between(18, 120)
                .result()
        });
    });
}

/// Full record validation through the cached schema
fn bench_schema(c: &mut Criterion) {
    let _ = SchemaCache::<Customer>::get();

    let mut group = c.benchmark_group("schema_validate");
    for valid in [true, false] {
        let record = customer(valid);
        let label = if valid { "valid" } else { "invalid" };
        group.bench_with_input(BenchmarkId::from_parameter(label), &record, |b, record| {
            b.iter(|| black_box(record).validate());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fluent, bench_schema);
criterion_main!(benches);
