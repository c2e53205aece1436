//! Benchmarks for role catalog parsing and list-then-filter lookups.
//!
//! Compares plain directory lookups with cached ones over catalogs of
//! 100/1k/10k roles.

use std::sync::Arc;
use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vsphere_client::models::AuthorizationRole;
use vsphere_client::testing::InMemoryAuthorizationManager;
use vsphere_client::{CachedRoleDirectory, RoleDirectory};

fn generate_role_list(count: usize) -> String {
    let roles: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "_typeName": "AuthorizationRole",
                "roleId": 1000 + i,
                "system": false,
                "name": format!("role-{}", i),
                "info": {
                    "_typeName": "Description",
                    "label": format!("role-{}", i),
                    "summary": "generated"
                },
                "privilege": ["System.Anonymous", "System.Read", "System.View", "Datastore.Browse"]
            })
        })
        .collect();

    serde_json::to_string(&roles).unwrap()
}

fn seeded(count: usize) -> Arc<InMemoryAuthorizationManager> {
    let fake = (0..count).fold(InMemoryAuthorizationManager::new(), |fake, i| {
        fake.with_role(1000 + i as i32, &format!("role-{}", i), &["System.Read"])
    });
    Arc::new(fake)
}

fn bench_role_list_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("role_list_parsing");
    for count in [100, 1_000, 10_000] {
        let json = generate_role_list(count);
        group.bench_function(format!("{count}_roles"), |b| {
            b.iter(|| {
                let roles: Vec<AuthorizationRole> = serde_json::from_str(black_box(&json)).unwrap();
                black_box(roles)
            })
        });
    }
    group.finish();
}

fn bench_lookup_by_name(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("lookup_by_name");

    for count in [100, 1_000, 10_000] {
        let target = format!("role-{}", count - 1);

        let directory = RoleDirectory::new(seeded(count), Duration::from_secs(5));
        group.bench_function(format!("uncached_{count}_roles"), |b| {
            b.to_async(&runtime)
                .iter(|| async { black_box(directory.lookup_by_name(&target).await.unwrap()) })
        });

        let cached = CachedRoleDirectory::new(
            RoleDirectory::new(seeded(count), Duration::from_secs(5)),
            Duration::from_secs(60),
            1024,
        );
        group.bench_function(format!("cached_{count}_roles"), |b| {
            b.to_async(&runtime)
                .iter(|| async { black_box(cached.lookup_by_name(&target).await.unwrap()) })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_role_list_parsing, bench_lookup_by_name);
criterion_main!(benches);
