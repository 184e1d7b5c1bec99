use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use physics_sandbox::{CircleDesc, Sandbox, Settings, SettingsOverrides};

// --- Helper for filling a walled box with random circles ---
fn walled_box(num_circles: usize, gravity: f32) -> Sandbox {
    let settings = Settings::resolve(SettingsOverrides::new().gravity(0.0, gravity));
    let mut sandbox = Sandbox::with_seed(settings, 11);
    sandbox.make_4_walls();
    for _ in 0..num_circles {
        sandbox
            .add_circle(CircleDesc::new())
            .expect("default settings always spawn");
    }
    sandbox
}

fn run_steps(sandbox: &mut Sandbox, steps: usize) {
    let dt = sandbox.settings().dt;
    for _ in 0..steps {
        sandbox.default_update(black_box(dt));
    }
}

fn bench_bouncing_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("bouncing_circles");
    for &n in &[10usize, 100, 300] {
        group.bench_function(format!("{n}_circles_30_steps"), |b| {
            b.iter_batched(
                || walled_box(n, 0.0),
                |mut sandbox| run_steps(&mut sandbox, 30),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_settling_pile(c: &mut Criterion) {
    c.bench_function("pile_200_circles_60_steps", |b| {
        b.iter_batched(
            || walled_box(200, -900.0),
            |mut sandbox| run_steps(&mut sandbox, 60),
            BatchSize::SmallInput,
        )
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_1000_random_circles", |b| {
        b.iter(|| black_box(walled_box(1000, 0.0)))
    });
}

criterion_group!(benches, bench_bouncing_circles, bench_settling_pile, bench_spawn);
criterion_main!(benches);
