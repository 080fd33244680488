use bazi_core::{
    Branch, CivilMoment, MonthStemRule, Stem, compute_four_pillars, compute_four_pillars_with,
    day_pillar, hour_stem, month_branch, month_stem, to_julian_day, year_pillar,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn primitives_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");
    group.bench_function("to_julian_day", |b| {
        b.iter(|| to_julian_day(black_box(2024), black_box(2), black_box(4)))
    });
    group.bench_function("day_pillar", |b| {
        b.iter(|| day_pillar(black_box(2024), black_box(2), black_box(4)))
    });
    group.bench_function("year_pillar", |b| {
        b.iter(|| year_pillar(black_box(2024), black_box(2), black_box(4)))
    });
    group.bench_function("month_pillar", |b| {
        b.iter(|| {
            let branch = month_branch(black_box(2), black_box(4));
            month_stem(black_box(Stem::Jia), branch)
        })
    });
    group.bench_function("hour_stem", |b| {
        b.iter(|| hour_stem(black_box(Stem::Wu), black_box(Branch::Zi)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let moment = CivilMoment::new(2024, 2, 4, 23).unwrap();

    let mut group = c.benchmark_group("four_pillars");
    group.bench_function("simplified", |b| {
        b.iter(|| compute_four_pillars(black_box(&moment)))
    });
    group.bench_function("traditional", |b| {
        b.iter(|| compute_four_pillars_with(MonthStemRule::Traditional, black_box(&moment)))
    });
    group.bench_function("validate_and_compute", |b| {
        b.iter(|| {
            CivilMoment::new(black_box(1990), black_box(5), black_box(15), black_box(14))
                .map(|m| compute_four_pillars(&m))
        })
    });
    group.finish();
}

criterion_group!(benches, primitives_bench, chart_bench);
criterion_main!(benches);
