//! Benchmarks for the damage calculation.
//!
//! Run with: `cargo bench --bench calculator_bench`
//!
//! Measures a single location per revetment kind over a storm, and a full
//! calculation over many locations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use revetment_rs::builder::{
    AsphaltWaveImpactProperties, GrassWaveImpactProperties, GrassWaveOvertoppingProperties,
    GrassWaveRunupProperties, LocationConstructionProperties, NaturalStoneProperties,
};
use revetment_rs::calculator::calculate_location;
use revetment_rs::location::AsphaltLayer;
use revetment_rs::{
    CalculationInput, CalculationInputBuilder, Calculator, CharacteristicPointType, TopLayerType,
};
use std::hint::black_box;

/// Storm of `n_steps` hourly steps with a rising and falling water level.
fn storm(builder: CalculationInputBuilder, n_steps: usize) -> CalculationInputBuilder {
    (0..n_steps).fold(builder, |builder, i| {
        let phase = i as f64 / n_steps as f64 * std::f64::consts::PI;
        let water_level = 1.0 + 3.0 * phase.sin();
        let hm0 = 0.8 + 1.2 * phase.sin();
        let begin = 3600.0 * i as f64;
        builder.add_time_step(begin, begin + 3600.0, water_level, hm0, 5.0 + hm0, 10.0)
    })
}

fn dike() -> CalculationInputBuilder {
    CalculationInputBuilder::new()
        .add_profile_point(0.0, 0.0, Some(CharacteristicPointType::OuterToe))
        .add_profile_point(30.0, 7.5, Some(CharacteristicPointType::OuterCrest))
        .add_profile_point(33.0, 7.5, Some(CharacteristicPointType::InnerCrest))
        .add_profile_point(45.0, 3.5, Some(CharacteristicPointType::InnerToe))
}

fn build(builder: CalculationInputBuilder) -> CalculationInput {
    match builder.build().into_result() {
        Ok(input) => input,
        Err(issues) => panic!("invalid benchmark input: {issues:?}"),
    }
}

/// Benchmark one location of every revetment kind.
fn bench_revetment_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("location_over_storm");

    let kinds: [(&str, LocationConstructionProperties); 5] = [
        (
            "grass_wave_runup",
            GrassWaveRunupProperties::new(12.0, TopLayerType::GrassClosedSod, 0.25).into(),
        ),
        (
            "grass_wave_impact",
            GrassWaveImpactProperties::new(8.0, TopLayerType::GrassClosedSod).into(),
        ),
        (
            "grass_wave_overtopping",
            GrassWaveOvertoppingProperties::new(35.0, TopLayerType::GrassClosedSod).into(),
        ),
        (
            "asphalt_wave_impact",
            AsphaltWaveImpactProperties::new(
                8.0,
                TopLayerType::HydraulicAsphaltConcrete,
                1.6,
                56.0,
                AsphaltLayer::new(0.16, 18000.0),
                0.25,
            )
            .into(),
        ),
        (
            "natural_stone",
            NaturalStoneProperties::new(8.0, TopLayerType::NordicStone, 1.65, 0.3).into(),
        ),
    ];

    for (name, properties) in kinds {
        let input = build(storm(dike(), 48).add_location(properties));
        let location = &input.derived_locations()[0];

        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(calculate_location(
                    black_box(location),
                    input.time_steps(),
                    input.profile_data(),
                    false,
                ))
            })
        });
    }

    group.finish();
}

/// Benchmark a full calculation for increasing numbers of locations.
fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    group.sample_size(20);

    for n_locations in [10, 50, 200] {
        let builder = (0..n_locations).fold(storm(dike(), 24), |builder, i| {
            let x = 1.0 + 28.0 * i as f64 / n_locations as f64;
            builder.add_location(GrassWaveImpactProperties::new(x, TopLayerType::GrassOpenSod))
        });
        let input = build(builder);

        group.bench_with_input(
            BenchmarkId::new("grass_wave_impact", n_locations),
            &input,
            |b, input| b.iter(|| Calculator::new(input.clone()).run()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_revetment_kinds, bench_calculator);
criterion_main!(benches);
