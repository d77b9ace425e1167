//! End-to-end damage calculations.
//!
//! Builds inputs through the public builder and checks the calculated
//! damage series: accumulation, failure time interpolation and the
//! calculator lifecycle.

use approx::assert_relative_eq;
use revetment_rs::builder::{
    AsphaltWaveImpactProperties, GrassWaveImpactProperties, GrassWaveOvertoppingProperties,
    GrassWaveRunupProperties, NaturalStoneProperties,
};
use revetment_rs::location::AsphaltLayer;
use revetment_rs::{
    CalculationError, CalculationInput, CalculationInputBuilder, CalculationState, Calculator,
    CharacteristicPointType, OutputDetails, TopLayerType,
};

fn build(builder: CalculationInputBuilder) -> CalculationInput {
    let result = builder.build();
    for issue in result.issues() {
        println!("{issue}");
    }
    result.into_result().unwrap()
}

#[test]
fn test_single_step_scenario() {
    let input = build(
        CalculationInputBuilder::new()
            .add_profile_point(0.0, 10.0, Some(CharacteristicPointType::OuterToe))
            .add_profile_point(10.0, 20.0, Some(CharacteristicPointType::OuterCrest))
            .add_time_step(1.0, 2.0, 0.3, 0.4, 0.5, 0.6)
            .add_location(GrassWaveImpactProperties::new(0.1, TopLayerType::GrassClosedSod)),
    );

    let output = Calculator::new(input).run().unwrap();
    assert_eq!(output.location_dependent_outputs.len(), 1);

    let location = &output.location_dependent_outputs[0];
    assert_eq!(location.time_dependent_outputs.len(), 1);
    assert_relative_eq!(location.z, 10.1, max_relative = 1e-12);

    let step = &location.time_dependent_outputs[0];
    assert!(step.damage >= 0.0);
    assert!(step.time_of_failure.is_none());
    assert!(!location.failed());
    assert_eq!(output.n_failed(), 0);
    assert!(matches!(step.details, OutputDetails::GrassWaveImpact(_)));
}

#[test]
fn test_failure_time_is_bracketed_and_interpolated() {
    let mut builder = CalculationInputBuilder::new()
        .add_dike_profile_segment(0.0, 0.0, 30.0, 7.5)
        .add_dike_profile_point(0.0, CharacteristicPointType::OuterToe)
        .add_dike_profile_point(30.0, CharacteristicPointType::OuterCrest)
        .add_location(GrassWaveImpactProperties::new(8.0, TopLayerType::GrassOpenSod));
    for i in 0..6 {
        let begin = 1000.0 * i as f64;
        builder = builder.add_time_step(begin, begin + 1000.0, 2.2, 1.0, 5.0, 0.0);
    }

    let input = build(builder);
    let steps = input.time_steps().to_vec();
    let output = Calculator::new(input).run().unwrap();
    let location = &output.location_dependent_outputs[0];

    assert!(location.failed());
    let time_of_failure = location.time_of_failure.unwrap();

    let failing: Vec<usize> = location
        .time_dependent_outputs
        .iter()
        .enumerate()
        .filter_map(|(i, o)| o.time_of_failure.map(|_| i))
        .collect();
    assert_eq!(failing.len(), 1);

    let i = failing[0];
    let step = &steps[i];
    assert!(step.begin_time <= time_of_failure && time_of_failure <= step.end_time);

    let current = &location.time_dependent_outputs[i];
    let previous_damage = if i == 0 {
        location.initial_damage
    } else {
        location.time_dependent_outputs[i - 1].damage
    };
    assert!(previous_damage < location.failure_number);
    assert!(current.damage >= location.failure_number);

    let expected = step.begin_time
        + (location.failure_number - previous_damage) / current.increment_damage * step.duration();
    assert_relative_eq!(time_of_failure, expected, max_relative = 1e-12);
    assert_eq!(output.first_failure(), Some(time_of_failure));
}

#[test]
fn test_damage_never_decreases() {
    let input = build(
        CalculationInputBuilder::new()
            .add_profile_point(0.0, 0.0, Some(CharacteristicPointType::OuterToe))
            .add_profile_point(30.0, 7.5, Some(CharacteristicPointType::OuterCrest))
            .add_profile_point(33.0, 7.5, Some(CharacteristicPointType::InnerCrest))
            .add_profile_point(45.0, 3.5, Some(CharacteristicPointType::InnerToe))
            .add_time_step(0.0, 3600.0, 1.0, 1.0, 5.0, 10.0)
            .add_time_step(3600.0, 7200.0, 2.0, 1.5, 6.0, -20.0)
            .add_time_step(7200.0, 10800.0, 2.5, 1.2, 5.5, 0.0)
            .add_time_step(10800.0, 14400.0, 6.5, 2.0, 7.0, 45.0)
            .add_location(GrassWaveRunupProperties::new(12.0, TopLayerType::GrassClosedSod, 0.25))
            .add_location(GrassWaveImpactProperties::new(8.0, TopLayerType::GrassClosedSod))
            .add_location(GrassWaveOvertoppingProperties::new(35.0, TopLayerType::GrassClosedSod))
            .add_location(AsphaltWaveImpactProperties::new(
                8.0,
                TopLayerType::HydraulicAsphaltConcrete,
                1.6,
                56.0,
                AsphaltLayer::new(0.16, 18000.0),
                0.25,
            ))
            .add_location(NaturalStoneProperties::new(8.0, TopLayerType::NordicStone, 1.65, 0.3)),
    );

    let output = Calculator::new(input).run().unwrap();
    assert_eq!(output.location_dependent_outputs.len(), 5);

    for location in &output.location_dependent_outputs {
        let mut previous = location.initial_damage;
        for step in &location.time_dependent_outputs {
            assert!(step.increment_damage.is_finite(), "x = {}", location.x);
            assert!(step.increment_damage >= 0.0, "x = {}", location.x);
            assert!(step.damage >= previous);
            previous = step.damage;
        }
        assert_eq!(location.final_damage, previous);
    }
}

#[test]
fn test_calculator_lifecycle() {
    let builder = || {
        CalculationInputBuilder::new()
            .add_dike_profile_segment(0.0, 0.0, 30.0, 7.5)
            .add_dike_profile_point(0.0, CharacteristicPointType::OuterToe)
            .add_dike_profile_point(30.0, CharacteristicPointType::OuterCrest)
            .add_time_step(0.0, 3600.0, 2.0, 1.0, 5.0, 0.0)
            .add_location(GrassWaveImpactProperties::new(8.0, TopLayerType::GrassClosedSod))
    };

    let mut calculator = Calculator::new(build(builder()));
    assert!(calculator.run().is_ok());
    assert!(matches!(calculator.run(), Err(CalculationError::AlreadyRun(_))));

    let mut cancelled = Calculator::new(build(builder()));
    let token = cancelled.cancellation_token();
    token.cancel();
    assert_eq!(cancelled.run(), Err(CalculationError::Cancelled));
    assert_eq!(cancelled.state(), CalculationState::Cancelled);
}
