//! Integration tests for the Alkire-Foster pipeline.

use alkire_foster::prelude::*;
use approx::assert_relative_eq;

/// 3 individuals × 2 dimensions, deprived when the value is 1.
fn create_worked_example() -> (AchievementMatrix, DimensionSet) {
    let achievements = AchievementMatrix::from_rows(
        vec!["d1".into(), "d2".into()],
        vec![
            vec![Value::from(1), Value::from(0)],
            vec![Value::from(1), Value::from(1)],
            vec![Value::from(0), Value::from(0)],
        ],
    )
    .unwrap();
    let dims = DimensionSet::from_positional(
        achievements.dimension_names(),
        vec![Value::from(1), Value::from(1)],
        &[0.5, 0.5],
    )
    .unwrap();
    (achievements, dims)
}

/// Synthetic survey: 40 households × 4 dimensions with region and gender.
fn create_synthetic_survey() -> (AchievementMatrix, Demographics) {
    let mut rng_seed = 42u64;
    let simple_rand = |seed: &mut u64| -> f64 {
        *seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        ((*seed >> 16) & 0x7FFF) as f64 / 32768.0
    };

    let mut rows = Vec::new();
    let mut demo_rows = Vec::new();
    for i in 0..40 {
        // Southern households are deprived more often
        let south = i % 2 == 1;
        let p = if south { 0.6 } else { 0.25 };
        let row: Vec<Value> = (0..4)
            .map(|_| Value::from(i64::from(simple_rand(&mut rng_seed) < p)))
            .collect();
        rows.push(row);
        demo_rows.push(vec![
            Value::from(if south { "S" } else { "N" }),
            Value::from(if i % 3 == 0 { "F" } else { "M" }),
        ]);
    }

    let achievements = AchievementMatrix::from_rows(
        vec![
            "schooling".into(),
            "nutrition".into(),
            "water".into(),
            "electricity".into(),
        ],
        rows,
    )
    .unwrap();
    let demographics =
        Demographics::new(vec!["region".into(), "gender".into()], demo_rows).unwrap();
    (achievements, demographics)
}

fn equal_weights() -> DimensionSet {
    DimensionSet::new(vec![
        Dimension::new("schooling", 1, 0.25),
        Dimension::new("nutrition", 1, 0.25),
        Dimension::new("water", 1, 0.25),
        Dimension::new("electricity", 1, 0.25),
    ])
    .unwrap()
}

#[test]
fn test_worked_example_stage_by_stage() {
    let (achievements, dims) = create_worked_example();

    let g0 = deprivation_matrix(&achievements, &dims).unwrap();
    assert_eq!(g0.to_rows(), vec![vec![1, 0], vec![1, 1], vec![0, 0]]);

    let weighted = weighted_deprivation_matrix(&g0, &dims).unwrap();
    let scores = deprivation_scores(&weighted);
    assert_eq!(scores.values(), &[0.5, 1.0, 0.0]);

    let censored = censor(&scores, 0.5);
    assert_eq!(censored.values(), &[0.5, 1.0, 0.0]);

    let h = headcount_ratio(censored.values()).unwrap();
    let a = average_deprivation_score(censored.values(), achievements.n_dimensions()).unwrap();
    let m0 = adjusted_headcount_ratio(h, a);
    assert_relative_eq!(h, 66.666_666_666_666_67, epsilon = 1e-9);
    assert_relative_eq!(a, 37.5, epsilon = 1e-10);
    assert_relative_eq!(m0, 25.0, epsilon = 1e-10);
}

#[test]
fn test_all_undeprived_raises_no_poor() {
    let (achievements, _) = create_worked_example();
    let dims = DimensionSet::new(vec![
        Dimension::new("d1", 7, 0.5),
        Dimension::new("d2", 7, 0.5),
    ])
    .unwrap();

    let g0 = deprivation_matrix(&achievements, &dims).unwrap();
    let weighted = weighted_deprivation_matrix(&g0, &dims).unwrap();
    let censored = censor(&deprivation_scores(&weighted), 0.5);

    assert_eq!(headcount_ratio(censored.values()).unwrap(), 0.0);
    let result = average_deprivation_score(censored.values(), 2);
    assert!(matches!(result, Err(MpiError::NoPoorIndividuals(_))));
}

#[test]
fn test_synthetic_survey() {
    let (achievements, demographics) = create_synthetic_survey();

    let result = run_af(&achievements, &equal_weights(), 0.5, Some(&demographics)).unwrap();

    let h = result.headcount_ratio();
    assert!((0.0..=100.0).contains(&h));
    assert!(result.summary.has_poor(), "synthetic data should contain poor households");

    let a = result.average_deprivation().unwrap();
    let m0 = result.adjusted_headcount().unwrap();
    assert_eq!(m0, h * a / 100.0);

    // Contributions add up
    let total: f64 = result.dimensions.iter().filter_map(|d| d.contribution).sum();
    assert_relative_eq!(total, 100.0, epsilon = 1e-9);

    // Shares per attribute sum to one
    let subgroups = result.subgroups.as_ref().unwrap();
    for attribute in &subgroups.shares {
        assert_relative_eq!(attribute.total_share(), 1.0, epsilon = 1e-12);
    }
    assert_eq!(
        subgroups.products.keys().collect::<Vec<_>>(),
        vec!["region-gender"]
    );
}

#[test]
fn test_headcount_monotone_in_k() {
    let (achievements, _) = create_synthetic_survey();
    let dims = equal_weights();

    let mut previous = f64::INFINITY;
    for k in [0.25, 0.5, 0.75, 1.0] {
        let result = Pipeline::new()
            .poverty_cutoff(k)
            .dimensions(&dims)
            .run(&achievements)
            .unwrap();
        assert!(result.headcount_ratio() <= previous);
        previous = result.headcount_ratio();
    }
}

#[test]
fn test_products_example() {
    let shares = vec![
        SubgroupShares {
            attribute: "region".into(),
            categories: vec![
                CategoryShare { category: "N".into(), population: 10, poor: 6, share: 0.6 },
                CategoryShare { category: "S".into(), population: 10, poor: 4, share: 0.4 },
            ],
        },
        SubgroupShares {
            attribute: "gender".into(),
            categories: vec![
                CategoryShare { category: "M".into(), population: 10, poor: 5, share: 0.5 },
                CategoryShare { category: "F".into(), population: 10, poor: 5, share: 0.5 },
            ],
        },
    ];

    let products = subgroup_products(&shares);
    let pair = products.get("region-gender").unwrap();
    assert_eq!(pair.entries.len(), 4);
    assert_relative_eq!(pair.product("N-M").unwrap(), 0.30, epsilon = 1e-12);
    assert_relative_eq!(pair.product("N-F").unwrap(), 0.30, epsilon = 1e-12);
    assert_relative_eq!(pair.product("S-M").unwrap(), 0.20, epsilon = 1e-12);
    assert_relative_eq!(pair.product("S-F").unwrap(), 0.20, epsilon = 1e-12);
}

#[test]
fn test_config_driven_run() {
    let yaml = r#"
name: two-dimension
description: worked example
poverty_cutoff: 0.5
dimensions:
  - name: d2
    cutoff: 1
    weight: 0.5
  - name: d1
    cutoff: 1
    weight: 0.5
"#;
    let (achievements, _) = create_worked_example();
    let config = MpiConfig::from_yaml(yaml).unwrap();
    let result = Pipeline::from_config(&config).run(&achievements).unwrap();

    // Config order does not matter: cutoffs are matched by name.
    assert_eq!(result.dimension_names, vec!["d1", "d2"]);
    assert_relative_eq!(result.adjusted_headcount().unwrap(), 25.0, epsilon = 1e-10);
}
