use life_background::{
    generate_background, generate_background_in, BackgroundConfig, Error, Random, SvgDocument,
    SvgSurface, ViewBox,
};

#[test]
fn background_is_reproducible_from_seed() {
    let config = BackgroundConfig::default();
    let mut first = SvgSurface::new();
    let mut second = SvgSurface::new();
    generate_background(32, 18, &mut first, &config, &mut Random::from_seed(2024)).unwrap();
    generate_background(32, 18, &mut second, &config, &mut Random::from_seed(2024)).unwrap();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn background_fills_viewport_and_draws_clusters() {
    let config = BackgroundConfig::default();
    let mut surface = SvgSurface::with_style(config.style.clone());
    let surface = generate_background(40, 25, &mut surface, &config, &mut Random::from_seed(11)).unwrap();

    assert_eq!(surface.view_box(), Some(ViewBox::new(0.0, 0.0, 400.0, 250.0)));
    assert!(surface.groups().iter().all(|group| !group.elements.is_empty()));
    assert!(surface.num_elements() >= surface.groups().len());
    for group in surface.groups() {
        assert!(group.x >= 0.0 && group.x < 400.0 && group.x % 10.0 == 0.0);
        assert!(group.y >= 0.0 && group.y < 250.0 && group.y % 10.0 == 0.0);
    }
    assert!(surface.to_string().contains("stroke=\"#ccc\""));
}

#[test]
fn zero_width_is_rejected_before_drawing() {
    let mut surface = SvgSurface::new();
    let result = generate_background(
        0,
        10,
        &mut surface,
        &BackgroundConfig::default(),
        &mut Random::from_seed(1),
    );
    assert!(matches!(result, Err(Error::InvalidDimension { width: 0, height: 10 })));
    assert_eq!(surface.view_box(), None);
}

#[test]
fn document_surface_is_looked_up_by_id() {
    let mut document = SvgDocument::new();
    document.insert("background", SvgSurface::new());
    let config = BackgroundConfig::default();

    generate_background_in(&mut document, "background", 8, 6, &config, &mut Random::from_seed(3))
        .unwrap();
    assert_eq!(
        document.surface("background").and_then(|s| s.view_box()),
        Some(ViewBox::new(0.0, 0.0, 80.0, 60.0))
    );

    let missing =
        generate_background_in(&mut document, "header", 8, 6, &config, &mut Random::from_seed(3));
    assert!(matches!(missing, Err(Error::MissingSurface(id)) if id == "header"));
}

#[test]
fn empty_world_draws_nothing() {
    let config = BackgroundConfig {
        initial_density: 0.0,
        ..BackgroundConfig::default()
    };
    let mut surface = SvgSurface::new();
    generate_background(5, 5, &mut surface, &config, &mut Random::from_seed(9)).unwrap();
    assert!(surface.groups().is_empty());
}

#[test]
fn invalid_tunables_fail_before_drawing() {
    let configs = [
        BackgroundConfig {
            stacking_threshold: 0.0,
            ..BackgroundConfig::default()
        },
        BackgroundConfig {
            initial_density: f64::NAN,
            ..BackgroundConfig::default()
        },
    ];
    for config in configs {
        let mut surface = SvgSurface::new();
        let result = generate_background(3, 3, &mut surface, &config, &mut Random::from_seed(1));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        assert_eq!(surface.view_box(), None);
    }
}
