//! Tests for noise fill, parameter validation and the smoothing loop

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use regionmap::{
        Color, GenerationConfig, PaletteSampling, RegionError, RegionGenerator, generate,
        generate_with_rng,
    };

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);
    const PALETTE: [Color; 2] = [Color::YELLOW, Color::GREEN];

    fn config(width: usize, height: usize, iterations: usize, window: usize) -> GenerationConfig {
        GenerationConfig {
            width,
            height,
            iterations,
            window,
            sampling: PaletteSampling::FirstTwo,
        }
    }

    // Tests windows without an odd integer root of at least 3 are rejected
    // Verified by skipping window validation
    #[test]
    fn test_invalid_windows_rejected() {
        for window in [1, 4, 8, 16, 24, 100] {
            assert!(
                matches!(
                    generate(&PALETTE, 4, 4, 10, window),
                    Err(RegionError::InvalidArgument { parameter: "window", .. })
                ),
                "window {window} should be rejected"
            );
        }
    }

    // Tests the documented valid windows succeed
    // Verified by rejecting windows above 9
    #[test]
    fn test_valid_windows_accepted() {
        for window in [9, 25, 49] {
            assert!(generate(&PALETTE, 8, 8, 50, window).is_ok());
        }
    }

    // Tests window validation precedes every other check
    // Verified by checking the palette first
    #[test]
    fn test_window_validated_first() {
        assert!(matches!(
            generate(&[], 0, 0, 10, 4),
            Err(RegionError::InvalidArgument { parameter: "window", .. })
        ));
    }

    // Tests an empty palette and zero dimensions are rejected
    // Verified by removing the palette check
    #[test]
    fn test_invalid_palette_and_dimensions() {
        assert!(matches!(
            generate(&[], 4, 4, 0, 9),
            Err(RegionError::InvalidArgument { parameter: "palette", .. })
        ));
        assert!(matches!(
            generate(&PALETTE, 0, 4, 0, 9),
            Err(RegionError::InvalidArgument { parameter: "width", .. })
        ));
        assert!(matches!(
            generate(&PALETTE, 4, 0, 0, 9),
            Err(RegionError::InvalidArgument { parameter: "height", .. })
        ));
    }

    // Tests zero iterations leaves pure noise from the first two colors only
    // Verified by sampling the full palette by default
    #[test]
    fn test_noise_uses_first_two_colors() {
        let palette = [Color::YELLOW, Color::GREEN, RED, BLUE];
        let Ok(map) = generate_with_rng(&palette, config(30, 30, 0, 9), StdRng::seed_from_u64(1))
        else {
            unreachable!("valid parameters");
        };

        assert_eq!(map.width(), 30);
        assert_eq!(map.height(), 30);
        assert!(
            map.pixels()
                .all(|(_, _, color)| color == Color::YELLOW || color == Color::GREEN)
        );
        assert!(map.pixels().any(|(_, _, color)| color == Color::YELLOW));
        assert!(map.pixels().any(|(_, _, color)| color == Color::GREEN));
    }

    // Tests full sampling reaches every palette color
    // Verified by ignoring the sampling policy
    #[test]
    fn test_full_sampling_reaches_every_color() {
        let palette = [Color::YELLOW, Color::GREEN, RED, BLUE];
        let config = GenerationConfig {
            sampling: PaletteSampling::Full,
            ..config(30, 30, 0, 9)
        };
        let Ok(map) = generate_with_rng(&palette, config, StdRng::seed_from_u64(2)) else {
            unreachable!("valid parameters");
        };

        for color in palette {
            assert!(map.pixels().any(|(_, _, cell)| cell == color), "{color} missing");
        }
    }

    // Tests sampling span per policy
    // Verified by returning the palette length for FirstTwo
    #[test]
    fn test_sampling_span() {
        assert_eq!(PaletteSampling::FirstTwo.span(5), 2);
        assert_eq!(PaletteSampling::FirstTwo.span(1), 1);
        assert_eq!(PaletteSampling::Full.span(5), 5);
        assert_eq!(PaletteSampling::default(), PaletteSampling::FirstTwo);
    }

    // Tests a single-color palette yields a uniform map
    // Verified by drawing index 1 regardless of palette length
    #[test]
    fn test_single_color_palette() {
        let Ok(map) = generate_with_rng(&[RED], config(6, 6, 100, 9), StdRng::seed_from_u64(3))
        else {
            unreachable!("valid parameters");
        };

        assert!(map.pixels().all(|(_, _, color)| color == RED));
    }

    // Tests equal seeds reproduce the same map
    // Verified by reseeding from entropy
    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = config(20, 15, 2_000, 9);
        let first = RegionGenerator::seeded(&PALETTE, config, 99).and_then(RegionGenerator::run);
        let second = RegionGenerator::seeded(&PALETTE, config, 99).and_then(RegionGenerator::run);

        assert!(first.is_ok());
        assert_eq!(first.ok(), second.ok());
    }

    // Tests the loop runs exactly the requested number of iterations
    // Verified by stopping one iteration early
    #[test]
    fn test_iteration_count() {
        let Ok(mut generator) = RegionGenerator::seeded(&PALETTE, config(10, 10, 25, 9), 4)
        else {
            unreachable!("valid parameters");
        };

        let mut executed = 0;
        while generator.execute_iteration().is_ok_and(|more| more) {
            executed += 1;
        }

        assert_eq!(executed, 25);
        assert_eq!(generator.iteration(), 25);
        assert!(generator.is_complete());
        assert!(generator.votes_applied() <= 25);
        assert!(generator.execute_iteration().is_ok_and(|more| !more));
    }

    // Tests zero iterations completes immediately
    // Verified by running one vote before checking completion
    #[test]
    fn test_zero_iterations_complete() {
        let Ok(mut generator) = RegionGenerator::seeded(&PALETTE, config(5, 5, 0, 9), 4) else {
            unreachable!("valid parameters");
        };
        let noise = generator.map().clone();

        assert!(generator.is_complete());
        assert!(generator.execute_iteration().is_ok_and(|more| !more));
        assert_eq!(generator.into_map(), noise);
    }

    // Tests smoothing only ever copies colors already present
    // Verified by overwriting with a palette color instead of the center color
    #[test]
    fn test_smoothing_keeps_noise_colors() {
        let palette = [Color::YELLOW, Color::GREEN, RED];
        let Ok(map) = generate_with_rng(
            &palette,
            config(25, 25, 5_000, 25),
            StdRng::seed_from_u64(5),
        ) else {
            unreachable!("valid parameters");
        };

        assert!(map.pixels().all(|(_, _, color)| color != RED));
    }

    // Tests votes on a uniform map always apply and never change it
    // Verified by inverting the threshold comparison
    #[test]
    fn test_uniform_map_is_stable() {
        let Ok(generator) = RegionGenerator::seeded(&[BLUE], config(12, 12, 500, 9), 6) else {
            unreachable!("valid parameters");
        };
        let Ok(map) = generator.run() else {
            unreachable!("uniform run cannot fail");
        };

        assert!(map.pixels().all(|(_, _, color)| color == BLUE));
    }

    // Tests the default configuration values
    // Verified by changing the default window
    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();

        assert_eq!(config.width, 400);
        assert_eq!(config.height, 300);
        assert_eq!(config.iterations, 100_000);
        assert_eq!(config.window, 9);
        assert_eq!(config.sampling, PaletteSampling::FirstTwo);
    }

    // Tests visualization captures the noise and the final map
    // Verified by skipping the initial frame
    #[test]
    fn test_visualization_capture() {
        let Ok(mut generator) = RegionGenerator::seeded(&PALETTE, config(8, 8, 100, 9), 7) else {
            unreachable!("valid parameters");
        };
        generator.enable_visualization(10);

        while generator.execute_iteration().is_ok_and(|more| more) {}

        let Some(capture) = generator.visualization.as_ref() else {
            unreachable!("visualization was enabled");
        };
        assert_eq!(capture.frame_count(), 11);
        assert_eq!(capture.frames().first().map(|f| f.iteration), Some(0));
        assert_eq!(capture.frames().last().map(|f| f.iteration), Some(100));
    }
}
