//! End-to-end map generation scenarios.

use rand::SeedableRng;
use warren::generation::utils::create_rng;
use warren::{
    generate, FillController, GenerationConfig, Grid, TextRenderer, Tile, WarrenError,
    WarrenResult,
};

#[test]
fn test_default_scenario_reaches_threshold() -> WarrenResult<()> {
    let mut grid = Grid::new(80, 40);
    let mut rng = create_rng(20240807);

    let stats = generate(&mut grid, &GenerationConfig::new(0.4, 0.1), &mut rng)?;

    // 40% of 3200 tiles
    assert!(grid.count(Tile::Room) >= 1280);
    assert_eq!(grid.count(Tile::Room), stats.tiles_filled);
    assert_eq!(grid.count(Tile::Room) + grid.count(Tile::Empty), 3200);
    Ok(())
}

#[test]
fn test_filling_fraction_holds_across_configs() -> WarrenResult<()> {
    for (seed, min_filling, max_room_size) in [
        (1u64, 0.2, 0.3),
        (2, 0.5, 0.15),
        (3, 0.6, 0.5),
        (4, 0.3, 1.0),
    ] {
        let mut grid = Grid::new(60, 40);
        let mut rng = create_rng(seed);
        generate(
            &mut grid,
            &GenerationConfig::new(min_filling, max_room_size),
            &mut rng,
        )?;

        let filled = grid.count(Tile::Room) as f64 / grid.len() as f64;
        assert!(
            filled >= min_filling,
            "seed {}: filled {} below target {}",
            seed,
            filled,
            min_filling
        );
    }
    Ok(())
}

#[test]
fn test_undersized_room_extent_is_rejected() {
    // 0.05 of a 10-tile dimension truncates to 0, below the 2-tile minimum
    let mut grid = Grid::new(10, 10);
    let mut rng = create_rng(5);

    let result = generate(&mut grid, &GenerationConfig::new(0.4, 0.05), &mut rng);
    assert!(matches!(result, Err(WarrenError::InvalidConfig(_))));
    assert_eq!(grid.count(Tile::Empty), 100);
}

#[test]
fn test_out_of_range_fractions_are_rejected() {
    let mut grid = Grid::new(80, 40);
    let mut rng = create_rng(6);

    for config in [
        GenerationConfig::new(0.0, 0.1),
        GenerationConfig::new(1.0, 0.1),
        GenerationConfig::new(0.4, 0.0),
        GenerationConfig::new(0.4, 1.5),
    ] {
        let result = generate(&mut grid, &config, &mut rng);
        assert!(
            matches!(result, Err(WarrenError::InvalidConfig(_))),
            "config {:?} should be rejected",
            config
        );
        assert_eq!(grid.count(Tile::Empty), grid.len(), "grid was mutated");
    }
}

#[test]
fn test_distinct_entropy_states_produce_distinct_maps() -> WarrenResult<()> {
    let config = GenerationConfig::new(0.4, 0.1);

    let mut grid_a = Grid::new(80, 40);
    let mut grid_b = Grid::new(80, 40);
    let mut rng_a = create_rng(1000);
    let mut rng_b = create_rng(2000);

    generate(&mut grid_a, &config, &mut rng_a)?;
    generate(&mut grid_b, &config, &mut rng_b)?;

    assert_ne!(grid_a, grid_b);
    assert!(grid_a.count(Tile::Room) >= 1280);
    assert!(grid_b.count(Tile::Room) >= 1280);
    Ok(())
}

#[test]
fn test_presets_generate_on_default_dimensions() -> WarrenResult<()> {
    for (name, config) in [
        ("small_rooms", GenerationConfig::small_rooms()),
        ("big_rooms", GenerationConfig::big_rooms()),
        ("boss", GenerationConfig::boss()),
    ] {
        let mut grid = Grid::new(80, 40);
        let mut rng = create_rng(42);
        let stats = generate(&mut grid, &config, &mut rng)?;
        let filled = stats.tiles_filled as f64 / grid.len() as f64;
        assert!(
            filled >= config.min_filling,
            "preset {}: filled {} below target {}",
            name,
            filled,
            config.min_filling
        );
    }
    Ok(())
}

#[test]
fn test_controller_reuse_across_fills() -> WarrenResult<()> {
    let controller = FillController::new();
    let config = GenerationConfig::new(0.3, 0.2);

    let mut grid = Grid::new(40, 40);
    let mut rng = rand::rngs::StdRng::seed_from_u64(9);

    let first = controller.fill(&mut grid, &config, &mut rng)?;
    let second = controller.fill(&mut grid, &config, &mut rng)?;

    // Each fill starts from a re-initialized grid
    assert_eq!(grid.count(Tile::Room), second.tiles_filled);
    assert!(first.tiles_filled as f64 >= grid.len() as f64 * 0.3);
    assert!(second.tiles_filled as f64 >= grid.len() as f64 * 0.3);
    Ok(())
}

#[test]
fn test_rendered_map_has_grid_shape() -> WarrenResult<()> {
    let mut grid = Grid::new(32, 16);
    let mut rng = create_rng(77);
    generate(&mut grid, &GenerationConfig::new(0.4, 0.3), &mut rng)?;

    let text = TextRenderer::new().render(&grid);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 16);
    assert!(lines.iter().all(|line| line.len() == 32));
    assert!(lines
        .iter()
        .all(|line| line.chars().all(|c| c == '#' || c == '.')));

    let rendered_rooms = text.chars().filter(|&c| c == '#').count();
    assert_eq!(rendered_rooms, grid.count(Tile::Room));
    Ok(())
}

#[test]
fn test_config_loads_from_json_file() -> WarrenResult<()> {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"min_filling": 0.25, "max_room_size": 0.2}}"#)?;

    let text = std::fs::read_to_string(file.path())?;
    let config: GenerationConfig = serde_json::from_str(&text)?;
    assert_eq!(config, GenerationConfig::new(0.25, 0.2));

    let mut grid = Grid::new(40, 40);
    let mut rng = create_rng(3);
    generate(&mut grid, &config, &mut rng)?;
    assert!(grid.count(Tile::Room) as f64 >= grid.len() as f64 * 0.25);
    Ok(())
}
