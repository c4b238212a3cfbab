//! Prints the collider outlines of a sample map as an SVG document.
//!
//! Run with: cargo run --example outline_svg > map.svg

use tile_outline::io::collider_set_to_svg;
use tile_outline::{extract_colliders_partial, ExtractConfig, Vec2, WalkabilityGrid};

const MAP: &str = "
    XXXXXXXXXXXX
    X....X.....X
    X.XX.X.XXX.X
    X.XX...X.X.X
    X......XXX.X
    X.##.......X
    X..#..X..O..
    XXXXXXXXXXXX
";

fn main() {
    let grid: WalkabilityGrid = MAP.parse().unwrap();
    println!("{}", grid);

    let config = ExtractConfig::new().with_tile_size(Vec2::new(16.0, 16.0));
    let report = extract_colliders_partial(&grid, &config);

    for failure in &report.failures {
        eprintln!("skipped: {}", failure);
    }
    for region in &report.regions {
        eprintln!(
            "region {}: {} tiles, {} outer points, {} holes",
            region.region,
            region.cell_count,
            region.outer.len(),
            region.holes.len()
        );
    }

    let set = report.into_result().unwrap();
    print!("{}", collider_set_to_svg(&set, 16.0));
}
