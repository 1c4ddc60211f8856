use sqlcamp_types::typescript_gen::{generate_typescript_definitions, ALL_TYPE_NAMES};
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = generate_typescript_definitions(ALL_TYPE_NAMES)?;

    let output_dir = Path::new("web/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}
