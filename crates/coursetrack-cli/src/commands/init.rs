//! The `coursetrack init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create coursetrack.toml
    if std::path::Path::new("coursetrack.toml").exists() {
        println!("coursetrack.toml already exists, skipping.");
    } else {
        std::fs::write("coursetrack.toml", SAMPLE_CONFIG)?;
        println!("Created coursetrack.toml");
    }

    // Create example sheet
    std::fs::create_dir_all("sheets")?;
    let example_path = std::path::Path::new("sheets/example.toml");
    if example_path.exists() {
        println!("sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SHEET)?;
        println!("Created sheets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit sheets/example.toml with your assignments");
    println!("  2. Run: coursetrack validate --sheet sheets/example.toml");
    println!("  3. Run: coursetrack run --sheet sheets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# coursetrack configuration

# Transcript order when none is given: "asc" or "desc"
default_order = "asc"

# Output format for `coursetrack run`: "text" or "json"
default_format = "text"
"#;

const EXAMPLE_SHEET: &str = r#"[student]
name = "Example Student"

# category is "FA" (formative, 60 point pool) or "SA" (summative, 40 point pool)

[[assignments]]
name = "HW1"
category = "FA"
score = 80

[[assignments]]
name = "HW2"
category = "FA"
score = 20

[[assignments]]
name = "Midterm"
category = "SA"
score = 90
"#;
