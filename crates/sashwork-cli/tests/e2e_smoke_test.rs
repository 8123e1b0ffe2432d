use std::{fs, path::PathBuf};

use tempfile::tempdir;

use sashwork_cli::{Args, run};

/// Collects all .toml frame descriptions from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not inside the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &PathBuf, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        width: None,
        height: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir
            .path()
            .join(format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy()));

        match run(&args_for(demo_path, output_path.clone())) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Failed to read SVG output");
                assert!(svg.contains("<svg"), "{} produced no SVG", demo_path.display());
                assert!(svg.contains("evenodd"), "{} has no outline", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(demos_path().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(demo_path, output_path.clone())).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} wrote output despite failing",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_size_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("casement_window.toml");
    let output = temp_dir.path().join("resized.svg");

    let mut args = args_for(&input, output.clone());
    args.width = Some(3000.0);
    args.height = Some(1200.0);
    run(&args).expect("Resized demo should render");

    let svg = fs::read_to_string(&output).expect("Failed to read SVG output");
    assert!(svg.contains(r#"viewBox="-100 -100 3200 1400""#));

    // Narrower than the divisions
    args.width = Some(1000.0);
    assert!(run(&args).is_err());
}

#[test]
fn e2e_explicit_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[style]\npadding = 0\nbackground_color = \"white\"\n\n[style.shading]\nwidth = 10\ncolor = \"gray\"\n",
    )
    .expect("Failed to write config");

    let input = demos_path().join("casement_window.toml");
    let output = temp_dir.path().join("styled.svg");
    let mut args = args_for(&input, output.clone());
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).expect("Styled demo should render");

    let svg = fs::read_to_string(&output).expect("Failed to read SVG output");
    assert!(svg.contains(r#"viewBox="0 0 2400 900""#));
    assert!(svg.contains(r#"class="background""#));
    assert_eq!(svg.matches("<polygon").count(), 4);
}
