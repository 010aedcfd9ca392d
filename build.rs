use std::path::Path;

const MIN_PATTERN_LENGTH: usize = 4;
const MAX_PATTERN_LENGTH: usize = 8;

fn main() {
    let library_path = Path::new("libraries/restriction_sites.json");
    validate_library_file(library_path);
    set_build_dependencies();
}

fn validate_library_file(library_path: &Path) {
    // Ensure the built-in library exists at build time
    assert!(
        library_path.exists(),
        "\n\nLIBRARY BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the motif library file before building.\n",
        library_path.display()
    );

    let library_contents = std::fs::read_to_string(library_path).unwrap_or_else(|e| {
        panic!(
            "\n\nLIBRARY BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            library_path.display()
        );
    });

    let library: serde_json::Value = serde_json::from_str(&library_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nLIBRARY BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            library_path.display()
        );
    });

    validate_library_structure(&library);
}

fn validate_library_structure(library: &serde_json::Value) {
    assert!(
        library.is_object(),
        "\n\nLIBRARY BUILD ERROR: Root must be a JSON object\n\
         Got: {library}\n"
    );

    let motifs = library.get("motifs").unwrap_or_else(|| {
        panic!(
            "\n\nLIBRARY BUILD ERROR: Missing 'motifs' field\n\
             The library must have a top-level 'motifs' array.\n"
        );
    });

    let motifs = motifs.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nLIBRARY BUILD ERROR: 'motifs' must be an array\n\
             Got: {motifs}\n"
        );
    });

    for (i, motif) in motifs.iter().enumerate() {
        validate_motif_fields(motif, i);
    }
}

fn validate_motif_fields(motif: &serde_json::Value, index: usize) {
    let pattern = motif
        .get("pattern")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_else(|| {
            panic!("\n\nLIBRARY BUILD ERROR: Motif at index {index} missing 'pattern' field\n")
        });

    let label = motif
        .get("label")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_else(|| {
            panic!("\n\nLIBRARY BUILD ERROR: Motif '{pattern}' (index {index}) missing 'label' field\n")
        });

    assert!(
        !label.is_empty(),
        "\n\nLIBRARY BUILD ERROR: Motif '{pattern}' (index {index}) has an empty label\n"
    );

    assert!(
        pattern.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')),
        "\n\nLIBRARY BUILD ERROR: Motif '{pattern}' (index {index}) contains a non-ACGT character\n"
    );

    assert!(
        (MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&pattern.len()),
        "\n\nLIBRARY BUILD ERROR: Motif '{pattern}' (index {index}) must be \
         {MIN_PATTERN_LENGTH}-{MAX_PATTERN_LENGTH} bases long\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the library changes
    println!("cargo:rerun-if-changed=libraries/restriction_sites.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
