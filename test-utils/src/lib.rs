use std::{fs, path::Path};

use pretty_assertions::assert_eq;

/// Runs `codegen` on the JSON at `input_filepath` and compares the result
/// with the golden file next to it (same stem, `.go` extension).
pub fn test<F, P>(codegen: F, input_filepath: P)
where
    F: FnOnce(&[u8]) -> String,
    P: AsRef<Path>,
{
    let input_filepath = input_filepath.as_ref();
    let expected_filepath = input_filepath.with_extension("go");

    let input = fs::read(input_filepath)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", input_filepath.display(), err));
    let expected = fs::read_to_string(&expected_filepath)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", expected_filepath.display(), err));

    assert_eq!(
        normalize(&expected),
        normalize(&codegen(&input)),
        "output for {} differs from {}",
        input_filepath.display(),
        expected_filepath.display()
    );
}

/// Golden files may be checked out with CRLF line endings.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
}
