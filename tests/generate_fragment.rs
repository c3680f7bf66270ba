use std::fs;

use tempfile::tempdir;

use wixgen::generator::{generate, GeneratorConfig};
use wixgen::{list_files, render, resolve, GenerateError};

// Source attributes keep the directory argument as typed, placeholder and
// all, even though the listing happens in the resolved directory. Changing
// this is a behavior change for installers built from the output.
#[test]
fn fragment_uses_unresolved_directory_literal() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let release = tmp.path().join("out").join("Release").join("net8.0");
    fs::create_dir_all(&release)?;
    fs::write(release.join("b.txt"), b"b")?;
    fs::write(release.join("a.txt"), b"a")?;

    let literal = format!("{}/out/$(Configuration)/net8.0", tmp.path().display());
    let xml = generate(&GeneratorConfig::new(literal.as_str()))?;

    let files = list_files(std::path::Path::new(&resolve(&literal, "Release")))?;
    assert_eq!(files, vec!["a.txt", "b.txt"]);
    assert_eq!(xml, render(&literal, &files)?);
    assert_eq!(xml.matches("<Component>").count(), 2);
    assert!(xml.contains(&format!(r#"<File Source="{}\a.txt" />"#, literal)));
    Ok(())
}

#[test]
fn wix_sample_layout() -> Result<(), Box<dyn std::error::Error>> {
    let files = vec!["a.txt".to_owned(), "b.txt".to_owned()];
    let xml = render(r"C:\out\$(Configuration)\net8.0", &files)?;
    let lines: Vec<&str> = xml.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[4], r#"        <File Source="C:\out\$(Configuration)\net8.0\a.txt" />"#);
    assert_eq!(lines[7], r#"        <File Source="C:\out\$(Configuration)\net8.0\b.txt" />"#);
    Ok(())
}

#[test]
fn file_names_with_xml_characters_are_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("Tom & Jerry.dll"), b"x")?;

    let xml = generate(&GeneratorConfig::new(tmp.path().display().to_string()))?;
    assert!(xml.contains(r"\Tom &amp; Jerry.dll"), "{}", xml);
    assert!(!xml.contains("Tom & Jerry"));
    Ok(())
}

#[test]
fn only_subdirectory_means_empty_directory_warning() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    fs::create_dir(tmp.path().join("de"))?;

    let err = generate(&GeneratorConfig::new(tmp.path().display().to_string())).unwrap_err();
    assert!(matches!(err, GenerateError::EmptyDirectory(_)));
    assert!(err.is_warning());
    Ok(())
}
