use std::fs;
use tempfile::tempdir;
use twig::{Mode, TwigBuilder, TwigError, TwigOptions, human_size, twig};

#[test]
fn test_root_line_first_in_all_modes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
    for mode in [Mode::DirFirst, Mode::DirOnly, Mode::FileFirst, Mode::Ordered] {
        let options = TwigBuilder::new(dir.path()).mode(mode).build();
        let result = twig(options).unwrap();
        assert_eq!(result.text.lines().next().unwrap(), name);
        assert_eq!(result.records[0].line, name);
    }
}

#[test]
fn test_not_a_directory() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("plain.txt");
    fs::write(&file_path, "x").unwrap();
    let result = twig(TwigBuilder::new(&file_path).build());
    assert!(matches!(result, Err(TwigError::NotADirectory(_))));
    let result = twig(TwigBuilder::new(dir.path().join("missing")).build());
    assert!(matches!(result, Err(TwigError::NotADirectory(_))));
}

#[test]
fn test_invalid_indent_rejected() {
    let dir = tempdir().unwrap();
    let options = TwigOptions {
        root: dir.path().to_path_buf(),
        indent: 0,
        ..Default::default()
    };
    assert!(matches!(twig(options), Err(TwigError::InvalidConfig(_))));
}

#[test]
fn test_builder_clamps_indent() {
    assert_eq!(TwigBuilder::new(".").indent(99).build().indent, 8);
    assert_eq!(TwigBuilder::new(".").indent(0).build().indent, 1);
}

#[test]
fn test_mode_codes_round_trip() {
    for mode in [Mode::DirFirst, Mode::DirOnly, Mode::FileFirst, Mode::Ordered] {
        assert_eq!(mode.code().parse::<Mode>().unwrap(), mode);
    }
    assert!("xx".parse::<Mode>().is_err());
}

#[test]
fn test_hidden_entries_excluded_by_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hide"), "h").unwrap();
    fs::write(dir.path().join("seen.txt"), "s").unwrap();
    let result = twig(TwigBuilder::new(dir.path()).build()).unwrap();
    assert!(!result.text.contains(".hide"));
    assert!(result.text.contains("seen.txt"));
    let result = twig(TwigBuilder::new(dir.path()).show_hidden(true).build()).unwrap();
    assert!(result.text.contains(".hide"));
}

#[test]
fn test_depth_bound() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    let options = TwigBuilder::new(dir.path())
        .mode(Mode::DirFirst)
        .max_depth(1)
        .build();
    let result = twig(options).unwrap();
    // The layer-1 directory still appears with its count metadata, but
    // contributes no children lines.
    assert!(result.text.contains("a/"));
    assert!(!result.text.contains("b/"));
    let a_meta = result.records[1].meta.as_ref().unwrap();
    assert!(!a_meta.is_file);
    assert_eq!(a_meta.size, "1");
}

#[test]
fn test_dir_only_excludes_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("f.txt"), "f").unwrap();
    fs::create_dir(dir.path().join("d")).unwrap();
    let result = twig(TwigBuilder::new(dir.path()).mode(Mode::DirOnly).build()).unwrap();
    assert!(!result.text.contains("f.txt"));
    assert!(result.text.contains("d/"));
}

#[test]
fn test_ordered_interleaves_by_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::create_dir(dir.path().join("a_dir")).unwrap();
    fs::write(dir.path().join("c.txt"), "c").unwrap();
    let result = twig(TwigBuilder::new(dir.path()).mode(Mode::Ordered).build()).unwrap();
    let a = result.text.find("a_dir/").unwrap();
    let b = result.text.find("b.txt").unwrap();
    let c = result.text.find("c.txt").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_sparse_no_trailing_separator() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("only.txt"), "o").unwrap();
    let result = twig(TwigBuilder::new(dir.path()).sparse(true).build()).unwrap();
    assert!(!result.text.ends_with("\n\n"));
    assert!(result.records.last().unwrap().meta.is_some());
}

#[test]
fn test_sparse_interior_separator() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/inner.txt"), "i").unwrap();
    let options = TwigBuilder::new(dir.path()).mode(Mode::FileFirst).build();
    let result = twig(options).unwrap();
    // Files come first under a continuing branch, so the separator after
    // them keeps the stripped bar prefix and carries no metadata.
    let separator = result
        .records
        .iter()
        .find(|r| r.meta.is_none())
        .expect("separator record");
    assert_eq!(separator.line, "│");
}

#[test]
fn test_line_metadata_parity() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "bb").unwrap();
    for mode in [Mode::DirFirst, Mode::DirOnly, Mode::FileFirst, Mode::Ordered] {
        let result = twig(TwigBuilder::new(dir.path()).mode(mode).build()).unwrap();
        assert_eq!(result.records.len(), result.text.lines().count());
        let root_meta = result.records[0].meta.as_ref().unwrap();
        assert!(!root_meta.is_file);
    }
}

#[test]
fn test_idempotence() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "bb").unwrap();
    for mode in [Mode::DirFirst, Mode::DirOnly, Mode::FileFirst, Mode::Ordered] {
        let first = twig(TwigBuilder::new(dir.path()).mode(mode).build()).unwrap();
        let second = twig(TwigBuilder::new(dir.path()).mode(mode).build()).unwrap();
        assert_eq!(first.text, second.text);
    }
}

#[test]
fn test_human_size() {
    assert_eq!(human_size(0), "0B");
    assert_eq!(human_size(1), "1B");
    assert_eq!(human_size(1023), "1023B");
    assert_eq!(human_size(1024), "1.0KB");
    assert_eq!(human_size(1536), "1.5KB");
    assert_eq!(human_size(1234567), "1.18MB");
    assert_eq!(human_size(1 << 30), "1.0GB");
    // Scale is capped at GB.
    assert_eq!(human_size(1 << 40), "1024.0GB");
}

#[test]
fn test_size_column_alignment() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.bin"), vec![0u8; 2048]).unwrap();
    let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
    let options = TwigBuilder::new(dir.path())
        .sparse(false)
        .show_size(true)
        .build();
    let result = twig(options).unwrap();
    let lines: Vec<&str> = result.text.lines().collect();
    // Widest size is "2.0KB" (5 chars); the root's count "1" is padded to it,
    // and the default indent of 4 spaces separates size from line.
    assert_eq!(lines[0], format!("    1    {name}"));
    assert_eq!(lines[1], "2.0KB        data.bin");
}

#[test]
fn test_dtail_suffix() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let result = twig(TwigBuilder::new(dir.path()).dtail("\\").build()).unwrap();
    assert!(result.text.contains("sub\\"));
}
