use anyhow::Result;
use name_sorter::{
    check_parameters, load_names, sort_names, Emitter, ErrorKind, NamePipeline, NameRecord,
    NameSortError, SortEngine, DEFAULT_OUTPUT_FILE,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn last_names(records: &[NameRecord]) -> Vec<&str> {
    records.iter().map(|r| r.last_name()).collect()
}

#[test]
fn test_load_normal_data() -> Result<()> {
    let parsed = load_names(fixture("NormalData.txt"))?;

    assert_eq!(
        parsed.records,
        vec![
            NameRecord::new("Janet ", "Parsons"),
            NameRecord::new("Vaughn ", "Lewis"),
            NameRecord::new("Adonis Julius ", "Archer"),
        ]
    );
    assert!(parsed.skipped.is_empty());
    Ok(())
}

#[test]
fn test_load_invalid_data_keeps_only_valid_names() -> Result<()> {
    let parsed = load_names(fixture("InvalidData.txt"))?;

    assert_eq!(
        parsed.records,
        vec![
            NameRecord::new("Vaughn ", "Lewis"),
            NameRecord::new("Adonis Julius ", "Archer"),
            NameRecord::new("Shelby Nathan ", "Yoder"),
        ]
    );

    let skipped: Vec<(usize, &str)> = parsed
        .skipped
        .iter()
        .map(|s| (s.line_number, s.content.as_str()))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (3, "J4net Parsons"),
            (6, "Hunter Uriah Mathew Bentley Clarke"),
            (7, "Marin-Alvarez Leo"),
            (8, "Mikayla"),
        ]
    );

    let sorted = sort_names(parsed.records)?;
    assert_eq!(last_names(&sorted), vec!["Archer", "Lewis", "Yoder"]);
    Ok(())
}

#[test]
fn test_files_without_names() {
    for name in ["EmptyData.txt", "EmptyDataOnlyBlank.txt"] {
        let err = load_names(fixture(name)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoValidData, "{}", name);
    }
}

#[test]
fn test_malformed_only_file_reports_every_rejected_line() {
    match load_names(fixture("MalformedOnlyData.txt")).unwrap_err() {
        NameSortError::NoValidData { skipped, .. } => {
            let lines: Vec<(usize, &str)> = skipped
                .iter()
                .map(|s| (s.line_number, s.content.as_str()))
                .collect();
            assert_eq!(
                lines,
                vec![
                    (1, "J4net Parsons"),
                    (3, "Mikayla"),
                    (4, "Frankie Conner Ritter Bowen Lopez"),
                ]
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_check_parameters_with_fixture() {
    let args = vec![fixture("NormalData.txt")];
    assert!(check_parameters(Some(args.as_slice())).is_ok());

    let args = vec![fixture("NoSuchData.txt")];
    assert_eq!(
        check_parameters(Some(args.as_slice())).unwrap_err().kind(),
        ErrorKind::InputFileNotFound
    );
}

#[test]
fn test_end_to_end_sorts_and_writes_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT_FILE);

    let pipeline = NamePipeline::with_parts(
        fixture("UnsortedData.txt"),
        Emitter::with_output_path(&output_path),
        Vec::<u8>::new(),
    )?;
    let mut engine = SortEngine::new(pipeline);

    let summary = engine.run()?;

    assert_eq!(summary.names_sorted, 3);
    assert_eq!(summary.lines_skipped, 0);
    assert_eq!(summary.output_path, output_path);

    let expected = "Adonis Julius Archer\nHunter Uriah Mathew Clarke\nMikayla Lopez\n";
    assert_eq!(std::fs::read_to_string(&output_path)?, expected);

    let console = String::from_utf8(engine.into_pipeline().into_console())?;
    assert_eq!(console, format!("The sorted names are below:\n{}", expected));
    Ok(())
}

#[test]
fn test_end_to_end_overwrites_previous_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT_FILE);

    for input in ["UnsortedData.txt", "InvalidData.txt"] {
        let pipeline = NamePipeline::with_parts(
            fixture(input),
            Emitter::with_output_path(&output_path),
            Vec::<u8>::new(),
        )?;
        SortEngine::new(pipeline).run()?;
    }

    assert_eq!(
        std::fs::read_to_string(&output_path)?,
        "Adonis Julius Archer\nVaughn Lewis\nShelby Nathan Yoder\n"
    );
    Ok(())
}

#[test]
fn test_end_to_end_without_names_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT_FILE);

    let pipeline = NamePipeline::with_parts(
        fixture("EmptyDataOnlyBlank.txt"),
        Emitter::with_output_path(&output_path),
        Vec::<u8>::new(),
    )?;
    let mut engine = SortEngine::new(pipeline);

    let err = engine.run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoValidData);
    assert!(!output_path.exists());
    assert!(engine.into_pipeline().into_console().is_empty());
    Ok(())
}
