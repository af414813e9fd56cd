use cuescript_core::parser::{ParseError, Parser};
use cuescript_core::record::{Cuesheet, Record};

fn parse(input: &str) -> Result<Cuesheet, Vec<ParseError>> {
    Parser::new(input).parse()
}

#[test]
fn dialogue_record_fields_are_verbatim() {
    let sheet = parse("Amy|Happy|Hello there!").unwrap_or_else(|errs| {
        panic!("Parse failed: {:#?}", errs);
    });

    assert_eq!(sheet.records.len(), 1);
    match &sheet.records[0] {
        Record::Dialogue { line, speaker, expression, text } => {
            assert_eq!(*line, 1);
            assert_eq!(speaker, "Amy");
            assert_eq!(expression, "Happy");
            assert_eq!(text, "Hello there!");
        }
        other => panic!("Expected Dialogue, got {:?}", other),
    }
}

#[test]
fn fields_are_not_trimmed() {
    let sheet = parse("Amy | Happy | Hello").unwrap();
    match &sheet.records[0] {
        Record::Dialogue { speaker, expression, text, .. } => {
            assert_eq!(speaker, "Amy ");
            assert_eq!(expression, " Happy ");
            assert_eq!(text, " Hello");
        }
        other => panic!("Expected Dialogue, got {:?}", other),
    }
}

#[test]
fn choice_record_keeps_pairs_in_file_order() {
    let sheet = parse("[Choice]|Yes|SceneA|No|SceneB|Maybe|SceneC").unwrap();

    match &sheet.records[0] {
        Record::Choice { options, .. } => {
            assert_eq!(options.len(), 3);
            assert_eq!(options[0].label, "Yes");
            assert_eq!(options[0].target, "SceneA");
            assert_eq!(options[1].label, "No");
            assert_eq!(options[1].target, "SceneB");
            assert_eq!(options[2].label, "Maybe");
            assert_eq!(options[2].target, "SceneC");
        }
        other => panic!("Expected Choice, got {:?}", other),
    }
}

#[test]
fn choice_with_unpaired_target_is_rejected() {
    // 4 fields: "[Choice]|Yes|SceneA|No" leaves "No" without a target.
    let errs = parse("[Choice]|Yes|SceneA|No").unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].line, 1);
    assert!(errs[0].msg.contains("choice"), "msg was: {}", errs[0].msg);
}

#[test]
fn bare_choice_marker_is_rejected() {
    assert!(parse("[Choice]").is_err());
    assert!(parse("[Choice]|Only").is_err());
}

#[test]
fn wrong_dialogue_field_count_is_rejected() {
    let errs = parse("Amy|Hello").unwrap_err();
    assert_eq!(errs[0].line, 1);
    assert!(errs[0].msg.contains("got 2 field(s)"), "msg was: {}", errs[0].msg);

    assert!(parse("just some prose without pipes").is_err());
}

#[test]
fn extra_pipe_in_text_is_a_field_count_error() {
    // No escape syntax: a literal `|` inside dialogue text splits the line
    // into 4 fields and fails the load.
    let errs = parse("Amy|Happy|Hello|world").unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].line, 1);
}

#[test]
fn all_errors_are_collected_with_line_numbers() {
    let input = "Amy|Happy|Hello\nbroken line\n[Choice]|Yes\nBob|Sad|Bye";
    let errs = parse(input).unwrap_err();

    assert_eq!(errs.len(), 2);
    assert_eq!(errs[0].line, 2);
    assert_eq!(errs[1].line, 3);
}

#[test]
fn blank_lines_are_skipped() {
    let input = "Amy|Happy|Hello\n\n   \nBob|Sad|Bye\n";
    let sheet = parse(input).unwrap();

    assert_eq!(sheet.records.len(), 2);
    assert_eq!(sheet.records[0].line(), 1);
    assert_eq!(sheet.records[1].line(), 4);
}

#[test]
fn round_trip_preserves_order_and_content() {
    let mut input = String::new();
    for i in 0..50 {
        input.push_str(&format!("Speaker{i}|mood{i}|Line number {i}\n"));
    }

    let sheet = parse(&input).unwrap();
    assert_eq!(sheet.records.len(), 50);

    for (i, record) in sheet.records.iter().enumerate() {
        match record {
            Record::Dialogue { speaker, expression, text, .. } => {
                assert_eq!(speaker, &format!("Speaker{i}"));
                assert_eq!(expression, &format!("mood{i}"));
                assert_eq!(text, &format!("Line number {i}"));
            }
            other => panic!("Expected Dialogue, got {:?}", other),
        }
    }
}

#[test]
fn mixed_script_parses_both_shapes() {
    let input = "Amy|Happy|Hello there!\n[Choice]|Yes|SceneA|No|SceneB";
    let sheet = parse(input).unwrap();

    assert_eq!(sheet.records.len(), 2);
    assert!(matches!(sheet.records[0], Record::Dialogue { .. }));
    assert!(matches!(sheet.records[1], Record::Choice { .. }));
}
