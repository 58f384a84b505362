use super::table::{center, TableLayout};
use super::{alignment_lines, SessionReport};
use crate::alignment::{levenshtein_alignment, ErrorStats};
use crate::config::ScoringOptions;
use crate::scoring::ScoringSession;
use crate::types::Corpus;

fn corpus(rows: &[(&str, &str)]) -> Corpus<String> {
    rows.iter()
        .map(|(id, text)| {
            (
                id.to_string(),
                text.split_whitespace().map(str::to_string).collect(),
            )
        })
        .collect()
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn sample_session() -> ScoringSession<String> {
    let reference = corpus(&[
        ("fjlp-fjlp-cen3-b", "O N E F I F T Y"),
        ("mdbb-mdbb-an1-b", "Y E S"),
        ("fjlp-fjlp-an2-b", "N O"),
    ]);
    let hypothesis = corpus(&[
        ("fjlp-fjlp-cen3-b", "O N F I F T E"),
        ("mdbb-mdbb-an1-b", "Y E S"),
        ("fjlp-fjlp-an2-b", "N O O"),
    ]);
    ScoringSession::new(&reference, &hypothesis, ScoringOptions::default()).expect("keys match")
}

#[test]
fn center_matches_odd_even_rule() {
    assert_eq!(center("13", 7), "   13  ");
    assert_eq!(center("ab", 6), "  ab  ");
    assert_eq!(center("abc", 6), " abc  ");
    assert_eq!(center("toolong", 3), "toolong");
}

#[test]
fn layout_floors_and_grows() {
    let small = ErrorStats {
        ref_num: 13,
        distance: 3,
        ..ErrorStats::ZERO
    };
    let layout = TableLayout::new("hyp", &["fjlp", "mdbb"], &small);
    assert_eq!(layout.name_width, 7);
    assert_eq!(layout.value_width, 7);
    assert_eq!(layout.width, 68);

    let large = ErrorStats {
        ref_num: 12_345_678,
        ..ErrorStats::ZERO
    };
    let layout = TableLayout::new("hyp", &["a-very-long-speaker"], &large);
    assert_eq!(layout.name_width, 19);
    assert_eq!(layout.value_width, 11);

    let empty = TableLayout::new("", &[], &ErrorStats::ZERO);
    assert_eq!(empty.value_width, 7);
}

#[test]
fn long_system_name_widens_frame() {
    let layout = TableLayout::new(&"x".repeat(80), &[], &ErrorStats::ZERO);
    assert_eq!(layout.width, 82);
}

#[test]
fn count_table_lines() {
    let table = sample_session().draw_table(false);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], format!(",{}.", "-".repeat(68)));
    assert_eq!(
        lines[1],
        "|                                hyp                                 |"
    );
    assert_eq!(
        lines[3],
        "| SPKR   |  # Snt  # Wrd |   Corr    Sub    Del    Ins    Err  S.Err |"
    );
    assert_eq!(
        lines[4],
        "|--------+---------------+-------------------------------------------|"
    );
    assert_eq!(
        lines[5],
        "| fjlp   |      2     10 |      8      1      1      1      3      2 |"
    );
    assert_eq!(lines[6], lines[4]);
    assert_eq!(
        lines[7],
        "| mdbb   |      1      3 |      3      0      0      0      0      0 |"
    );
    assert_eq!(lines[8], format!("|{}|", "=".repeat(68)));
    assert_eq!(
        lines[9],
        "| Sum    |      3    13  |     11      1      1      1      3      2 |"
    );
    assert_eq!(lines[10], lines[8]);
    assert_eq!(lines[14], format!("`{}'", "-".repeat(68)));
    assert_eq!(lines.len(), 15);
    assert!(lines.iter().all(|line| line.chars().count() == 70));
}

#[test]
fn rate_table_summary_rows() {
    let table = sample_session().draw_table(true);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(
        lines[5],
        "| fjlp   |      2     10 |   80.0   10.0   10.0   10.0   30.0  100.0 |"
    );
    assert_eq!(
        lines[11],
        "| Mean   |    1.5    6.5 |   90.0    5.0    5.0    5.0   15.0   50.0 |"
    );
    assert_eq!(
        lines[12],
        "| S.D.   |    0.7    4.9 |   14.1    7.1    7.1    7.1   21.2   70.7 |"
    );
    assert_eq!(
        lines[13],
        "| Median |    1.5    6.5 |   90.0    5.0    5.0    5.0   15.0   50.0 |"
    );
}

#[test]
fn dump_cells_mark_errors() {
    let alignment = levenshtein_alignment(&words("O N E F I F T Y"), &words("O N F I F T E"));
    let [reference, hypothesis, eval] = alignment_lines(&alignment);
    assert_eq!(reference, "REF:  o n E f i f t Y ");
    assert_eq!(hypothesis, "HYP:  o n * f i f t E ");
    assert_eq!(eval, "Eval:     D         S ");
}

#[test]
fn dump_pads_to_wider_token() {
    let alignment = levenshtein_alignment(&words("hello there"), &words("hi there you"));
    let [reference, hypothesis, eval] = alignment_lines(&alignment);
    assert_eq!(reference, "REF:  HELLO there *** ");
    assert_eq!(hypothesis, "HYP:  HI    there YOU ");
    assert_eq!(eval, "Eval: S           I   ");
}

#[test]
fn alignment_dump_structure() {
    let dump = sample_session().draw_alignment();
    assert!(dump.starts_with("\n\n\t\tDUMP OF SYSTEM ALIGNMENT STRUCTURE\n"));
    assert!(dump.contains("\nSystem name:   hyp\n"));
    assert!(dump.contains("\nSpeakers: \n    0:  fjlp\n    1:  mdbb\n\n"));
    assert!(dump.contains("Speaker sentences   0:  fjlp   #utts: 2\n"));
    assert!(dump.contains("Speaker sentences   1:  mdbb   #utts: 1\n"));
    assert!(dump.contains(
        "id: (fjlp-fjlp-an2-b)\nScores: (#C #S #D #I) 2 0 0 1\nREF:  n * o \nHYP:  n O o \nEval:   I   \n\n"
    ));
    let cen3 = dump.find("id: (fjlp-fjlp-cen3-b)").expect("cen3 dumped");
    let an2 = dump.find("id: (fjlp-fjlp-an2-b)").expect("an2 dumped");
    assert!(cen3 < an2);
}

#[test]
fn full_report_repeats_banner() {
    let report = sample_session().render_report();
    let banner = "SYSTEM SUMMARY PERCENTAGES by SPEAKER";
    assert_eq!(report.matches(banner).count(), 2);
    assert!(report.starts_with("\n\n\n                     SYSTEM SUMMARY"));
    assert!(report.contains("   80.0 "));
    assert!(report.contains("DUMP OF SYSTEM ALIGNMENT STRUCTURE"));
}

#[test]
fn session_report_serializes() {
    let report = SessionReport::from_session(&sample_session(), "2024-01-01T00:00:00+00:00");
    let value = serde_json::to_value(&report).expect("serializable");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["meta"]["speaker_count"], 2);
    assert_eq!(value["meta"]["utterance_count"], 3);
    assert_eq!(value["speakers"][0]["id"], "fjlp");
    assert_eq!(value["speakers"][0]["counts"]["sentence_errors"], 2);
    assert_eq!(value["speakers"][1]["rates"]["correct"], 100.0);
    assert_eq!(value["sum"]["counts"]["stats"]["ref_num"], 13);
    assert_eq!(value["utterances"][1]["id"], "fjlp-fjlp-an2-b");
    assert_eq!(value["utterances"][2]["speaker"], "mdbb");
    assert!(value["summary"]["rates"]["sd"]["words"].is_number());
}
