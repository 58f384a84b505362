use std::fmt::{Display, Write};

use crate::alignment::{Alignment, AlignmentPair};
use crate::report::table::{draw_table, ljust};
use crate::scoring::ScoringSession;

const BANNER: &str =
    "                     SYSTEM SUMMARY PERCENTAGES by SPEAKER                      ";

/// REF/HYP/Eval cells of one aligned column.
struct DumpCell {
    reference: String,
    hypothesis: String,
    eval: String,
}

impl DumpCell {
    fn from_pair<T: Display>(pair: &AlignmentPair<T>) -> Self {
        match pair {
            AlignmentPair::Correct {
                reference,
                hypothesis,
            } => {
                let (r, h) = (reference.to_string(), hypothesis.to_string());
                let pad = r.chars().count().max(h.chars().count());
                Self {
                    reference: ljust(&r.to_lowercase(), pad),
                    hypothesis: ljust(&h.to_lowercase(), pad),
                    eval: " ".repeat(pad),
                }
            }
            AlignmentPair::Substitution {
                reference,
                hypothesis,
            } => {
                let (r, h) = (reference.to_string(), hypothesis.to_string());
                let pad = r.chars().count().max(h.chars().count());
                Self {
                    reference: ljust(&r.to_uppercase(), pad),
                    hypothesis: ljust(&h.to_uppercase(), pad),
                    eval: ljust("S", pad),
                }
            }
            AlignmentPair::Deletion { reference } => {
                let r = reference.to_string();
                let pad = r.chars().count();
                Self {
                    reference: ljust(&r.to_uppercase(), pad),
                    hypothesis: "*".repeat(pad),
                    eval: ljust("D", pad),
                }
            }
            AlignmentPair::Insertion { hypothesis } => {
                let h = hypothesis.to_string();
                let pad = h.chars().count();
                Self {
                    reference: "*".repeat(pad),
                    hypothesis: ljust(&h.to_uppercase(), pad),
                    eval: ljust("I", pad),
                }
            }
        }
    }
}

/// REF, HYP and Eval lines for one alignment, each with a trailing space.
pub fn alignment_lines<T: Display>(alignment: &Alignment<T>) -> [String; 3] {
    let cells: Vec<DumpCell> = alignment.pairs.iter().map(DumpCell::from_pair).collect();
    let join = |pick: fn(&DumpCell) -> &str| {
        let joined = cells.iter().map(pick).collect::<Vec<_>>().join(" ");
        format!("{joined} ")
    };
    [
        format!("REF:  {}", join(|c| &c.reference)),
        format!("HYP:  {}", join(|c| &c.hypothesis)),
        format!("Eval: {}", join(|c| &c.eval)),
    ]
}

/// Renders the per-speaker, per-utterance alignment dump.
pub fn draw_alignment<T: Display>(session: &ScoringSession<T>) -> String {
    let mut out = String::new();
    out.push_str("\n\n\t\tDUMP OF SYSTEM ALIGNMENT STRUCTURE\n");
    let _ = writeln!(out, "\nSystem name:   {}", session.system_name());
    out.push_str("\nSpeakers: \n");
    let speakers = session.speaker_ids();
    for (pos, speaker) in speakers.iter().enumerate() {
        let _ = writeln!(out, "{pos:5}:  {speaker}");
    }
    out.push('\n');

    for (pos, speaker) in speakers.iter().enumerate() {
        let utterance_ids = session.utterance_ids_for_speaker(speaker).unwrap_or(&[]);
        let _ = writeln!(
            out,
            "Speaker sentences   {pos}:  {speaker}   #utts: {}",
            utterance_ids.len()
        );
        for utterance_id in utterance_ids {
            let Some(score) = session.utterance_score(utterance_id) else {
                continue;
            };
            let stats = score.stats;
            let _ = writeln!(out, "id: ({utterance_id})");
            let _ = writeln!(
                out,
                "Scores: (#C #S #D #I) {} {} {} {}",
                score.correct, stats.sub_num, stats.del_num, stats.ins_num
            );
            for line in alignment_lines(&score.alignment) {
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }
    }
    out
}

/// Rate table, count table and alignment dump, in that order.
pub fn render_report<T: Display>(session: &ScoringSession<T>) -> String {
    let mut out = String::new();
    for as_rate in [true, false] {
        out.push_str("\n\n\n");
        out.push_str(BANNER);
        out.push_str("\n\n");
        out.push_str(&draw_table(session, as_rate));
    }
    out.push_str(&draw_alignment(session));
    out
}
