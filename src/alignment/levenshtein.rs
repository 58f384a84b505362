use crate::alignment::stats::ErrorStats;

/// Classification of one aligned position relative to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    Correct,
    Substitution,
    Deletion,
    Insertion,
}

impl EditOp {
    /// One-letter code used in alignment dumps; `None` for correct tokens.
    pub fn code(self) -> Option<char> {
        match self {
            Self::Correct => None,
            Self::Substitution => Some('S'),
            Self::Deletion => Some('D'),
            Self::Insertion => Some('I'),
        }
    }
}

/// One position of an alignment. A gap can sit on at most one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentPair<T> {
    Correct { reference: T, hypothesis: T },
    Substitution { reference: T, hypothesis: T },
    Deletion { reference: T },
    Insertion { hypothesis: T },
}

impl<T> AlignmentPair<T> {
    pub fn op(&self) -> EditOp {
        match self {
            Self::Correct { .. } => EditOp::Correct,
            Self::Substitution { .. } => EditOp::Substitution,
            Self::Deletion { .. } => EditOp::Deletion,
            Self::Insertion { .. } => EditOp::Insertion,
        }
    }

    pub fn reference(&self) -> Option<&T> {
        match self {
            Self::Correct { reference, .. }
            | Self::Substitution { reference, .. }
            | Self::Deletion { reference } => Some(reference),
            Self::Insertion { .. } => None,
        }
    }

    pub fn hypothesis(&self) -> Option<&T> {
        match self {
            Self::Correct { hypothesis, .. }
            | Self::Substitution { hypothesis, .. }
            | Self::Insertion { hypothesis } => Some(hypothesis),
            Self::Deletion { .. } => None,
        }
    }

    /// Flatten to a `(ref, hyp)` tuple with `eps` standing in for the gap.
    pub fn to_eps_pair(&self, eps: &T) -> (T, T)
    where
        T: Clone,
    {
        (
            self.reference().unwrap_or(eps).clone(),
            self.hypothesis().unwrap_or(eps).clone(),
        )
    }
}

/// Minimum edit-distance alignment between a reference and a hypothesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<T> {
    pub distance: usize,
    pub pairs: Vec<AlignmentPair<T>>,
}

impl<T> Alignment<T> {
    pub fn stats(&self) -> ErrorStats {
        let mut stats = ErrorStats::ZERO;
        for pair in &self.pairs {
            count_op(&mut stats, pair.op());
        }
        stats
    }

    pub fn correct(&self) -> usize {
        self.pairs
            .iter()
            .filter(|pair| pair.op() == EditOp::Correct)
            .count()
    }

    /// Reference side with gaps removed; equals the original reference.
    pub fn reference_tokens(&self) -> impl Iterator<Item = &T> {
        self.pairs.iter().filter_map(AlignmentPair::reference)
    }

    /// Hypothesis side with gaps removed; equals the original hypothesis.
    pub fn hypothesis_tokens(&self) -> impl Iterator<Item = &T> {
        self.pairs.iter().filter_map(AlignmentPair::hypothesis)
    }

    pub fn to_eps_pairs(&self, eps: &T) -> Vec<(T, T)>
    where
        T: Clone,
    {
        self.pairs.iter().map(|pair| pair.to_eps_pair(eps)).collect()
    }
}

/// Alignment flattened to `(ref, hyp)` tuples with an explicit gap token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsAlignment<T> {
    pub eps: T,
    pub distance: usize,
    pub alignment: Vec<(T, T)>,
}

/// Levenshtein distance under unit costs.
///
/// Keeps two rows over the shorter sequence, so memory is
/// O(min(|a|, |b|)).
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, long_tok) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_tok) in short.iter().enumerate() {
            let diagonal = prev[j] + usize::from(long_tok != short_tok);
            let up = prev[j + 1] + 1;
            let left = curr[j] + 1;
            curr[j + 1] = diagonal.min(up).min(left);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Error counts of the alignment [`levenshtein_alignment`] would produce.
pub fn edit_distance_stats<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> ErrorStats {
    let (distance, steps) = backtrace(reference, hypothesis);
    let mut stats = ErrorStats::ZERO;
    for step in &steps {
        count_op(&mut stats, step.op());
    }
    debug_assert_eq!(stats.distance, distance);
    debug_assert_eq!(stats.ref_num, reference.len());
    stats
}

pub fn levenshtein_alignment<T: PartialEq + Clone>(
    reference: &[T],
    hypothesis: &[T],
) -> Alignment<T> {
    let (distance, steps) = backtrace(reference, hypothesis);
    let pairs = steps
        .into_iter()
        .map(|step| match step {
            Step::Diagonal { i, j, matched: true } => AlignmentPair::Correct {
                reference: reference[i].clone(),
                hypothesis: hypothesis[j].clone(),
            },
            Step::Diagonal { i, j, matched: false } => AlignmentPair::Substitution {
                reference: reference[i].clone(),
                hypothesis: hypothesis[j].clone(),
            },
            Step::Deletion { i } => AlignmentPair::Deletion {
                reference: reference[i].clone(),
            },
            Step::Insertion { j } => AlignmentPair::Insertion {
                hypothesis: hypothesis[j].clone(),
            },
        })
        .collect();
    Alignment { distance, pairs }
}

/// Alignment as `(ref, hyp)` tuples, gaps filled with `eps`.
pub fn align<T: PartialEq + Clone>(reference: &[T], hypothesis: &[T], eps: T) -> EpsAlignment<T> {
    let alignment = levenshtein_alignment(reference, hypothesis);
    EpsAlignment {
        distance: alignment.distance,
        alignment: alignment.to_eps_pairs(&eps),
        eps,
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Diagonal { i: usize, j: usize, matched: bool },
    Deletion { i: usize },
    Insertion { j: usize },
}

impl Step {
    fn op(self) -> EditOp {
        match self {
            Self::Diagonal { matched: true, .. } => EditOp::Correct,
            Self::Diagonal { matched: false, .. } => EditOp::Substitution,
            Self::Deletion { .. } => EditOp::Deletion,
            Self::Insertion { .. } => EditOp::Insertion,
        }
    }
}

fn count_op(stats: &mut ErrorStats, op: EditOp) {
    match op {
        EditOp::Correct => stats.ref_num += 1,
        EditOp::Substitution => {
            stats.ref_num += 1;
            stats.sub_num += 1;
            stats.distance += 1;
        }
        EditOp::Deletion => {
            stats.ref_num += 1;
            stats.del_num += 1;
            stats.distance += 1;
        }
        EditOp::Insertion => {
            stats.ins_num += 1;
            stats.distance += 1;
        }
    }
}

/// Full (|ref|+1) x (|hyp|+1) cost table, row-major.
fn cost_table<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Vec<usize> {
    let cols = hypothesis.len() + 1;
    let mut table = vec![0usize; (reference.len() + 1) * cols];
    for (j, cell) in table.iter_mut().take(cols).enumerate() {
        *cell = j;
    }
    for i in 1..=reference.len() {
        let row = i * cols;
        let prev = row - cols;
        table[row] = i;
        for j in 1..cols {
            let diagonal =
                table[prev + j - 1] + usize::from(reference[i - 1] != hypothesis[j - 1]);
            let deletion = table[prev + j] + 1;
            let insertion = table[row + j - 1] + 1;
            table[row + j] = diagonal.min(deletion).min(insertion);
        }
    }
    table
}

/// Walks the cost table from the bottom-right corner back to the origin.
///
/// On equal cost the diagonal move (match or substitution) wins, then
/// deletion, then insertion.
fn backtrace<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> (usize, Vec<Step>) {
    let table = cost_table(reference, hypothesis);
    let cols = hypothesis.len() + 1;
    let distance = table[reference.len() * cols + hypothesis.len()];

    let (mut i, mut j) = (reference.len(), hypothesis.len());
    let mut steps = Vec::with_capacity(i.max(j));
    while i > 0 || j > 0 {
        let step = if i == 0 {
            Step::Insertion { j: j - 1 }
        } else if j == 0 {
            Step::Deletion { i: i - 1 }
        } else {
            let matched = reference[i - 1] == hypothesis[j - 1];
            let diagonal = table[(i - 1) * cols + j - 1] + usize::from(!matched);
            let deletion = table[(i - 1) * cols + j] + 1;
            let insertion = table[i * cols + j - 1] + 1;
            if diagonal <= deletion.min(insertion) {
                Step::Diagonal {
                    i: i - 1,
                    j: j - 1,
                    matched,
                }
            } else if deletion <= insertion {
                Step::Deletion { i: i - 1 }
            } else {
                Step::Insertion { j: j - 1 }
            }
        };
        match step {
            Step::Diagonal { .. } => {
                i -= 1;
                j -= 1;
            }
            Step::Deletion { .. } => i -= 1,
            Step::Insertion { .. } => j -= 1,
        }
        steps.push(step);
    }
    steps.reverse();
    (distance, steps)
}
