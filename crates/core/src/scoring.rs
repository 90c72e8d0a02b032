//! Overall-score computation.

/// Overall score for a scored analysis: the mean of the four dimension
/// scores, rounded half up. Scores 8, 7, 9, 6 average 7.5 and display as 8.
pub fn overall_score(scores: [i32; 4]) -> i32 {
    let sum: i32 = scores.iter().sum();
    // Integer round-half-up of sum / 4.
    (sum * 2 + 4) / 8
}
