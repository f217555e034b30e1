use feeroute_core::{PathId, PathWeights, Prediction, Selection};

/// Maximum number of candidates accepted per selection call.
pub const MAX_CANDIDATES: usize = 20;

/// Seed score for the ranking fold, larger than any score a real
/// prediction produces. Kept at the reference implementation's
/// constant for bit-for-bit output parity.
pub const SCORE_SENTINEL: u128 = 999_999_999;

/// Weighted multi-criteria cost score for one path. Lower is better.
///
/// `score = floor(fee·feeW/100) + floor(risk·riskW/100)
///        + floor(time·timeW/100) + priority·10`
///
/// Division truncates per term, before summation — this matches the
/// reference outputs bit-for-bit, which truncating the final sum
/// would not.
///
/// Arithmetic saturates at `u128::MAX` rather than wrapping, so fees
/// beyond `u128::MAX / 100` stay deterministic across build profiles.
/// A score of that magnitude is already above [`SCORE_SENTINEL`] and
/// can never win a ranking.
pub fn score(prediction: &Prediction, weights: &PathWeights) -> u128 {
    // Only the fee term can overflow: the other operands are u64-sized
    // with weights capped at 100.
    let fee_term = prediction.fee.saturating_mul(weights.fee_weight as u128) / 100;
    let risk_term = prediction.risk_level as u128 * weights.risk_weight as u128 / 100;
    let time_term = prediction.time_estimate as u128 * weights.time_weight as u128 / 100;
    let priority_term = prediction.priority as u128 * 10;
    fee_term
        .saturating_add(risk_term)
        .saturating_add(time_term)
        .saturating_add(priority_term)
}

/// Rank a candidate list and return the winning accumulator.
///
/// Pure left fold seeded with `{fallback, SCORE_SENTINEL}`. Candidates
/// without both a prediction and a weight are skipped. Strict
/// less-than comparison keeps the earlier-encountered candidate on
/// ties.
pub fn rank<'a, I>(candidates: I, fallback: PathId) -> Selection
where
    I: IntoIterator<Item = (PathId, Option<(&'a Prediction, &'a PathWeights)>)>,
{
    let mut best = Selection {
        best_path: fallback,
        best_score: SCORE_SENTINEL,
    };
    for (path_id, entry) in candidates {
        let Some((prediction, weights)) = entry else {
            continue;
        };
        let candidate_score = score(prediction, weights);
        if candidate_score < best.best_score {
            best = Selection {
                best_path: path_id,
                best_score: candidate_score,
            };
        }
    }
    best
}
