use crate::error::{Error, Result};
use crate::types::Weight;
use crate::utils::Matrix2;

/// Minimum-weight perfect matching over the odd-degree vertices, expressed
/// as index pairs into the pair table's vertex order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matching {
    pub pairs: Vec<(usize, usize)>,
    pub added_cost: Weight,
}

/// Exact minimum-weight perfect matching via subset dynamic programming.
///
/// `dp[mask]` is the cheapest way to pair up the vertices in `mask`. The
/// lowest set bit is the fixed reference: it must pair with some other
/// member `j`, and partners are scanned in increasing index order with
/// strict improvement only, so the lowest `j` wins ties and the realized
/// pairing is reproducible across runs.
///
/// O(k^2 * 2^k) time and O(2^k) space, which keeps practical inputs at
/// roughly k <= 24 odd vertices. The tables are flat arrays indexed by the
/// mask itself; `choice` packs the chosen partner index into one byte per
/// mask for the reconstruction pass.
pub fn minimum_weight_matching(dist: &Matrix2<Weight>) -> Result<Matching> {
    let k = dist.rows;
    if k % 2 != 0 {
        return Err(Error::OddVertexParity { count: k });
    }
    if k == 0 {
        return Ok(Matching { pairs: Vec::new(), added_cost: 0.0 });
    }

    let full: usize = (1 << k) - 1;
    let mut dp = vec![Weight::INFINITY; full + 1];
    let mut choice = vec![0u8; full + 1];
    dp[0] = 0.0;

    for mask in 1..=full {
        if mask.count_ones() % 2 != 0 {
            continue;
        }
        let i = mask.trailing_zeros() as usize;
        let rest = mask ^ (1 << i);
        let mut candidates = rest;
        while candidates != 0 {
            let j = candidates.trailing_zeros() as usize;
            candidates &= candidates - 1;
            let remainder = rest ^ (1 << j);
            let cost = dp[remainder] + *dist.get(i, j);
            if cost < dp[mask] {
                dp[mask] = cost;
                choice[mask] = j as u8;
            }
        }
    }

    let added_cost = dp[full];

    // Replay the arg-min choices from the full set down to the empty set.
    let mut pairs = Vec::with_capacity(k / 2);
    let mut mask = full;
    while mask != 0 {
        let i = mask.trailing_zeros() as usize;
        let j = choice[mask] as usize;
        pairs.push((i, j));
        mask &= !((1 << i) | (1 << j));
    }

    Ok(Matching { pairs, added_cost })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> Matrix2<Weight> {
        let k = rows.len();
        let mut m = Matrix2::new(k, k, 0.0);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                *m.get_mut(i, j) = value;
            }
        }
        m
    }

    #[test]
    fn empty_set_matches_at_zero_cost() {
        let m = minimum_weight_matching(&Matrix2::new(0, 0, 0.0)).unwrap();
        assert!(m.pairs.is_empty());
        assert_eq!(m.added_cost, 0.0);
    }

    #[test]
    fn single_pair_is_forced() {
        let m = minimum_weight_matching(&matrix(&[&[0.0, 3.0], &[3.0, 0.0]])).unwrap();
        assert_eq!(m.pairs, vec![(0, 1)]);
        assert_eq!(m.added_cost, 3.0);
    }

    #[test]
    fn four_vertices_pick_the_cheaper_pairing() {
        // Pairing (0,1)+(2,3) costs 1 + 1 = 2; the alternatives cost 20.
        let m = minimum_weight_matching(&matrix(&[
            &[0.0, 1.0, 10.0, 10.0],
            &[1.0, 0.0, 10.0, 10.0],
            &[10.0, 10.0, 0.0, 1.0],
            &[10.0, 10.0, 1.0, 0.0],
        ]))
        .unwrap();
        assert_eq!(m.added_cost, 2.0);
        assert_eq!(m.pairs, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn cross_pairing_wins_when_cheaper() {
        // (0,2)+(1,3) costs 2; (0,1)+(2,3) costs 10.
        let m = minimum_weight_matching(&matrix(&[
            &[0.0, 5.0, 1.0, 9.0],
            &[5.0, 0.0, 9.0, 1.0],
            &[1.0, 9.0, 0.0, 5.0],
            &[9.0, 1.0, 5.0, 0.0],
        ]))
        .unwrap();
        assert_eq!(m.added_cost, 2.0);
        assert_eq!(m.pairs, vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn equal_cost_pairings_break_toward_the_lowest_partner() {
        // All pairings cost 2; the reference vertex 0 must take partner 1.
        let m = minimum_weight_matching(&matrix(&[
            &[0.0, 1.0, 1.0, 1.0],
            &[1.0, 0.0, 1.0, 1.0],
            &[1.0, 1.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 0.0],
        ]))
        .unwrap();
        assert_eq!(m.added_cost, 2.0);
        assert_eq!(m.pairs, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn odd_count_is_an_invariant_violation() {
        assert!(matches!(
            minimum_weight_matching(&Matrix2::new(3, 3, 1.0)),
            Err(Error::OddVertexParity { count: 3 })
        ));
    }
}
