//! The pack optimizer: a pure function from (pack sizes, order quantity) to
//! the least-excess, least-pack-count shipment.
//!
//! Has no ambient state of its own, no I/O, no registry access, no logging.
//! Everything else in the crate exists to get inputs to this function and
//! its output back out over HTTP.

use std::collections::HashMap;

use crate::domain::Pack;

/// Checked cooperatively every `CANCEL_CHECK_INTERVAL` relaxations of the
/// inner DP loop.
const CANCEL_CHECK_INTERVAL: usize = 1_000_000;

/// Errors the optimizer itself can raise. Deliberately narrow: this function
/// has no I/O, so its error surface is just "bad input" and "asked to stop".
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptimizerError {
    /// `qty` was zero; the optimizer has nothing to solve for.
    #[error("empty order")]
    EmptyOrder,
    /// The caller's cancellation token fired before a result was found.
    #[error("optimization cancelled")]
    Cancelled,
}

/// The outcome of a successful optimization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerResult {
    /// Packs actually used, ascending by pack size, no zero-quantity entries.
    pub packs: Vec<Pack>,
    /// Total items shipped (`T`).
    pub total: u64,
    /// Total packs used (`K`).
    pub packs_count: u64,
}

/// A handle the optimizer polls for cooperative cancellation. Implemented as
/// a trait rather than a concrete type so the pure core doesn't need to know
/// about `tokio_util`; `tokio_util::sync::CancellationToken` implements it.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

impl Cancellation for tokio_util::sync::CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.is_cancelled()
    }
}

/// A cancellation handle that never cancels, for callers that don't care.
pub struct NeverCancelled;

impl Cancellation for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

const UNREACHABLE: u32 = u32::MAX;

/// Computes the least-excess, least-pack-count shipment for `qty` items
/// drawn from `pack_sizes`.
///
/// `pack_sizes` need not be sorted or deduplicated; duplicates are harmless.
/// Returns `OptimizerError::EmptyOrder` if `qty == 0`, and
/// `OptimizerError::Cancelled` if `cancellation` fires mid-pass.
///
/// # Panics
///
/// Panics if `pack_sizes` is empty; callers (the shipping service) are
/// responsible for rejecting products with no configured packs before
/// reaching the optimizer.
pub fn optimize(
    pack_sizes: &[u64],
    qty: u64,
    cancellation: &dyn Cancellation,
) -> Result<OptimizerResult, OptimizerError> {
    assert!(!pack_sizes.is_empty(), "optimize called with no pack sizes");

    if qty == 0 {
        return Err(OptimizerError::EmptyOrder);
    }

    let mut sizes: Vec<u64> = pack_sizes.to_vec();
    sizes.sort_unstable();
    sizes.dedup();

    // L = Q + max(P) is the only DP ceiling provably safe for arbitrary P:
    // an optimal T always satisfies T < Q + max(P), since otherwise dropping
    // one max(P)-pack would yield a smaller feasible T. A `Q + min(P)`
    // variant is not safe in general and is deliberately not used here.
    let max_size = *sizes.last().expect("non-empty");
    let limit = qty
        .checked_add(max_size)
        .expect("order quantity plus max pack size overflowed u64");
    let limit_usize = usize::try_from(limit).expect("DP ceiling exceeds addressable memory");
    let sizes_u32: Vec<u32> = sizes
        .iter()
        .map(|&s| u32::try_from(s).expect("pack size exceeds u32 range"))
        .collect();

    // Two parallel arrays rather than one array of structs: packs_count fits
    // in u32 up to ~2*10^9 packs and last_size fits in u32 comfortably,
    // halving the DP array's footprint versus a naive 8-byte-aligned struct.
    let mut packs_count = vec![UNREACHABLE; limit_usize];
    let mut last_size = vec![0u32; limit_usize];
    packs_count[0] = 0;

    let mut relaxations: usize = 0;
    for t in 0..limit_usize {
        if packs_count[t] == UNREACHABLE {
            continue;
        }
        let count_at_t = packs_count[t];

        for &size in &sizes_u32 {
            let next = t + size as usize;
            if next >= limit_usize {
                continue;
            }
            // Sizes are visited ascending, so on a tie the last write wins
            // and keeps the largest size achieving the minimum count at
            // this node.
            if count_at_t + 1 < packs_count[next] {
                packs_count[next] = count_at_t + 1;
                last_size[next] = size;
            }

            relaxations += 1;
            if relaxations % CANCEL_CHECK_INTERVAL == 0 && cancellation.is_cancelled() {
                return Err(OptimizerError::Cancelled);
            }
        }
    }

    let best_total = (qty as usize..limit_usize)
        .find(|&t| packs_count[t] != UNREACHABLE)
        .expect("qty is always reachable: shipping qty+max_size items via ceil(qty/min_size) min_size packs stays within the DP ceiling");

    let mut tally: HashMap<u64, u64> = HashMap::new();
    let mut t = best_total;
    while t > 0 {
        let size = last_size[t];
        *tally.entry(size as u64).or_insert(0) += 1;
        t -= size as usize;
    }

    let packs = sizes
        .iter()
        .filter_map(|&size| {
            let quantity = *tally.get(&size).unwrap_or(&0);
            (quantity > 0).then_some(Pack { pack_size: size, quantity })
        })
        .collect();

    Ok(OptimizerResult {
        packs,
        total: best_total as u64,
        packs_count: packs_count[best_total] as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pack_sizes: &[u64], qty: u64) -> OptimizerResult {
        optimize(pack_sizes, qty, &NeverCancelled).unwrap()
    }

    #[test]
    fn empty_order_is_rejected() {
        assert_eq!(optimize(&[5, 10], 0, &NeverCancelled), Err(OptimizerError::EmptyOrder));
    }

    #[test]
    fn simple_seed_scenario() {
        let result = run(&[5, 10, 12], 21);
        assert_eq!(
            result.packs,
            vec![Pack { pack_size: 10, quantity: 1 }, Pack { pack_size: 12, quantity: 1 }]
        );
        assert_eq!(result.packs_count, 2);
        assert_eq!(result.total, 22);
    }

    #[test]
    fn pathological_pack_set_hits_zero_excess() {
        let result = run(&[23, 31, 53], 500_000);
        assert_eq!(
            result.packs,
            vec![
                Pack { pack_size: 23, quantity: 2 },
                Pack { pack_size: 31, quantity: 7 },
                Pack { pack_size: 53, quantity: 9429 },
            ]
        );
        assert_eq!(result.packs_count, 9438);
        assert_eq!(result.total, 500_000);
    }

    #[test]
    fn load_seed_scenario() {
        let result = run(&[23, 31, 53, 79, 97, 113, 137], 100_000_000);
        assert_eq!(
            result.packs,
            vec![
                Pack { pack_size: 97, quantity: 1 },
                Pack { pack_size: 113, quantity: 4 },
                Pack { pack_size: 137, quantity: 729_923 },
            ]
        );
        assert_eq!(result.packs_count, 729_928);
        assert_eq!(result.total, 100_000_000);
    }

    #[test]
    fn prefers_fewer_packs_over_tighter_excess() {
        // Two 250-packs and one 500-pack both land on T=500 (E=249); the
        // 500-pack wins because it needs only one pack instead of two.
        let result = run(&[250, 500, 1000, 2000, 5000], 251);
        assert_eq!(result.total, 500);
        assert_eq!(result.packs_count, 1);
        assert_eq!(result.excess(251), 249);
    }

    #[test]
    fn single_pack_size_divides_evenly() {
        let result = run(&[5], 20);
        assert_eq!(result.total, 20);
        assert_eq!(result.packs_count, 4);
    }

    #[test]
    fn single_pack_size_does_not_divide_evenly() {
        let result = run(&[7], 20);
        assert_eq!(result.total, 21);
        assert_eq!(result.packs_count, 3);
    }

    #[test]
    fn minimum_boundary() {
        let result = run(&[1], 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.packs_count, 1);
    }

    #[test]
    fn duplicate_pack_sizes_are_harmless() {
        let result = run(&[5, 5, 10], 12);
        assert_eq!(result.total, 15);
    }

    #[test]
    fn packs_are_ascending_and_nonzero() {
        let result = run(&[5, 10, 12], 21);
        let sizes: Vec<u64> = result.packs.iter().map(|p| p.pack_size).collect();
        let mut sorted = sizes.clone();
        sorted.sort_unstable();
        assert_eq!(sizes, sorted);
        assert!(result.packs.iter().all(|p| p.quantity > 0));
    }

    #[test]
    fn determinism_across_invocations() {
        let a = run(&[23, 31, 53], 500_000);
        let b = run(&[23, 31, 53], 500_000);
        assert_eq!(a, b);
    }

    #[test]
    fn cancellation_token_is_honored() {
        struct AlwaysCancelled;
        impl Cancellation for AlwaysCancelled {
            fn is_cancelled(&self) -> bool {
                true
            }
        }
        // A large enough order that the loop crosses at least one
        // CANCEL_CHECK_INTERVAL boundary.
        let result = optimize(&[23, 31, 53], 2_000_000, &AlwaysCancelled);
        assert_eq!(result, Err(OptimizerError::Cancelled));
    }

    impl OptimizerResult {
        fn excess(&self, qty: u64) -> u64 {
            self.total - qty
        }
    }
}
