//! Search for four evenly spaced lines inside one angle cluster.
//!
//! A puzzle row crosses ten grid lines, every third of them a thick block
//! border:
//!
//! ```text
//! [#|#|#|#|#|#|#|#|#]
//! 4     4     4     4
//! ```
//!
//! The search looks for the four borders marked `4`: the widest subset of
//! four lines whose three gaps all stay close to a third of their span.
use super::params::FinderParams;
use crate::types::{Line, LineQuad};
use log::trace;
use std::cmp::Ordering;

/// Whether the sorted quad is evenly spaced within `tolerance`, returning its
/// span `l3.ρ − l0.ρ` if so.
pub fn evenly_spaced_range(quad: &LineQuad, tolerance: f32) -> Option<f32> {
    let range = quad[3].rho - quad[0].rho;
    let mean = range / 3.0;
    let even = quad
        .windows(2)
        .all(|pair| ((pair[1].rho - pair[0].rho) - mean).abs() < tolerance);
    even.then_some(range)
}

/// Best evenly spaced quad of `cluster`, which must already be sorted by |ρ|.
///
/// Enumerates every 4-combination in lexicographic index order and keeps
/// the widest qualifying one; on equal spans the first one found stays.
pub fn best_evenly_spaced(sorted: &[Line], tolerance: f32) -> Option<LineQuad> {
    let n = sorted.len();
    let mut best: Option<(f32, LineQuad)> = None;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    let quad = [sorted[i], sorted[j], sorted[k], sorted[l]];
                    let Some(range) = evenly_spaced_range(&quad, tolerance) else {
                        continue;
                    };
                    let better = match best {
                        Some((best_range, _)) => range > best_range,
                        None => range >= 0.0,
                    };
                    if better {
                        best = Some((range, quad));
                    }
                }
            }
        }
    }
    best.map(|(_, quad)| quad)
}

fn sort_by_abs_rho(cluster: &mut [Line]) {
    cluster.sort_by(|a, b| {
        a.rho
            .abs()
            .partial_cmp(&b.rho.abs())
            .unwrap_or(Ordering::Equal)
    });
}

/// Collects at most one evenly spaced quad per cluster into `quads`.
///
/// Clusters are sorted in place by |ρ|. Clusters outside
/// `[min_cluster_size, max_cluster_size]` are skipped. `quads` is cleared first.
pub fn find_evenly_spaced(
    clusters: &mut [Vec<Line>],
    params: &FinderParams,
    quads: &mut Vec<LineQuad>,
) {
    quads.clear();
    let min_size = params.min_cluster_size.max(4);
    for (idx, cluster) in clusters.iter_mut().enumerate() {
        if cluster.len() < min_size || cluster.len() > params.max_cluster_size {
            trace!("cluster {} skipped (size={})", idx, cluster.len());
            continue;
        }
        sort_by_abs_rho(cluster);
        if let Some(quad) = best_evenly_spaced(cluster, params.spacing_tolerance) {
            trace!(
                "cluster {} quad rho=[{:.1}, {:.1}, {:.1}, {:.1}]",
                idx,
                quad[0].rho,
                quad[1].rho,
                quad[2].rho,
                quad[3].rho
            );
            quads.push(quad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(theta: f32, rhos: &[f32]) -> Vec<Line> {
        rhos.iter().map(|&r| Line::new(theta, r)).collect()
    }

    fn rhos(quad: &LineQuad) -> [f32; 4] {
        [quad[0].rho, quad[1].rho, quad[2].rho, quad[3].rho]
    }

    fn run(clusters: &mut [Vec<Line>]) -> Vec<LineQuad> {
        let mut quads = Vec::new();
        find_evenly_spaced(clusters, &FinderParams::default(), &mut quads);
        quads
    }

    #[test]
    fn picks_widest_even_subset_among_noise() {
        let mut clusters = vec![family(
            0.1,
            &[500.0, 5.0, 130.0, 100.0, 160.0, 220.0, 280.0],
        )];
        let quads = run(&mut clusters);
        assert_eq!(quads.len(), 1);
        assert_eq!(rhos(&quads[0]), [100.0, 160.0, 220.0, 280.0]);
    }

    #[test]
    fn tolerance_is_strict() {
        let quad = family(0.0, &[0.0, 45.0, 105.0, 150.0]);
        let quad: LineQuad = [quad[0], quad[1], quad[2], quad[3]];
        // mean 50, gaps 45/60/45 -> deviations 5/10/5
        assert!(evenly_spaced_range(&quad, 10.5).is_some());
        assert!(evenly_spaced_range(&quad, 10.0).is_none());
    }

    #[test]
    fn equal_spans_keep_first_candidate() {
        // Both (0, 50, 100, 150) and (0, 52, 100, 150) qualify with span 150.
        let sorted = family(0.0, &[0.0, 50.0, 52.0, 100.0, 150.0]);
        let quad = best_evenly_spaced(&sorted, 15.0).expect("quad");
        assert_eq!(rhos(&quad), [0.0, 50.0, 100.0, 150.0]);
    }

    #[test]
    fn small_and_large_clusters_are_skipped() {
        let mut clusters = vec![
            family(0.0, &[10.0, 20.0, 30.0]),
            family(1.0, &(0..33).map(|i| i as f32 * 10.0).collect::<Vec<_>>()),
            family(2.0, &(0..32).map(|i| i as f32 * 10.0).collect::<Vec<_>>()),
        ];
        let quads = run(&mut clusters);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0][0].theta, 2.0);
        assert_eq!(rhos(&quads[0]), [0.0, 90.0, 200.0, 310.0]);
    }

    #[test]
    fn clusters_are_sorted_by_absolute_rho() {
        let mut clusters = vec![family(0.0, &[150.0, -50.0, 100.0, 0.0])];
        let _ = run(&mut clusters);
        let sorted: Vec<f32> = clusters[0].iter().map(|l| l.rho).collect();
        assert_eq!(sorted, vec![0.0, -50.0, 100.0, 150.0]);
    }

    #[test]
    fn uneven_cluster_contributes_nothing() {
        let mut clusters = vec![family(0.0, &[0.0, 10.0, 100.0, 400.0])];
        assert!(run(&mut clusters).is_empty());
    }
}
