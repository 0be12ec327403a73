//! Greedy angle clustering of accumulator lines.
//!
//! Lines are visited once in input order and each cluster is tested in
//! creation order: first the line's angle, then its alternate form
//! `(θ + π, −ρ)`, against the cluster's circular mean. The first cluster
//! passing either test takes the line (the alternate form when only that
//! matched), so antiparallel normals end up in one family. Otherwise a new
//! cluster is started. Cluster means are recomputed for every test and
//! drift as members are appended, so the grouping depends on input order.
use crate::angle::{circular_difference, circular_mean};
use crate::types::Line;

/// Circular mean of the member angles of a cluster.
pub fn mean_theta(cluster: &[Line]) -> Option<f32> {
    circular_mean(cluster.iter().map(|l| l.theta))
}

/// Index of the first cluster accepting `line`, together with the form that
/// matched.
fn first_matching(clusters: &[Vec<Line>], line: &Line, tolerance: f32) -> Option<(usize, Line)> {
    let alternate = line.alternate();
    clusters.iter().enumerate().find_map(|(idx, cluster)| {
        let mean = mean_theta(cluster)?;
        if circular_difference(line.theta, mean) < tolerance {
            Some((idx, *line))
        } else if circular_difference(alternate.theta, mean) < tolerance {
            Some((idx, alternate))
        } else {
            None
        }
    })
}

/// Groups `lines` into approximately parallel families.
///
/// `clusters` is cleared first; every produced cluster is non-empty.
pub fn cluster_lines_by_theta(lines: &[Line], tolerance: f32, clusters: &mut Vec<Vec<Line>>) {
    clusters.clear();
    for line in lines {
        match first_matching(clusters, line, tolerance) {
            Some((idx, member)) => clusters[idx].push(member),
            None => clusters.push(vec![*line]),
        }
    }
}

/// Whether `line` passes the membership test against `mean`, directly or
/// through its alternate form.
pub fn is_member(line: &Line, mean: f32, tolerance: f32) -> bool {
    circular_difference(line.theta, mean) < tolerance
        || circular_difference(line.alternate().theta, mean) < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const TOL: f32 = PI / 12.0;

    fn cluster(lines: &[Line]) -> Vec<Vec<Line>> {
        let mut clusters = Vec::new();
        cluster_lines_by_theta(lines, TOL, &mut clusters);
        clusters
    }

    #[test]
    fn separates_perpendicular_families() {
        let lines = [
            Line::new(0.02, 10.0),
            Line::new(FRAC_PI_2, 10.0),
            Line::new(TAU - 0.03, 20.0),
            Line::new(FRAC_PI_2 + 0.05, 30.0),
            Line::new(0.0, 40.0),
        ];
        let clusters = cluster(&lines);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 3);
        assert_eq!(clusters[1].len(), 2);
        for c in &clusters {
            let mean = mean_theta(c).expect("non-empty");
            for l in c {
                assert!(is_member(l, mean, TOL), "line {l:?} vs mean {mean}");
            }
        }
    }

    #[test]
    fn antiparallel_line_joins_as_alternate_form() {
        let lines = [Line::new(0.1, 50.0), Line::new(PI + 0.1, 20.0)];
        let clusters = cluster(&lines);
        assert_eq!(clusters.len(), 1);
        let joined = clusters[0][1];
        assert!((joined.theta - 0.1).abs() < 1e-5, "theta={}", joined.theta);
        assert_eq!(joined.rho, -20.0);
    }

    #[test]
    fn earlier_alternate_match_beats_later_direct_match() {
        // Cluster 0 sits at 3.0, cluster 1 at 0.2. A line at 0.1 matches
        // cluster 1 directly, but cluster 0 is tested first and accepts its
        // alternate form at 0.1 + π.
        let lines = [
            Line::new(3.0, 5.0),
            Line::new(0.2, 5.0),
            Line::new(0.1, 7.0),
        ];
        let clusters = cluster(&lines);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 2);
        let joined = clusters[0][1];
        assert!((joined.theta - (0.1 + PI)).abs() < 1e-5, "theta={}", joined.theta);
        assert_eq!(joined.rho, -7.0);
        assert_eq!(clusters[1], vec![Line::new(0.2, 5.0)]);
    }

    #[test]
    fn grouping_depends_on_input_order() {
        // Once 0.25 joins, the mean moves to 0.125 and 0.38 is close enough.
        // Visiting 0.38 first leaves it outside the cluster at 0.
        let a = Line::new(0.0, 1.0);
        let b = Line::new(0.25, 2.0);
        let c = Line::new(0.38, 3.0);
        assert_eq!(cluster(&[a, b, c]).len(), 1);
        assert_eq!(cluster(&[a, c, b]).len(), 2);
    }

    #[test]
    fn clusters_are_rebuilt_each_call() {
        let mut clusters = vec![vec![Line::new(1.0, 1.0)]];
        cluster_lines_by_theta(&[], TOL, &mut clusters);
        assert!(clusters.is_empty());
    }
}
