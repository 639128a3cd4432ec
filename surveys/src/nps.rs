use serde::{Deserialize, Serialize};

/// Aggregated responses for a 0-10 rating question: one bucket per rating
/// plus the authoritative response count.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SurveyRatingResults {
    #[serde(default)]
    pub data: Vec<u64>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NpsBreakdown {
    pub detractors: u64,
    pub passives: u64,
    pub promoters: u64,
    pub total: u64,
}

const NPS_BUCKET_COUNT: usize = 11;

/// Buckets a 0-10 rating histogram into the NPS segments: detractors (0-6),
/// passives (7-8), promoters (9-10).
///
/// Returns `None` when the histogram does not cover exactly the 11 ratings.
/// `total` is taken as authoritative rather than re-derived, so a zero total
/// yields an all-zero breakdown regardless of bucket contents.
pub fn calculate_nps_breakdown(results: &SurveyRatingResults) -> Option<NpsBreakdown> {
    if results.data.len() != NPS_BUCKET_COUNT {
        return None;
    }

    if results.total == 0 {
        return Some(NpsBreakdown::default());
    }

    Some(NpsBreakdown {
        detractors: results.data[0..=6].iter().sum(),
        passives: results.data[7..=8].iter().sum(),
        promoters: results.data[9..=10].iter().sum(),
        total: results.total,
    })
}

/// Net promoter score: percentage of promoters minus percentage of
/// detractors, each rounded to the nearest integer. Zero when there are no
/// responses.
pub fn calculate_nps_score(breakdown: &NpsBreakdown) -> f64 {
    if breakdown.total == 0 {
        return 0.0;
    }
    let total = breakdown.total as f64;
    let promoters_pct = (100.0 * breakdown.promoters as f64 / total).round();
    let detractors_pct = (100.0 * breakdown.detractors as f64 / total).round();
    promoters_pct - detractors_pct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_buckets_ratings_into_segments() {
        let results = SurveyRatingResults {
            data: vec![1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3],
            total: 17,
        };
        assert_eq!(
            calculate_nps_breakdown(&results),
            Some(NpsBreakdown {
                detractors: 7,
                passives: 4,
                promoters: 6,
                total: 17,
            })
        );
    }

    #[test]
    fn test_breakdown_requires_eleven_buckets() {
        let too_few = SurveyRatingResults { data: vec![1; 10], total: 10 };
        assert_eq!(calculate_nps_breakdown(&too_few), None);

        let too_many = SurveyRatingResults { data: vec![1; 12], total: 12 };
        assert_eq!(calculate_nps_breakdown(&too_many), None);

        let missing = SurveyRatingResults { data: vec![], total: 5 };
        assert_eq!(calculate_nps_breakdown(&missing), None);
    }

    #[test]
    fn test_zero_total_is_authoritative_over_buckets() {
        let results = SurveyRatingResults {
            data: vec![5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
            total: 0,
        };
        assert_eq!(calculate_nps_breakdown(&results), Some(NpsBreakdown::default()));
    }

    #[test]
    fn test_score_from_mixed_breakdown() {
        let breakdown = NpsBreakdown {
            detractors: 20,
            passives: 30,
            promoters: 50,
            total: 100,
        };
        assert_eq!(calculate_nps_score(&breakdown), 30.0);
    }

    #[test]
    fn test_score_extremes() {
        let all_promoters = NpsBreakdown { detractors: 0, passives: 0, promoters: 40, total: 40 };
        assert_eq!(calculate_nps_score(&all_promoters), 100.0);

        let all_detractors = NpsBreakdown { detractors: 40, passives: 0, promoters: 0, total: 40 };
        assert_eq!(calculate_nps_score(&all_detractors), -100.0);

        let balanced = NpsBreakdown { detractors: 10, passives: 5, promoters: 10, total: 25 };
        assert_eq!(calculate_nps_score(&balanced), 0.0);
    }

    #[test]
    fn test_score_of_empty_breakdown_is_zero() {
        assert_eq!(calculate_nps_score(&NpsBreakdown::default()), 0.0);
    }
}
