//! Portfolio counters and the submission pipeline.

use crate::dashboard::papers::PaperView;

pub const DECISION_UNDER_REVIEW: &str = "Under Review";
pub const DECISION_ACCEPTED: &str = "Accepted";

/// Summary counters shown in the stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortfolioStats {
    pub total: usize,
    /// Papers with at least one submission under review.
    pub under_review: usize,
    /// Papers with at least one accepted submission.
    pub accepted: usize,
    /// Papers at 100% progress.
    pub completed: usize,
}

pub fn portfolio_stats(papers: &[PaperView<'_>]) -> PortfolioStats {
    papers
        .iter()
        .fold(PortfolioStats::default(), |mut stats, view| {
            stats.total += 1;
            if view.paper.has_decision(DECISION_UNDER_REVIEW) {
                stats.under_review += 1;
            }
            if view.paper.has_decision(DECISION_ACCEPTED) {
                stats.accepted += 1;
            }
            if view.paper.is_complete() {
                stats.completed += 1;
            }
            stats
        })
}

/// One submission card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineEntry {
    pub title: String,
    pub journal: String,
    pub submitted: String,
    pub decision: String,
}

/// One entry per submission of every paper, in input order.
pub fn submission_pipeline(papers: &[PaperView<'_>]) -> Vec<PipelineEntry> {
    papers
        .iter()
        .flat_map(|view| {
            view.paper.submissions.iter().map(|submission| PipelineEntry {
                title: view.paper.title.clone(),
                journal: submission.journal.clone(),
                submitted: submission.submitted.clone(),
                decision: submission.decision.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{portfolio_stats, submission_pipeline, PortfolioStats};
    use crate::dashboard::papers::flatten_papers;
    use crate::model::record::{PaperRecord, ProjectRecord, SubmissionRecord};

    fn submission(journal: &str, decision: &str) -> SubmissionRecord {
        SubmissionRecord {
            journal: journal.to_string(),
            submitted: "2026-01-10".to_string(),
            decision: decision.to_string(),
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        let mut reviewed = PaperRecord::new("reviewed");
        reviewed.submissions = vec![
            submission("JMLR", "Rejected"),
            submission("TMLR", "Under Review"),
        ];
        let mut accepted = PaperRecord::new("accepted");
        accepted.progress = 100;
        accepted.submissions = vec![submission("NeurIPS", "Accepted")];
        let mut case_mismatch = PaperRecord::new("lowercase decision");
        case_mismatch.submissions = vec![submission("ICML", "under review")];

        let mut project = ProjectRecord::new("ML");
        project.papers = vec![reviewed, accepted, case_mismatch, PaperRecord::new("idea")];
        vec![project]
    }

    #[test]
    fn stats_count_papers_not_submissions() {
        let projects = sample();
        let stats = portfolio_stats(&flatten_papers(&projects));
        assert_eq!(
            stats,
            PortfolioStats {
                total: 4,
                under_review: 1,
                accepted: 1,
                completed: 1,
            }
        );
    }

    #[test]
    fn pipeline_lists_every_submission_with_title() {
        let projects = sample();
        let entries = submission_pipeline(&flatten_papers(&projects));
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].title, "reviewed");
        assert_eq!(entries[0].journal, "JMLR");
        assert_eq!(entries[1].decision, "Under Review");
        assert_eq!(entries[3].title, "lowercase decision");
    }
}
