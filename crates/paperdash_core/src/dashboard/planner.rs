//! "Work on this next" pick.

use crate::dashboard::papers::PaperView;
use crate::model::instant::{parse_instant, Instant};

/// The paper with the nearest deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerPick {
    pub title: String,
    pub project: String,
    pub status: String,
    /// Deadline as entered in the record.
    pub deadline: String,
    /// Deadline already passed at the reference instant.
    pub overdue: bool,
}

/// Picks the paper with the earliest parseable deadline.
///
/// Ties keep input order. Papers whose deadline is missing or unparseable
/// are not candidates. `None` means there is nothing scheduled.
pub fn plan_next(papers: &[PaperView<'_>], now: Instant) -> Option<PlannerPick> {
    let (view, deadline) = papers
        .iter()
        .filter_map(|view| {
            let raw = view.paper.deadline.as_deref()?;
            parse_instant(raw).map(|deadline| (view, deadline))
        })
        .min_by_key(|(_, deadline)| *deadline)?;

    Some(PlannerPick {
        title: view.paper.title.clone(),
        project: view.project.to_string(),
        status: view.paper.status.clone(),
        deadline: view.paper.deadline.clone().unwrap_or_default(),
        overdue: deadline < now,
    })
}

#[cfg(test)]
mod tests {
    use super::plan_next;
    use crate::dashboard::papers::flatten_papers;
    use crate::model::instant::parse_instant;
    use crate::model::record::{PaperRecord, ProjectRecord};

    fn paper(title: &str, deadline: Option<&str>) -> PaperRecord {
        let mut record = PaperRecord::new(title);
        record.deadline = deadline.map(str::to_string);
        record
    }

    #[test]
    fn picks_earliest_deadline_and_flags_overdue() {
        let mut project = ProjectRecord::new("Vision");
        project.papers = vec![
            paper("later", Some("2026-06-01")),
            paper("no deadline", None),
            paper("garbage", Some("someday")),
            paper("sooner", Some("2026-03-01")),
        ];
        let projects = vec![project];
        let papers = flatten_papers(&projects);

        let now = parse_instant("2026-03-15").unwrap();
        let pick = plan_next(&papers, now).unwrap();
        assert_eq!(pick.title, "sooner");
        assert_eq!(pick.project, "Vision");
        assert!(pick.overdue);

        let earlier_now = parse_instant("2026-02-01").unwrap();
        assert!(!plan_next(&papers, earlier_now).unwrap().overdue);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut project = ProjectRecord::new("NLP");
        project.papers = vec![
            paper("first", Some("2026-05-01")),
            paper("second", Some("2026-05-01")),
        ];
        let projects = vec![project];
        let papers = flatten_papers(&projects);
        let now = parse_instant("2026-01-01").unwrap();
        assert_eq!(plan_next(&papers, now).unwrap().title, "first");
    }

    #[test]
    fn nothing_scheduled_yields_none() {
        let now = parse_instant("2026-01-01").unwrap();
        assert_eq!(plan_next(&[], now), None);
    }
}
