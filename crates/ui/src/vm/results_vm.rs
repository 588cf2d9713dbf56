use quiz_core::model::ResultsSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_line: String,
    pub percentage_label: String,
    pub grade: &'static str,
}

impl From<&ResultsSummary> for ResultsVm {
    fn from(summary: &ResultsSummary) -> Self {
        Self {
            score_line: format!("{} / {}", summary.score, summary.total),
            percentage_label: format!("{}%", summary.percentage()),
            grade: summary.grade().as_str(),
        }
    }
}
