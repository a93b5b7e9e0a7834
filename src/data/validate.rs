use super::model::DailyRecord;

// ---------------------------------------------------------------------------
// Cross-field consistency checks on the daily dataset
// ---------------------------------------------------------------------------

/// Rows that break a consistency rule. Rows are only flagged; every
/// downstream computation still sees the full dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Days marked both holiday and working day.
    pub inconsistent: Vec<DailyRecord>,
    /// Days where `total != casual + registered`.
    pub count_mismatches: Vec<DailyRecord>,
}

impl ValidationReport {
    /// Number of holiday / working-day inconsistencies.
    pub fn inconsistent_count(&self) -> usize {
        self.inconsistent.len()
    }

    pub fn is_clean(&self) -> bool {
        self.inconsistent.is_empty() && self.count_mismatches.is_empty()
    }
}

/// Scan the daily dataset for inconsistent rows.
pub fn validate(daily: &[DailyRecord]) -> ValidationReport {
    let inconsistent = daily
        .iter()
        .filter(|r| r.holiday && r.workingday)
        .cloned()
        .collect();
    let count_mismatches = daily
        .iter()
        .filter(|r| u64::from(r.total) != u64::from(r.casual) + u64::from(r.registered))
        .cloned()
        .collect();

    ValidationReport {
        inconsistent,
        count_mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::*;

    #[test]
    fn flags_holiday_marked_as_workingday() {
        let daily = three_days();
        let report = validate(&daily);
        assert_eq!(report.inconsistent_count(), 1);
        assert_eq!(report.inconsistent[0].date, date(2011, 1, 1));
        assert!(report.count_mismatches.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn reports_count_mismatch_without_dropping_rows() {
        let mut daily = three_days();
        daily[2].casual += 1;
        let report = validate(&daily);
        assert_eq!(report.count_mismatches.len(), 1);
        assert_eq!(report.count_mismatches[0].date, date(2011, 1, 3));
        assert_eq!(daily.len(), 3);
    }

    #[test]
    fn empty_input_is_clean() {
        let report = validate(&[]);
        assert!(report.is_clean());
        assert_eq!(report.inconsistent_count(), 0);
    }
}
