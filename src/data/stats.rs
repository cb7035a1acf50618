use super::model::PenguinDataset;

// ---------------------------------------------------------------------------
// Summary statistics over the filtered view
// ---------------------------------------------------------------------------

/// The three value-box readouts, recomputed whenever the filters change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// `None` when no visible row carries the measurement.
    pub mean_bill_length_mm: Option<f64>,
    pub mean_bill_depth_mm: Option<f64>,
}

impl Summary {
    /// Compute the summary over the given visible indices.
    ///
    /// Means skip rows with a missing measurement, so a non-empty view can
    /// still produce `None` if every visible row lacks the value.
    pub fn compute(dataset: &PenguinDataset, visible: &[usize]) -> Self {
        let rows = visible.iter().map(|&i| &dataset.penguins[i]);
        Summary {
            count: visible.len(),
            mean_bill_length_mm: mean(rows.clone().map(|p| p.bill_length_mm)),
            mean_bill_depth_mm: mean(rows.map(|p| p.bill_depth_mm)),
        }
    }
}

/// Arithmetic mean of the present values; `None` when none are present.
fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, n) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Format a millimetre mean for display: one decimal place, or the
/// placeholder when the view is empty.
pub fn format_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} mm"),
        None => "no data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Penguin, Species};

    fn row(bill_length: Option<f64>, bill_depth: Option<f64>) -> Penguin {
        Penguin {
            species: Species::Adelie,
            island: "Biscoe".to_string(),
            bill_length_mm: bill_length,
            bill_depth_mm: bill_depth,
            flipper_length_mm: None,
            body_mass_g: Some(3500.0),
            sex: None,
            year: 2007,
        }
    }

    #[test]
    fn count_matches_visible_length() {
        let ds = PenguinDataset::from_penguins(vec![
            row(Some(39.0), Some(18.0)),
            row(Some(41.0), Some(20.0)),
            row(Some(46.0), Some(15.0)),
        ]);
        let summary = Summary::compute(&ds, &[0, 2]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean_bill_length_mm, Some(42.5));
        assert_eq!(summary.mean_bill_depth_mm, Some(16.5));
    }

    #[test]
    fn empty_view_yields_placeholder_means() {
        let ds = PenguinDataset::from_penguins(vec![row(Some(39.0), Some(18.0))]);
        let summary = Summary::compute(&ds, &[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_bill_length_mm, None);
        assert_eq!(format_mm(summary.mean_bill_length_mm), "no data");
    }

    #[test]
    fn means_skip_missing_measurements() {
        let ds = PenguinDataset::from_penguins(vec![
            row(Some(40.0), None),
            row(None, None),
            row(Some(44.0), None),
        ]);
        let summary = Summary::compute(&ds, &[0, 1, 2]);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean_bill_length_mm, Some(42.0));
        // Every bill depth missing: placeholder even though the view is non-empty.
        assert_eq!(summary.mean_bill_depth_mm, None);
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(format_mm(Some(43.27)), "43.3 mm");
        assert_eq!(format_mm(Some(17.0)), "17.0 mm");
    }
}
