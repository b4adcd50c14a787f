use nalgebra::DVector;

/// The raw value an objective function hands back, before any validation.
///
/// Objectives are free to return anything, so the evaluator decodes this once
/// into a canonical vector of reals and rejects every other variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveOutput {
    /// Floating point fitness values
    Real(Vec<f64>),
    /// Integer fitness values, `None` marks a missing value
    Integer(Vec<Option<i32>>),
    /// Character data
    Text(Vec<String>),
    /// Boolean data
    Logical(Vec<bool>),
    /// Nested values of any kind
    List(Vec<ObjectiveOutput>),
}

impl ObjectiveOutput {
    /// The number of rows, i.e. the number of candidates this output describes
    pub fn nrows(&self) -> usize {
        match self {
            ObjectiveOutput::Real(v) => v.len(),
            ObjectiveOutput::Integer(v) => v.len(),
            ObjectiveOutput::Text(v) => v.len(),
            ObjectiveOutput::Logical(v) => v.len(),
            ObjectiveOutput::List(v) => v.len(),
        }
    }

    /// Human readable name of the variant, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectiveOutput::Real(_) => "real",
            ObjectiveOutput::Integer(_) => "integer",
            ObjectiveOutput::Text(_) => "text",
            ObjectiveOutput::Logical(_) => "logical",
            ObjectiveOutput::List(_) => "list",
        }
    }

    /// Whether this output can be turned into fitness values
    #[inline(always)]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ObjectiveOutput::Real(_) | ObjectiveOutput::Integer(_))
    }

    /// Decode into floating point values.
    /// Integers are coerced, missing integers become NaN.
    ///
    /// # Returns:
    /// None for non numeric variants
    pub fn into_reals(self) -> Option<Vec<f64>> {
        match self {
            ObjectiveOutput::Real(v) => Some(v),
            ObjectiveOutput::Integer(v) => {
                trace!("coercing {} integer values to reals", v.len());
                Some(v.into_iter().map(|i| i.map_or(f64::NAN, f64::from)).collect())
            }
            _ => None,
        }
    }
}

impl From<Vec<f64>> for ObjectiveOutput {
    fn from(v: Vec<f64>) -> Self {
        ObjectiveOutput::Real(v)
    }
}

impl From<DVector<f64>> for ObjectiveOutput {
    fn from(v: DVector<f64>) -> Self {
        ObjectiveOutput::Real(v.as_slice().to_vec())
    }
}

impl From<Vec<i32>> for ObjectiveOutput {
    fn from(v: Vec<i32>) -> Self {
        ObjectiveOutput::Integer(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<bool>> for ObjectiveOutput {
    fn from(v: Vec<bool>) -> Self {
        ObjectiveOutput::Logical(v)
    }
}

impl From<Vec<String>> for ObjectiveOutput {
    fn from(v: Vec<String>) -> Self {
        ObjectiveOutput::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_coerce_to_reals() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let out = ObjectiveOutput::from(vec![1, 2, 3]);
        assert!(out.is_numeric());
        assert_eq!(out.into_reals(), Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn missing_integer_becomes_nan() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let out = ObjectiveOutput::Integer(vec![Some(4), None]);
        let reals = out.into_reals().unwrap();
        assert_eq!(reals[0], 4.0);
        assert!(reals[1].is_nan());
    }

    #[test]
    fn non_numeric_variants() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let outs = vec![
            ObjectiveOutput::from(vec!["a".to_string()]),
            ObjectiveOutput::from(vec![true, false]),
            ObjectiveOutput::List(vec![ObjectiveOutput::Real(vec![1.0])]),
        ];
        let names: Vec<&str> = outs.iter().map(|o| o.type_name()).collect();
        assert_eq!(names, vec!["text", "logical", "list"]);
        for o in outs {
            assert!(!o.is_numeric());
            assert_eq!(o.into_reals(), None);
        }
    }

    #[test]
    fn nrows_counts_list_entries_not_leaves() {
        let nested = ObjectiveOutput::List(vec![
            ObjectiveOutput::Real(vec![1.0, 2.0]),
            ObjectiveOutput::Real(vec![3.0]),
        ]);
        assert_eq!(nested.nrows(), 2);
    }

    #[test]
    fn from_dvector() {
        let v = DVector::from_vec(vec![0.5, 1.5]);
        assert_eq!(ObjectiveOutput::from(v), ObjectiveOutput::Real(vec![0.5, 1.5]));
    }
}
