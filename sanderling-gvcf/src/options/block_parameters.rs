use std::fmt;

/// Non-variant block banding parameters.
///
/// Sites are merged into a non-variant block while their sample values stay
/// within a band of the block minimum `x`: a value `y` joins the block when
/// `y <= max(x + abs_tol, x * (1 + percent_tol / 100))`. The tolerances name
/// the block flag's ID, so streams compressed under different bands declare
/// distinct flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockParameters {
    abs_tol: u32,
    percent_tol: u32,
}

impl BlockParameters {
    /// Creates block banding parameters.
    ///
    /// # Panics
    ///
    /// Panics if both tolerances are zero or if `percent_tol` is greater
    /// than 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::options::BlockParameters;
    /// let parameters = BlockParameters::new(3, 30);
    /// ```
    pub fn new(abs_tol: u32, percent_tol: u32) -> Self {
        assert!(
            abs_tol > 0 || percent_tol > 0,
            "at least one tolerance must be nonzero"
        );
        assert!(percent_tol <= 100, "percent_tol must be at most 100");

        Self {
            abs_tol,
            percent_tol,
        }
    }

    /// Returns the absolute tolerance.
    pub fn abs_tol(&self) -> u32 {
        self.abs_tol
    }

    /// Returns the percent tolerance.
    pub fn percent_tol(&self) -> u32 {
        self.percent_tol
    }

    /// Returns the ID of the block flag these parameters declare.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::options::BlockParameters;
    /// assert_eq!(BlockParameters::new(3, 30).id(), "BLOCKAVG_min30p3a");
    /// ```
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl Default for BlockParameters {
    fn default() -> Self {
        Self::new(3, 30)
    }
}

impl fmt::Display for BlockParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BLOCKAVG_min{}p{}a", self.percent_tol, self.abs_tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let parameters = BlockParameters::default();
        assert_eq!(parameters.abs_tol(), 3);
        assert_eq!(parameters.percent_tol(), 30);
    }

    #[test]
    fn test_id() {
        assert_eq!(BlockParameters::new(3, 30).id(), "BLOCKAVG_min30p3a");
        assert_eq!(BlockParameters::new(5, 25).id(), "BLOCKAVG_min25p5a");
    }

    #[test]
    #[should_panic(expected = "at least one tolerance must be nonzero")]
    fn test_new_rejects_zero_tolerances() {
        BlockParameters::new(0, 0);
    }

    #[test]
    #[should_panic(expected = "percent_tol must be at most 100")]
    fn test_new_rejects_percent_tol_over_100() {
        BlockParameters::new(3, 101);
    }
}
