//! Crate-wide error taxonomy.
//!
//! Each algorithm family owns its own `thiserror` enum. [`ErrorKind`]
//! classifies every variant so callers can branch on the category
//! without matching family-specific variants.
//!
//! ┌ [`ErrorKind::Domain`]        : invalid precondition (bracket, nodes, grid)
//! ├ [`ErrorKind::Convergence`]   : iteration could not make (or did not make) progress
//! ├ [`ErrorKind::Stability`]     : discretization violates a stability bound
//! ├ [`ErrorKind::Configuration`] : invalid tolerance / step / coefficient settings
//! └ [`ErrorKind::Evaluation`]    : caller function returned NaN or inf


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Domain,
    Convergence,
    Stability,
    Configuration,
    Evaluation,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Domain        => "domain",
            ErrorKind::Convergence   => "convergence",
            ErrorKind::Stability     => "stability",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Evaluation    => "evaluation",
        }
    }
}
impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
