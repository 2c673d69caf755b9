//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods, 
//! along with shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.  


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`]. 
/// This cap is only applied when a bracket algorithm’s theoretical iteration bound 
/// would otherwise exceed it (e.g. [`BracketFamily::Bisection`]).  
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding 
/// - [`Algorithm::Open`]    contains open methods for root-finding 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Bracket(BracketFamily), 
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily { 
    Bisection,
    RegulaFalsiPure, 
    RegulaFalsiIllinois, 
    RegulaFalsiPegasus, 
    RegulaFalsiAndersonBjorck,
}

impl BracketFamily { 
    /// `true` for the false-position family (everything but bisection). 
    pub const fn is_regula_falsi(self) -> bool { 
        !matches!(self, BracketFamily::Bisection)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily { 
    Newton
}

impl Algorithm { 
    /// Default iteration count if `max_iter` is unset in config. 
    ///  
    /// # Notes 
    /// - Values are heuristic and method-specific.  
    /// - [`BracketFamily::Bisection`] returns `None`, meaning 
    ///   “compute theoretical bound instead”; capped by [`GLOBAL_MAX_ITER_FALLBACK`].
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Bracket(BracketFamily::Bisection)                   => None, 
            Algorithm::Bracket(BracketFamily::RegulaFalsiPure)             => Some(200), 
            Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois) 
            | Algorithm::Bracket(BracketFamily::RegulaFalsiPegasus) 
            | Algorithm::Bracket(BracketFamily::RegulaFalsiAndersonBjorck) => Some(100), 
            Algorithm::Open(OpenFamily::Newton)                            => Some(50), 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bracket(BracketFamily::Bisection)                 => "bisection", 
            Algorithm::Bracket(BracketFamily::RegulaFalsiPure)           => "regula_falsi_pure", 
            Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois)       => "regula_falsi_illinois",
            Algorithm::Bracket(BracketFamily::RegulaFalsiPegasus)        => "regula_falsi_pegasus",
            Algorithm::Bracket(BracketFamily::RegulaFalsiAndersonBjorck) => "regula_falsi_anderson_bjorck", 
            Algorithm::Open(OpenFamily::Newton)                          => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
