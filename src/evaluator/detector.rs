use super::hand_analysis::HandAnalysis;
use crate::evaluator::{HandCategory, Ruleset};

/// Strategy pattern: each detector matches one precedence rule and names its category.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn category(&self, ruleset: Ruleset) -> HandCategory;
}

// ============================================================================
// Detector Implementations (in precedence order: first match wins)
// ============================================================================

/// Suited run whose sorted ranks open with ace then ten.
pub struct RoyalStraightFlushDetector;

impl CategoryDetector for RoyalStraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_run() && analysis.opens_ace_ten()
    }

    fn category(&self, _ruleset: Ruleset) -> HandCategory {
        HandCategory::StraightFlush { royal: true }
    }
}

/// Any other suited run.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_run()
    }

    fn category(&self, _ruleset: Ruleset) -> HandCategory {
        HandCategory::StraightFlush { royal: false }
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.high_count() == 4
    }

    fn category(&self, _ruleset: Ruleset) -> HandCategory {
        HandCategory::FourOfAKind
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.high_count() == 3 && analysis.second_count() == 2
    }

    fn category(&self, _ruleset: Ruleset) -> HandCategory {
        HandCategory::FullHouse
    }
}

/// Run of any suits. Labeled per ruleset.
pub struct RunDetector;

impl CategoryDetector for RunDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_run()
    }

    fn category(&self, ruleset: Ruleset) -> HandCategory {
        match ruleset {
            Ruleset::Reference => HandCategory::Flush,
            Ruleset::Conventional => HandCategory::Straight,
        }
    }
}

/// All one suit, not a run. Labeled per ruleset.
pub struct SuitedDetector;

impl CategoryDetector for SuitedDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush()
    }

    fn category(&self, ruleset: Ruleset) -> HandCategory {
        match ruleset {
            Ruleset::Reference => HandCategory::Straight,
            Ruleset::Conventional => HandCategory::Flush,
        }
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.high_count() == 3
    }

    fn category(&self, _ruleset: Ruleset) -> HandCategory {
        HandCategory::ThreeOfAKind
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.high_count() == 2 && analysis.second_count() == 2
    }

    fn category(&self, _ruleset: Ruleset) -> HandCategory {
        HandCategory::TwoPair
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.high_count() == 2
    }

    fn category(&self, _ruleset: Ruleset) -> HandCategory {
        HandCategory::OnePair
    }
}

// ============================================================================
// Static detector list (in precedence order)
// ============================================================================

/// A hand no detector matches is high cards.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &RoyalStraightFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &RunDetector,
    &SuitedDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
];
