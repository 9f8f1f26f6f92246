//! # Advisory
//!
//! Picks the most attractive retrofit measure: the category with the
//! highest ratio of annual savings to payback period. A category that
//! never pays back scores zero; when nothing scores above zero there is
//! no recommendation to give.

use serde::{Deserialize, Serialize};

use crate::calculations::category::CategoryResult;
use crate::calculations::Category;

/// A recommendation for the single best category to tackle first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Category with the best savings-to-payback ratio
    pub category: Category,

    /// Annual monetary savings of that category
    pub savings_eur_per_year: f64,

    /// Payback period of that category in years
    pub payback_years: f64,
}

impl Recommendation {
    /// Templated recommendation sentence for the report and the GUI.
    pub fn message(&self) -> String {
        format!(
            "Based on your goal of saving as much as possible in the shortest \
             possible time, we recommend focusing on the {}. This is expected \
             to save about \u{20ac}{:.2} per year with a payback period of \
             {:.2} years.",
            self.category.display_name().to_lowercase(),
            self.savings_eur_per_year,
            self.payback_years,
        )
    }
}

/// Score of a single category: savings per year of payback.
///
/// Zero when the payback is infinite (the measure never earns its cost back).
fn score(result: &CategoryResult) -> f64 {
    if result.payback_years.is_finite() {
        result.savings_eur_per_year / result.payback_years
    } else {
        0.0
    }
}

/// Pick the category with the highest savings-to-payback score.
///
/// Returns `None` when `results` is empty or no category has a positive
/// score (nothing pays back).
pub fn recommend(results: &[CategoryResult]) -> Option<Recommendation> {
    let best = results
        .iter()
        .max_by(|a, b| score(a).total_cmp(&score(b)))?;

    if score(best) <= 0.0 {
        return None;
    }

    Some(Recommendation {
        category: best.category,
        savings_eur_per_year: best.savings_eur_per_year,
        payback_years: best.payback_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::category::{calculate, CategoryInput};
    use crate::environment::EnvironmentInput;

    fn results_with(f: impl Fn(&mut CategoryInput)) -> Vec<CategoryResult> {
        let env = EnvironmentInput::default();
        Category::ALL
            .iter()
            .map(|&c| {
                let mut input = CategoryInput::defaults(c);
                f(&mut input);
                calculate(&input, &env).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_picks_highest_score() {
        let env = EnvironmentInput::default();
        let mut results = results_with(|_| {});
        // Cheaper roof: same savings, shorter payback, better score.
        let mut roof = CategoryInput::defaults(Category::Roof);
        roof.material_cost_per_m2 = 5.0;
        results[1] = calculate(&roof, &env).unwrap();

        let rec = recommend(&results).unwrap();
        assert_eq!(rec.category, Category::Roof);
        assert!(rec.payback_years < results[0].payback_years);
    }

    #[test]
    fn test_infinite_payback_scores_zero() {
        let env = EnvironmentInput::default();
        let mut results = results_with(|_| {});
        // The floor would win on raw savings, but it never pays back.
        let mut floor = CategoryInput::defaults(Category::Floor);
        floor.desired_rc = floor.current_rc;
        results[0] = calculate(&floor, &env).unwrap();

        let rec = recommend(&results).unwrap();
        assert_ne!(rec.category, Category::Floor);
    }

    #[test]
    fn test_no_recommendation_when_nothing_pays_back() {
        let results = results_with(|input| input.desired_rc = input.current_rc);
        assert!(recommend(&results).is_none());
        assert!(recommend(&[]).is_none());
    }

    #[test]
    fn test_message_names_the_category() {
        let results = results_with(|_| {});
        let rec = recommend(&results).unwrap();
        let message = rec.message();
        assert!(message.contains(&rec.category.display_name().to_lowercase()));
        assert!(message.contains("payback"));
    }
}
