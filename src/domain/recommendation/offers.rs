//! Supplementary offer tables for non-elite recommendations.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

use crate::domain::foundation::Tag;

/// Built-in module and service tables for the trades assessment.
static DEFAULT_OFFERS: Lazy<OfferCatalog> = Lazy::new(|| {
    OfferCatalog::new(
        vec![
            offer(
                "Lead Engine Playbook",
                &["inconsistent_leads", "no_pipeline", "word_of_mouth", "hungry_for_leads"],
            ),
            offer(
                "Pricing for Profit",
                &["gut_pricing", "underpricing", "no_financials", "rough_numbers"],
            ),
            offer(
                "Office in Your Pocket",
                &["paper_based", "memory_based", "evening_paperwork", "scheduling_leaks"],
            ),
            offer(
                "Hiring Your First Tech",
                &["wants_to_hire", "hiring_bottleneck", "stretched_thin"],
            ),
            offer(
                "Repeat Business Machine",
                &["no_followup", "one_and_done", "manual_followup"],
            ),
        ],
        vec![
            offer(
                "Review Funnel Setup",
                &["word_of_mouth", "referral_habit", "repeat_business"],
            ),
            offer(
                "Website & Local SEO Tune-up",
                &["inconsistent_leads", "no_pipeline", "paid_leads", "willing_to_advertise"],
            ),
            offer(
                "Bookkeeping Catch-up",
                &["invoice_backlog", "cash_flow_risk", "no_paper_trail", "no_financials"],
            ),
            offer(
                "Scheduling System Install",
                &["scheduling_chaos", "scheduling_leaks", "dropped_jobs", "paper_based"],
            ),
            offer(
                "Hiring Funnel Build-out",
                &["wants_to_hire", "hiring_bottleneck", "small_team"],
            ),
        ],
    )
});

fn offer(name: &str, qualifying_tags: &[&str]) -> Offer {
    let tags = qualifying_tags
        .iter()
        .map(|value| {
            Tag::try_new(*value)
                .unwrap_or_else(|err| panic!("Built-in offer tag is invalid: {}", err))
        })
        .collect();
    Offer::new(name, tags)
}

/// One offer row: matched when the respondent carries any qualifying tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    name: String,
    qualifying_tags: Vec<Tag>,
}

impl Offer {
    /// Creates an offer with its qualifying tags.
    pub fn new(name: impl Into<String>, qualifying_tags: Vec<Tag>) -> Self {
        Self {
            name: name.into(),
            qualifying_tags,
        }
    }

    /// Returns the offer's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true when the respondent shares at least one qualifying tag.
    pub fn matches(&self, tags: &BTreeSet<Tag>) -> bool {
        self.qualifying_tags.iter().any(|tag| tags.contains(tag))
    }
}

/// Declaration-ordered offer tables with per-kind caps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCatalog {
    modules: Vec<Offer>,
    services: Vec<Offer>,
}

impl OfferCatalog {
    /// Most training modules a recommendation may carry.
    pub const MAX_MODULES: usize = 2;

    /// Most done-for-you services a recommendation may carry.
    pub const MAX_SERVICES: usize = 3;

    /// Creates a catalog from module and service tables.
    pub fn new(modules: Vec<Offer>, services: Vec<Offer>) -> Self {
        Self { modules, services }
    }

    /// Matching module names in declaration order, capped at
    /// [`Self::MAX_MODULES`].
    pub fn matching_modules(&self, tags: &BTreeSet<Tag>) -> Vec<String> {
        Self::matching(&self.modules, tags, Self::MAX_MODULES)
    }

    /// Matching service names in declaration order, capped at
    /// [`Self::MAX_SERVICES`].
    pub fn matching_services(&self, tags: &BTreeSet<Tag>) -> Vec<String> {
        Self::matching(&self.services, tags, Self::MAX_SERVICES)
    }

    fn matching(offers: &[Offer], tags: &BTreeSet<Tag>, cap: usize) -> Vec<String> {
        offers
            .iter()
            .filter(|offer| offer.matches(tags))
            .take(cap)
            .map(|offer| offer.name.clone())
            .collect()
    }
}

impl Default for OfferCatalog {
    fn default() -> Self {
        DEFAULT_OFFERS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_set(values: &[&str]) -> BTreeSet<Tag> {
        values.iter().map(|v| Tag::try_new(*v).unwrap()).collect()
    }

    #[test]
    fn matches_on_any_shared_tag() {
        let catalog = OfferCatalog::default();
        let modules = catalog.matching_modules(&tag_set(&["underpricing"]));
        assert_eq!(modules, vec!["Pricing for Profit".to_string()]);
    }

    #[test]
    fn no_shared_tag_means_no_offers() {
        let catalog = OfferCatalog::default();
        assert!(catalog.matching_modules(&tag_set(&["solo"])).is_empty());
        assert!(catalog.matching_services(&tag_set(&["solo"])).is_empty());
    }

    #[test]
    fn modules_are_capped_at_two() {
        let catalog = OfferCatalog::default();
        let modules = catalog.matching_modules(&tag_set(&[
            "inconsistent_leads",
            "gut_pricing",
            "paper_based",
            "wants_to_hire",
        ]));
        assert_eq!(modules.len(), OfferCatalog::MAX_MODULES);
    }

    #[test]
    fn services_are_capped_at_three() {
        let catalog = OfferCatalog::default();
        let services = catalog.matching_services(&tag_set(&[
            "referral_habit",
            "paid_leads",
            "invoice_backlog",
            "scheduling_chaos",
            "wants_to_hire",
        ]));
        assert_eq!(services.len(), OfferCatalog::MAX_SERVICES);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        let catalog = OfferCatalog::default();
        let modules = catalog.matching_modules(&tag_set(&[
            "wants_to_hire",
            "no_followup",
            "inconsistent_leads",
        ]));
        // Lead Engine Playbook is declared before the hiring and follow-up
        // modules, so it takes the first slot.
        assert_eq!(modules[0], "Lead Engine Playbook");
        assert_eq!(modules[1], "Hiring Your First Tech");
    }

    #[test]
    fn custom_catalog_uses_its_own_tables() {
        let catalog = OfferCatalog::new(
            vec![Offer::new(
                "Test Module",
                vec![Tag::try_new("solo").unwrap()],
            )],
            vec![],
        );
        assert_eq!(
            catalog.matching_modules(&tag_set(&["solo"])),
            vec!["Test Module".to_string()]
        );
        assert!(catalog.matching_services(&tag_set(&["solo"])).is_empty());
    }
}
