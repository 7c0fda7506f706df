//! Static overview content: headline stats, completion by subsidiary, pending
//! approvals, the budget ledger, and the sidebar navigation.

use serde::Serialize;

/// Completion percentages below this are flagged for attention.
pub const AT_RISK_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub needs_action: bool,
}

impl StatCard {
    const fn new(title: &'static str, value: &'static str, change: &'static str) -> Self {
        Self {
            title,
            value,
            change,
            needs_action: false,
        }
    }

    const fn action_required(title: &'static str, value: &'static str) -> Self {
        Self {
            title,
            value,
            change: "Action Required",
            needs_action: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionEntry {
    pub name: &'static str,
    pub completion: u8,
    pub at_risk: bool,
}

impl CompletionEntry {
    fn new(name: &'static str, completion: u8) -> Self {
        Self {
            name,
            completion,
            at_risk: completion < AT_RISK_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalItem {
    pub title: &'static str,
    pub requestor: &'static str,
    pub amount: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub description: String,
    pub amount_ngn: f64,
}

/// Expenditure ledger for the current fiscal period. Nothing has been
/// initialized yet, so the catalog always ships it empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLedger {
    pub fiscal_year: u16,
    pub currency: &'static str,
    pub total_approved: f64,
    pub entries: Vec<LedgerEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<LedgerEmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEmptyState {
    pub heading: &'static str,
    pub message: &'static str,
}

impl BudgetLedger {
    pub fn uninitialized(fiscal_year: u16) -> Self {
        let mut ledger = Self {
            fiscal_year,
            currency: "NGN",
            total_approved: 0.0,
            entries: Vec::new(),
            empty_state: None,
        };
        ledger.refresh_empty_state();
        ledger
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn refresh_empty_state(&mut self) {
        self.empty_state = self.is_empty().then_some(LedgerEmptyState {
            heading: "No Records Available",
            message: "There are currently no budget allocations or expenditure records for this fiscal period. Please import your financial plan or create a new allocation request.",
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    Dashboard,
    Assessment,
    Strategy,
    Training,
    Budget,
    Assets,
    Reports,
}

impl NavSection {
    pub const ALL: [NavSection; 7] = [
        NavSection::Dashboard,
        NavSection::Assessment,
        NavSection::Strategy,
        NavSection::Training,
        NavSection::Budget,
        NavSection::Assets,
        NavSection::Reports,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NavSection::Dashboard => "dashboard",
            NavSection::Assessment => "assessment",
            NavSection::Strategy => "strategy",
            NavSection::Training => "training",
            NavSection::Budget => "budget",
            NavSection::Assets => "assets",
            NavSection::Reports => "reports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Dashboard => "Overview",
            NavSection::Assessment => "Diagnostic Pulse",
            NavSection::Strategy => "AI Strategist",
            NavSection::Training => "Training Programs",
            NavSection::Budget => "Budget & Cost",
            NavSection::Assets => "Assets & Admin",
            NavSection::Reports => "Reports",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: NavSection,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCatalog {
    pub stats: Vec<StatCard>,
    pub completion_by_subsidiary: Vec<CompletionEntry>,
    pub pending_approvals: Vec<ApprovalItem>,
    pub budget: BudgetLedger,
    pub navigation: Vec<NavItem>,
}

impl DashboardCatalog {
    pub fn standard() -> Self {
        Self {
            stats: vec![
                StatCard::new("Total Trainees", "1,245", "+12% from last Q"),
                StatCard::new("Active Programs", "8", "3 ending soon"),
                StatCard::new("Budget Utilized", "42%", "On track"),
                StatCard::action_required("Compliance Gaps", "3"),
            ],
            completion_by_subsidiary: vec![
                CompletionEntry::new("EIB Holdings", 85),
                CompletionEntry::new("Tech Sol.", 65),
                CompletionEntry::new("Logistics", 92),
                CompletionEntry::new("Retail Arm", 45),
            ],
            pending_approvals: vec![
                ApprovalItem {
                    title: "Leadership Seminar Budget",
                    requestor: "Sarah Jenkins (HR)",
                    amount: "$4,500",
                },
                ApprovalItem {
                    title: "External Vendor: Safety Co.",
                    requestor: "Mike Ross (Ops)",
                    amount: "$2,200",
                },
                ApprovalItem {
                    title: "New Hire Induction Kit",
                    requestor: "Admin Team",
                    amount: "$800",
                },
            ],
            budget: BudgetLedger::uninitialized(2026),
            navigation: NavSection::ALL
                .into_iter()
                .map(|id| NavItem {
                    id,
                    label: id.label(),
                })
                .collect(),
        }
    }

    pub fn at_risk(&self) -> impl Iterator<Item = &CompletionEntry> {
        self.completion_by_subsidiary
            .iter()
            .filter(|entry| entry.at_risk)
    }
}

impl Default for DashboardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_stats_match_overview() {
        let catalog = DashboardCatalog::standard();
        let values: Vec<(&str, &str)> = catalog
            .stats
            .iter()
            .map(|card| (card.title, card.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Total Trainees", "1,245"),
                ("Active Programs", "8"),
                ("Budget Utilized", "42%"),
                ("Compliance Gaps", "3"),
            ]
        );
        assert!(catalog.stats[3].needs_action);
        assert!(catalog.stats[..3].iter().all(|card| !card.needs_action));
    }

    #[test]
    fn completion_below_threshold_is_flagged() {
        let catalog = DashboardCatalog::standard();
        let flagged: Vec<&str> = catalog.at_risk().map(|entry| entry.name).collect();
        assert_eq!(flagged, vec!["Retail Arm"]);
        assert!(!CompletionEntry::new("Edge", AT_RISK_THRESHOLD).at_risk);
    }

    #[test]
    fn budget_ledger_starts_empty_with_message() {
        let ledger = DashboardCatalog::standard().budget;
        assert!(ledger.is_empty());
        assert_eq!(ledger.currency, "NGN");
        let empty = ledger.empty_state.expect("empty state present");
        assert_eq!(empty.heading, "No Records Available");
    }

    #[test]
    fn navigation_lists_every_section_in_order() {
        let catalog = DashboardCatalog::standard();
        let ids: Vec<&str> = catalog.navigation.iter().map(|item| item.id.id()).collect();
        assert_eq!(
            ids,
            vec!["dashboard", "assessment", "strategy", "training", "budget", "assets", "reports"]
        );
        assert_eq!(NavSection::from_id(" Strategy "), Some(NavSection::Strategy));
        assert_eq!(NavSection::from_id("payroll"), None);

        let json = serde_json::to_value(&catalog.navigation[1]).expect("serializes");
        assert_eq!(json["id"], "assessment");
        assert_eq!(json["label"], "Diagnostic Pulse");
    }
}
