use super::*;

fn owned(id: i64, raised: f64, percentage: f64) -> OwnedProject {
    OwnedProject {
        id,
        title: format!("campaign {id}"),
        total_target: 1000.0,
        current_amount: raised,
        funding_percentage: percentage,
        ..OwnedProject::default()
    }
}

fn donation(id: i64, amount: f64) -> DonationRecord {
    DonationRecord {
        id,
        amount,
        ..DonationRecord::default()
    }
}

// =============================================================
// Cancellation eligibility
// =============================================================

#[test]
fn cancel_eligibility_is_strictly_below_the_threshold() {
    assert!(can_cancel(0.0));
    assert!(can_cancel(24.99));
    assert!(!can_cancel(25.0));
    assert!(!can_cancel(80.0));
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn apply_data_fills_both_lists() {
    let mut dashboard = DashboardState::default();
    dashboard.begin_load();
    assert!(dashboard.loading);

    dashboard.apply_data(vec![owned(1, 200.0, 20.0)], vec![donation(1, 50.0)]);
    assert!(!dashboard.loading);
    assert_eq!(dashboard.projects.len(), 1);
    assert_eq!(dashboard.donations.len(), 1);
}

#[test]
fn errors_hold_until_dismissed_or_replaced() {
    let mut dashboard = DashboardState::default();
    dashboard.apply_error("down".to_owned());
    assert_eq!(dashboard.error.as_deref(), Some("down"));

    dashboard.apply_notice("Project cancelled".to_owned());
    assert_eq!(dashboard.error, None);
    assert_eq!(dashboard.notice.as_deref(), Some("Project cancelled"));

    dashboard.dismiss_feedback();
    assert_eq!(dashboard.notice, None);
}

// =============================================================
// Rows
// =============================================================

#[test]
fn deleting_removes_only_that_row() {
    let mut dashboard = DashboardState::default();
    dashboard.apply_data(
        vec![owned(1, 0.0, 0.0), owned(2, 0.0, 0.0)],
        Vec::new(),
    );

    dashboard.remove_project(1);
    let ids: Vec<i64> = dashboard.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, [2]);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_sum_both_lists() {
    let mut dashboard = DashboardState::default();
    dashboard.apply_data(
        vec![owned(1, 200.0, 20.0), owned(2, 300.0, 30.0)],
        vec![donation(1, 25.0), donation(2, 75.0)],
    );

    let stats = dashboard.stats();
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.total_raised, 500.0);
    assert_eq!(stats.total_donations, 2);
    assert_eq!(stats.total_donated, 100.0);
}

#[test]
fn empty_dashboard_has_zero_stats() {
    assert_eq!(DashboardState::default().stats(), DashboardStats::default());
}
