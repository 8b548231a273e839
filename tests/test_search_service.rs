//! End-to-end tests of the search form through the search service.
//!
//! The contact source is replaced by an in-memory repository so that each
//! scenario controls exactly which contacts the search sees.

mod fixtures;
mod mocks;

use contact_finder::models::CriteriaUpdate;
use contact_finder::{
    ContactSearchService, ContactSearchServiceImpl, HeaderCheckState, SessionError,
};
use mocks::MockContactRepository;
use std::sync::Arc;

fn service_over(repo: &MockContactRepository) -> ContactSearchServiceImpl {
    ContactSearchServiceImpl::new(Arc::new(repo.clone()), 5)
}

fn row_ids(view: &contact_finder::PageView) -> Vec<&str> {
    view.rows.iter().map(|r| r.contact.id.as_str()).collect()
}

#[tokio::test]
async fn test_empty_criteria_returns_whole_directory_in_order() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);

    let view = service.search().await.unwrap();

    assert_eq!(view.result_count, 5);
    assert_eq!(row_ids(&view), vec!["c1", "c2", "c3", "c4", "c5"]);
    assert_eq!(view.total_pages, 1);
    assert_eq!(repo.fetch_count(), 1);
}

#[tokio::test]
async fn test_city_search_scenario() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);

    service
        .update_criteria(CriteriaUpdate {
            city: Some("tor".to_string()),
            ..Default::default()
        })
        .await;
    let view = service.search().await.unwrap();

    assert_eq!(row_ids(&view), vec!["c1"]);
    assert_eq!(view.summary.as_deref(), Some("Showing 1 to 1 of 1 results"));
}

#[tokio::test]
async fn test_combined_criteria() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);

    service
        .update_criteria(CriteriaUpdate {
            state: Some("ON".to_string()),
            email: Some("EXAMPLE".to_string()),
            ..Default::default()
        })
        .await;
    let view = service.search().await.unwrap();
    assert_eq!(row_ids(&view), vec!["c1", "c4"]);

    service
        .update_criteria(CriteriaUpdate {
            phone: Some("613".to_string()),
            ..Default::default()
        })
        .await;
    let view = service.search().await.unwrap();
    assert_eq!(row_ids(&view), vec!["c4"]);
}

#[tokio::test]
async fn test_twelve_matches_page_through() {
    let repo = MockContactRepository::with_contacts(fixtures::toronto_contacts(12));
    let service = service_over(&repo);

    let view = service.search().await.unwrap();
    assert_eq!(row_ids(&view), vec!["t1", "t2", "t3", "t4", "t5"]);
    assert_eq!(view.summary.as_deref(), Some("Showing 1 to 5 of 12 results"));
    assert!(!view.has_previous);
    assert!(view.has_next);

    let view = service.set_page(3).await;
    assert_eq!(row_ids(&view), vec!["t11", "t12"]);
    assert_eq!(view.summary.as_deref(), Some("Showing 11 to 12 of 12 results"));
    assert!(!view.has_next);

    let view = service.next_page().await;
    assert_eq!(view.page, 3);

    let view = service.set_page(0).await;
    assert_eq!(view.page, 1);

    let view = service.previous_page().await;
    assert_eq!(view.page, 1);
}

#[tokio::test]
async fn test_new_search_resets_page_and_checked() {
    let repo = MockContactRepository::with_contacts(fixtures::toronto_contacts(12));
    let service = service_over(&repo);

    service.search().await.unwrap();
    service.set_page(3).await;
    service.toggle_checked("t11").await;
    service.set_all_checked(true).await;

    repo.set_contacts(fixtures::toronto_contacts(3));
    let view = service.search().await.unwrap();

    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.checked_count, 0);
    assert!(service.checked_ids().await.is_empty());
    assert_eq!(row_ids(&view), vec!["t1", "t2", "t3"]);
}

#[tokio::test]
async fn test_header_checkbox_covers_all_pages() {
    let repo = MockContactRepository::with_contacts(fixtures::toronto_contacts(12));
    let service = service_over(&repo);
    service.search().await.unwrap();
    service.set_page(2).await;

    let view = service.set_all_checked(true).await;
    assert_eq!(view.checked_count, 12);
    assert_eq!(view.header_checkbox, HeaderCheckState::Checked);
    assert!(view.rows.iter().all(|r| r.checked));

    let view = service.toggle_checked("t7").await;
    assert_eq!(view.header_checkbox, HeaderCheckState::Indeterminate);
    assert!(!view.rows.iter().find(|r| r.contact.id == "t7").unwrap().checked);

    let view = service.set_all_checked(false).await;
    assert_eq!(view.checked_count, 0);
    assert_eq!(view.header_checkbox, HeaderCheckState::Unchecked);
}

#[tokio::test]
async fn test_checking_rows_leaves_detail_alone() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);
    service.search().await.unwrap();

    let detail = service.select_contact("c2").await.unwrap();
    assert_eq!(detail.name, "Marie Tremblay");
    assert_eq!(
        detail.address.as_deref(),
        Some("200 Rue Sainte-Catherine, Montreal, QC H2X 1L4")
    );

    service.toggle_checked("c3").await;
    service.set_all_checked(true).await;

    let selected = service.selected_contact().await.unwrap();
    assert_eq!(selected.id, "c2");
}

#[tokio::test]
async fn test_detail_for_sparse_contact() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);
    service.search().await.unwrap();

    let detail = service.select_contact("c5").await.unwrap();
    assert_eq!(detail.name, "Sam ");
    assert_eq!(detail.email, "N/A");
    assert_eq!(detail.phone, "Not Available");
    assert_eq!(detail.address, None);
}

#[tokio::test]
async fn test_detail_is_a_snapshot_across_searches() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);
    service.search().await.unwrap();
    service.select_contact("c1").await.unwrap();

    let mut changed = fixtures::directory();
    changed[0].email = "new@example.com".to_string();
    repo.set_contacts(changed);
    service.search().await.unwrap();

    let selected = service.selected_contact().await.unwrap();
    assert_eq!(selected.email, "john.smith@example.com");
}

#[tokio::test]
async fn test_select_contact_outside_results() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);

    service
        .update_criteria(CriteriaUpdate {
            state: Some("BC".to_string()),
            ..Default::default()
        })
        .await;
    service.search().await.unwrap();

    let result = service.select_contact("c1").await;
    assert!(matches!(result, Err(SessionError::UnknownContact(_))));
}

#[tokio::test]
async fn test_fetch_failure_is_reported_and_recoverable() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);
    service.search().await.unwrap();

    repo.fail_with("connection refused");
    let result = service.search().await;
    assert!(matches!(result, Err(SessionError::Fetch(_))));

    let view = service.page_view().await;
    assert_eq!(view.result_count, 5);
    assert_eq!(
        view.error.as_deref(),
        Some("Could not load contacts: HTTP request failed: connection refused")
    );

    repo.recover();
    let view = service.search().await.unwrap();
    assert_eq!(view.error, None);
    assert_eq!(repo.fetch_count(), 3);
}

#[tokio::test]
async fn test_no_matches_has_no_pages() {
    let repo = MockContactRepository::with_contacts(fixtures::directory());
    let service = service_over(&repo);

    service
        .update_criteria(CriteriaUpdate {
            dob: Some("1990-04".to_string()),
            ..Default::default()
        })
        .await;
    let view = service.search().await.unwrap();

    assert_eq!(view.result_count, 0);
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.summary, None);
    assert!(view.rows.is_empty());
    assert!(!view.has_next);
    assert!(!view.has_previous);

    let view = service.set_page(2).await;
    assert_eq!(view.page, 1);
    assert!(view.rows.is_empty());
}
