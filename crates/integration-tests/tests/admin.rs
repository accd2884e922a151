//! Admin console gating and catalog management.

use otthub_core::PlanId;
use otthub_integration_tests::{ADMIN_USER, TestApp, location};

#[tokio::test]
async fn test_gated_routes_redirect_to_login() {
    let app = TestApp::spawn().await;

    let resp = app.get("/admin/dashboard").await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), Some("/admin"));

    let resp = app
        .post_form("/admin/add-plan", &[("name", "JioCinema"), ("price", "59")])
        .await;
    assert_eq!(location(&resp), Some("/admin"));
    assert_eq!(app.state.catalog().list().len(), 5);
}

#[tokio::test]
async fn test_delete_without_login_keeps_plan() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/admin/delete-plan/3", &[]).await;
    assert_eq!(location(&resp), Some("/admin"));
    assert!(app.state.catalog().get(PlanId::new(3)).is_some());
}

#[tokio::test]
async fn test_login_page_renders() {
    let app = TestApp::spawn().await;
    let resp = app.get("/admin").await;
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.expect("body");
    assert!(body.contains("name=\"password\""));
    assert!(!body.contains("Invalid credentials"));
}

#[tokio::test]
async fn test_wrong_password_rerenders_with_error() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/admin", &[("username", ADMIN_USER), ("password", "wrong")])
        .await;
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.expect("body").contains("Invalid credentials"));

    assert_eq!(location(&app.get("/admin/dashboard").await), Some("/admin"));
}

#[tokio::test]
async fn test_credentials_are_compared_exactly() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/admin",
            &[("username", "Admin"), ("password", otthub_integration_tests::ADMIN_PASS)],
        )
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(location(&app.get("/admin/dashboard").await), Some("/admin"));
}

#[tokio::test]
async fn test_login_opens_dashboard() {
    let app = TestApp::spawn().await;

    let resp = app.login_admin().await;
    assert_eq!(location(&resp), Some("/admin/dashboard"));

    let resp = app.get("/admin/dashboard").await;
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.expect("body");
    for plan in app.state.catalog().list() {
        assert!(body.contains(&format!("/admin/delete-plan/{}", plan.id)));
    }
}

#[tokio::test]
async fn test_admin_session_is_per_visitor() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    let other = app.new_visitor();
    assert_eq!(location(&other.get("/admin/dashboard").await), Some("/admin"));
}

#[tokio::test]
async fn test_add_plan_assigns_next_id() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    let resp = app
        .post_form(
            "/admin/add-plan",
            &[
                ("name", "JioCinema Premium"),
                ("price", "59"),
                ("logo", "jio.png"),
                ("desc", "Movies + Originals"),
                ("stock", "7"),
            ],
        )
        .await;
    assert_eq!(location(&resp), Some("/admin/dashboard"));

    let plan = app.state.catalog().get(PlanId::new(6)).expect("plan 6");
    assert_eq!(plan.name, "JioCinema Premium");
    assert_eq!(plan.price.amount(), 59);
    assert_eq!(plan.logo, "jio.png");
    assert_eq!(plan.stock, 7);

    assert!(app.page("/admin/dashboard").await.contains("Plan added"));
    assert_eq!(app.get("/plan/6").await.status(), 200);
}

#[tokio::test]
async fn test_add_plan_defaults_bad_numbers() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    let resp = app
        .post_form(
            "/admin/add-plan",
            &[("name", "Odd Plan"), ("price", "12abc"), ("logo", "")],
        )
        .await;
    assert_eq!(location(&resp), Some("/admin/dashboard"));

    let plan = app.state.catalog().get(PlanId::new(6)).expect("plan 6");
    assert_eq!(plan.price.amount(), 0);
    assert_eq!(plan.stock, 0);
    assert_eq!(plan.logo, "netflix.png");
    assert_eq!(plan.desc, "");
}

#[tokio::test]
async fn test_add_plan_after_emptying_catalog_starts_at_one() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    for id in 1..=5 {
        app.post_form(&format!("/admin/delete-plan/{id}"), &[]).await;
    }
    assert!(app.state.catalog().list().is_empty());

    app.post_form("/admin/add-plan", &[("name", "Fresh")]).await;

    let ids: Vec<u32> = app
        .state
        .catalog()
        .list()
        .iter()
        .map(|plan| plan.id.as_u32())
        .collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_delete_plan_and_unknown_id() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    let resp = app.post_form("/admin/delete-plan/3", &[]).await;
    assert_eq!(location(&resp), Some("/admin/dashboard"));
    assert!(app.state.catalog().get(PlanId::new(3)).is_none());
    assert!(app.page("/admin/dashboard").await.contains("Plan deleted"));

    let resp = app.post_form("/admin/delete-plan/3", &[]).await;
    assert_eq!(location(&resp), Some("/admin/dashboard"));
    assert_eq!(app.state.catalog().list().len(), 4);
}

#[tokio::test]
async fn test_delete_out_of_range_id_is_noop() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    for segment in ["4294967296", "abc"] {
        let resp = app.post_form(&format!("/admin/delete-plan/{segment}"), &[]).await;
        assert_eq!(location(&resp), Some("/admin/dashboard"), "{segment}");
    }
    assert_eq!(app.state.catalog().list().len(), 5);
}

#[tokio::test]
async fn test_catalog_changes_are_visible_to_every_visitor() {
    let app = TestApp::spawn().await;
    let shopper = app.new_visitor();
    app.login_admin().await;

    app.post_form("/admin/delete-plan/1", &[]).await;

    assert!(!shopper.page("/plans").await.contains("Netflix Premium"));
    assert_eq!(shopper.get("/plan/1").await.status(), 404);
}

#[tokio::test]
async fn test_logout_closes_console_and_keeps_cart() {
    let app = TestApp::spawn().await;
    app.get("/add-to-cart/5").await;
    app.login_admin().await;

    let resp = app.post_form("/admin/logout", &[]).await;
    assert_eq!(location(&resp), Some("/admin"));

    assert_eq!(location(&app.get("/admin/dashboard").await), Some("/admin"));
    assert!(app.page("/cart").await.contains("Zee5 Premium"));
}
