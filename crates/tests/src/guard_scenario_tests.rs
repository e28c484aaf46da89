use access::guard::evaluate;
use pretty_assertions::assert_eq;
use shared_types::{GuardDecision, Role};

use crate::common::{customer, page_paths, portal_resolver, record, sales_manager, session_for};

#[test]
fn sales_manager_is_bounced_from_customer_page() {
    let resolver = portal_resolver();
    let session = session_for(sales_manager());
    assert_eq!(
        evaluate(Some(&session), "/app/TopCarModelList", &resolver),
        GuardDecision::RedirectDefault {
            to: "/app/SaleTotal".into()
        }
    );
}

#[test]
fn customer_is_bounced_from_every_sales_page() {
    let resolver = portal_resolver();
    let session = session_for(customer());
    for path in [
        "/app/SaleTotal",
        "/app/CarPurchasesHeatMap",
        "/app/TimeSeries",
        "/app/SalesForecast",
        "/app/ModelSalesForcast",
        "/app/RegionSalesForcast",
    ] {
        assert_eq!(
            evaluate(Some(&session), path, &resolver),
            GuardDecision::RedirectDefault {
                to: "/app/TopCarModelList".into()
            },
            "{path}"
        );
    }
}

#[test]
fn anonymous_visitor_is_sent_to_login_from_every_protected_path() {
    let resolver = portal_resolver();
    let protected: Vec<_> = resolver
        .table()
        .routes()
        .filter(|r| r.requires_auth)
        .map(|r| r.path.clone())
        .collect();
    assert!(protected.len() >= 11);
    for path in protected {
        assert_eq!(
            evaluate(None, &path, &resolver),
            GuardDecision::RedirectLogin,
            "{path}"
        );
    }
}

#[test]
fn logged_in_customer_skips_login_page() {
    let resolver = portal_resolver();
    let session = session_for(customer());
    assert_eq!(
        evaluate(Some(&session), "/Auth", &resolver),
        GuardDecision::RedirectDefault {
            to: "/app/TopCarModelList".into()
        }
    );
}

#[test]
fn public_pages_are_open_to_anonymous_visitors() {
    let resolver = portal_resolver();
    assert_eq!(
        evaluate(None, "/Auth", &resolver),
        GuardDecision::Allow {
            title: Some("Sign In".into())
        }
    );
    assert!(evaluate(None, "/about", &resolver).is_allowed());
}

#[test]
fn allowed_page_carries_its_title() {
    let resolver = portal_resolver();
    let session = session_for(sales_manager());
    assert_eq!(
        evaluate(Some(&session), "/app/SaleTotal/", &resolver),
        GuardDecision::Allow {
            title: Some("Sales Overview".into())
        }
    );
}

#[test]
fn role_without_dashboards_lands_on_fallback() {
    let resolver = portal_resolver();
    let session = session_for(record(9, "PM", Role::ProductManager, &[]));
    assert_eq!(
        evaluate(Some(&session), "/app/SaleTotal", &resolver),
        GuardDecision::RedirectDefault { to: "/about".into() }
    );
    assert!(evaluate(Some(&session), "/about", &resolver).is_allowed());
}

#[test]
fn unknown_paths_reach_the_not_found_page() {
    let resolver = portal_resolver();
    let session = session_for(customer());
    assert_eq!(
        evaluate(Some(&session), "/app/Evaluative", &resolver),
        GuardDecision::Allow { title: None }
    );
    assert_eq!(
        evaluate(None, "/whatever", &resolver),
        GuardDecision::Allow { title: None }
    );
}

#[test]
fn redirects_never_chain() {
    let resolver = portal_resolver();
    let sessions = [
        session_for(sales_manager()),
        session_for(customer()),
        session_for(record(9, "PM", Role::ProductManager, &[])),
        session_for(record(10, "X", Role::Other("Auditor".into()), &[])),
    ];
    for session in &sessions {
        for path in page_paths() {
            if let GuardDecision::RedirectDefault { to } = evaluate(Some(session), &path, &resolver)
            {
                assert!(
                    evaluate(Some(session), &to, &resolver).is_allowed(),
                    "{} redirected from {path} to {to}, which is not allowed",
                    session.role()
                );
            }
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    let resolver = portal_resolver();
    let session = session_for(sales_manager());
    let first: Vec<_> = page_paths()
        .iter()
        .map(|p| evaluate(Some(&session), p, &resolver))
        .collect();
    let second: Vec<_> = page_paths()
        .iter()
        .rev()
        .map(|p| evaluate(Some(&session), p, &resolver))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    assert_eq!(first, second);
}
